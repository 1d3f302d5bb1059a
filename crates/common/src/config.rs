//! Engine constants and configuration.

use serde::{Deserialize, Serialize};

/// Duration substituted for scenes that carry no usable duration (seconds).
pub const DEFAULT_SCENE_DURATION_SECS: f64 = 5.0;

/// Lower bound applied when editing a scene's duration (seconds).
pub const MIN_SCENE_DURATION_SECS: f64 = 0.1;

/// Length of the transition window at the end of a scene (seconds).
pub const TRANSITION_WINDOW_SECS: f64 = 0.5;

/// Drift beyond which the audio sink is snapped back to the cursor (seconds).
pub const AUDIO_DRIFT_TOLERANCE_SECS: f64 = 0.5;

/// Per-scene volume applied when a stored scene carries none.
pub const DEFAULT_SCENE_VOLUME: f32 = 1.0;

/// Background music volume applied when a stored project carries none.
pub const DEFAULT_MUSIC_VOLUME: f32 = 0.5;

/// Top-level engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Transition window length in seconds.
    pub transition_window: f64,
    /// Duration substituted for scenes without one, in seconds.
    pub default_scene_duration: f64,
    /// Audio drift tolerance in seconds.
    pub drift_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            transition_window: TRANSITION_WINDOW_SECS,
            default_scene_duration: DEFAULT_SCENE_DURATION_SECS,
            drift_tolerance: AUDIO_DRIFT_TOLERANCE_SECS,
        }
    }
}
