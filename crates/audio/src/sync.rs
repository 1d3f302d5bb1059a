//! Reconciles an [`AudioSink`] with the playback cursor.

use sr_common::{TimeCode, AUDIO_DRIFT_TOLERANCE_SECS};

use crate::sink::AudioSink;

/// Keeps a music sink in step with the timeline cursor.
///
/// The synchronizer is stateless with respect to the sink: it reads the
/// sink's transport state on every call and issues commands only where the
/// sink disagrees with the target. The one piece of memory it keeps is the
/// last volume it pushed, so an unchanged volume is not re-sent every frame.
#[derive(Debug)]
pub struct Synchronizer {
    drift_tolerance: f64,
    last_volume: Option<f32>,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new(AUDIO_DRIFT_TOLERANCE_SECS)
    }
}

impl Synchronizer {
    /// Create a synchronizer that repositions the track once it drifts more
    /// than `drift_tolerance` seconds from the cursor.
    pub fn new(drift_tolerance: f64) -> Self {
        Self {
            drift_tolerance,
            last_volume: None,
        }
    }

    /// Forget the memoized volume so the next [`apply`](Self::apply) pushes
    /// it again. Call after swapping the track the sink has loaded.
    pub fn reset(&mut self) {
        self.last_volume = None;
    }

    /// Bring `sink` in line with the desired playback state.
    ///
    /// `playing` is the transport state of the engine, `cursor` the current
    /// timeline position, and `has_track` whether a music track is loaded at
    /// all. The sink plays only while the engine plays and a track exists.
    /// Volume and position are touched only when a track exists; position is
    /// corrected both while playing and while paused, so a seek made during
    /// pause takes effect before playback resumes.
    pub fn apply(
        &mut self,
        sink: &mut dyn AudioSink,
        playing: bool,
        cursor: TimeCode,
        volume: f32,
        has_track: bool,
    ) {
        if has_track {
            if self.last_volume != Some(volume) {
                sink.set_volume(volume);
                self.last_volume = Some(volume);
                tracing::debug!(volume, "Music volume pushed");
            }

            let drift = (sink.position() - cursor.as_secs()).abs();
            if drift > self.drift_tolerance {
                sink.set_position(cursor.as_secs());
                tracing::debug!(
                    drift,
                    position = cursor.as_secs(),
                    "Music repositioned to cursor"
                );
            }
        }

        let should_play = playing && has_track;
        if should_play != sink.is_playing() {
            if should_play {
                sink.play();
                tracing::debug!("Music playback started");
            } else {
                sink.pause();
                tracing::debug!("Music playback paused");
            }
        }
    }
}
