//! `sr-common` — Shared types and configuration for the StoryReel engine.
//!
//! This crate is the foundation that all other engine crates depend on.
//! It defines the core abstractions:
//!
//! - **Types**: `TimeCode`, `SceneId`, `AssetRef` (newtypes for safety)
//! - **Config**: `EngineConfig` plus the engine's timing and volume constants

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    EngineConfig, AUDIO_DRIFT_TOLERANCE_SECS, DEFAULT_MUSIC_VOLUME, DEFAULT_SCENE_DURATION_SECS,
    DEFAULT_SCENE_VOLUME, MIN_SCENE_DURATION_SECS, TRANSITION_WINDOW_SECS,
};
pub use types::{AssetRef, SceneId, TimeCode};
