//! `sr-playback` — Playback clock and preview engine for the StoryReel engine.
//!
//! This crate turns the passive storyboard data into a running preview:
//!
//! - **Clock**: wall-time transport with stopped, playing, and finished
//!   states and an explicit-delta step for deterministic use
//! - **Engine**: the facade the view talks to, owning the storyboard, the
//!   clock, and the audio synchronizer
//!
//! # Architecture
//!
//! ```text
//! view loop:  update(now) -> frame() / composite() -> sync_audio(sink)
//!                 |               |                        |
//!                 v               v                        v
//!           PlaybackClock    sr-timeline resolver      sr-audio
//! ```
//!
//! The engine computes frame data on demand from the cursor, so there is no
//! cached frame state to invalidate when the storyboard is edited.

pub mod clock;
pub mod engine;

// Re-export primary types at crate root for convenience
pub use clock::{PlaybackClock, PlaybackMode};
pub use engine::PreviewEngine;
