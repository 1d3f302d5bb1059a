//! `sr-audio` — Audio output abstraction and playback synchronization for the StoryReel engine.
//!
//! The engine never derives time from the audio device. The timeline cursor is
//! the single authoritative clock and the background music track follows it:
//!
//! ```text
//! PlaybackClock (cursor)
//!        |
//!        v
//! Synchronizer::apply -> AudioSink (play / pause / volume / seek)
//! ```
//!
//! [`AudioSink`] is the seam to the platform output. The engine only talks to
//! the trait, so tests substitute a recording implementation and the
//! synchronization logic stays fully deterministic.
//!
//! [`Synchronizer`] reconciles the sink with the desired state on every
//! update. It is edge-triggered: transport commands are issued only when the
//! sink disagrees with the target, volume is pushed only when it changes, and
//! the track position is corrected only once it has drifted past a tolerance.
//! Small drift is left alone so the track plays smoothly instead of
//! stuttering from constant micro-seeks.

pub mod sink;
pub mod sync;

// Re-export primary types at crate root for convenience
pub use sink::AudioSink;
pub use sync::Synchronizer;
