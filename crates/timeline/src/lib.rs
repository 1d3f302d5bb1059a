//! `sr-timeline` — Storyboard model and cursor evaluation for the StoryReel engine.
//!
//! This crate owns the authoritative timeline data and answers "what is on
//! screen at time T". It handles:
//!
//! - **Storyboard model**: ordered scenes with per-scene duration, volume, and
//!   transition, plus the background music track
//! - **Cursor resolution**: mapping a time cursor to the active scene, the
//!   upcoming scene, and the transition progress
//! - **Transition styles**: per-kind compositing parameters for the two
//!   visual layers the view stacks
//! - **Scene generation**: wrapping collaborator output into scenes without
//!   ever committing a partial list
//!
//! # Usage
//!
//! ```rust
//! use sr_timeline::{resolve, Scene, Storyboard};
//! use sr_common::{SceneId, TimeCode, TRANSITION_WINDOW_SECS};
//!
//! let mut board = Storyboard::new();
//! board.push_scene(Scene::new(SceneId::new("intro"), "A quiet street at dawn"));
//! let frame = resolve(&board, TimeCode::from_secs(2.0), TRANSITION_WINDOW_SECS);
//! assert!(frame.current.is_some());
//! ```

pub mod error;
pub mod generate;
pub mod resolver;
pub mod transition;
pub mod types;

// Re-export primary API
pub use error::GenerateError;
pub use generate::{generate_scenes, placeholder_visual, scene_from_outline, SceneOutline, SceneSource};
pub use resolver::{resolve, ActiveFrame};
pub use transition::{compose, FrameComposite, LayerStyle, WipeMask};
pub use types::{AudioTrack, Scene, Storyboard, Transition};
