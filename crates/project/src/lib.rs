//! `sr-project` — Project file save/load for the StoryReel engine.
//!
//! This crate handles persisting story projects in a JSON format compatible
//! with the StoryReel web app. It supports:
//!
//! - **Save/Load**: Serialize/deserialize `ProjectFile` to/from JSON
//! - **Migration**: Unversioned legacy records are brought to the current
//!   format; damaged field values fall back to defaults instead of failing
//! - **Auto-Save**: Poll-based timing for periodic saves, driven by the host
//!
//! Saving is explicit: the host application decides when to persist, the
//! engine never writes as a side effect of an edit.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sr_project::{load_project, save_project, touch_modified, ProjectFile};
//! use std::path::Path;
//!
//! let mut project = ProjectFile::new("A dog learns to surf");
//! project.script = "Scene one. Scene two.".to_string();
//!
//! touch_modified(&mut project);
//! save_project(&project, Path::new("story.json")).unwrap();
//!
//! let loaded = load_project(Path::new("story.json")).unwrap();
//! assert_eq!(loaded.idea, "A dog learns to surf");
//! ```

pub mod autosave;
pub mod error;
pub mod load;
pub mod migrate;
pub mod save;
pub mod types;

// Re-export primary API at crate root
pub use autosave::{AutoSaver, DEFAULT_AUTOSAVE_INTERVAL_SECS};
pub use error::{ProjectError, ProjectResult};
pub use load::{from_json_string, load_project};
pub use migrate::{migrate_project, CURRENT_VERSION};
pub use save::{save_project, to_json_string, to_json_string_compact};
pub use types::{touch_modified, MusicData, ProjectFile, SceneData};
