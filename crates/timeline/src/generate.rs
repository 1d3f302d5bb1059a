//! Scene generation: turning collaborator output into storyboard scenes.
//!
//! The external generative service is behind the [`SceneSource`] trait; this
//! module only validates input, wraps the returned outline into scenes with
//! engine defaults, and hands the finished list back. Nothing here commits to
//! a storyboard, so a failing source cannot leave partial state anywhere.

use serde::{Deserialize, Serialize};
use sr_common::{AssetRef, SceneId, DEFAULT_SCENE_DURATION_SECS, DEFAULT_SCENE_VOLUME};
use tracing::debug;

use crate::error::GenerateError;
use crate::types::{Scene, Transition};

/// One entry of the ordered outline a script is broken into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneOutline {
    /// Narration text for the scene.
    pub description: String,
    /// Stock-search keywords for finding a matching clip.
    pub keywords: Vec<String>,
}

/// A collaborator that turns a script into an ordered scene outline.
pub trait SceneSource {
    fn outline(&self, script: &str) -> Result<Vec<SceneOutline>, GenerateError>;
}

/// Deterministic placeholder clip reference seeded from the description, used
/// until the user picks a real clip for the scene.
pub fn placeholder_visual(description: &str) -> AssetRef {
    let seed: String = description
        .chars()
        .take(16)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    AssetRef::new(format!("https://picsum.photos/seed/{seed}/1280/720"))
}

/// Wrap one outline entry into a scene with a fresh id, engine defaults, and
/// a placeholder visual.
pub fn scene_from_outline(outline: SceneOutline) -> Scene {
    let visual = placeholder_visual(&outline.description);
    Scene {
        id: SceneId::generate(),
        description: outline.description,
        keywords: outline.keywords,
        visual: Some(visual),
        duration: DEFAULT_SCENE_DURATION_SECS,
        volume: DEFAULT_SCENE_VOLUME,
        transition: Transition::Cut,
    }
}

/// Run the collaborator over a script and convert its outline into scenes.
///
/// Returns the complete scene list, ready for
/// [`Storyboard::replace_scenes`](crate::types::Storyboard::replace_scenes),
/// or the first error. The caller commits the list only on success.
pub fn generate_scenes(
    source: &dyn SceneSource,
    script: &str,
) -> Result<Vec<Scene>, GenerateError> {
    if script.trim().is_empty() {
        return Err(GenerateError::EmptyScript);
    }

    let outline = source.outline(script)?;
    if outline.is_empty() {
        return Err(GenerateError::NoScenes);
    }

    debug!(scenes = outline.len(), "Scene outline received");
    Ok(outline.into_iter().map(scene_from_outline).collect())
}
