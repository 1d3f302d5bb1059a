//! Project deserialization — loading `ProjectFile` from JSON files.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{ProjectError, ProjectResult};
use crate::migrate::migrate_project;
use crate::types::ProjectFile;

/// Deserialize a project from a JSON string.
///
/// The record is first migrated and normalized as a generic value, then
/// deserialized into the typed struct, so older and slightly damaged records
/// still load with defaults in the gaps.
pub fn from_json_string(json: &str) -> ProjectResult<ProjectFile> {
    let mut value: serde_json::Value = serde_json::from_str(json)?;

    let version = migrate_project(&mut value)?;
    debug!(version, "Project record after migration");

    let project: ProjectFile = serde_json::from_value(value)?;

    debug!(
        project = %project.id,
        scenes = project.scenes.len(),
        "Deserialized project from JSON"
    );

    validate_project(&project);

    Ok(project)
}

/// Load a project from a file at the given path.
pub fn load_project(path: &Path) -> ProjectResult<ProjectFile> {
    if !path.exists() {
        return Err(ProjectError::NotFound {
            path: path.display().to_string(),
        });
    }

    let json = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read project file");
        ProjectError::Io(e)
    })?;

    let project = from_json_string(&json)?;

    info!(
        project = %project.id,
        path = %path.display(),
        scenes = project.scenes.len(),
        "Project loaded"
    );

    Ok(project)
}

/// Report oddities in a loaded record.
///
/// Findings are logged, never fatal: a record that deserializes at all is
/// played back as well as it can be.
fn validate_project(project: &ProjectFile) {
    if project.id.is_empty() {
        warn!("Project record has an empty id");
    }

    let mut seen = HashSet::new();
    for scene in &project.scenes {
        if scene.id.is_empty() {
            warn!("Scene record has an empty id");
        } else if !seen.insert(scene.id.as_str()) {
            warn!(scene = %scene.id, "Duplicate scene id in record");
        }
        if !(0.0..=1.0).contains(&scene.volume) {
            warn!(
                scene = %scene.id,
                volume = scene.volume,
                "Scene volume out of range, it will be clamped"
            );
        }
    }

    if !(0.0..=1.0).contains(&project.background_music_volume) {
        warn!(
            volume = project.background_music_volume,
            "Music volume out of range, it will be clamped"
        );
    }
}
