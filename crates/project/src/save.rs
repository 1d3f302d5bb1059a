//! Project serialization — writing `ProjectFile` to JSON files.
//!
//! Saving is always an explicit call made by the host application after it
//! commits an edit; nothing in the engine persists as a side effect.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ProjectError, ProjectResult};
use crate::types::ProjectFile;

/// Serialize a project to a pretty-printed JSON string.
pub fn to_json_string(project: &ProjectFile) -> ProjectResult<String> {
    let json = serde_json::to_string_pretty(project)?;
    debug!(
        project = %project.id,
        json_len = json.len(),
        "Serialized project to JSON"
    );
    Ok(json)
}

/// Serialize a project to a compact (non-pretty) JSON string.
pub fn to_json_string_compact(project: &ProjectFile) -> ProjectResult<String> {
    let json = serde_json::to_string(project)?;
    debug!(
        project = %project.id,
        json_len = json.len(),
        "Serialized project to compact JSON"
    );
    Ok(json)
}

/// Save a project to a file at the given path.
///
/// The file is written atomically: data goes to a temporary file in the same
/// directory first, which is then renamed over the target path. An interrupted
/// write can therefore never leave a half-written project behind.
pub fn save_project(project: &ProjectFile, path: &Path) -> ProjectResult<()> {
    let json = to_json_string(project)?;

    let temp_path = path.with_extension("json.tmp");

    std::fs::write(&temp_path, json.as_bytes()).map_err(|e| {
        tracing::error!(path = %temp_path.display(), error = %e, "Failed to write temp file");
        ProjectError::Io(e)
    })?;

    std::fs::rename(&temp_path, path).map_err(|e| {
        // If rename fails, try to clean up the temp file (best effort).
        let _ = std::fs::remove_file(&temp_path);
        tracing::error!(
            from = %temp_path.display(),
            to = %path.display(),
            error = %e,
            "Failed to rename temp file to target"
        );
        ProjectError::Io(e)
    })?;

    info!(
        project = %project.id,
        path = %path.display(),
        "Project saved"
    );
    Ok(())
}
