//! Version migration and record normalization.
//!
//! Records written before the versioned format (the web app's original
//! local-storage shape) carry no `version` field and count as version 0.
//! Migration brings them up to the current shape in-place; a normalization
//! pass then drops field values the typed model cannot use, so the serde
//! defaults land instead of the whole load failing.

use tracing::{debug, info, warn};

use crate::error::{ProjectError, ProjectResult};

/// Current project format version.
pub const CURRENT_VERSION: u32 = 1;

/// Transition names the engine understands on the wire.
const KNOWN_TRANSITIONS: [&str; 4] = ["cut", "fade", "slide-left", "wipe-right"];

/// Migrate a project JSON value to the current version in-place.
///
/// Returns the version after migration. Records already at the current
/// version only get the normalization pass.
pub fn migrate_project(value: &mut serde_json::Value) -> ProjectResult<u32> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| ProjectError::InvalidProject {
            reason: "project root must be a JSON object".into(),
        })?;

    let version = extract_version(obj)?;

    if version > CURRENT_VERSION {
        return Err(ProjectError::UnsupportedVersion {
            found: version,
            supported: CURRENT_VERSION,
        });
    }

    if version < CURRENT_VERSION {
        let mut current = version;
        while current < CURRENT_VERSION {
            let next = current + 1;
            info!(from = current, to = next, "Migrating project record");
            match current {
                0 => migrate_v0_to_v1(obj),
                other => {
                    return Err(ProjectError::InvalidProject {
                        reason: format!("no migration path from version {other}"),
                    });
                }
            }
            current = next;
        }
        obj.insert(
            "version".to_string(),
            serde_json::Value::Number(CURRENT_VERSION.into()),
        );
    } else {
        debug!(version, "Project record is at the current version");
    }

    normalize_record(obj);

    Ok(CURRENT_VERSION)
}

/// Extract the version number from a project JSON object.
fn extract_version(obj: &serde_json::Map<String, serde_json::Value>) -> ProjectResult<u32> {
    match obj.get("version") {
        Some(serde_json::Value::Number(n)) => {
            n.as_u64()
                .map(|v| v as u32)
                .ok_or_else(|| ProjectError::InvalidProject {
                    reason: "version must be a non-negative integer".into(),
                })
        }
        Some(serde_json::Value::String(s)) => {
            s.parse::<u32>().map_err(|_| ProjectError::InvalidProject {
                reason: format!("cannot parse version string: {s}"),
            })
        }
        Some(_) => Err(ProjectError::InvalidProject {
            reason: "version field has unexpected type".into(),
        }),
        None => {
            warn!("Project record has no version field, assuming version 0");
            Ok(0)
        }
    }
}

/// Migrate from version 0 (the unversioned local-storage shape) to version 1.
///
/// Version 0 records carry the scene list and music but have no identity or
/// timestamps of their own. Only the fields the typed model cannot default
/// are filled in; everything else is covered by serde defaults.
fn migrate_v0_to_v1(obj: &mut serde_json::Map<String, serde_json::Value>) {
    if !obj.contains_key("id") {
        let id = uuid::Uuid::new_v4().to_string();
        debug!(%id, "Assigned identity to legacy record");
        obj.insert("id".to_string(), serde_json::Value::String(id));
    }
    ensure_string_field(obj, "createdAt", "1970-01-01T00:00:00Z");
    ensure_string_field(obj, "updatedAt", "1970-01-01T00:00:00Z");
}

/// Drop field values the typed model cannot represent, with a warning, so
/// their serde defaults apply. Unknown transitions become cuts this way, and
/// non-positive durations become the default length.
fn normalize_record(obj: &mut serde_json::Map<String, serde_json::Value>) {
    let bad_music_volume = obj
        .get("backgroundMusicVolume")
        .is_some_and(|v| !v.is_number());
    if bad_music_volume {
        warn!("Dropping non-numeric backgroundMusicVolume");
        obj.remove("backgroundMusicVolume");
    }

    let bad_music = obj
        .get("backgroundMusic")
        .is_some_and(|m| !m.is_object() && !m.is_null());
    if bad_music {
        warn!("Dropping malformed backgroundMusic entry");
        obj.remove("backgroundMusic");
    }

    let bad_scenes = obj.get("scenes").is_some_and(|s| !s.is_array());
    if bad_scenes {
        warn!("Dropping non-array scenes field");
        obj.remove("scenes");
        return;
    }

    if let Some(scenes) = obj.get_mut("scenes").and_then(|s| s.as_array_mut()) {
        for scene in scenes.iter_mut() {
            if let Some(scene) = scene.as_object_mut() {
                normalize_scene(scene);
            }
        }
    }
}

fn normalize_scene(scene: &mut serde_json::Map<String, serde_json::Value>) {
    if let Some(transition) = scene.get("transition") {
        let known = transition
            .as_str()
            .is_some_and(|name| KNOWN_TRANSITIONS.contains(&name));
        if !known {
            warn!(?transition, "Dropping unknown scene transition");
            scene.remove("transition");
        }
    }

    if let Some(duration) = scene.get("duration") {
        let usable = duration.as_f64().is_some_and(|d| d > 0.0);
        if !usable {
            warn!(?duration, "Dropping unusable scene duration");
            scene.remove("duration");
        }
    }

    if let Some(volume) = scene.get("volume") {
        if !volume.is_number() {
            warn!(?volume, "Dropping non-numeric scene volume");
            scene.remove("volume");
        }
    }

    if let Some(url) = scene.get("videoUrl") {
        if !url.is_string() && !url.is_null() {
            warn!("Dropping malformed scene videoUrl");
            scene.remove("videoUrl");
        }
    }
}

/// Ensure a string field exists with a default value.
fn ensure_string_field(
    obj: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    default: &str,
) {
    if !obj.contains_key(key) {
        obj.insert(
            key.to_string(),
            serde_json::Value::String(default.to_string()),
        );
    }
}
