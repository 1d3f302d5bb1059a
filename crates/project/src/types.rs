//! Persisted project record — the JSON shape shared with the StoryReel web app.
//!
//! `ProjectFile` mirrors the record the web app keeps per story, field for
//! field, so projects move between the two without translation. Conversions
//! to and from the in-memory [`Storyboard`] live here too; the rest of the
//! engine never sees the wire shape.

use serde::{Deserialize, Serialize};
use sr_common::{AssetRef, SceneId, DEFAULT_MUSIC_VOLUME, DEFAULT_SCENE_DURATION_SECS, DEFAULT_SCENE_VOLUME};
use sr_timeline::{AudioTrack, Scene, Storyboard, Transition};

/// Top-level project record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    /// Record format version.
    pub version: u32,
    /// Unique project identifier.
    pub id: String,
    /// The one-line idea the story started from.
    #[serde(default)]
    pub idea: String,
    /// The narration script the scenes were generated from.
    #[serde(default)]
    pub script: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modified timestamp.
    pub updated_at: String,
    /// Ordered scene records.
    #[serde(default)]
    pub scenes: Vec<SceneData>,
    /// Background music track, if one is chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_music: Option<MusicData>,
    /// Background music volume (0.0..=1.0).
    #[serde(default = "default_music_volume")]
    pub background_music_volume: f32,
}

/// One persisted scene.
///
/// `volume`, `transition`, and `duration` carry serde defaults: records from
/// older builds that never wrote these fields load with full volume, a cut,
/// and the default scene length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneData {
    /// Scene identifier.
    pub id: String,
    /// Narration text.
    #[serde(default)]
    pub description: String,
    /// Stock-search keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Clip URL; absent while no clip is chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// Clip volume (0.0..=1.0).
    #[serde(default = "default_scene_volume")]
    pub volume: f32,
    /// Handoff into the next scene.
    #[serde(default)]
    pub transition: Transition,
    /// Scene length in seconds.
    #[serde(default = "default_scene_duration")]
    pub duration: f64,
}

/// The persisted background music choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicData {
    /// Display name of the track.
    pub name: String,
    /// Audio URL.
    pub url: String,
}

fn default_scene_volume() -> f32 {
    DEFAULT_SCENE_VOLUME
}

fn default_scene_duration() -> f64 {
    DEFAULT_SCENE_DURATION_SECS
}

fn default_music_volume() -> f32 {
    DEFAULT_MUSIC_VOLUME
}

impl ProjectFile {
    /// Create a new empty project around an idea.
    pub fn new(idea: impl Into<String>) -> Self {
        let now = current_iso_timestamp();
        Self {
            version: crate::migrate::CURRENT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            idea: idea.into(),
            script: String::new(),
            created_at: now.clone(),
            updated_at: now,
            scenes: Vec::new(),
            background_music: None,
            background_music_volume: DEFAULT_MUSIC_VOLUME,
        }
    }

    /// Build the in-memory storyboard this record describes.
    pub fn storyboard(&self) -> Storyboard {
        Storyboard {
            scenes: self.scenes.iter().map(SceneData::to_scene).collect(),
            music: self.background_music.as_ref().map(|m| AudioTrack {
                name: m.name.clone(),
                source: AssetRef::new(m.url.clone()),
            }),
            music_volume: clamp_unit(self.background_music_volume),
        }
    }

    /// Write a storyboard back into the record, replacing the stored scenes
    /// and music. Timestamps are left alone; callers bump them through
    /// [`touch_modified`] when they commit.
    pub fn apply_storyboard(&mut self, board: &Storyboard) {
        self.scenes = board.scenes.iter().map(SceneData::from_scene).collect();
        self.background_music = board.music.as_ref().map(|track| MusicData {
            name: track.name.clone(),
            url: track.source.0.clone(),
        });
        self.background_music_volume = board.music_volume;
    }
}

impl SceneData {
    /// Convert to the in-memory scene. Volume is clamped into range; a
    /// broken duration is kept as stored and resolved at playback time.
    pub fn to_scene(&self) -> Scene {
        Scene {
            id: SceneId::new(self.id.clone()),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            visual: self.video_url.clone().map(AssetRef::new),
            duration: self.duration,
            volume: clamp_unit(self.volume),
            transition: self.transition,
        }
    }

    /// Capture an in-memory scene for persistence.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            id: scene.id.0.clone(),
            description: scene.description.clone(),
            keywords: scene.keywords.clone(),
            video_url: scene.visual.as_ref().map(|asset| asset.0.clone()),
            volume: scene.volume,
            transition: scene.transition,
            duration: scene.duration,
        }
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Generate a current ISO 8601 timestamp string.
fn current_iso_timestamp() -> String {
    // Simple UTC format without pulling in a date-time crate.
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();

    let (year, month, day, hour, min, sec) = epoch_to_datetime(secs);
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{min:02}:{sec:02}Z")
}

/// Convert Unix epoch seconds to (year, month, day, hour, minute, second).
/// Accurate for dates from 1970 to ~2099.
fn epoch_to_datetime(epoch: u64) -> (u64, u64, u64, u64, u64, u64) {
    let sec = epoch % 60;
    let min = (epoch / 60) % 60;
    let hour = (epoch / 3600) % 24;
    let mut days = epoch / 86400;

    let mut year = 1970u64;
    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if days < days_in_year {
            break;
        }
        days -= days_in_year;
        year += 1;
    }

    let days_in_months: [u64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 0u64;
    for (i, &dm) in days_in_months.iter().enumerate() {
        if days < dm {
            month = i as u64 + 1;
            break;
        }
        days -= dm;
    }
    let day = days + 1;

    (year, month, day, hour, min, sec)
}

fn is_leap_year(y: u64) -> bool {
    (y % 4 == 0 && y % 100 != 0) || y % 400 == 0
}

/// Bump `updated_at` to the current timestamp.
pub fn touch_modified(project: &mut ProjectFile) {
    project.updated_at = current_iso_timestamp();
}
