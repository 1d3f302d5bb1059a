//! Storyboard data model: Scene, Transition, AudioTrack, Storyboard.
//!
//! These are the Rust-native types that describe an assembled story video.
//! The resolver consumes a `Storyboard` to decide what is on screen, and the
//! project crate maps it to and from the persisted record.

use serde::{Deserialize, Serialize};
use sr_common::{
    AssetRef, SceneId, TimeCode, DEFAULT_MUSIC_VOLUME, DEFAULT_SCENE_DURATION_SECS,
    DEFAULT_SCENE_VOLUME, MIN_SCENE_DURATION_SECS,
};

/// How a scene hands off to the one after it.
///
/// Stored on the departing scene. The value on the final scene is inert: it is
/// kept through edits and serialization but never evaluated, since there is no
/// next scene to hand off to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Transition {
    /// Hard swap at the scene boundary.
    #[default]
    Cut,
    /// Cross-fade: both scenes visible while opacity shifts.
    Fade,
    /// Outgoing scene slides off to the left, incoming slides in from the right.
    SlideLeft,
    /// Outgoing scene is clipped away left-to-right over the incoming scene.
    WipeRight,
}

/// A single scene: one clip-backed segment of the story.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier, stable for the scene's lifetime.
    pub id: SceneId,
    /// Narration text for this scene.
    pub description: String,
    /// Search keywords attached by scene generation.
    pub keywords: Vec<String>,
    /// Visual asset shown during the scene; `None` while no clip is chosen.
    pub visual: Option<AssetRef>,
    /// Stored duration in seconds. Read through [`effective_duration`](Self::effective_duration).
    pub duration: f64,
    /// Per-scene clip volume (0.0..=1.0).
    pub volume: f32,
    /// Handoff into the next scene.
    pub transition: Transition,
}

impl Scene {
    /// Create a scene with engine defaults and no visual.
    pub fn new(id: SceneId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            keywords: Vec::new(),
            visual: None,
            duration: DEFAULT_SCENE_DURATION_SECS,
            volume: DEFAULT_SCENE_VOLUME,
            transition: Transition::Cut,
        }
    }

    /// Duration used for playback: the stored value, or the engine default
    /// when the stored value is missing its meaning (non-finite or <= 0).
    pub fn effective_duration(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            self.duration
        } else {
            DEFAULT_SCENE_DURATION_SECS
        }
    }
}

/// The background music track laid under the whole storyboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Display name of the track.
    pub name: String,
    /// Audio asset reference.
    pub source: AssetRef,
}

/// The assembled story: ordered scenes plus the shared music track.
///
/// Scene order is playback order. The scene list may be empty, in which case
/// the storyboard has no preview content and a total duration of zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    /// Ordered list of scenes.
    pub scenes: Vec<Scene>,
    /// Optional background music.
    pub music: Option<AudioTrack>,
    /// Background music volume (0.0..=1.0).
    pub music_volume: f32,
}

impl Default for Storyboard {
    fn default() -> Self {
        Self {
            scenes: Vec::new(),
            music: None,
            music_volume: DEFAULT_MUSIC_VOLUME,
        }
    }
}

impl Storyboard {
    /// Create an empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when there are no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Total playback duration. Recomputed on every call so it can never go
    /// stale after a mutation.
    pub fn total_duration(&self) -> TimeCode {
        let secs = self
            .scenes
            .iter()
            .fold(0.0, |acc, scene| acc + scene.effective_duration());
        TimeCode::from_secs(secs)
    }

    /// Find a scene by id.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.iter().find(|scene| &scene.id == id)
    }

    /// Find a scene by id, mutably.
    pub fn scene_mut(&mut self, id: &SceneId) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|scene| &scene.id == id)
    }

    /// Position of a scene in playback order.
    pub fn scene_index(&self, id: &SceneId) -> Option<usize> {
        self.scenes.iter().position(|scene| &scene.id == id)
    }

    /// Append a scene at the end of the storyboard.
    pub fn push_scene(&mut self, scene: Scene) {
        tracing::debug!(scene = %scene.id, "Scene added");
        self.scenes.push(scene);
    }

    /// Replace the whole scene list at once.
    pub fn replace_scenes(&mut self, scenes: Vec<Scene>) {
        tracing::debug!(scenes = scenes.len(), "Scene list replaced");
        self.scenes = scenes;
    }

    /// Remove a scene. Returns `false` (and leaves the list untouched) when
    /// the id is unknown.
    pub fn remove_scene(&mut self, id: &SceneId) -> bool {
        match self.scene_index(id) {
            Some(index) => {
                self.scenes.remove(index);
                tracing::debug!(scene = %id, "Scene removed");
                true
            }
            None => {
                tracing::debug!(scene = %id, "Removal of unknown scene ignored");
                false
            }
        }
    }

    /// Move a scene by a signed offset in playback order, clamping at the
    /// ends. Returns `true` when the scene actually changed position.
    pub fn move_scene(&mut self, id: &SceneId, offset: isize) -> bool {
        let Some(index) = self.scene_index(id) else {
            tracing::debug!(scene = %id, "Move of unknown scene ignored");
            return false;
        };
        let last = self.scenes.len() as isize - 1;
        let target = (index as isize + offset).clamp(0, last) as usize;
        if target == index {
            return false;
        }
        let scene = self.scenes.remove(index);
        self.scenes.insert(target, scene);
        tracing::debug!(scene = %id, from = index, to = target, "Scene moved");
        true
    }

    /// Set a scene's volume, clamped to [0, 1]. Unknown ids are ignored;
    /// returns `true` when the scene exists.
    pub fn set_scene_volume(&mut self, id: &SceneId, volume: f32) -> bool {
        let volume = clamp_volume(volume);
        match self.scene_mut(id) {
            Some(scene) => {
                scene.volume = volume;
                tracing::debug!(scene = %id, volume, "Scene volume set");
                true
            }
            None => {
                tracing::debug!(scene = %id, "Volume change for unknown scene ignored");
                false
            }
        }
    }

    /// Set the transition a scene hands off with. Unknown ids are ignored;
    /// returns `true` when the scene exists.
    pub fn set_scene_transition(&mut self, id: &SceneId, transition: Transition) -> bool {
        match self.scene_mut(id) {
            Some(scene) => {
                scene.transition = transition;
                tracing::debug!(scene = %id, ?transition, "Scene transition set");
                true
            }
            None => {
                tracing::debug!(scene = %id, "Transition change for unknown scene ignored");
                false
            }
        }
    }

    /// Set a scene's duration in seconds, floored at the minimum editable
    /// duration. Non-finite input falls back to the default duration.
    /// Unknown ids are ignored; returns `true` when the scene exists.
    pub fn set_scene_duration(&mut self, id: &SceneId, secs: f64) -> bool {
        let secs = if secs.is_finite() {
            secs.max(MIN_SCENE_DURATION_SECS)
        } else {
            DEFAULT_SCENE_DURATION_SECS
        };
        match self.scene_mut(id) {
            Some(scene) => {
                scene.duration = secs;
                tracing::debug!(scene = %id, duration = secs, "Scene duration set");
                true
            }
            None => {
                tracing::debug!(scene = %id, "Duration change for unknown scene ignored");
                false
            }
        }
    }

    /// Swap a scene's visual asset in a single assignment. Unknown ids are
    /// ignored; returns `true` when the scene exists.
    pub fn replace_scene_visual(&mut self, id: &SceneId, visual: AssetRef) -> bool {
        match self.scene_mut(id) {
            Some(scene) => {
                scene.visual = Some(visual);
                tracing::debug!(scene = %id, "Scene visual replaced");
                true
            }
            None => {
                tracing::debug!(scene = %id, "Visual replacement for unknown scene ignored");
                false
            }
        }
    }

    /// Set or clear the background music track.
    pub fn set_music(&mut self, music: Option<AudioTrack>) {
        match &music {
            Some(track) => tracing::debug!(track = %track.name, "Background music set"),
            None => tracing::debug!("Background music cleared"),
        }
        self.music = music;
    }

    /// Set the background music volume, clamped to [0, 1].
    pub fn set_music_volume(&mut self, volume: f32) {
        self.music_volume = clamp_volume(volume);
        tracing::debug!(volume = self.music_volume, "Music volume set");
    }
}

/// Clamp a volume into [0, 1]; NaN collapses to silence.
fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return 0.0;
    }
    volume.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scene(id: &str, duration: f64) -> Scene {
        let mut scene = Scene::new(SceneId::new(id), format!("scene {id}"));
        scene.duration = duration;
        scene
    }

    fn sample_board() -> Storyboard {
        let mut board = Storyboard::new();
        board.push_scene(make_scene("a", 5.0));
        board.push_scene(make_scene("b", 3.0));
        board.push_scene(make_scene("c", 4.0));
        board
    }

    #[test]
    fn scene_defaults() {
        let scene = Scene::new(SceneId::new("s"), "desc");
        assert_eq!(scene.duration, 5.0);
        assert_eq!(scene.volume, 1.0);
        assert_eq!(scene.transition, Transition::Cut);
        assert!(scene.visual.is_none());
        assert!(scene.keywords.is_empty());
    }

    #[test]
    fn effective_duration_falls_back() {
        let mut scene = make_scene("s", 2.5);
        assert_eq!(scene.effective_duration(), 2.5);
        scene.duration = 0.0;
        assert_eq!(scene.effective_duration(), 5.0);
        scene.duration = -3.0;
        assert_eq!(scene.effective_duration(), 5.0);
        scene.duration = f64::NAN;
        assert_eq!(scene.effective_duration(), 5.0);
    }

    #[test]
    fn total_duration_sums_effective_durations() {
        let mut board = sample_board();
        assert!((board.total_duration().as_secs() - 12.0).abs() < 1e-9);

        // A broken stored duration counts as the default, not as zero.
        board.scenes[1].duration = -1.0;
        assert!((board.total_duration().as_secs() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn total_duration_never_stale_after_mutation() {
        let mut board = sample_board();
        board.remove_scene(&SceneId::new("c"));
        assert!((board.total_duration().as_secs() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn empty_storyboard() {
        let board = Storyboard::new();
        assert!(board.is_empty());
        assert_eq!(board.total_duration(), TimeCode::ZERO);
        assert!((board.music_volume - 0.5).abs() < 1e-6);
    }

    #[test]
    fn set_scene_volume_clamps() {
        let mut board = sample_board();
        let id = SceneId::new("a");
        board.set_scene_volume(&id, 1.7);
        assert_eq!(board.scene(&id).unwrap().volume, 1.0);
        board.set_scene_volume(&id, -0.4);
        assert_eq!(board.scene(&id).unwrap().volume, 0.0);
        board.set_scene_volume(&id, f32::NAN);
        assert_eq!(board.scene(&id).unwrap().volume, 0.0);
        board.set_scene_volume(&id, 0.6);
        assert!((board.scene(&id).unwrap().volume - 0.6).abs() < 1e-6);
    }

    #[test]
    fn unknown_scene_mutations_are_no_ops() {
        let mut board = sample_board();
        let before = board.clone();
        let ghost = SceneId::new("ghost");

        assert!(!board.set_scene_volume(&ghost, 0.2));
        assert!(!board.set_scene_transition(&ghost, Transition::Fade));
        assert!(!board.set_scene_duration(&ghost, 9.0));
        assert!(!board.replace_scene_visual(&ghost, AssetRef::new("x")));
        assert!(!board.remove_scene(&ghost));
        assert!(!board.move_scene(&ghost, 1));

        assert_eq!(board, before);
    }

    #[test]
    fn set_scene_duration_floors() {
        let mut board = sample_board();
        let id = SceneId::new("b");
        board.set_scene_duration(&id, 0.0);
        assert!((board.scene(&id).unwrap().duration - 0.1).abs() < 1e-9);
        board.set_scene_duration(&id, f64::INFINITY);
        assert!((board.scene(&id).unwrap().duration - 5.0).abs() < 1e-9);
        board.set_scene_duration(&id, 8.0);
        assert!((board.scene(&id).unwrap().duration - 8.0).abs() < 1e-9);
    }

    #[test]
    fn replace_scene_visual_swaps_reference() {
        let mut board = sample_board();
        let id = SceneId::new("c");
        board.replace_scene_visual(&id, AssetRef::new("https://example.com/new.mp4"));
        assert_eq!(
            board.scene(&id).unwrap().visual,
            Some(AssetRef::new("https://example.com/new.mp4"))
        );
    }

    #[test]
    fn move_scene_clamps_at_ends() {
        let mut board = sample_board();
        let id = SceneId::new("a");

        // Already first, moving further up does nothing.
        assert!(!board.move_scene(&id, -1));
        assert_eq!(board.scene_index(&id), Some(0));

        assert!(board.move_scene(&id, 2));
        assert_eq!(board.scene_index(&id), Some(2));

        // Offset past the end clamps to the last slot.
        assert!(board.move_scene(&SceneId::new("b"), 10));
        assert_eq!(board.scene_index(&SceneId::new("b")), Some(2));
    }

    #[test]
    fn replace_scenes_is_wholesale() {
        let mut board = sample_board();
        board.replace_scenes(vec![make_scene("x", 1.0)]);
        assert_eq!(board.scenes.len(), 1);
        assert_eq!(board.scenes[0].id, SceneId::new("x"));
    }

    #[test]
    fn music_volume_clamps() {
        let mut board = Storyboard::new();
        board.set_music_volume(2.0);
        assert_eq!(board.music_volume, 1.0);
        board.set_music_volume(-1.0);
        assert_eq!(board.music_volume, 0.0);
    }

    #[test]
    fn set_music_roundtrip() {
        let mut board = Storyboard::new();
        board.set_music(Some(AudioTrack {
            name: "Epic Theme".to_string(),
            source: AssetRef::new("https://example.com/theme.mp3"),
        }));
        assert!(board.music.is_some());
        board.set_music(None);
        assert!(board.music.is_none());
    }

    #[test]
    fn transition_wire_names() {
        assert_eq!(serde_json::to_string(&Transition::Cut).unwrap(), "\"cut\"");
        assert_eq!(serde_json::to_string(&Transition::Fade).unwrap(), "\"fade\"");
        assert_eq!(
            serde_json::to_string(&Transition::SlideLeft).unwrap(),
            "\"slide-left\""
        );
        assert_eq!(
            serde_json::to_string(&Transition::WipeRight).unwrap(),
            "\"wipe-right\""
        );

        let parsed: Transition = serde_json::from_str("\"slide-left\"").unwrap();
        assert_eq!(parsed, Transition::SlideLeft);
    }

    #[test]
    fn final_scene_transition_is_stored_untouched() {
        let mut board = sample_board();
        let last = SceneId::new("c");
        board.set_scene_transition(&last, Transition::WipeRight);
        assert_eq!(board.scene(&last).unwrap().transition, Transition::WipeRight);

        let json = serde_json::to_string(&board).unwrap();
        let restored: Storyboard = serde_json::from_str(&json).unwrap();
        assert_eq!(
            restored.scene(&last).unwrap().transition,
            Transition::WipeRight
        );
    }
}
