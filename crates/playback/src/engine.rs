//! The preview engine: one facade over the storyboard, clock, and audio sync.

use std::time::Instant;

use sr_audio::{AudioSink, Synchronizer};
use sr_common::{AssetRef, EngineConfig, SceneId, TimeCode};
use sr_timeline::{
    compose, generate_scenes, resolve, ActiveFrame, AudioTrack, FrameComposite, GenerateError,
    Scene, SceneSource, Storyboard, Transition,
};

use crate::clock::{PlaybackClock, PlaybackMode};

/// Owns a storyboard together with its playback state and answers, per
/// frame, what the view should draw and what the audio sink should do.
///
/// All edits go through the engine so it can track unsaved changes and keep
/// the cursor inside a timeline that shrank. Frame data is computed on
/// demand from the current cursor, never cached, so it cannot go stale
/// after an edit.
pub struct PreviewEngine {
    config: EngineConfig,
    storyboard: Storyboard,
    clock: PlaybackClock,
    sync: Synchronizer,
    dirty: bool,
}

impl Default for PreviewEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewEngine {
    /// Create an engine with an empty storyboard and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with an empty storyboard.
    pub fn with_config(config: EngineConfig) -> Self {
        let sync = Synchronizer::new(config.drift_tolerance);
        Self {
            config,
            storyboard: Storyboard::new(),
            clock: PlaybackClock::new(),
            sync,
            dirty: false,
        }
    }

    /// Replace the storyboard wholesale, as after loading a project.
    ///
    /// Playback returns to the start and the board counts as saved.
    pub fn load(&mut self, storyboard: Storyboard) {
        tracing::debug!(scenes = storyboard.scenes.len(), "Storyboard loaded");
        self.storyboard = storyboard;
        self.clock.restart();
        self.sync.reset();
        self.dirty = false;
    }

    /// The storyboard being previewed.
    pub fn storyboard(&self) -> &Storyboard {
        &self.storyboard
    }

    /// Engine configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Total duration of the current storyboard.
    pub fn total_duration(&self) -> TimeCode {
        self.storyboard.total_duration()
    }

    /// Whether the storyboard has edits not yet persisted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the current storyboard as persisted.
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    // ---- transport -------------------------------------------------------

    /// Current transport state.
    pub fn mode(&self) -> PlaybackMode {
        self.clock.mode()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> TimeCode {
        self.clock.cursor()
    }

    /// Whether the cursor is advancing.
    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    /// Whether playback ran off the end of the timeline.
    pub fn is_finished(&self) -> bool {
        self.clock.is_finished()
    }

    /// Start playback from the current cursor.
    pub fn play(&mut self) {
        self.clock.play(self.total_duration());
    }

    /// Pause playback at the current cursor.
    pub fn pause(&mut self) {
        self.clock.pause();
    }

    /// The play button: pause when playing, play when stopped, and replay
    /// from the start when finished.
    pub fn toggle_play(&mut self) {
        match self.clock.mode() {
            PlaybackMode::Playing => self.clock.pause(),
            PlaybackMode::Stopped => self.clock.play(self.total_duration()),
            PlaybackMode::Finished => {
                self.clock.restart();
                self.clock.play(self.total_duration());
            }
        }
    }

    /// Move the cursor, clamped into the timeline.
    pub fn seek(&mut self, target: TimeCode) {
        self.clock.seek(target, self.total_duration());
    }

    /// Return the cursor to zero and stop.
    pub fn restart(&mut self) {
        self.clock.restart();
    }

    /// Advance playback against a wall-clock reading. Call once per frame.
    pub fn update(&mut self, now: Instant) {
        self.clock.tick(now, self.total_duration());
    }

    /// Advance playback by an explicit delta, for deterministic stepping.
    pub fn advance_by(&mut self, dt_secs: f64) {
        self.clock.advance_by(dt_secs, self.total_duration());
    }

    // ---- frame output ----------------------------------------------------

    /// Resolve the storyboard at the current cursor.
    pub fn frame(&self) -> ActiveFrame<'_> {
        resolve(
            &self.storyboard,
            self.clock.cursor(),
            self.config.transition_window,
        )
    }

    /// Layer styles for the current frame.
    pub fn composite(&self) -> FrameComposite {
        compose(&self.frame())
    }

    /// Reconcile an audio sink with the current playback state.
    pub fn sync_audio(&mut self, sink: &mut dyn AudioSink) {
        let has_track = self.storyboard.music.is_some();
        self.sync.apply(
            sink,
            self.clock.is_playing(),
            self.clock.cursor(),
            self.storyboard.music_volume,
            has_track,
        );
    }

    // ---- edits -----------------------------------------------------------

    /// Append a scene at the end of the storyboard.
    pub fn push_scene(&mut self, scene: Scene) {
        self.storyboard.push_scene(scene);
        self.after_edit();
    }

    /// Remove a scene. The cursor is pulled back if it was stranded past the
    /// new end.
    pub fn remove_scene(&mut self, id: &SceneId) -> bool {
        let removed = self.storyboard.remove_scene(id);
        if removed {
            self.after_edit();
        }
        removed
    }

    /// Move a scene by a signed offset in playback order.
    pub fn move_scene(&mut self, id: &SceneId, offset: isize) -> bool {
        let moved = self.storyboard.move_scene(id, offset);
        if moved {
            self.after_edit();
        }
        moved
    }

    /// Set a scene's volume.
    pub fn set_scene_volume(&mut self, id: &SceneId, volume: f32) -> bool {
        let changed = self.storyboard.set_scene_volume(id, volume);
        if changed {
            self.after_edit();
        }
        changed
    }

    /// Set the transition a scene hands off with.
    pub fn set_scene_transition(&mut self, id: &SceneId, transition: Transition) -> bool {
        let changed = self.storyboard.set_scene_transition(id, transition);
        if changed {
            self.after_edit();
        }
        changed
    }

    /// Set a scene's duration in seconds.
    pub fn set_scene_duration(&mut self, id: &SceneId, secs: f64) -> bool {
        let changed = self.storyboard.set_scene_duration(id, secs);
        if changed {
            self.after_edit();
        }
        changed
    }

    /// Swap a scene's visual asset.
    pub fn replace_scene_visual(&mut self, id: &SceneId, visual: AssetRef) -> bool {
        let changed = self.storyboard.replace_scene_visual(id, visual);
        if changed {
            self.after_edit();
        }
        changed
    }

    /// Set or clear the background music track.
    pub fn set_music(&mut self, music: Option<AudioTrack>) {
        self.storyboard.set_music(music);
        self.sync.reset();
        self.after_edit();
    }

    /// Set the background music volume.
    pub fn set_music_volume(&mut self, volume: f32) {
        self.storyboard.set_music_volume(volume);
        self.after_edit();
    }

    /// Regenerate the scene list from a script.
    ///
    /// The existing scenes are replaced only when the whole run succeeds; on
    /// any error the storyboard is left exactly as it was. Success resets
    /// playback to the start and returns the new scene count.
    pub fn generate_scenes(
        &mut self,
        source: &dyn SceneSource,
        script: &str,
    ) -> Result<usize, GenerateError> {
        let scenes = generate_scenes(source, script)?;
        let count = scenes.len();
        self.storyboard.replace_scenes(scenes);
        self.clock.restart();
        self.dirty = true;
        tracing::info!(scenes = count, "Storyboard regenerated from script");
        Ok(count)
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        self.clock.clamp_cursor(self.total_duration());
    }
}
