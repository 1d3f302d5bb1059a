//! Cursor resolution: `resolve()` takes a storyboard and a time cursor and
//! answers which scene is on screen, which scene is next, and how far into
//! the transition window the cursor sits.
//!
//! The walk accumulates scene durations in playback order. Each scene owns the
//! half-open interval `[start, start + duration)`, except the final scene,
//! whose interval is closed at the total duration so the last frame stays
//! visible exactly at the end.

use sr_common::TimeCode;

use crate::types::{Scene, Storyboard};

/// The state of the screen at one cursor position.
///
/// Borrowed from the storyboard it was resolved against; recompute after any
/// mutation rather than holding one of these across edits.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveFrame<'a> {
    /// Scene under the cursor; `None` only for an empty storyboard.
    pub current: Option<&'a Scene>,
    /// Scene the current one hands off to; `None` on the final scene.
    pub next: Option<&'a Scene>,
    /// Playback-order index of the current scene.
    pub scene_index: Option<usize>,
    /// Seconds elapsed inside the current scene.
    pub time_into_scene: f64,
    /// `true` while the handoff into the next scene is underway.
    pub is_transitioning: bool,
    /// Fraction of the transition window elapsed, in [0, 1]. Zero whenever
    /// `is_transitioning` is false.
    pub progress: f64,
}

impl<'a> ActiveFrame<'a> {
    fn empty() -> Self {
        Self {
            current: None,
            next: None,
            scene_index: None,
            time_into_scene: 0.0,
            is_transitioning: false,
            progress: 0.0,
        }
    }
}

/// Resolve the storyboard at the given cursor.
///
/// Pure and deterministic: identical inputs always produce identical output,
/// which is what makes scrubbing exactly reproducible. The cursor is clamped
/// into `[0, total_duration]` first, so a cursor stranded past the end (for
/// example after a scene removal) lands on the final scene instead of failing.
///
/// `window_secs` is the length of the transition window at the end of each
/// scene. A scene is transitioning iff a next scene exists and the remaining
/// time inside the current scene has dropped to the window or below; the
/// final scene therefore never transitions, whatever its transition field
/// says.
pub fn resolve<'a>(board: &'a Storyboard, cursor: TimeCode, window_secs: f64) -> ActiveFrame<'a> {
    if board.scenes.is_empty() {
        return ActiveFrame::empty();
    }

    let total = board.total_duration();
    let t = cursor.clamp_to(total).as_secs();

    let mut start = 0.0;
    let mut found = None;
    for (i, scene) in board.scenes.iter().enumerate() {
        let duration = scene.effective_duration();
        if t < start + duration {
            found = Some(i);
            break;
        }
        start += duration;
    }

    // Only `t == total` falls through the walk; close the final scene's
    // interval there.
    let index = match found {
        Some(i) => i,
        None => {
            let i = board.scenes.len() - 1;
            start -= board.scenes[i].effective_duration();
            i
        }
    };

    let scene = &board.scenes[index];
    let duration = scene.effective_duration();
    let time_into_scene = (t - start).clamp(0.0, duration);
    let next = board.scenes.get(index + 1);

    let remaining = duration - time_into_scene;
    let is_transitioning = next.is_some() && window_secs > 0.0 && remaining <= window_secs;
    let progress = if is_transitioning {
        ((window_secs - remaining) / window_secs).clamp(0.0, 1.0)
    } else {
        0.0
    };

    ActiveFrame {
        current: Some(scene),
        next,
        scene_index: Some(index),
        time_into_scene,
        is_transitioning,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Scene, Transition};
    use sr_common::SceneId;

    const WINDOW: f64 = 0.5;

    fn make_scene(id: &str, duration: f64) -> Scene {
        let mut scene = Scene::new(SceneId::new(id), format!("scene {id}"));
        scene.duration = duration;
        scene
    }

    /// Two scenes, A fading into B, five seconds each.
    fn fade_pair() -> Storyboard {
        let mut board = Storyboard::new();
        let mut a = make_scene("a", 5.0);
        a.transition = Transition::Fade;
        board.push_scene(a);
        board.push_scene(make_scene("b", 5.0));
        board
    }

    fn at(board: &Storyboard, secs: f64) -> ActiveFrame<'_> {
        resolve(board, TimeCode::from_secs(secs), WINDOW)
    }

    #[test]
    fn empty_storyboard_resolves_to_nothing() {
        let board = Storyboard::new();
        for secs in [0.0, 1.0, 100.0, -5.0] {
            let frame = at(&board, secs);
            assert!(frame.current.is_none());
            assert!(frame.next.is_none());
            assert!(!frame.is_transitioning);
            assert_eq!(frame.progress, 0.0);
        }
    }

    #[test]
    fn cursor_inside_first_scene() {
        let board = fade_pair();
        let frame = at(&board, 2.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("a"));
        assert_eq!(frame.next.unwrap().id, SceneId::new("b"));
        assert_eq!(frame.scene_index, Some(0));
        assert!((frame.time_into_scene - 2.0).abs() < 1e-9);
        assert!(!frame.is_transitioning);
    }

    #[test]
    fn transition_window_opens_near_scene_end() {
        let board = fade_pair();

        // 0.3s remain in A: inside the 0.5s window.
        let frame = at(&board, 4.7);
        assert!(frame.is_transitioning);
        assert_eq!(frame.current.unwrap().id, SceneId::new("a"));
        assert_eq!(frame.next.unwrap().id, SceneId::new("b"));
        assert!((frame.progress - 0.4).abs() < 1e-9);

        // A full second remains: not transitioning yet.
        let frame = at(&board, 4.0);
        assert!(!frame.is_transitioning);
        assert_eq!(frame.progress, 0.0);
    }

    #[test]
    fn window_edge_is_inclusive() {
        let board = fade_pair();
        let frame = at(&board, 4.5);
        assert!(frame.is_transitioning);
        assert!(frame.progress.abs() < 1e-9);
    }

    #[test]
    fn scene_boundary_belongs_to_the_next_scene() {
        let board = fade_pair();
        let frame = at(&board, 5.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("b"));
        assert_eq!(frame.scene_index, Some(1));
        assert!((frame.time_into_scene - 0.0).abs() < 1e-9);
        assert!(!frame.is_transitioning);
    }

    #[test]
    fn final_scene_never_transitions() {
        let mut board = fade_pair();
        // Give the last scene a transition; it has nobody to hand off to.
        let last = SceneId::new("b");
        board.set_scene_transition(&last, Transition::SlideLeft);

        let frame = at(&board, 9.8);
        assert_eq!(frame.current.unwrap().id, last);
        assert!(frame.next.is_none());
        assert!(!frame.is_transitioning);
    }

    #[test]
    fn end_of_timeline_keeps_last_frame() {
        let board = fade_pair();
        let frame = at(&board, 10.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("b"));
        assert!((frame.time_into_scene - 5.0).abs() < 1e-9);
        assert!(!frame.is_transitioning);
    }

    #[test]
    fn cursor_past_end_clamps_to_last_scene() {
        let board = fade_pair();
        let frame = at(&board, 42.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("b"));
        assert!((frame.time_into_scene - 5.0).abs() < 1e-9);
    }

    #[test]
    fn negative_cursor_clamps_to_start() {
        let board = fade_pair();
        let frame = at(&board, -3.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("a"));
        assert!((frame.time_into_scene - 0.0).abs() < 1e-9);
    }

    #[test]
    fn resolve_is_deterministic() {
        let board = fade_pair();
        for secs in [0.0, 1.3, 4.6, 4.99, 5.0, 7.25, 10.0] {
            assert_eq!(at(&board, secs), at(&board, secs));
        }
    }

    #[test]
    fn scene_shorter_than_window_transitions_from_its_first_instant() {
        let mut board = Storyboard::new();
        board.push_scene(make_scene("short", 0.3));
        board.push_scene(make_scene("tail", 5.0));

        let frame = at(&board, 0.0);
        assert!(frame.is_transitioning);
        // 0.3s of the 0.5s window remain, so 0.2s are already spent.
        assert!((frame.progress - 0.4).abs() < 1e-9);
    }

    #[test]
    fn removal_stranding_the_cursor_clamps_on_next_resolve() {
        let mut board = Storyboard::new();
        board.push_scene(make_scene("a", 5.0));
        board.push_scene(make_scene("b", 5.0));

        // Cursor sits in scene B, then B is removed.
        let cursor = TimeCode::from_secs(8.0);
        board.remove_scene(&SceneId::new("b"));

        let frame = resolve(&board, cursor, WINDOW);
        assert_eq!(frame.current.unwrap().id, SceneId::new("a"));
        assert!((frame.time_into_scene - 5.0).abs() < 1e-9);
        assert!(!frame.is_transitioning);
    }

    #[test]
    fn broken_duration_reads_as_default_during_resolution() {
        let mut board = Storyboard::new();
        let mut bad = make_scene("bad", 0.0);
        bad.duration = -2.0;
        board.push_scene(bad);
        board.push_scene(make_scene("ok", 5.0));

        // The broken scene occupies the default five seconds.
        let frame = at(&board, 4.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("bad"));
        let frame = at(&board, 5.0);
        assert_eq!(frame.current.unwrap().id, SceneId::new("ok"));
    }

    #[test]
    fn zero_window_disables_transitions() {
        let board = fade_pair();
        let frame = resolve(&board, TimeCode::from_secs(4.99), 0.0);
        assert!(!frame.is_transitioning);
    }
}
