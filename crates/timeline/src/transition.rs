//! Transition styling between scenes.
//!
//! `compose()` turns an [`ActiveFrame`](crate::resolver::ActiveFrame) into
//! compositing parameters for the two visual layers the view stacks: the
//! departing scene on top, the incoming scene underneath. The departing
//! scene's transition kind decides the rule; easing and actual drawing stay
//! in the view layer.

use crate::resolver::ActiveFrame;
use crate::types::Transition;

/// Compositing parameters for one visual layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerStyle {
    /// Layer opacity (0.0..=1.0).
    pub opacity: f32,
    /// Offset from the resting position, as fractions of the canvas size
    /// (x = 1.0 is one full canvas width to the right).
    pub offset: [f32; 2],
    /// Optional mask limiting the visible horizontal span.
    pub wipe: Option<WipeMask>,
}

impl LayerStyle {
    /// Fully visible at the resting position.
    fn resting() -> Self {
        Self {
            opacity: 1.0,
            offset: [0.0, 0.0],
            wipe: None,
        }
    }

    /// Invisible at the resting position.
    fn hidden() -> Self {
        Self {
            opacity: 0.0,
            offset: [0.0, 0.0],
            wipe: None,
        }
    }
}

/// The horizontal span of a layer left visible by a wipe, as fractions of the
/// canvas width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WipeMask {
    pub left: f32,
    pub right: f32,
}

/// Styles for the two layers the view composites.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameComposite {
    /// The scene under the cursor.
    pub current: LayerStyle,
    /// The upcoming scene; `None` when the frame has no next scene.
    pub next: Option<LayerStyle>,
}

/// Compute layer styles for an active frame.
///
/// Outside a transition the current layer rests fully visible and the next
/// layer is hidden; when the pending handoff is a slide, the hidden layer is
/// parked one canvas width to the right so the slide starts off-screen.
/// During a transition the departing scene's kind picks the rule.
pub fn compose(frame: &ActiveFrame<'_>) -> FrameComposite {
    let Some(current) = frame.current else {
        return FrameComposite {
            current: LayerStyle::hidden(),
            next: None,
        };
    };

    if frame.next.is_none() {
        return FrameComposite {
            current: LayerStyle::resting(),
            next: None,
        };
    }

    if !frame.is_transitioning {
        let next = match current.transition {
            Transition::SlideLeft => LayerStyle {
                opacity: 0.0,
                offset: [1.0, 0.0],
                wipe: None,
            },
            _ => LayerStyle::hidden(),
        };
        return FrameComposite {
            current: LayerStyle::resting(),
            next: Some(next),
        };
    }

    let progress = (frame.progress as f32).clamp(0.0, 1.0);
    match current.transition {
        Transition::Cut => compose_cut(),
        Transition::Fade => compose_fade(progress),
        Transition::SlideLeft => compose_slide_left(progress),
        Transition::WipeRight => compose_wipe_right(progress),
    }
}

/// Cut: a step function at the scene boundary. The cursor crossing into the
/// next scene is the whole effect, so the window renders nothing special.
fn compose_cut() -> FrameComposite {
    FrameComposite {
        current: LayerStyle::resting(),
        next: Some(LayerStyle::hidden()),
    }
}

/// Fade: opacity shifts from the outgoing to the incoming scene.
fn compose_fade(progress: f32) -> FrameComposite {
    FrameComposite {
        current: LayerStyle {
            opacity: 1.0 - progress,
            offset: [0.0, 0.0],
            wipe: None,
        },
        next: Some(LayerStyle {
            opacity: progress,
            offset: [0.0, 0.0],
            wipe: None,
        }),
    }
}

/// Slide: the outgoing scene moves off to the left while the incoming one
/// rides in from the right, both fully opaque.
fn compose_slide_left(progress: f32) -> FrameComposite {
    FrameComposite {
        current: LayerStyle {
            opacity: 1.0,
            offset: [-progress, 0.0],
            wipe: None,
        },
        next: Some(LayerStyle {
            opacity: 1.0,
            offset: [1.0 - progress, 0.0],
            wipe: None,
        }),
    }
}

/// Wipe: the outgoing scene is clipped away left-to-right, uncovering the
/// incoming scene sitting fully opaque underneath.
fn compose_wipe_right(progress: f32) -> FrameComposite {
    FrameComposite {
        current: LayerStyle {
            opacity: 1.0,
            offset: [0.0, 0.0],
            wipe: Some(WipeMask {
                left: progress,
                right: 1.0,
            }),
        },
        next: Some(LayerStyle::resting()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::types::{Scene, Storyboard, Transition};
    use sr_common::{SceneId, TimeCode};

    const WINDOW: f64 = 0.5;

    /// Two five-second scenes with the given handoff on the first.
    fn pair_with(transition: Transition) -> Storyboard {
        let mut board = Storyboard::new();
        let mut a = Scene::new(SceneId::new("a"), "first");
        a.transition = transition;
        board.push_scene(a);
        board.push_scene(Scene::new(SceneId::new("b"), "second"));
        board
    }

    fn styles_at(board: &Storyboard, secs: f64) -> FrameComposite {
        compose(&resolve(board, TimeCode::from_secs(secs), WINDOW))
    }

    #[test]
    fn empty_frame_hides_everything() {
        let board = Storyboard::new();
        let composite = styles_at(&board, 1.0);
        assert_eq!(composite.current.opacity, 0.0);
        assert!(composite.next.is_none());
    }

    #[test]
    fn resting_frame_shows_only_the_current_scene() {
        let board = pair_with(Transition::Fade);
        let composite = styles_at(&board, 2.0);
        assert_eq!(composite.current, LayerStyle::resting());
        assert_eq!(composite.next.unwrap().opacity, 0.0);
    }

    #[test]
    fn final_scene_has_no_next_layer() {
        let board = pair_with(Transition::Fade);
        let composite = styles_at(&board, 8.0);
        assert_eq!(composite.current, LayerStyle::resting());
        assert!(composite.next.is_none());
    }

    #[test]
    fn cut_keeps_current_fully_visible_through_the_window() {
        let board = pair_with(Transition::Cut);
        for secs in [4.55, 4.75, 4.95] {
            let composite = styles_at(&board, secs);
            assert_eq!(composite.current, LayerStyle::resting());
            assert_eq!(composite.next.unwrap().opacity, 0.0);
        }
        // Crossing the boundary swaps instantly: B is now the resting current.
        let composite = styles_at(&board, 5.0);
        assert_eq!(composite.current, LayerStyle::resting());
    }

    #[test]
    fn fade_crosses_opacity_at_the_midpoint() {
        let board = pair_with(Transition::Fade);
        // 4.75s: halfway through the 0.5s window.
        let composite = styles_at(&board, 4.75);
        assert!((composite.current.opacity - 0.5).abs() < 1e-6);
        assert!((composite.next.unwrap().opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn fade_endpoints() {
        let board = pair_with(Transition::Fade);
        let composite = styles_at(&board, 4.5);
        assert!((composite.current.opacity - 1.0).abs() < 1e-6);
        assert!((composite.next.unwrap().opacity - 0.0).abs() < 1e-6);
    }

    #[test]
    fn slide_left_moves_both_layers() {
        let board = pair_with(Transition::SlideLeft);
        let composite = styles_at(&board, 4.75);
        assert!((composite.current.offset[0] - (-0.5)).abs() < 1e-6);
        let next = composite.next.unwrap();
        assert!((next.offset[0] - 0.5).abs() < 1e-6);
        assert_eq!(next.opacity, 1.0);
    }

    #[test]
    fn slide_left_parks_the_next_layer_off_screen_before_the_window() {
        let board = pair_with(Transition::SlideLeft);
        let composite = styles_at(&board, 2.0);
        let next = composite.next.unwrap();
        assert_eq!(next.opacity, 0.0);
        assert!((next.offset[0] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn other_transitions_park_the_next_layer_in_place() {
        let board = pair_with(Transition::WipeRight);
        let composite = styles_at(&board, 2.0);
        let next = composite.next.unwrap();
        assert_eq!(next.opacity, 0.0);
        assert_eq!(next.offset, [0.0, 0.0]);
    }

    #[test]
    fn wipe_right_consumes_the_current_layer_from_the_left() {
        let board = pair_with(Transition::WipeRight);
        let composite = styles_at(&board, 4.75);
        let mask = composite.current.wipe.unwrap();
        assert!((mask.left - 0.5).abs() < 1e-6);
        assert!((mask.right - 1.0).abs() < 1e-6);
        // The incoming scene waits fully visible underneath.
        assert_eq!(composite.next.unwrap(), LayerStyle::resting());
    }

    #[test]
    fn wipe_right_starts_with_the_full_span_visible() {
        let board = pair_with(Transition::WipeRight);
        let composite = styles_at(&board, 4.5);
        let mask = composite.current.wipe.unwrap();
        assert!(mask.left.abs() < 1e-6);
    }
}
