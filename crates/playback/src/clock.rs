//! Playback transport: the cursor advances with wall time while playing.

use std::time::Instant;

use sr_common::TimeCode;

/// Transport state of the preview.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Not advancing; the cursor holds its position.
    #[default]
    Stopped,
    /// The cursor advances with wall time.
    Playing,
    /// The cursor reached the end of the timeline.
    Finished,
}

/// Advances the playback cursor against a wall clock.
///
/// The clock is the engine's single time authority: the resolver and the
/// audio synchronizer both read the cursor it owns. Wall time enters only
/// through [`tick`](Self::tick); [`advance_by`](Self::advance_by) takes an
/// explicit delta so stepping stays deterministic for tests and offline use.
///
/// `last_tick` anchors the wall clock and is `Some` only while playing,
/// starting from the first tick after playback begins. Every exit from
/// `Playing` clears it, so a later resume never charges the cursor for time
/// spent paused.
#[derive(Clone, Debug)]
pub struct PlaybackClock {
    mode: PlaybackMode,
    cursor: TimeCode,
    last_tick: Option<Instant>,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    /// Create a stopped clock with the cursor at zero.
    pub fn new() -> Self {
        Self {
            mode: PlaybackMode::Stopped,
            cursor: TimeCode::ZERO,
            last_tick: None,
        }
    }

    /// Current transport state.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// Current cursor position.
    pub fn cursor(&self) -> TimeCode {
        self.cursor
    }

    /// Whether the cursor is advancing.
    pub fn is_playing(&self) -> bool {
        self.mode == PlaybackMode::Playing
    }

    /// Whether the cursor sits at the end of the timeline.
    pub fn is_finished(&self) -> bool {
        self.mode == PlaybackMode::Finished
    }

    /// Start playing toward `total`.
    ///
    /// Ignored while finished: the caller routes a replay through
    /// [`restart`](Self::restart) first. Playing an empty timeline finishes
    /// immediately, there is nothing to advance through.
    pub fn play(&mut self, total: TimeCode) {
        match self.mode {
            PlaybackMode::Finished => {
                tracing::warn!("Play ignored while finished; restart to play again");
            }
            PlaybackMode::Playing => {}
            PlaybackMode::Stopped => {
                if total.as_secs() <= 0.0 {
                    tracing::debug!("Play on empty timeline, finishing immediately");
                    self.finish(TimeCode::ZERO);
                    return;
                }
                self.mode = PlaybackMode::Playing;
                self.last_tick = None;
                tracing::debug!(time = %self.cursor, "Playback started");
            }
        }
    }

    /// Pause at the current position. Stopped keeps the cursor where it is.
    pub fn pause(&mut self) {
        if self.mode == PlaybackMode::Playing {
            self.mode = PlaybackMode::Stopped;
            self.last_tick = None;
            tracing::debug!(time = %self.cursor, "Playback paused");
        }
    }

    /// Feed the clock a wall-clock reading.
    ///
    /// The first tick after playback starts only anchors the clock; the
    /// cursor moves from the second tick on, by the wall time elapsed between
    /// readings. A no-op unless playing.
    pub fn tick(&mut self, now: Instant, total: TimeCode) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        let elapsed = match self.last_tick {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f64(),
            None => {
                self.last_tick = Some(now);
                return;
            }
        };
        self.last_tick = Some(now);
        self.advance_by(elapsed, total);
    }

    /// Advance the cursor by an explicit number of seconds.
    ///
    /// Reaching or passing `total` clamps the cursor there and finishes.
    /// A no-op unless playing; non-finite and non-positive deltas are
    /// ignored.
    pub fn advance_by(&mut self, dt_secs: f64, total: TimeCode) {
        if self.mode != PlaybackMode::Playing {
            return;
        }
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return;
        }
        if total.as_secs() <= 0.0 {
            // The timeline emptied out from under a playing cursor.
            self.finish(TimeCode::ZERO);
            return;
        }
        let next = self.cursor.as_secs() + dt_secs;
        if next >= total.as_secs() {
            self.finish(total);
        } else {
            self.cursor = TimeCode::from_secs(next);
        }
    }

    /// Move the cursor to `target`, clamped into `[0, total]`.
    ///
    /// Seeking to or past the end finishes playback; seeking back from the
    /// end returns the clock to stopped. Otherwise the mode is kept, and a
    /// playing clock re-anchors so the next tick cannot charge the cursor
    /// for the jump.
    pub fn seek(&mut self, target: TimeCode, total: TimeCode) {
        self.cursor = target.clamp_to(total);
        self.last_tick = None;
        if total.as_secs() > 0.0 && self.cursor.as_secs() >= total.as_secs() {
            self.mode = PlaybackMode::Finished;
            tracing::debug!(time = %self.cursor, "Seeked to end, playback finished");
        } else if self.mode == PlaybackMode::Finished {
            self.mode = PlaybackMode::Stopped;
            tracing::debug!(time = %self.cursor, "Seeked back from end");
        } else {
            tracing::debug!(time = %self.cursor, "Seeked");
        }
    }

    /// Return the cursor to zero and stop. The exit from finished.
    pub fn restart(&mut self) {
        self.mode = PlaybackMode::Stopped;
        self.cursor = TimeCode::ZERO;
        self.last_tick = None;
        tracing::debug!("Playback reset to start");
    }

    /// Pull the cursor back inside a timeline that shrank. The mode is left
    /// alone; a playing cursor stranded at the new end finishes on its next
    /// advance.
    pub fn clamp_cursor(&mut self, total: TimeCode) {
        let clamped = self.cursor.clamp_to(total);
        if clamped != self.cursor {
            tracing::debug!(from = %self.cursor, to = %clamped, "Cursor clamped to shortened timeline");
            self.cursor = clamped;
        }
    }

    fn finish(&mut self, end: TimeCode) {
        self.cursor = end;
        self.mode = PlaybackMode::Finished;
        self.last_tick = None;
        tracing::debug!(time = %self.cursor, "Playback finished");
    }
}
