//! Periodic auto-save timing.
//!
//! `AutoSaver` owns no thread and performs no I/O. The host polls it from
//! its main loop: when [`AutoSaver::should_save`] returns `true`, the host
//! runs an explicit save and calls [`AutoSaver::mark_saved`]. Whether there
//! is anything to save comes from the engine's dirty flag, which the host
//! passes in; the saver itself only tracks the interval.

use std::time::{Duration, Instant};

use tracing::{debug, info};

/// Default auto-save interval in seconds.
pub const DEFAULT_AUTOSAVE_INTERVAL_SECS: u32 = 60;

/// Decides when a periodic save is due.
#[derive(Debug)]
pub struct AutoSaver {
    /// How often to auto-save.
    interval: Duration,
    /// When the last save occurred.
    last_saved: Instant,
    /// Whether auto-save is enabled.
    enabled: bool,
}

impl AutoSaver {
    /// Create a new auto-saver with the given interval in seconds.
    pub fn new(interval_secs: u32) -> Self {
        let interval = Duration::from_secs(interval_secs as u64);
        info!(interval_secs, "AutoSaver initialized");
        Self {
            interval,
            last_saved: Instant::now(),
            enabled: true,
        }
    }

    /// Whether a save should be triggered now.
    ///
    /// True only while auto-save is enabled, `dirty` reports unsaved
    /// changes, and the interval has elapsed since the last save.
    pub fn should_save(&self, dirty: bool) -> bool {
        self.enabled && dirty && self.last_saved.elapsed() >= self.interval
    }

    /// Record that a save just happened, restarting the interval.
    pub fn mark_saved(&mut self) {
        self.last_saved = Instant::now();
        debug!("Auto-save timer reset");
    }

    /// Get the configured auto-save interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the auto-save interval.
    pub fn set_interval(&mut self, secs: u32) {
        self.interval = Duration::from_secs(secs as u64);
        debug!(interval_secs = secs, "Auto-save interval updated");
    }

    /// Enable or disable auto-saving.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        debug!(enabled, "Auto-save enabled state changed");
    }

    /// Whether auto-save is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Time remaining until the next save would be due.
    ///
    /// Returns `Duration::ZERO` if a save is already due.
    pub fn time_until_next_save(&self) -> Duration {
        self.interval.saturating_sub(self.last_saved.elapsed())
    }
}

impl Default for AutoSaver {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_saver_does_not_fire_early() {
        let saver = AutoSaver::new(60);
        // Dirty or not, the interval has not elapsed yet.
        assert!(!saver.should_save(true));
        assert!(!saver.should_save(false));
    }

    #[test]
    fn fires_after_interval_when_dirty() {
        // Zero-second interval so the elapsed check passes immediately.
        let saver = AutoSaver::new(0);
        assert!(saver.should_save(true));
    }

    #[test]
    fn never_fires_while_clean() {
        let saver = AutoSaver::new(0);
        assert!(!saver.should_save(false));
    }

    #[test]
    fn never_fires_while_disabled() {
        let mut saver = AutoSaver::new(0);
        saver.set_enabled(false);
        assert!(!saver.should_save(true));
        assert!(!saver.is_enabled());
    }

    #[test]
    fn mark_saved_restarts_the_interval() {
        let mut saver = AutoSaver::new(3600);
        saver.mark_saved();
        assert!(!saver.should_save(true));
        assert!(saver.time_until_next_save().as_secs() >= 3598);
    }

    #[test]
    fn set_interval_changes_duration() {
        let mut saver = AutoSaver::new(60);
        assert_eq!(saver.interval(), Duration::from_secs(60));
        saver.set_interval(120);
        assert_eq!(saver.interval(), Duration::from_secs(120));
    }

    #[test]
    fn default_interval() {
        let saver = AutoSaver::default();
        assert_eq!(
            saver.interval(),
            Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS as u64)
        );
    }

    #[test]
    fn time_until_next_save_zero_when_due() {
        let saver = AutoSaver::new(0);
        assert_eq!(saver.time_until_next_save(), Duration::ZERO);
    }

    #[test]
    fn enable_disable_toggle() {
        let mut saver = AutoSaver::new(60);
        assert!(saver.is_enabled());

        saver.set_enabled(false);
        assert!(!saver.is_enabled());

        saver.set_enabled(true);
        assert!(saver.is_enabled());
    }
}
