//! Platform audio output seam.

/// Interface to an audio output that can play one music track.
///
/// The engine holds the sink behind this trait and drives it exclusively
/// through [`crate::Synchronizer`]. Implementations wrap whatever the
/// platform provides (a web `<audio>` element, a native output stream); the
/// trait only exposes the transport controls the synchronizer needs.
///
/// Position is expressed in seconds from the start of the loaded track.
/// Implementations are expected to clamp out-of-range seeks rather than
/// fail, mirroring how media elements behave.
pub trait AudioSink {
    /// Start or resume playback of the loaded track.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Whether the sink is currently playing.
    fn is_playing(&self) -> bool;

    /// Set the output volume (0.0 = silent, 1.0 = full).
    fn set_volume(&mut self, volume: f32);

    /// Current playback position in seconds.
    fn position(&self) -> f64;

    /// Seek to a position in seconds.
    fn set_position(&mut self, secs: f64);
}
