//! Player capability
//!
//! Abstracts the playback device (local decoder, remote stream, ...) behind
//! the narrow contract the controller needs. Any concrete backend implements
//! the same trait; the controller never sees decoding or transport details.

use crate::error::Result;
use crate::track::TrackHandle;
use std::time::Duration;

/// Abstract playback device commanded by the controller
///
/// Commands are fire-and-forget from the controller's perspective, except
/// that `load` returning `Ok` is the acknowledgment that commits a track
/// transition. Completion and failure are reported asynchronously as
/// [`PlayerEvent`]s, which the embedder must marshal onto the controller's
/// serialization context before calling
/// [`QueueController::handle_player_event`](crate::QueueController::handle_player_event).
pub trait Player: Send {
    /// Set a track on the device without starting playback
    fn load(&mut self, track: &TrackHandle) -> Result<()>;

    /// Start or resume playback of the loaded track
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Seek within the loaded track
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback position within the loaded track
    fn position(&self) -> Duration;

    /// Whether the device is currently producing audio
    fn is_playing(&self) -> bool;

    /// Current output volume in `[0.0, 1.0]`
    #[cfg(feature = "volume")]
    fn volume(&self) -> f32;

    /// Set output volume, clamped to `[0.0, 1.0]` by implementations
    #[cfg(feature = "volume")]
    fn set_volume(&mut self, volume: f32);
}

/// Asynchronous reports from the player device
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    /// The loaded track played to its natural end
    Finished,

    /// The device failed while loading or playing
    Failed {
        /// Device-supplied description of the failure
        message: String,
    },
}
