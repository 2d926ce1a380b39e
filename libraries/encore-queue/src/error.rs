//! Error types for the queue controller

use thiserror::Error;

/// Queue controller errors
///
/// Boundary outcomes under `RepeatMode::None` are not errors; they are
/// reported through the resolution types, not through this enum. Seek
/// targets outside the current track are clamped, never raised.
#[derive(Debug, Error)]
pub enum QueueError {
    /// A referenced track is not in the queue (e.g. insertion anchor)
    #[error("track not found in queue: {0}")]
    TrackNotFound(String),

    /// The player capability rejected or failed a command
    #[error("player command failed: {0}")]
    PlayerCommand(String),
}

/// Result type for queue controller operations
pub type Result<T> = std::result::Result<T, QueueError>;
