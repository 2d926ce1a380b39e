//! Core types for the queue controller

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop at the boundaries of the queue
    None,

    /// Wrap around circularly
    All,

    /// Replay the current track on natural completion
    One,
}

/// Engine state of the transition machine
///
/// `playing` as reported to callers is derived from the player capability;
/// this state exists so the engine knows whether a track is loaded and
/// whether a play command should resume or load first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No track loaded on the player
    Idle,

    /// Track set on the player, playback not started
    Loaded,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Policy for `insert_after` when the anchor track is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingAnchorPolicy {
    /// Fail with `TrackNotFound`
    Reject,

    /// Append the new track at the end of the queue
    Append,
}

/// Configuration for the queue controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Anchor the current index at position 0 on construction (default: false)
    pub anchor_on_init: bool,

    /// What `insert_after` does when the anchor is absent (default: Reject)
    pub missing_anchor: MissingAnchorPolicy,

    /// Increment applied by `seek_forward`/`seek_backward` (default: 10 s)
    pub seek_step: Duration,

    /// Initial repeat mode (default: None)
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            anchor_on_init: false,
            missing_anchor: MissingAnchorPolicy::Reject,
            seek_step: Duration::from_secs(10),
            repeat: RepeatMode::None,
            shuffle: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QueueConfig::default();
        assert!(!config.anchor_on_init);
        assert_eq!(config.missing_anchor, MissingAnchorPolicy::Reject);
        assert_eq!(config.seek_step, Duration::from_secs(10));
        assert_eq!(config.repeat, RepeatMode::None);
        assert!(!config.shuffle);
    }
}
