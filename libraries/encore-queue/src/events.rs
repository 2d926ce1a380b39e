//! Controller notifications
//!
//! Transition events are delivered synchronously to registered observers
//! before the player command for the new track is issued, so observers can
//! react to the impending switch (scrobbling, UI, pre-fetch).

use crate::track::TrackHandle;
use crate::types::PlaybackState;

/// Notifications emitted by the queue controller
#[derive(Debug, Clone)]
pub enum QueueEvent {
    /// Transition to the track after the current one
    ///
    /// `from` is absent when the queue was previously unanchored.
    TransitToNext {
        from: Option<TrackHandle>,
        to: TrackHandle,
    },

    /// Transition to the track before the current one
    TransitToPrevious {
        from: Option<TrackHandle>,
        to: TrackHandle,
    },

    /// Engine state changed
    StateChanged { state: PlaybackState },

    /// A player command failed, or the player reported an asynchronous error
    PlaybackFailed { message: String },
}

/// Registered observer callback
pub type Observer = Box<dyn FnMut(&QueueEvent) + Send>;
