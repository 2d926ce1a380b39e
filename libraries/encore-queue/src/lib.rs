//! Encore - Playback-queue controller
//!
//! Platform-agnostic playback-queue management:
//! - Ordered track queue with a current-track index
//! - Insertion/removal that preserves the notion of "current"
//! - Shuffle as a derived, regenerable permutation of queue positions
//! - Repeat modes (None, All, One) with distinct user-skip vs.
//!   natural-completion semantics
//! - A transition state machine that commands an abstract player and
//!   notifies observers before each track switch
//!
//! The concrete playback backend is supplied by the embedder through the
//! [`Player`] trait; tracks are opaque [`Track`] handles supplied by a
//! collaborator. The controller performs no decoding, no I/O and no
//! persistence.
//!
//! # Example
//!
//! ```rust,no_run
//! use encore_queue::{Player, QueueController, RepeatMode, TrackHandle};
//!
//! # fn collaborator_tracks() -> Vec<TrackHandle> { Vec::new() }
//! # fn platform_player() -> Box<dyn Player> { unimplemented!() }
//! let tracks = collaborator_tracks();
//! let mut controller = QueueController::new(tracks, platform_player());
//!
//! controller.set_repeat_mode(RepeatMode::All);
//! controller.set_shuffle(true);
//!
//! controller.observe(|event| println!("{event:?}"));
//! controller.play().ok();
//! controller.next().ok();
//! ```

mod controller;
mod error;
mod events;
mod player;
mod repeat;
mod shuffle;
mod store;
mod track;
mod types;

// Public exports
pub use controller::QueueController;
pub use error::{QueueError, Result};
pub use events::{Observer, QueueEvent};
pub use player::{Player, PlayerEvent};
pub use track::{Track, TrackHandle};
pub use types::{MissingAnchorPolicy, PlaybackState, QueueConfig, RepeatMode};
