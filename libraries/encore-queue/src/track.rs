//! Track capability
//!
//! Tracks are supplied by a collaborator (library, remote catalogue, ...)
//! and are opaque to the controller: all it needs is a stable identity and
//! a duration for seek clamping.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Opaque playable track
///
/// Identity comparison is by `id()`; two handles refer to the same track
/// exactly when their ids are equal. The queue permits duplicates of the
/// same track, distinguished by position.
pub trait Track: fmt::Debug + Send + Sync {
    /// Stable identifier for identity comparison
    fn id(&self) -> &str;

    /// Total track duration
    fn duration(&self) -> Duration;
}

/// Shared handle to a track supplied by a collaborator
pub type TrackHandle = Arc<dyn Track>;

/// Identity comparison between two handles
pub(crate) fn same_track(a: &TrackHandle, b: &TrackHandle) -> bool {
    a.id() == b.id()
}
