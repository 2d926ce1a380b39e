//! Queue store
//!
//! The ordered sequence of tracks plus the current-track index. Insertion
//! order is the canonical (non-shuffled) order; shuffle is a derived
//! permutation layered on top and never mutates this store.

use crate::error::{QueueError, Result};
use crate::track::{same_track, TrackHandle};
use crate::types::MissingAnchorPolicy;

/// Outcome of a removal, used by the controller to react to losing the
/// current track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Removal {
    pub position: usize,
    pub was_current: bool,
}

/// Ordered track sequence with an optional current index
///
/// Invariants:
/// - the current index, when present, is within `0..len`
/// - an empty queue never has a current index
#[derive(Debug, Clone)]
pub(crate) struct QueueStore {
    tracks: Vec<TrackHandle>,
    current: Option<usize>,
}

impl QueueStore {
    /// Create a store from an initial ordered track list, unanchored
    pub fn new(tracks: Vec<TrackHandle>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[TrackHandle] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&TrackHandle> {
        self.tracks.get(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Anchor or clear the current index
    pub fn set_current(&mut self, index: Option<usize>) {
        debug_assert!(index.map_or(true, |i| i < self.tracks.len()));
        self.current = index;
    }

    /// Position of the first occurrence of `track`, by identity
    pub fn position_of(&self, track: &TrackHandle) -> Option<usize> {
        self.tracks.iter().position(|t| same_track(t, track))
    }

    /// Insert `new_track` immediately after the first occurrence of `anchor`
    ///
    /// An insertion at or before the current index shifts it by +1 so it
    /// keeps pointing at the same track. Returns the insertion position.
    pub fn insert_after(
        &mut self,
        new_track: TrackHandle,
        anchor: &TrackHandle,
        policy: MissingAnchorPolicy,
    ) -> Result<usize> {
        let at = match self.position_of(anchor) {
            Some(pos) => pos + 1,
            None => match policy {
                MissingAnchorPolicy::Reject => {
                    return Err(QueueError::TrackNotFound(anchor.id().to_string()));
                }
                MissingAnchorPolicy::Append => self.tracks.len(),
            },
        };

        self.tracks.insert(at, new_track);

        if let Some(current) = self.current {
            if at <= current {
                self.current = Some(current + 1);
            }
        }

        Ok(at)
    }

    /// Remove the first occurrence of `track`
    ///
    /// Removing the current track clears the current index; playback must
    /// be re-anchored by a subsequent navigation command. Removing a track
    /// before the current index shifts it by -1.
    pub fn remove(&mut self, track: &TrackHandle) -> Option<Removal> {
        let position = self.position_of(track)?;
        self.tracks.remove(position);

        let mut was_current = false;
        if let Some(current) = self.current {
            if position == current {
                self.current = None;
                was_current = true;
            } else if position < current {
                self.current = Some(current - 1);
            }
        }

        Some(Removal {
            position,
            was_current,
        })
    }

    /// Clear the queue and the current index
    pub fn remove_all(&mut self) {
        self.tracks.clear();
        self.current = None;
    }
}
