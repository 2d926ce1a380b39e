//! Shuffle order
//!
//! A derived permutation of queue positions used for navigation while
//! shuffle is enabled. The underlying queue order is never mutated; the
//! permutation is regenerated whenever the queue changes size or shuffle
//! is freshly enabled. Correctness (bijection over `0..len`) is the only
//! hard guarantee; ordering across regenerations is random.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Regenerable permutation of `0..len`
#[derive(Debug, Clone, Default)]
pub(crate) struct ShuffleOrder {
    order: Vec<usize>,
}

impl ShuffleOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the permutation with a fresh uniform shuffle of `0..len`
    ///
    /// Degenerate lengths (0 or 1) yield the identity.
    pub fn regenerate(&mut self, len: usize) {
        self.order = (0..len).collect();
        if len > 1 {
            self.order.shuffle(&mut thread_rng());
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Queue index stored at traversal position `pos`
    pub fn index_at(&self, pos: usize) -> Option<usize> {
        self.order.get(pos).copied()
    }

    /// Traversal position of queue index `index`
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == index)
    }
}
