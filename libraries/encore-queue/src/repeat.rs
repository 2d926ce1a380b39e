//! Repeat policy
//!
//! Pure resolution of "what comes next/previous" from the repeat mode, the
//! position within the traversal order, and what triggered the transition.
//! The trigger is the single branch point where user commands and natural
//! completion differ: under `RepeatMode::One` a user-initiated skip still
//! advances, while completion replays the same track.

use crate::types::RepeatMode;

/// What caused a transition to be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Trigger {
    /// Explicit `next()`/`previous()` command
    UserCommand,

    /// The player reported natural completion of the current track
    TrackCompleted,
}

/// Resolution of a next/previous request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Move to this position in the traversal order
    Advance(usize),

    /// Restart the same track
    Replay,

    /// Sequence boundary; nothing further to play
    NoMoreTracks,
}

/// Resolve the position after `pos` in an order of `len` entries
pub(crate) fn resolve_next(
    len: usize,
    pos: usize,
    mode: RepeatMode,
    trigger: Trigger,
) -> Resolution {
    if len == 0 {
        return Resolution::NoMoreTracks;
    }

    match mode {
        RepeatMode::One if trigger == Trigger::TrackCompleted => Resolution::Replay,
        RepeatMode::None if pos + 1 >= len => Resolution::NoMoreTracks,
        RepeatMode::None => Resolution::Advance(pos + 1),
        RepeatMode::All | RepeatMode::One => Resolution::Advance((pos + 1) % len),
    }
}

/// Resolve the position before `pos`, mirroring [`resolve_next`]
pub(crate) fn resolve_previous(
    len: usize,
    pos: usize,
    mode: RepeatMode,
    trigger: Trigger,
) -> Resolution {
    if len == 0 {
        return Resolution::NoMoreTracks;
    }

    match mode {
        RepeatMode::One if trigger == Trigger::TrackCompleted => Resolution::Replay,
        RepeatMode::None if pos == 0 => Resolution::NoMoreTracks,
        RepeatMode::None => Resolution::Advance(pos - 1),
        RepeatMode::All | RepeatMode::One => Resolution::Advance((pos + len - 1) % len),
    }
}
