//! Queue controller - core orchestration
//!
//! Responds to user commands (play/pause/next/previous/seek) and to player
//! completion events, decides the new current index from the queue store,
//! the shuffle order and the repeat policy, and issues commands to the
//! abstract player.

use crate::error::{QueueError, Result};
use crate::events::{Observer, QueueEvent};
use crate::player::{Player, PlayerEvent};
use crate::repeat::{self, Resolution, Trigger};
use crate::shuffle::ShuffleOrder;
use crate::store::QueueStore;
use crate::track::TrackHandle;
use crate::types::{MissingAnchorPolicy, PlaybackState, QueueConfig, RepeatMode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Direction of a track transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Next,
    Previous,
}

/// Playback-queue controller
///
/// Owns the ordered track queue and the current-track index, and drives an
/// abstract [`Player`] through track transitions. Transition notifications
/// are delivered synchronously to registered observers before the player is
/// commanded, carrying the old and new track identity.
///
/// # Concurrency
///
/// The controller is a single-owner state machine: all commands and queries
/// must be invoked from one serialization context (an event loop or a
/// dedicated controller thread). The player's asynchronous callbacks must
/// be marshaled onto that same context before being fed to
/// [`handle_player_event`](Self::handle_player_event); a completion event
/// arriving after a newer transition superseded it is discarded.
pub struct QueueController {
    store: QueueStore,
    shuffle_order: ShuffleOrder,
    shuffle: bool,
    repeat: RepeatMode,
    state: PlaybackState,
    seek_step: Duration,
    missing_anchor: MissingAnchorPolicy,
    player: Box<dyn Player>,
    observers: Vec<Observer>,
}

impl QueueController {
    /// Create a controller over an initial track list, unanchored
    pub fn new(tracks: Vec<TrackHandle>, player: Box<dyn Player>) -> Self {
        Self::with_config(tracks, player, QueueConfig::default())
    }

    /// Create a controller with explicit configuration
    pub fn with_config(
        tracks: Vec<TrackHandle>,
        player: Box<dyn Player>,
        config: QueueConfig,
    ) -> Self {
        let mut store = QueueStore::new(tracks);
        let mut shuffle_order = ShuffleOrder::new();
        if config.shuffle {
            shuffle_order.regenerate(store.len());
        }
        if config.anchor_on_init && !store.is_empty() {
            store.set_current(Some(0));
        }

        Self {
            store,
            shuffle_order,
            shuffle: config.shuffle,
            repeat: config.repeat,
            state: PlaybackState::Idle,
            seek_step: config.seek_step,
            missing_anchor: config.missing_anchor,
            player,
            observers: Vec::new(),
        }
    }

    /// Register an observer for controller notifications
    pub fn observe(&mut self, observer: impl FnMut(&QueueEvent) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    // ===== Queueing =====

    /// The queue in canonical (non-shuffled) order
    pub fn tracks(&self) -> &[TrackHandle] {
        self.store.tracks()
    }

    /// Insert `new_track` immediately after the first occurrence of `anchor`
    ///
    /// With the default `MissingAnchorPolicy::Reject` an absent anchor fails
    /// with `TrackNotFound`; under `Append` the track goes to the end.
    pub fn insert_after(&mut self, new_track: TrackHandle, anchor: &TrackHandle) -> Result<()> {
        let at = self
            .store
            .insert_after(new_track, anchor, self.missing_anchor)?;
        self.resync_shuffle();
        debug!(at, len = self.store.len(), "inserted track");
        Ok(())
    }

    /// Remove the first occurrence of `track`; a no-op if absent
    ///
    /// Removing the current track clears the current index and stops the
    /// player; playback must be re-anchored by a navigation command.
    pub fn remove(&mut self, track: &TrackHandle) -> Result<()> {
        let Some(removal) = self.store.remove(track) else {
            return Ok(());
        };
        self.resync_shuffle();
        debug!(
            position = removal.position,
            was_current = removal.was_current,
            "removed track"
        );

        if removal.was_current && self.state != PlaybackState::Idle {
            self.player.pause()?;
            self.set_state(PlaybackState::Idle);
        }
        Ok(())
    }

    /// Clear the queue and stop any active playback
    pub fn remove_all_tracks(&mut self) -> Result<()> {
        self.store.remove_all();
        self.resync_shuffle();

        if self.state != PlaybackState::Idle {
            self.player.pause()?;
            self.set_state(PlaybackState::Idle);
        }
        Ok(())
    }

    // ===== Projections =====

    /// The track at the current index, if anchored
    pub fn current_track(&self) -> Option<TrackHandle> {
        self.store
            .current_index()
            .and_then(|i| self.store.get(i).cloned())
    }

    /// Index of the current track in canonical queue order
    pub fn index_of_current_track(&self) -> Option<usize> {
        self.store.current_index()
    }

    /// Preview of what `next()` would select, without mutating state
    ///
    /// Absent when the repeat policy would yield no more tracks.
    pub fn next_track(&self) -> Option<TrackHandle> {
        self.preview(Direction::Next)
    }

    /// Preview of what `previous()` would select, without mutating state
    pub fn previous_track(&self) -> Option<TrackHandle> {
        self.preview(Direction::Previous)
    }

    /// Whether the player reports active playback
    pub fn playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Engine state of the transition machine
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Playback position within the current track
    pub fn playback_time(&self) -> Duration {
        if self.store.current_index().is_some() {
            self.player.position()
        } else {
            Duration::ZERO
        }
    }

    /// The player capability this controller commands
    pub fn current_player(&self) -> &dyn Player {
        self.player.as_ref()
    }

    // ===== Shuffle & Repeat =====

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Toggle shuffle
    ///
    /// Never changes the current index, only the computed next/previous
    /// targets. Freshly enabling shuffle draws a new permutation.
    pub fn set_shuffle(&mut self, enabled: bool) {
        if self.shuffle == enabled {
            return;
        }
        self.shuffle = enabled;
        if enabled {
            self.shuffle_order.regenerate(self.store.len());
        }
        debug!(enabled, "shuffle toggled");
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    // ===== Volume (desktop-only surface) =====

    /// Player output volume in `[0.0, 1.0]`
    #[cfg(feature = "volume")]
    pub fn volume(&self) -> f32 {
        self.player.volume()
    }

    #[cfg(feature = "volume")]
    pub fn set_volume(&mut self, volume: f32) {
        self.player.set_volume(volume.clamp(0.0, 1.0));
    }

    // ===== Playback control =====

    /// Start or resume playback
    ///
    /// A no-op when already playing or when the queue is empty. On an
    /// unanchored non-empty queue the current index is first anchored to
    /// the head of the active order (shuffle-aware).
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Loaded | PlaybackState::Paused => match self.player.play() {
                Ok(()) => {
                    self.set_state(PlaybackState::Playing);
                    Ok(())
                }
                Err(e) => {
                    self.surface_failure(&e);
                    Err(e)
                }
            },
            PlaybackState::Idle => match self.store.current_index() {
                Some(index) => self.start_track(index, None),
                None => match self.index_at_pos(0) {
                    Some(index) => self.start_track(index, None),
                    None => Ok(()),
                },
            },
        }
    }

    /// Pause playback; a no-op unless playing
    pub fn pause(&mut self) -> Result<()> {
        if self.state == PlaybackState::Playing {
            self.player.pause()?;
            self.set_state(PlaybackState::Paused);
        }
        Ok(())
    }

    /// Toggle between play and pause based on the reported player state
    pub fn play_pause(&mut self) -> Result<()> {
        if self.player.is_playing() {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Skip to the next track in the active order
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        self.transit(Direction::Next, Trigger::UserCommand)
    }

    /// Go back to the previous track in the active order
    pub fn previous(&mut self) -> Result<()> {
        self.transit(Direction::Previous, Trigger::UserCommand)
    }

    /// Feed a marshaled player event into the state machine
    ///
    /// Natural completion acts as an implicit `next()`, except under
    /// `RepeatMode::One` where the same track is reloaded and restarted.
    pub fn handle_player_event(&mut self, event: PlayerEvent) -> Result<()> {
        match event {
            PlayerEvent::Finished => {
                if self.state != PlaybackState::Playing {
                    debug!("discarding stale completion event");
                    return Ok(());
                }
                self.transit(Direction::Next, Trigger::TrackCompleted)
            }
            PlayerEvent::Failed { message } => {
                warn!(%message, "player reported failure");
                self.notify(&QueueEvent::PlaybackFailed {
                    message: message.clone(),
                });
                if self.state == PlaybackState::Playing {
                    self.set_state(PlaybackState::Paused);
                }
                Err(QueueError::PlayerCommand(message))
            }
        }
    }

    // ===== Seek =====

    /// Seek to a time within the current track, clamped to `[0, duration]`
    ///
    /// A no-op when nothing is anchored.
    pub fn seek_to(&mut self, time: Duration) -> Result<()> {
        let Some(track) = self.current_track() else {
            return Ok(());
        };
        self.player.seek(time.min(track.duration()))
    }

    /// Seek forward by the configured increment
    pub fn seek_forward(&mut self) -> Result<()> {
        if self.store.current_index().is_none() {
            return Ok(());
        }
        let target = self.player.position().saturating_add(self.seek_step);
        self.seek_to(target)
    }

    /// Seek backward by the configured increment
    pub fn seek_backward(&mut self) -> Result<()> {
        if self.store.current_index().is_none() {
            return Ok(());
        }
        let target = self.player.position().saturating_sub(self.seek_step);
        self.seek_to(target)
    }

    // ===== Internal =====

    /// Queue index stored at traversal position `pos` of the active order
    fn index_at_pos(&self, pos: usize) -> Option<usize> {
        if self.shuffle {
            self.shuffle_order.index_at(pos)
        } else if pos < self.store.len() {
            Some(pos)
        } else {
            None
        }
    }

    /// Traversal position of queue index `index` in the active order
    fn order_position(&self, index: usize) -> Option<usize> {
        if self.shuffle {
            self.shuffle_order.position_of(index)
        } else {
            Some(index)
        }
    }

    /// Regenerate the shuffle permutation after a structural queue change
    fn resync_shuffle(&mut self) {
        if self.shuffle && self.shuffle_order.len() != self.store.len() {
            self.shuffle_order.regenerate(self.store.len());
        }
    }

    fn transit(&mut self, direction: Direction, trigger: Trigger) -> Result<()> {
        if self.store.is_empty() {
            return Ok(());
        }
        let len = self.store.len();

        let Some(current) = self.store.current_index() else {
            // Unanchored: start from the head of the active order
            if let Some(target) = self.index_at_pos(0) {
                return self.start_track(target, Some(direction));
            }
            return Ok(());
        };
        let Some(pos) = self.order_position(current) else {
            return Ok(());
        };

        let resolution = match direction {
            Direction::Next => repeat::resolve_next(len, pos, self.repeat, trigger),
            Direction::Previous => repeat::resolve_previous(len, pos, self.repeat, trigger),
        };

        match resolution {
            Resolution::Advance(next_pos) => match self.index_at_pos(next_pos) {
                Some(target) => self.start_track(target, Some(direction)),
                None => Ok(()),
            },
            Resolution::Replay => self.replay_current(current),
            Resolution::NoMoreTracks => self.settle_at_boundary(trigger),
        }
    }

    /// Commit a transition: notify observers, load, then play
    ///
    /// The current index moves only after the player acknowledges the load,
    /// so a failed load leaves it at its pre-transition value.
    fn start_track(&mut self, index: usize, transition: Option<Direction>) -> Result<()> {
        let Some(to) = self.store.get(index).cloned() else {
            return Ok(());
        };

        if let Some(direction) = transition {
            let from = self
                .store
                .current_index()
                .and_then(|i| self.store.get(i).cloned());
            let event = match direction {
                Direction::Next => QueueEvent::TransitToNext {
                    from,
                    to: Arc::clone(&to),
                },
                Direction::Previous => QueueEvent::TransitToPrevious {
                    from,
                    to: Arc::clone(&to),
                },
            };
            self.notify(&event);
        }

        if let Err(e) = self.player.load(&to) {
            warn!(track = to.id(), error = %e, "load failed; transition not committed");
            self.surface_failure(&e);
            return Err(e);
        }

        self.store.set_current(Some(index));
        self.set_state(PlaybackState::Loaded);

        match self.player.play() {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                debug!(index, track = to.id(), "transitioned to track");
                Ok(())
            }
            Err(e) => {
                self.surface_failure(&e);
                Err(e)
            }
        }
    }

    /// Reload and restart the current track (`RepeatMode::One` completion)
    fn replay_current(&mut self, index: usize) -> Result<()> {
        let Some(track) = self.store.get(index).cloned() else {
            return Ok(());
        };
        debug!(index, track = track.id(), "replaying current track");

        if let Err(e) = self.player.load(&track) {
            self.surface_failure(&e);
            return Err(e);
        }
        match self.player.play() {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            Err(e) => {
                self.surface_failure(&e);
                Err(e)
            }
        }
    }

    /// Settle at a sequence boundary under `RepeatMode::None`
    ///
    /// The current index never moves past the boundary and no new track is
    /// loaded. A user-initiated skip during playback pauses; a natural
    /// completion means the player already stopped on its own.
    fn settle_at_boundary(&mut self, trigger: Trigger) -> Result<()> {
        debug!("queue boundary; no more tracks");
        match trigger {
            Trigger::TrackCompleted => {
                self.set_state(PlaybackState::Paused);
                Ok(())
            }
            Trigger::UserCommand => {
                if self.state == PlaybackState::Playing {
                    self.player.pause()?;
                    self.set_state(PlaybackState::Paused);
                }
                Ok(())
            }
        }
    }

    fn preview(&self, direction: Direction) -> Option<TrackHandle> {
        if self.store.is_empty() {
            return None;
        }
        let len = self.store.len();

        let index = match self.store.current_index() {
            None => self.index_at_pos(0)?,
            Some(current) => {
                let pos = self.order_position(current)?;
                let resolution = match direction {
                    Direction::Next => {
                        repeat::resolve_next(len, pos, self.repeat, Trigger::UserCommand)
                    }
                    Direction::Previous => {
                        repeat::resolve_previous(len, pos, self.repeat, Trigger::UserCommand)
                    }
                };
                match resolution {
                    Resolution::Advance(p) => self.index_at_pos(p)?,
                    Resolution::Replay => current,
                    Resolution::NoMoreTracks => return None,
                }
            }
        };
        self.store.get(index).cloned()
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.notify(&QueueEvent::StateChanged { state });
        }
    }

    fn surface_failure(&mut self, err: &QueueError) {
        self.notify(&QueueEvent::PlaybackFailed {
            message: err.to_string(),
        });
    }

    fn notify(&mut self, event: &QueueEvent) {
        for observer in &mut self.observers {
            observer(event);
        }
    }
}
