//! Property-based tests for the queue controller
//!
//! Uses proptest to verify structural invariants across many random inputs.

use encore_queue::{
    Player, QueueConfig, QueueController, RepeatMode, Result as QueueResult, Track, TrackHandle,
};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

// ===== Helpers =====

#[derive(Debug)]
struct PropTrack {
    id: String,
    duration: Duration,
}

impl Track for PropTrack {
    fn id(&self) -> &str {
        &self.id
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}

/// Always-succeeding player that only models its own playing flag
#[derive(Debug, Default)]
struct NullPlayer {
    playing: bool,
    position: Duration,
}

impl Player for NullPlayer {
    fn load(&mut self, _track: &TrackHandle) -> QueueResult<()> {
        self.playing = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) -> QueueResult<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> QueueResult<()> {
        self.playing = false;
        Ok(())
    }

    fn seek(&mut self, position: Duration) -> QueueResult<()> {
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    #[cfg(feature = "volume")]
    fn volume(&self) -> f32 {
        1.0
    }

    #[cfg(feature = "volume")]
    fn set_volume(&mut self, _volume: f32) {}
}

fn handle(id: String, duration_secs: u64) -> TrackHandle {
    Arc::new(PropTrack {
        id,
        duration: Duration::from_secs(duration_secs),
    })
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<TrackHandle>> {
    prop::collection::vec(("[a-z0-9]{1,10}", 1u64..600), 1..40)
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                // Suffix with the position so identities stay unique
                .map(|(i, (id, secs))| handle(format!("{id}-{i}"), secs))
                .collect()
        })
}

fn assert_index_valid(controller: &QueueController) -> Result<(), TestCaseError> {
    match controller.index_of_current_track() {
        Some(index) => {
            prop_assert!(
                index < controller.tracks().len(),
                "current index {} out of bounds for queue of {}",
                index,
                controller.tracks().len()
            );
            prop_assert!(controller.current_track().is_some());
        }
        None => prop_assert!(controller.current_track().is_none()),
    }
    Ok(())
}

// ===== Property Tests =====

proptest! {
    /// Property: the current index stays valid under random operation mixes
    #[test]
    fn current_index_stays_valid(
        tracks in arbitrary_tracks(),
        operations in prop::collection::vec(0u8..8, 1..40)
    ) {
        let mut controller =
            QueueController::new(tracks.clone(), Box::new(NullPlayer::default()));

        for op in operations {
            match op {
                0 => controller.play().unwrap(),
                1 => controller.pause().unwrap(),
                2 => controller.next().unwrap(),
                3 => controller.previous().unwrap(),
                4 => {
                    if let Some(anchor) = controller.tracks().first().cloned() {
                        controller
                            .insert_after(handle("inserted".to_string(), 60), &anchor)
                            .unwrap();
                    }
                }
                5 => {
                    if let Some(victim) = controller.tracks().last().cloned() {
                        controller.remove(&victim).unwrap();
                    }
                }
                6 => controller.set_shuffle(!controller.shuffle()),
                _ => controller.set_repeat_mode(RepeatMode::All),
            }

            assert_index_valid(&controller)?;
        }
    }

    /// Property: under RepeatMode::All, |queue| skips return to the start
    /// and visit every track exactly once, shuffled or not
    #[test]
    fn repeat_all_cycle_closure(tracks in arbitrary_tracks(), shuffled in any::<bool>()) {
        let config = QueueConfig {
            repeat: RepeatMode::All,
            shuffle: shuffled,
            ..QueueConfig::default()
        };
        let mut controller =
            QueueController::with_config(tracks.clone(), Box::new(NullPlayer::default()), config);
        controller.play().unwrap();

        let start = controller.index_of_current_track();
        let mut visited = Vec::with_capacity(tracks.len());
        for _ in 0..tracks.len() {
            visited.push(controller.index_of_current_track());
            controller.next().unwrap();
        }

        prop_assert_eq!(controller.index_of_current_track(), start);

        let mut seen: Vec<usize> = visited.into_iter().flatten().collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..tracks.len()).collect();
        prop_assert_eq!(seen, expected);
    }

    /// Property: inserting a track and removing it restores the queue order
    #[test]
    fn insert_then_remove_restores_order(
        tracks in arbitrary_tracks(),
        anchor_pick in any::<prop::sample::Index>()
    ) {
        let mut controller =
            QueueController::new(tracks.clone(), Box::new(NullPlayer::default()));
        let before: Vec<String> = controller
            .tracks()
            .iter()
            .map(|t| t.id().to_string())
            .collect();

        let anchor = Arc::clone(&tracks[anchor_pick.index(tracks.len())]);
        let inserted = handle("inserted-x".to_string(), 30);
        controller.insert_after(Arc::clone(&inserted), &anchor).unwrap();
        prop_assert_eq!(controller.tracks().len(), before.len() + 1);

        controller.remove(&inserted).unwrap();
        let after: Vec<String> = controller
            .tracks()
            .iter()
            .map(|t| t.id().to_string())
            .collect();
        prop_assert_eq!(before, after);
    }

    /// Property: next_track() previews exactly what next() then selects
    #[test]
    fn next_preview_matches_transition(
        tracks in arbitrary_tracks(),
        shuffled in any::<bool>(),
        skips in 0usize..10
    ) {
        let config = QueueConfig {
            repeat: RepeatMode::All,
            shuffle: shuffled,
            ..QueueConfig::default()
        };
        let mut controller =
            QueueController::with_config(tracks, Box::new(NullPlayer::default()), config);
        controller.play().unwrap();

        for _ in 0..skips {
            let preview = controller.next_track().map(|t| t.id().to_string());
            controller.next().unwrap();
            let landed = controller.current_track().map(|t| t.id().to_string());
            prop_assert_eq!(preview, landed);
        }
    }

    /// Property: toggling shuffle never moves the current track
    #[test]
    fn shuffle_toggle_preserves_current(
        tracks in arbitrary_tracks(),
        toggles in prop::collection::vec(any::<bool>(), 1..10)
    ) {
        let mut controller =
            QueueController::new(tracks, Box::new(NullPlayer::default()));
        controller.play().unwrap();
        let current = controller.current_track().map(|t| t.id().to_string());

        for enabled in toggles {
            controller.set_shuffle(enabled);
            prop_assert_eq!(
                controller.current_track().map(|t| t.id().to_string()),
                current.clone()
            );
        }
    }
}
