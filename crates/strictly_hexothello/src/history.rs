//! Move history for undo.
//!
//! Snapshot 0 is the opening position; snapshot `n` is the state after the
//! `n`th accepted move. Undo drops the latest snapshot and there is no redo.

use crate::error::{GameError, GameErrorKind};
use crate::game::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A deep copy of the game state at one step.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Step number, 0 for the opening.
    step: usize,
    /// State at that step.
    state: GameState,
}

/// Ordered snapshots, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Starts a history at the opening position.
    #[instrument(skip(initial))]
    pub fn new(initial: &GameState) -> Self {
        Self {
            snapshots: vec![Snapshot {
                step: 0,
                state: initial.clone(),
            }],
        }
    }

    /// Current step number.
    pub fn step(&self) -> usize {
        self.snapshots.len().saturating_sub(1)
    }

    /// The most recent snapshot.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Appends a snapshot of `state` and returns its step number.
    #[instrument(skip(self, state))]
    pub fn record(&mut self, state: &GameState) -> usize {
        let step = self.snapshots.len();
        self.snapshots.push(Snapshot {
            step,
            state: state.clone(),
        });
        debug!(step, "Recorded snapshot");
        step
    }

    /// Discards the latest snapshot and returns the state now current.
    ///
    /// # Errors
    ///
    /// Returns `AtInitialState` if only the opening snapshot remains.
    #[instrument(skip(self), fields(step = self.step()))]
    pub fn undo(&mut self) -> Result<&GameState, GameError> {
        if self.snapshots.len() <= 1 {
            return Err(GameError::new(GameErrorKind::AtInitialState));
        }
        self.snapshots.pop();
        self.snapshots
            .last()
            .map(|snapshot| &snapshot.state)
            .ok_or_else(|| GameError::new(GameErrorKind::AtInitialState))
    }
}
