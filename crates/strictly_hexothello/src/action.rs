//! First-class move types.
//!
//! A [`Move`] is the intent (who places where). A [`MoveReport`] is what
//! actually happened once the engine accepted it.

use crate::types::{Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing a piece on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the new piece.
    pub position: Cell,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Cell) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// The move that was applied.
    action: Move,
    /// Cells flipped to the mover.
    captured: Vec<Cell>,
    /// Players passed over because they had no legal move, in order.
    skipped: Vec<Player>,
    /// Player whose turn it is now.
    next_player: Player,
    /// History step recorded for this move, when history is enabled.
    step: Option<usize>,
}

impl MoveReport {
    pub(crate) fn new(
        action: Move,
        captured: Vec<Cell>,
        skipped: Vec<Player>,
        next_player: Player,
        step: Option<usize>,
    ) -> Self {
        Self {
            action,
            captured,
            skipped,
            next_player,
            step,
        }
    }
}
