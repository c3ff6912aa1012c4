//! Per-player piece counts.

use crate::board::Board;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Pieces on the board per player, indexed in turn order.
///
/// Kept in step with the board by the game engine; the sum always equals the
/// number of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieceCounts(pub(crate) [usize; Player::COUNT]);

impl PieceCounts {
    /// Counts the pieces currently on `board`.
    pub fn from_board(board: &Board) -> Self {
        Self(Player::ALL.map(|player| board.count(player)))
    }

    /// Pieces owned by `player`.
    pub fn get(&self, player: Player) -> usize {
        self.0[player.index()]
    }

    /// Total pieces on the board.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// `(player, count)` pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, usize)> + '_ {
        Player::ALL.into_iter().map(|player| (player, self.get(player)))
    }

    /// First player (in turn order) with no pieces.
    pub fn missing_player(&self) -> Option<Player> {
        self.iter().find(|(_, count)| *count == 0).map(|(player, _)| player)
    }

    /// Counts after `player` places one piece and flips `captured`.
    ///
    /// Each captured cell is charged to its owner on `board`, which must be the
    /// board as it stands before the move.
    pub fn after_move(&self, board: &Board, player: Player, captured: &[Cell]) -> Self {
        let mut next = *self;
        next.0[player.index()] += 1 + captured.len();
        for owner in captured.iter().filter_map(|cell| board.owner(*cell)) {
            let slot = &mut next.0[owner.index()];
            *slot = slot.saturating_sub(1);
        }
        next
    }

    /// Highest score. Ties go to the player earliest in turn order.
    pub fn winner(&self) -> Option<Player> {
        self.leaders().first().copied()
    }

    /// Every player sharing the highest score, in turn order.
    ///
    /// Empty when nobody has a piece.
    pub fn leaders(&self) -> Vec<Player> {
        let best = self.0.iter().copied().max().unwrap_or(0);
        if best == 0 {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, count)| *count == best)
            .map(|(player, _)| player)
            .collect()
    }
}

impl std::fmt::Display for PieceCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(player, count)| format!("{player}: {count}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
