//! Capture search.
//!
//! A run of pieces belonging to any player other than the mover is captured
//! when it lies between the placed piece and another of the mover's pieces.
//! A run that reaches an empty cell or the board edge is left alone.

use crate::board::Board;
use crate::types::{Cell, CellState, Direction, Player};
use tracing::instrument;

/// Cells that placing `player` at `position` would flip, across all six directions.
///
/// A single placement may capture in several directions at once, and a run
/// may mix pieces of both opponents.
#[instrument(level = "trace", skip(board))]
pub fn find_captures(board: &Board, position: Cell, player: Player) -> Vec<Cell> {
    Direction::ALL
        .into_iter()
        .flat_map(|direction| captures_in_direction(board, position, player, direction))
        .collect()
}

/// Cells flipped along one direction from `position`.
///
/// Empty when the walk hits an empty cell, leaves the board, or meets the
/// mover's own piece before any opponent.
pub fn captures_in_direction(
    board: &Board,
    position: Cell,
    player: Player,
    direction: Direction,
) -> Vec<Cell> {
    let mut run = Vec::new();
    let mut cursor = position.step(direction);

    loop {
        match board.get(cursor) {
            None | Some(CellState::Empty) => return Vec::new(),
            Some(CellState::Occupied(owner)) if owner == player => return run,
            Some(CellState::Occupied(_)) => {
                run.push(cursor);
                cursor = cursor.step(direction);
            }
        }
    }
}
