//! Piece counts agree with the board.

use super::Invariant;
use crate::game::GameState;
use crate::scores::PieceCounts;

/// Invariant: every player's count equals the cells they occupy.
///
/// Implies the counts sum to the number of occupied cells.
pub struct CountsMatchBoardInvariant;

impl Invariant<GameState> for CountsMatchBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let recount = PieceCounts::from_board(state.board());
        *state.counts() == recount && recount.total() == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Piece counts match the pieces on the board"
    }
}
