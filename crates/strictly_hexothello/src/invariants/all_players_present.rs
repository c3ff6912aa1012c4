//! No player is ever wiped off the board.

use super::Invariant;
use crate::game::GameState;

/// Invariant: every player has at least one piece.
pub struct AllPlayersPresentInvariant;

impl Invariant<GameState> for AllPlayersPresentInvariant {
    fn holds(state: &GameState) -> bool {
        state.counts().missing_player().is_none()
    }

    fn description() -> &'static str {
        "Every player keeps at least one piece"
    }
}
