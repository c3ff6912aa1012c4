//! First-class invariants for the game state.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked as move postconditions in debug builds and can be
//! tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod all_players_present;
pub mod counts_match_board;

pub use all_players_present::AllPlayersPresentInvariant;
pub use counts_match_board::CountsMatchBoardInvariant;

/// All game-state invariants as a composable set.
pub type HexOthelloInvariants = (CountsMatchBoardInvariant, AllPlayersPresentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::new_game;
    use crate::scores::PieceCounts;
    use crate::types::{Cell, CellState};

    #[test]
    fn test_invariant_set_holds_for_opening() {
        let game = new_game(3, false).expect("standard game");
        assert!(HexOthelloInvariants::check_all(game.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut game = new_game(3, false).expect("standard game");
        for _ in 0..6 {
            let Some(cell) = game.legal_moves().into_iter().next() else {
                break;
            };
            game.apply_move(cell).expect("legal move");
            assert!(HexOthelloInvariants::check_all(game.state()).is_ok());
        }
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let game = new_game(3, false).expect("standard game");

        let mut state = game.state().clone();
        state.board.set(Cell::new(0, 0), CellState::Empty);
        let violations = HexOthelloInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);

        state.counts = PieceCounts::default();
        let violations = HexOthelloInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
