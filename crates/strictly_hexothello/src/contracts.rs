//! Contract-based move validation.
//!
//! A placement is legal when the cell is on the board and empty, it flanks at
//! least one opposing run, and the resulting piece counts leave all three
//! players on the board. Each rule is its own precondition; [`LegalMove`]
//! composes them in that order.

use crate::action::Move;
use crate::board::Board;
use crate::capture::find_captures;
use crate::error::{GameError, GameErrorKind, MoveRejection};
use crate::game::GameState;
use crate::invariants::{HexOthelloInvariants, InvariantSet};
use crate::scores::PieceCounts;
use crate::types::{Cell, CellState, Player};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What the precondition established, handed on to the transition.
    type Evidence;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Evidence, MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell belongs to the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects cells outside the board domain.
    pub fn check(board: &Board, position: Cell) -> Result<(), MoveRejection> {
        if board.contains(position) {
            Ok(())
        } else {
            Err(MoveRejection::OffBoard(position))
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects cells that already hold a piece.
    pub fn check(board: &Board, position: Cell) -> Result<(), MoveRejection> {
        match board.get(position) {
            Some(CellState::Occupied(owner)) => Err(MoveRejection::Occupied {
                cell: position,
                owner,
            }),
            _ => Ok(()),
        }
    }
}

/// Precondition: the placement flanks at least one opposing run.
pub struct CapturesPieces;

impl CapturesPieces {
    /// Returns the cells the placement would flip.
    pub fn check(board: &Board, position: Cell, player: Player) -> Result<Vec<Cell>, MoveRejection> {
        let captured = find_captures(board, position, player);
        if captured.is_empty() {
            Err(MoveRejection::NoCaptures(position))
        } else {
            Ok(captured)
        }
    }
}

/// Precondition: nobody is left without pieces after the move.
///
/// Judged on the piece counts after the move, so pieces elsewhere on the
/// board keep a player alive even when this capture takes some of theirs.
pub struct NoPlayerEliminated;

impl NoPlayerEliminated {
    /// Rejects captures that would take a player's last piece.
    pub fn check(
        board: &Board,
        counts: &PieceCounts,
        position: Cell,
        player: Player,
        captured: &[Cell],
    ) -> Result<(), MoveRejection> {
        match counts.after_move(board, player, captured).missing_player() {
            Some(eliminated) => Err(MoveRejection::WouldEliminate {
                cell: position,
                player: eliminated,
            }),
            None => Ok(()),
        }
    }
}

/// Composite precondition: all placement rules, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates a placement and returns the cells it captures.
    #[instrument(level = "trace", skip(board, counts))]
    pub fn check(
        board: &Board,
        counts: &PieceCounts,
        position: Cell,
        player: Player,
    ) -> Result<Vec<Cell>, MoveRejection> {
        CellOnBoard::check(board, position)?;
        CellIsEmpty::check(board, position)?;
        let captured = CapturesPieces::check(board, position, player)?;
        NoPlayerEliminated::check(board, counts, position, player, &captured)?;
        Ok(captured)
    }
}

/// Validates a placement and returns the cells it captures.
pub fn check_move(
    board: &Board,
    counts: &PieceCounts,
    position: Cell,
    player: Player,
) -> Result<Vec<Cell>, MoveRejection> {
    LegalMove::check(board, counts, position, player)
}

/// Checks whether `player` may place at `position`.
pub fn is_legal(board: &Board, counts: &PieceCounts, position: Cell, player: Player) -> bool {
    check_move(board, counts, position, player).is_ok()
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - It is the mover's turn
/// - [`LegalMove`] holds
///
/// Postconditions:
/// - Exactly one piece was added to the board
/// - [`HexOthelloInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    type Evidence = Vec<Cell>;

    fn pre(state: &GameState, action: &Move) -> Result<Vec<Cell>, MoveRejection> {
        if action.player != state.to_move() {
            return Err(MoveRejection::WrongPlayer(action.player));
        }
        LegalMove::check(state.board(), state.counts(), action.position, action.player)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        let added = after.board().occupied_count() as isize - before.board().occupied_count() as isize;
        if added != 1 {
            warn!(added, "Placement did not add exactly one piece");
            return Err(GameError::new(GameErrorKind::InvariantViolation(format!(
                "expected exactly one new piece, found {added}"
            ))));
        }

        HexOthelloInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::new(GameErrorKind::InvariantViolation(descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSetup;

    fn layout(pieces: &[((i32, i32), Player)]) -> (Board, PieceCounts) {
        let setup = pieces
            .iter()
            .try_fold(GameSetup::new(2), |setup, &(cell, player)| setup.place(cell.into(), player))
            .expect("layout fits");
        let board = setup.board().clone();
        let counts = PieceCounts::from_board(&board);
        (board, counts)
    }

    #[test]
    fn test_off_board_rejected() {
        let (board, counts) = layout(&[((0, 0), Player::Black)]);
        assert_eq!(
            check_move(&board, &counts, Cell::new(9, 9), Player::Black),
            Err(MoveRejection::OffBoard(Cell::new(9, 9)))
        );
    }

    #[test]
    fn test_occupied_rejected() {
        let (board, counts) = layout(&[((0, 0), Player::Red)]);
        assert_eq!(
            check_move(&board, &counts, Cell::new(0, 0), Player::Black),
            Err(MoveRejection::Occupied {
                cell: Cell::new(0, 0),
                owner: Player::Red
            })
        );
    }

    #[test]
    fn test_non_capturing_placement_rejected() {
        let (board, counts) = layout(&[((0, 0), Player::Black), ((1, 0), Player::White)]);
        assert_eq!(
            check_move(&board, &counts, Cell::new(-1, 1), Player::Black),
            Err(MoveRejection::NoCaptures(Cell::new(-1, 1)))
        );
    }

    #[test]
    fn test_elimination_guard_overrides_capture() {
        // White's only piece sits between Black's piece and the target.
        let (board, counts) = layout(&[
            ((0, 0), Player::Black),
            ((1, 0), Player::White),
            ((-2, 2), Player::Red),
        ]);
        let target = Cell::new(2, 0);

        assert_eq!(find_captures(&board, target, Player::Black), vec![Cell::new(1, 0)]);
        assert!(!is_legal(&board, &counts, target, Player::Black));
        assert_eq!(
            check_move(&board, &counts, target, Player::Black),
            Err(MoveRejection::WouldEliminate {
                cell: target,
                player: Player::White
            })
        );
    }

    #[test]
    fn test_guard_allows_capture_when_player_keeps_other_pieces() {
        let (board, counts) = layout(&[
            ((0, 0), Player::Black),
            ((1, 0), Player::White),
            ((0, -2), Player::White),
            ((-2, 2), Player::Red),
        ]);
        assert_eq!(
            check_move(&board, &counts, Cell::new(2, 0), Player::Black),
            Ok(vec![Cell::new(1, 0)])
        );
    }

    #[test]
    fn test_contract_rejects_out_of_turn_move() {
        let game = GameSetup::new(3)
            .standard_opening()
            .and_then(|setup| setup.start(Player::Black))
            .expect("standard game");
        let action = Move::new(Player::White, Cell::new(-1, -1));
        assert_eq!(
            MoveContract::pre(game.state(), &action),
            Err(MoveRejection::WrongPlayer(Player::White))
        );
    }

    #[test]
    fn test_postcondition_detects_missing_placement() {
        let game = GameSetup::new(3)
            .standard_opening()
            .and_then(|setup| setup.start(Player::Black))
            .expect("standard game");
        let unchanged = game.state().clone();
        assert!(MoveContract::post(game.state(), &unchanged).is_err());
    }
}
