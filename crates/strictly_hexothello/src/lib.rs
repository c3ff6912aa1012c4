//! Strictly Hexothello - three-player Othello on a hexagonal board.
//!
//! Pure game logic with no I/O. Front ends query the [`Game`] for legal moves,
//! scores and the board, and drive it with [`Game::apply_move`] and
//! [`Game::undo`].
//!
//! # Architecture
//!
//! - **Board**: axial hex cells for a given radius, each empty or owned
//! - **Capture**: six-direction flank search
//! - **Contracts**: placement rules, including the elimination guard
//! - **Game**: turn rotation with automatic skips, termination, history
//!
//! # Example
//!
//! ```
//! use strictly_hexothello::{Cell, Player, new_game};
//!
//! # fn main() -> Result<(), strictly_hexothello::GameError> {
//! let mut game = new_game(3, true)?;
//! assert_eq!(game.current_player(), Player::Black);
//!
//! let report = game.apply_move(Cell::new(0, -3))?;
//! assert_eq!(report.captured(), &vec![Cell::new(0, -2)]);
//!
//! game.undo()?;
//! assert_eq!(game.scores().get(Player::Black), 3);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod capture;
mod contracts;
mod error;
mod game;
mod history;
mod invariants;
mod scores;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, CellState, Direction, Player};

// Crate-level exports - Board model
pub use board::{Board, cells_in_radius, neighbors};

// Crate-level exports - Capture engine
pub use capture::{captures_in_direction, find_captures};

// Crate-level exports - Move legality
pub use contracts::{
    CapturesPieces, CellIsEmpty, CellOnBoard, Contract, LegalMove, MoveContract,
    NoPlayerEliminated, check_move, is_legal,
};

// Crate-level exports - Invariants
pub use invariants::{
    AllPlayersPresentInvariant, CountsMatchBoardInvariant, HexOthelloInvariants, Invariant,
    InvariantSet, InvariantViolation,
};

// Crate-level exports - Game state machine
pub use action::{Move, MoveReport};
pub use game::{Game, GameSetup, GameState, STANDARD_OPENING, new_game};
pub use history::{History, Snapshot};
pub use scores::PieceCounts;

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind, MoveRejection};
