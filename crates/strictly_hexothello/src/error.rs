//! Error types for the game engine.

use crate::types::{Cell, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveRejection {
    /// The cell is not part of the board.
    #[display("Cell {_0} is not on the board")]
    OffBoard(Cell),

    /// The cell already holds a piece.
    #[display("Cell {cell} is already occupied by {owner}")]
    Occupied {
        /// Target cell.
        cell: Cell,
        /// Current owner of the cell.
        owner: Player,
    },

    /// No opposing run is flanked from this cell.
    #[display("Placing at {_0} captures nothing")]
    NoCaptures(Cell),

    /// It is not this player's turn.
    #[display("It's not {_0}'s turn")]
    WrongPlayer(Player),

    /// The capture would take the last piece of a player.
    #[display("Placing at {cell} would eliminate {player}")]
    WouldEliminate {
        /// Target cell.
        cell: Cell,
        /// Player who would be left with no pieces.
        player: Player,
    },
}

/// Specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A move was rejected; the game state is unchanged.
    #[display("Illegal move: {_0}")]
    IllegalMove(MoveRejection),

    /// Undo was requested on a game without history recording.
    #[display("History recording is disabled for this game")]
    NoHistory,

    /// Undo was requested at step 0.
    #[display("Already at the initial position")]
    AtInitialState,

    /// The opening layout does not fit on the board.
    #[display("Board of radius {radius} has no cell {cell}")]
    BoardTooSmall {
        /// Requested radius.
        radius: u16,
        /// First seed cell outside the board.
        cell: Cell,
    },

    /// A custom layout left a player without pieces.
    #[display("{_0} has no pieces on the board")]
    PlayerMissing(Player),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// Returns the rejection reason if this is an illegal move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self.kind {
            GameErrorKind::IllegalMove(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<MoveRejection> for GameError {
    #[track_caller]
    fn from(reason: MoveRejection) -> Self {
        Self::new(GameErrorKind::IllegalMove(reason))
    }
}
