//! Game state machine.
//!
//! [`GameSetup`] builds the opening position. [`Game`] owns the live
//! [`GameState`] and is its only mutator: accepted moves flip pieces, update
//! counts, rotate the turn past players with no legal move, and record a
//! snapshot when history is enabled.

use crate::action::{Move, MoveReport};
use crate::board::Board;
use crate::contracts::{Contract, MoveContract, check_move};
use crate::error::{GameError, GameErrorKind};
use crate::history::History;
use crate::scores::PieceCounts;
use crate::types::{Cell, CellState, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Seed pieces placed before the first move, three per player.
pub const STANDARD_OPENING: [(Cell, Player); 9] = [
    (Cell::new(0, 0), Player::Black),
    (Cell::new(-1, 2), Player::Black),
    (Cell::new(0, -1), Player::Black),
    (Cell::new(1, -1), Player::White),
    (Cell::new(2, -1), Player::White),
    (Cell::new(0, -2), Player::White),
    (Cell::new(1, 0), Player::Red),
    (Cell::new(0, 1), Player::Red),
    (Cell::new(3, -1), Player::Red),
];

/// Creates a game with the standard opening, Black to move.
///
/// # Errors
///
/// Returns `BoardTooSmall` if the opening does not fit (radius below 2).
#[instrument]
pub fn new_game(radius: u16, history_enabled: bool) -> Result<Game, GameError> {
    GameSetup::new(radius)
        .with_history(history_enabled)
        .standard_opening()?
        .start(Player::Black)
}

// ─────────────────────────────────────────────────────────────
//  State
// ─────────────────────────────────────────────────────────────

/// Board, piece counts and the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) counts: PieceCounts,
    pub(crate) to_move: Player,
}

impl GameState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece counts.
    pub fn counts(&self) -> &PieceCounts {
        &self.counts
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Every cell where `player` may legally place.
    #[instrument(level = "trace", skip(self))]
    pub fn legal_moves_for(&self, player: Player) -> BTreeSet<Cell> {
        self.board
            .empty_cells()
            .filter(|cell| check_move(&self.board, &self.counts, *cell, player).is_ok())
            .collect()
    }

    /// Checks whether `player` has at least one legal placement.
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.board
            .empty_cells()
            .any(|cell| check_move(&self.board, &self.counts, cell, player).is_ok())
    }

    /// True when the board is full or nobody can move.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() || Player::ALL.iter().all(|p| !self.has_legal_move(*p))
    }

    /// Places the mover's piece and flips `captured`. Does not validate.
    fn place(&mut self, action: Move, captured: &[Cell]) {
        self.counts = self.counts.after_move(&self.board, action.player, captured);
        let piece = CellState::Occupied(action.player);
        for cell in std::iter::once(&action.position).chain(captured) {
            self.board.set(*cell, piece);
        }
    }

    /// Passes the turn along until someone with a legal move is found.
    ///
    /// Returns the players passed over. Nothing moves once the game is over.
    fn settle_turn(&mut self) -> Vec<Player> {
        let mut skipped = Vec::new();
        if self.is_game_over() {
            return skipped;
        }
        while !self.has_legal_move(self.to_move) {
            info!(player = %self.to_move, "No legal moves, skipping turn");
            skipped.push(self.to_move);
            self.to_move = self.to_move.next();
        }
        skipped
    }
}

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: an empty board waiting for its opening pieces.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
    history_enabled: bool,
}

impl GameSetup {
    /// Creates an empty board of the given radius, history disabled.
    #[instrument]
    pub fn new(radius: u16) -> Self {
        Self {
            board: Board::new(radius),
            history_enabled: false,
        }
    }

    /// Turns history recording on or off.
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.history_enabled = enabled;
        self
    }

    /// Returns the board built so far.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Puts a piece on `cell`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `BoardTooSmall` if `cell` is off the board.
    #[instrument(skip(self))]
    pub fn place(mut self, cell: Cell, player: Player) -> Result<Self, GameError> {
        match self.board.set(cell, CellState::Occupied(player)) {
            Some(_) => Ok(self),
            None => Err(GameError::new(GameErrorKind::BoardTooSmall {
                radius: self.board.radius(),
                cell,
            })),
        }
    }

    /// Places the [`STANDARD_OPENING`] pieces.
    ///
    /// # Errors
    ///
    /// Returns `BoardTooSmall` naming the first seed cell that does not fit.
    pub fn standard_opening(self) -> Result<Self, GameError> {
        STANDARD_OPENING
            .into_iter()
            .try_fold(self, |setup, (cell, player)| setup.place(cell, player))
    }

    /// Starts the game with `first_player` to move (consumes setup).
    ///
    /// If `first_player` has no legal move the turn passes on at once, as it
    /// would after any move.
    ///
    /// # Errors
    ///
    /// Returns `PlayerMissing` if some player has no piece on the board.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> Result<Game, GameError> {
        let counts = PieceCounts::from_board(&self.board);
        if let Some(player) = counts.missing_player() {
            return Err(GameError::new(GameErrorKind::PlayerMissing(player)));
        }

        let mut state = GameState {
            board: self.board,
            counts,
            to_move: first_player,
        };
        let skipped = state.settle_turn();
        let history = self.history_enabled.then(|| History::new(&state));

        info!(
            radius = state.board.radius(),
            cells = state.board.len(),
            to_move = %state.to_move,
            history = self.history_enabled,
            "Game started"
        );
        Ok(Game {
            state,
            history,
            opening_skips: skipped,
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Running Game
// ─────────────────────────────────────────────────────────────

/// A game in progress (or finished), with optional undo history.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    history: Option<History>,
    opening_skips: Vec<Player>,
}

impl Game {
    /// Returns the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board, for rendering.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.to_move
    }

    /// Current scores, one per player.
    pub fn scores(&self) -> PieceCounts {
        self.state.counts
    }

    /// Players passed over when the game started.
    pub fn opening_skips(&self) -> &[Player] {
        &self.opening_skips
    }

    /// Returns the history, if recording is enabled.
    pub fn history(&self) -> Option<&History> {
        self.history.as_ref()
    }

    /// Every cell where `player` may legally place.
    pub fn legal_moves_for(&self, player: Player) -> BTreeSet<Cell> {
        self.state.legal_moves_for(player)
    }

    /// Legal placements for the player to move.
    pub fn legal_moves(&self) -> BTreeSet<Cell> {
        self.state.legal_moves_for(self.state.to_move)
    }

    /// Checks whether the player to move may place at `position`.
    pub fn is_legal(&self, position: Cell) -> bool {
        check_move(&self.state.board, &self.state.counts, position, self.state.to_move).is_ok()
    }

    /// True when the board is full or nobody can move.
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Winner of a finished game; ties go to the earliest player in turn order.
    pub fn winner(&self) -> Option<Player> {
        if self.is_game_over() {
            self.state.counts.winner()
        } else {
            None
        }
    }

    /// Places a piece for the player to move.
    ///
    /// On success the captured pieces are flipped, counts updated, the turn
    /// passes to the next player able to move, and a snapshot is recorded
    /// when history is enabled.
    ///
    /// # Errors
    ///
    /// Returns `IllegalMove` and leaves the game untouched if the placement
    /// is off the board, occupied, captures nothing, or would eliminate a
    /// player.
    #[instrument(skip(self), fields(player = %self.state.to_move))]
    pub fn apply_move(&mut self, position: Cell) -> Result<MoveReport, GameError> {
        let action = Move::new(self.state.to_move, position);
        let captured = MoveContract::pre(&self.state, &action).map_err(|reason| {
            debug!(%reason, "Move rejected");
            GameError::from(reason)
        })?;

        let before = self.state.clone();
        self.state.place(action, &captured);

        if cfg!(debug_assertions)
            && let Err(err) = MoveContract::post(&before, &self.state)
        {
            self.state = before;
            return Err(err);
        }

        self.state.to_move = action.player.next();
        let skipped = self.state.settle_turn();
        let step = self.history.as_mut().map(|history| history.record(&self.state));

        debug!(%action, captured = captured.len(), next = %self.state.to_move, "Move applied");
        if self.is_game_over() {
            info!(scores = %self.state.counts, "Game over");
        }

        Ok(MoveReport::new(action, captured, skipped, self.state.to_move, step))
    }

    /// Steps back to the state before the last move.
    ///
    /// # Errors
    ///
    /// Returns `NoHistory` if recording is disabled, or `AtInitialState` at
    /// step 0. The game is unchanged on error.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        let history = self
            .history
            .as_mut()
            .ok_or_else(|| GameError::new(GameErrorKind::NoHistory))?;
        self.state = history.undo()?.clone();
        info!(step = history.step(), to_move = %self.state.to_move, "Undid last move");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_layout() {
        let game = new_game(3, true).expect("standard game");
        assert_eq!(game.current_player(), Player::Black);
        for player in Player::ALL {
            assert_eq!(game.scores().get(player), 3);
        }
        assert_eq!(game.board().owner(Cell::new(3, -1)), Some(Player::Red));
        assert!(game.opening_skips().is_empty());
        assert_eq!(game.history().map(History::step), Some(0));
    }

    #[test]
    fn test_opening_requires_radius_two() {
        assert!(new_game(2, false).is_ok());
        let err = new_game(1, false).unwrap_err();
        assert!(matches!(err.kind(), GameErrorKind::BoardTooSmall { radius: 1, .. }));
        assert!(new_game(0, false).is_err());
    }

    #[test]
    fn test_start_rejects_missing_player() {
        let err = GameSetup::new(2)
            .place(Cell::new(0, 0), Player::Black)
            .and_then(|setup| setup.place(Cell::new(1, 0), Player::Red))
            .and_then(|setup| setup.start(Player::Black))
            .unwrap_err();
        assert_eq!(err.kind(), &GameErrorKind::PlayerMissing(Player::White));
    }

    #[test]
    fn test_turn_rotates_in_fixed_order() {
        let mut game = new_game(3, false).expect("standard game");
        let report = game.apply_move(Cell::new(0, -3)).expect("legal move");
        assert_eq!(*report.next_player(), Player::White);
        assert!(report.skipped().is_empty());
        assert_eq!(*report.step(), None);
    }

    #[test]
    fn test_legal_moves_for_opening() {
        let game = new_game(3, false).expect("standard game");
        let expected: BTreeSet<Cell> = [(0, -3), (0, 2), (2, -2), (2, 0), (3, -2), (4, -1)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(game.legal_moves_for(Player::Black), expected);
        assert_eq!(game.legal_moves(), expected);
        assert!(game.is_legal(Cell::new(2, 0)));
        assert!(!game.is_legal(Cell::new(-1, -1)));
    }

    #[test]
    fn test_winner_only_when_over() {
        let game = new_game(3, false).expect("standard game");
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
    }
}
