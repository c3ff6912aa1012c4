//! Hex board model: the playable cell domain and its contents.
//!
//! The domain for radius `N` is every axial cell with `q` in `[-N, N+1]`,
//! `r` in `[-N-1, N]` and `s = -q-r` in `[-N-1, N]`. The region is slightly
//! lopsided rather than a regular hexagon; the bounds are kept exactly as the
//! game has always used them.

use crate::error::{GameError, GameErrorKind};
use crate::types::{Cell, CellState, Direction, Player};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// Every cell that belongs to a board of the given radius.
#[instrument(level = "trace")]
pub fn cells_in_radius(radius: u16) -> BTreeSet<Cell> {
    let n = i32::from(radius);
    let in_range = |value: i32| (-n - 1..=n).contains(&value);

    (-n..=n + 1)
        .flat_map(|q| (-n - 1..=n).map(move |r| Cell::new(q, r)))
        .filter(|cell| in_range(cell.s()))
        .collect()
}

/// The six neighbours of `cell`, paired with the direction that reaches them.
///
/// No bounds checking: callers consult [`Board::contains`].
pub fn neighbors(cell: Cell) -> [(Direction, Cell); 6] {
    Direction::ALL.map(|direction| (direction, cell.step(direction)))
}

/// Hexagonal board: a fixed set of cells, each empty or owned by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardRecord", try_from = "BoardRecord")]
pub struct Board {
    radius: u16,
    cells: BTreeMap<Cell, CellState>,
}

impl Board {
    /// Creates an empty board of the given radius.
    #[instrument]
    pub fn new(radius: u16) -> Self {
        Self {
            radius,
            cells: cells_in_radius(radius)
                .into_iter()
                .map(|cell| (cell, CellState::Empty))
                .collect(),
        }
    }

    /// Radius the board was built with.
    pub fn radius(&self) -> u16 {
        self.radius
    }

    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the board has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Checks whether `cell` belongs to the board.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Contents of `cell`, or `None` if it is off the board.
    pub fn get(&self, cell: Cell) -> Option<CellState> {
        self.cells.get(&cell).copied()
    }

    /// Owner of the piece on `cell`, if any.
    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.get(cell).and_then(CellState::owner)
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_vacant(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(CellState::Empty))
    }

    /// Overwrites `cell`, returning its previous contents.
    ///
    /// Returns `None` and leaves the board untouched if `cell` is off the board.
    pub(crate) fn set(&mut self, cell: Cell, state: CellState) -> Option<CellState> {
        self.cells
            .get_mut(&cell)
            .map(|slot| std::mem::replace(slot, state))
    }

    /// All cells with their contents, ordered by `(q, r)`.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells.iter().map(|(cell, state)| (*cell, *state))
    }

    /// All cells, ordered by `(q, r)`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.keys().copied()
    }

    /// Cells that hold no piece.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .filter(|(_, state)| *state == CellState::Empty)
            .map(|(cell, _)| cell)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.values().all(|state| *state != CellState::Empty)
    }

    /// Number of cells holding a piece.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .values()
            .filter(|state| **state != CellState::Empty)
            .count()
    }

    /// Number of pieces owned by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .values()
            .filter(|state| **state == CellState::Occupied(player))
            .count()
    }
}

/// Compact serialized form: the radius plus the occupied cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRecord {
    radius: u16,
    pieces: Vec<(Cell, Player)>,
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        let pieces = board
            .iter()
            .filter_map(|(cell, state)| state.owner().map(|player| (cell, player)))
            .collect();
        Self {
            radius: board.radius,
            pieces,
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = GameError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        let mut board = Board::new(record.radius);
        for (cell, player) in record.pieces {
            if board.set(cell, CellState::Occupied(player)).is_none() {
                return Err(GameError::new(GameErrorKind::BoardTooSmall {
                    radius: record.radius,
                    cell,
                }));
            }
        }
        Ok(board)
    }
}
