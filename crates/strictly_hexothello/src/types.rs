//! Core domain types for hexagonal three-player Othello.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Declaration order is turn order: Black, then White, then Red.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Black moves first.
    Black,
    /// White moves second.
    White,
    /// Red moves third.
    Red,
}

impl Player {
    /// Number of seats at the table.
    pub const COUNT: usize = 3;

    /// All players in turn order.
    pub const ALL: [Player; Player::COUNT] = [Player::Black, Player::White, Player::Red];

    /// Returns the player who moves after this one.
    pub fn next(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Red,
            Player::Red => Player::Black,
        }
    }

    /// Position of this player in turn order (0-2).
    pub fn index(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
            Player::Red => 2,
        }
    }

    /// Single-letter symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
            Player::Red => 'R',
        }
    }
}

/// One of the six unit steps between neighbouring hexes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Direction {
    /// (+1, 0)
    East,
    /// (-1, 0)
    West,
    /// (0, +1)
    SouthEast,
    /// (0, -1)
    NorthWest,
    /// (+1, -1)
    NorthEast,
    /// (-1, +1)
    SouthWest,
}

impl Direction {
    /// All six directions, in scan order.
    pub const ALL: [Direction; 6] = [
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Axial offset `(dq, dr)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::SouthEast => (0, 1),
            Direction::NorthWest => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::SouthEast => Direction::NorthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }
}

/// A hex cell in axial coordinates.
///
/// The implicit third cube axis is `s = -q - r`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({q}, {r})")]
pub struct Cell {
    /// Column axis.
    pub q: i32,
    /// Row axis.
    pub r: i32,
}

impl Cell {
    /// Creates a cell from axial coordinates.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third axis.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The cell one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((q, r): (i32, i32)) -> Self {
        Self::new(q, r)
    }
}

/// Contents of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Nobody has played here.
    #[default]
    Empty,
    /// A piece owned by a player.
    Occupied(Player),
}

impl CellState {
    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol (`.` for empty).
    pub fn symbol(self) -> char {
        self.owner().map_or('.', Player::symbol)
    }
}
