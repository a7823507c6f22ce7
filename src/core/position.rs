//! Board coordinates, directions and moves.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::BOARD_SIZE;
use crate::error::EngineError;

/// Orthogonal step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed enumeration order. Move generation and therefore machine
    /// tie-breaking depend on it.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (row, col) delta.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A (row, col) coordinate. Valid iff both components are in `[0, BOARD_SIZE)`.
///
/// Construction does not check bounds; `Board` accessors do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a position, failing if it is off the board.
    pub fn checked(row: usize, col: usize) -> Result<Self, EngineError> {
        let pos = Self::new(row, col);
        if pos.is_on_board() {
            Ok(pos)
        } else {
            Err(EngineError::InvalidPosition { row, col })
        }
    }

    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The neighbor one step in `dir`, if it is on the board.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// On-board orthogonal neighbors in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 4]> {
        Direction::ALL.iter().filter_map(|&dir| self.step(dir)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A one-step move of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// True if `to` is orthogonally adjacent to `from`.
    ///
    /// Occupancy is checked by `Board::apply_move`, not here.
    #[must_use]
    pub const fn is_orthogonal_step(&self) -> bool {
        self.from.distance(self.to) == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
