//! Sides and cell contents.
//!
//! ## Side
//!
//! The two participants: the human player and the machine opponent.
//!
//! ## Cell
//!
//! What a board square holds: nothing, or one side's piece.

use serde::{Deserialize, Serialize};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player driving the game through the request layer.
    Human,
    /// The engine-controlled opponent.
    Machine,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::Human, Side::Machine];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Machine,
            Side::Machine => Side::Human,
        }
    }

    /// The cell value holding one of this side's pieces.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Side::Human => Cell::Human,
            Side::Machine => Cell::Machine,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Machine => write!(f, "Machine"),
        }
    }
}

/// Contents of a single board square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Machine,
}

impl Cell {
    /// The side owning the piece on this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Side::Human),
            Cell::Machine => Some(Side::Machine),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character rendering used by `Board`'s text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'H',
            Cell::Machine => 'M',
        }
    }

    /// Parse the single-character rendering.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'H' => Some(Cell::Human),
            'M' => Some(Cell::Machine),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        side.cell()
    }
}
