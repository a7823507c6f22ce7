//! Fixed 4x4 game board.
//!
//! Cells are stored row-major. Every public accessor bounds-checks its
//! `Position` and fails with `EngineError::InvalidPosition` rather than
//! silently ignoring an off-board coordinate.
//!
//! The text form used by `Display` and `FromStr` is one row per line
//! (or `/`-separated), `M` for machine, `H` for human and `.` for empty:
//!
//! ```
//! use elimination_tactics::core::{Board, Cell, Position};
//!
//! let board: Board = "MMMM/..../..../HHHH".parse().unwrap();
//! assert_eq!(board.get(Position::new(3, 0)).unwrap(), Cell::Human);
//! assert_eq!(board, Board::initial());
//! ```

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Side};
use super::position::{Move, Position};
use crate::error::EngineError;

/// Side length of the board.
pub const BOARD_SIZE: usize = 4;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Pieces each side starts with. Pieces are never created, so no side
/// ever holds more.
pub const PIECES_PER_SIDE: usize = BOARD_SIZE;

/// Row holding the machine's pieces at game start.
pub const MACHINE_HOME_ROW: usize = 0;

/// Row holding the human's pieces at game start.
pub const HUMAN_HOME_ROW: usize = BOARD_SIZE - 1;

/// The game board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The starting layout: machine pieces fill row 0, human pieces fill row 3.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::new();
        for col in 0..BOARD_SIZE {
            board.put(Position::new(MACHINE_HOME_ROW, col), Cell::Machine);
            board.put(Position::new(HUMAN_HOME_ROW, col), Cell::Human);
        }
        board
    }

    /// Get the cell at `pos`.
    pub fn get(&self, pos: Position) -> Result<Cell, EngineError> {
        Ok(self.cells[Self::index(pos)?])
    }

    /// Set the cell at `pos`.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), EngineError> {
        self.cells[Self::index(pos)?] = cell;
        Ok(())
    }

    fn index(pos: Position) -> Result<usize, EngineError> {
        if pos.is_on_board() {
            Ok(pos.row * BOARD_SIZE + pos.col)
        } else {
            Err(EngineError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            })
        }
    }

    /// Unchecked read for positions produced by the board itself
    /// (`positions`, `pieces`, `Position::neighbors`).
    pub(crate) fn at(&self, pos: Position) -> Cell {
        debug_assert!(pos.is_on_board(), "off-board position {pos}");
        self.cells[pos.row * BOARD_SIZE + pos.col]
    }

    pub(crate) fn put(&mut self, pos: Position, cell: Cell) {
        debug_assert!(pos.is_on_board(), "off-board position {pos}");
        self.cells[pos.row * BOARD_SIZE + pos.col] = cell;
    }

    /// All positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Iterate over (Position, Cell) pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Self::positions().map(move |pos| (pos, self.at(pos)))
    }

    /// Positions of `side`'s pieces in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        let target = side.cell();
        self.iter()
            .filter(move |&(_, cell)| cell == target)
            .map(|(pos, _)| pos)
    }

    /// Call `f` for every piece of `side`, row-major.
    pub fn for_each_piece(&self, side: Side, mut f: impl FnMut(Position)) {
        for pos in self.pieces(side) {
            f(pos);
        }
    }

    /// Number of pieces `side` has on the board.
    #[must_use]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// True if some on-board orthogonal neighbor of `pos` is empty.
    #[must_use]
    pub fn has_liberty(&self, pos: Position) -> bool {
        pos.neighbors().into_iter().any(|n| self.at(n).is_empty())
    }

    /// Move a piece one step.
    ///
    /// Fails with `IllegalMove` unless `from` holds a piece, `to` is empty and
    /// the two are orthogonally adjacent. Returns the moved cell.
    pub fn apply_move(&mut self, mv: Move) -> Result<Cell, EngineError> {
        let piece = self.get(mv.from)?;
        let target = self.get(mv.to)?;
        if piece.is_empty() || !target.is_empty() || !mv.is_orthogonal_step() {
            return Err(EngineError::IllegalMove(mv));
        }
        self.put(mv.from, Cell::Empty);
        self.put(mv.to, piece);
        Ok(piece)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.at(Position::new(row, col)).symbol())?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(EngineError::MalformedState(format!(
                "expected {BOARD_SIZE} rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != BOARD_SIZE {
                return Err(EngineError::MalformedState(format!(
                    "row {row} has {} cells, expected {BOARD_SIZE}",
                    cells.len()
                )));
            }
            for (col, &symbol) in cells.iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    EngineError::MalformedState(format!("unknown cell symbol {symbol:?}"))
                })?;
                board.put(Position::new(row, col), cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.piece_count(Side::Human), 4);
        assert_eq!(board.piece_count(Side::Machine), 4);
        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(Position::new(0, col)).unwrap(), Cell::Machine);
            assert_eq!(board.get(Position::new(1, col)).unwrap(), Cell::Empty);
            assert_eq!(board.get(Position::new(2, col)).unwrap(), Cell::Empty);
            assert_eq!(board.get(Position::new(3, col)).unwrap(), Cell::Human);
        }
    }

    #[test]
    fn test_out_of_range_access_fails() {
        let mut board = Board::initial();
        assert!(matches!(
            board.get(Position::new(0, 4)),
            Err(EngineError::InvalidPosition { row: 0, col: 4 })
        ));
        assert!(board.set(Position::new(7, 0), Cell::Human).is_err());
        // Must not alias onto another cell.
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        let pos = Position::new(2, 1);
        board.set(pos, Cell::Machine).unwrap();
        assert_eq!(board.get(pos).unwrap(), Cell::Machine);
        assert_eq!(board.piece_count(Side::Machine), 1);
    }

    #[test]
    fn test_pieces_row_major() {
        let board = board("H..H/..../.H../....");
        let pieces: Vec<_> = board.pieces(Side::Human).collect();
        assert_eq!(
            pieces,
            vec![Position::new(0, 0), Position::new(0, 3), Position::new(2, 1)]
        );

        let mut visited = Vec::new();
        board.for_each_piece(Side::Human, |pos| visited.push(pos));
        assert_eq!(visited, pieces);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::initial();
        let mut copy = original.clone();
        copy.set(Position::new(0, 0), Cell::Empty).unwrap();
        assert_eq!(original.get(Position::new(0, 0)).unwrap(), Cell::Machine);
    }

    #[test]
    fn test_has_liberty() {
        let board = board("HM../M.../..../....");
        assert!(!board.has_liberty(Position::new(0, 0)));
        assert!(board.has_liberty(Position::new(0, 1)));
    }

    #[test]
    fn test_apply_move() {
        let mut board = Board::initial();
        let mv = Move::new(Position::new(3, 0), Position::new(2, 0));
        assert_eq!(board.apply_move(mv).unwrap(), Cell::Human);
        assert_eq!(board.get(Position::new(3, 0)).unwrap(), Cell::Empty);
        assert_eq!(board.get(Position::new(2, 0)).unwrap(), Cell::Human);
    }

    #[test]
    fn test_apply_move_rejects_illegal() {
        let mut board = Board::initial();
        let cases = [
            // diagonal
            Move::new(Position::new(3, 0), Position::new(2, 1)),
            // two steps
            Move::new(Position::new(3, 0), Position::new(1, 0)),
            // occupied destination
            Move::new(Position::new(3, 0), Position::new(3, 1)),
            // empty source
            Move::new(Position::new(1, 0), Position::new(2, 0)),
        ];
        for mv in cases {
            assert!(matches!(board.apply_move(mv), Err(EngineError::IllegalMove(_))));
        }
        assert!(matches!(
            board.apply_move(Move::new(Position::new(3, 3), Position::new(3, 4))),
            Err(EngineError::InvalidPosition { .. })
        ));
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_text_form() {
        let board = Board::initial();
        assert_eq!(board.to_string(), "MMMM\n....\n....\nHHHH");
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_errors() {
        assert!("MMMM/....".parse::<Board>().is_err());
        assert!("MMM/..../..../HHHH".parse::<Board>().is_err());
        assert!("MMMM/..x./..../HHHH".parse::<Board>().is_err());
    }
}
