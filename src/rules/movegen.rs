//! Legal move generation.
//!
//! Moves are one orthogonal step into an empty cell. Enumeration order is
//! row-major over pieces, then `Direction::ALL` per piece; the machine's
//! tie-breaking relies on it.

use crate::core::{Board, Move, Position, Side};
use crate::error::EngineError;

/// Enumerate legal moves for `side`.
///
/// With `specific_piece`, only that piece's moves are listed (none if it is
/// not one of `side`'s pieces). An off-board `specific_piece` is an error.
pub fn legal_moves(
    board: &Board,
    side: Side,
    specific_piece: Option<Position>,
) -> Result<Vec<Move>, EngineError> {
    let Some(piece) = specific_piece else {
        return Ok(all_moves(board, side));
    };
    let mut moves = Vec::new();
    if board.get(piece)? == side.cell() {
        push_piece_moves(board, piece, &mut moves);
    }
    Ok(moves)
}

/// All legal moves for `side` across the whole board.
#[must_use]
pub fn all_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::new();
    board.for_each_piece(side, |piece| push_piece_moves(board, piece, &mut moves));
    moves
}

/// Number of legal moves available to `side`.
#[must_use]
pub fn mobility(board: &Board, side: Side) -> usize {
    board
        .pieces(side)
        .map(|piece| {
            piece
                .neighbors()
                .into_iter()
                .filter(|&n| board.at(n).is_empty())
                .count()
        })
        .sum()
}

/// True if `side` has at least one legal move.
#[must_use]
pub fn can_move(board: &Board, side: Side) -> bool {
    board.pieces(side).any(|piece| board.has_liberty(piece))
}

fn push_piece_moves(board: &Board, piece: Position, out: &mut Vec<Move>) {
    for to in piece.neighbors() {
        if board.at(to).is_empty() {
            out.push(Move::new(piece, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_initial_moves() {
        let board = Board::initial();
        let moves = legal_moves(&board, Side::Human, None).unwrap();
        assert_eq!(moves.len(), 4);
        for (col, mv) in moves.iter().enumerate() {
            assert_eq!(*mv, Move::new(Position::new(3, col), Position::new(2, col)));
        }
        assert_eq!(mobility(&board, Side::Machine), 4);
        assert_eq!(all_moves(&board, Side::Machine).len(), 4);
    }

    #[test]
    fn test_direction_order() {
        let board = board("..../.M../..../....");
        let moves = legal_moves(&board, Side::Machine, None).unwrap();
        let targets: Vec<_> = moves.iter().map(|m| m.to).collect();
        assert_eq!(
            targets,
            vec![
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_row_major_piece_order() {
        let board = board("...M/..../M.../....");
        let moves = legal_moves(&board, Side::Machine, None).unwrap();
        assert_eq!(moves[0].from, Position::new(0, 3));
        assert_eq!(moves.last().unwrap().from, Position::new(2, 0));
    }

    #[test]
    fn test_specific_piece() {
        let board = board("MMMM/..../.H../HHHH");
        let moves = legal_moves(&board, Side::Human, Some(Position::new(2, 1))).unwrap();
        assert_eq!(moves.len(), 3);
        assert!(moves.iter().all(|m| m.from == Position::new(2, 1)));

        // Blocked piece under (2, 1) has nothing.
        let moves = legal_moves(&board, Side::Human, Some(Position::new(3, 1))).unwrap();
        assert!(moves.is_empty());

        // Not a human piece.
        let moves = legal_moves(&board, Side::Human, Some(Position::new(0, 0))).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn test_specific_piece_off_board() {
        let board = Board::initial();
        assert!(matches!(
            legal_moves(&board, Side::Human, Some(Position::new(4, 4))),
            Err(EngineError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_moves_are_legal() {
        let board = board("MH.M/HM../.H.M/M..H");
        for side in Side::ALL {
            let moves = legal_moves(&board, side, None).unwrap();
            assert_eq!(moves.len(), mobility(&board, side));
            for mv in moves {
                assert!(mv.is_orthogonal_step());
                assert_eq!(board.get(mv.from).unwrap(), side.cell());
                assert_eq!(board.get(mv.to).unwrap(), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_can_move() {
        let stuck = board("MH../H.../..../....");
        assert!(!can_move(&stuck, Side::Machine));
        assert!(can_move(&stuck, Side::Human));
        assert!(!can_move(&Board::new(), Side::Human));
    }
}
