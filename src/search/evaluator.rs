//! Static position evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Side};
use crate::rules::mobility;

/// Scores a board from one side's point of view. Higher is better for `side`.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i64;
}

/// Weights for `WeightedEvaluator`. All are magnitudes; the opponent terms
/// are subtracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Per own piece on the board.
    pub own_piece: i64,
    /// Per opponent piece on the board.
    pub opponent_piece: i64,
    /// Per legal move available to the evaluating side.
    pub mobility: i64,
    /// Per legal move available to the opponent.
    pub opponent_mobility: i64,
}

impl Default for ScoreWeights {
    /// Material an order of magnitude above mobility; opponent mobility ignored.
    fn default() -> Self {
        Self {
            own_piece: 10,
            opponent_piece: 10,
            mobility: 1,
            opponent_mobility: 0,
        }
    }
}

/// Linear combination of piece counts and mobility.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedEvaluator {
    pub weights: ScoreWeights,
}

impl WeightedEvaluator {
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for WeightedEvaluator {
    fn evaluate(&self, board: &Board, side: Side) -> i64 {
        let w = &self.weights;
        let opponent = side.opponent();

        let term = |weight: i64, count: usize| weight.saturating_mul(count as i64);

        let mut score = term(w.own_piece, board.piece_count(side))
            .saturating_sub(term(w.opponent_piece, board.piece_count(opponent)))
            .saturating_add(term(w.mobility, mobility(board, side)));
        if w.opponent_mobility != 0 {
            score = score.saturating_sub(term(w.opponent_mobility, mobility(board, opponent)));
        }
        score
    }
}
