//! One-ply greedy move selection.
//!
//! Every legal move is simulated on a board copy, the elimination rule is
//! applied to the copy, and the result is scored. The highest score wins;
//! among equal scores the first in move-generation order is kept.
//!
//! There is no lookahead past the mover's own elimination pass. The
//! opponent's reply is only reflected through the evaluator's mobility terms.

use crate::core::{Board, GameRng, Move, Side};
use crate::error::EngineError;
use crate::rules::{all_moves, EliminationRule};

use super::evaluator::Evaluator;

/// Greedy one-ply search.
///
/// Generic over the elimination rule and the evaluator so the same search
/// drives every game variant.
#[derive(Clone, Debug)]
pub struct GreedySearch<R: EliminationRule, E: Evaluator> {
    rule: R,
    evaluator: E,
    /// Bound of the uniform offset added to each score (0 = none).
    jitter: u32,
}

impl<R: EliminationRule, E: Evaluator> GreedySearch<R, E> {
    /// Create a deterministic search.
    pub fn new(rule: R, evaluator: E) -> Self {
        Self {
            rule,
            evaluator,
            jitter: 0,
        }
    }

    /// Add a random offset in `[-jitter, jitter]` to every candidate score.
    pub fn with_jitter(mut self, jitter: u32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Score every legal move for `side`, in move-generation order.
    ///
    /// Draws one jitter value per candidate when jitter is enabled.
    pub fn score_moves(
        &self,
        board: &Board,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<Vec<(Move, i64)>, EngineError> {
        all_moves(board, side)
            .into_iter()
            .map(|mv| {
                let mut next = board.clone();
                next.apply_move(mv)?;
                self.rule.resolve(&mut next);
                let score = self
                    .evaluator
                    .evaluate(&next, side)
                    .saturating_add(rng.jitter(self.jitter));
                log::trace!("{side} candidate {mv} scores {score}");
                Ok((mv, score))
            })
            .collect()
    }

    /// Pick the best move for `side`, or `None` if it cannot move.
    pub fn select_move(
        &self,
        board: &Board,
        side: Side,
        rng: &mut GameRng,
    ) -> Result<Option<Move>, EngineError> {
        let mut best: Option<(Move, i64)> = None;
        for (mv, score) in self.score_moves(board, side, rng)? {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        if let Some((mv, score)) = best {
            log::debug!("{side} selects {mv} (score {score})");
        }
        Ok(best.map(|(mv, _)| mv))
    }
}
