//! Machine move selection.
//!
//! ## Overview
//!
//! The machine plays a greedy one-ply search: simulate each legal move,
//! apply the elimination rule, score the result with an `Evaluator`, keep
//! the best. Optional jitter from a caller-supplied `GameRng` makes play
//! less predictable while staying reproducible for a fixed seed.
//!
//! ## Usage
//!
//! ```rust
//! use elimination_tactics::core::{Board, GameRng, Side};
//! use elimination_tactics::rules::RuleKind;
//! use elimination_tactics::search::{GreedySearch, WeightedEvaluator};
//!
//! let search = GreedySearch::new(RuleKind::FloodFillCapture, WeightedEvaluator::default());
//! let mut rng = GameRng::new(42);
//! let reply = search.select_move(&Board::initial(), Side::Machine, &mut rng).unwrap();
//! assert!(reply.is_some());
//! ```

pub mod evaluator;
pub mod greedy;

pub use evaluator::{Evaluator, ScoreWeights, WeightedEvaluator};
pub use greedy::GreedySearch;
