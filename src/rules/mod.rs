//! Game rules: move generation and piece elimination.
//!
//! - `movegen`: legal one-step orthogonal moves, in deterministic order
//! - `elimination`: the `EliminationRule` trait and its three variants
//!
//! Both operate on a borrowed `Board` and never touch `GameState`.

pub mod movegen;
pub mod elimination;

pub use movegen::{all_moves, can_move, legal_moves, mobility};
pub use elimination::{
    Blocking, EliminationResult, EliminationRule, FloodFillCaptureRemoval, RuleKind,
    TrappedPieceRemoval,
};
