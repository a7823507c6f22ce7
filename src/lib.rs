//! # elimination-tactics
//!
//! A deterministic 4x4 board game engine. Each side starts with a row of
//! four pieces; pieces step one cell orthogonally, and after every move an
//! elimination rule removes pieces that have run out of room.
//!
//! ## Design Principles
//!
//! 1. **Stateless Engine**: `Engine` holds configuration only. The live
//!    `GameState` is passed in and handed back by every operation; the
//!    caller owns persistence.
//!
//! 2. **One Engine, Many Variants**: the game variants differ only in their
//!    `EliminationRule` (blocking, trapped piece, flood-fill capture) and
//!    the machine's scoring weights.
//!
//! 3. **Forgiving Input, Strict Contracts**: nonsensical clicks are ignored;
//!    off-board coordinates and malformed states are errors.
//!
//! 4. **Reproducible**: the machine's optional score jitter comes from a
//!    seeded RNG carried inside the state.
//!
//! ## Modules
//!
//! - `core`: Sides, cells, positions, board, state, RNG, configuration
//! - `rules`: Move generation and elimination rules
//! - `search`: Position evaluation and the machine's greedy search
//! - `engine`: Turn state machine and status messages
//! - `error`: Engine and configuration errors

pub mod core;
pub mod rules;
pub mod search;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, EngineConfig, GameRng, GameRngState, GameState, Move, Position,
    Side, TurnPhase, BOARD_SIZE,
};

pub use crate::rules::{
    legal_moves, Blocking, EliminationResult, EliminationRule, FloodFillCaptureRemoval,
    RuleKind, TrappedPieceRemoval,
};

pub use crate::search::{Evaluator, GreedySearch, ScoreWeights, WeightedEvaluator};

pub use crate::engine::{Engine, TurnSummary};

pub use crate::error::{ConfigError, EngineError};
