//! Core engine types: sides, cells, positions, board, state, RNG, configuration.
//!
//! This module is pure data. Game rules live in `rules`, the machine's
//! search in `search`, and the turn state machine in `engine`.

pub mod cell;
pub mod position;
pub mod board;
pub mod rng;
pub mod config;
pub mod state;

pub use cell::{Cell, Side};
pub use position::{Direction, Move, Position};
pub use board::{Board, BOARD_SIZE, CELL_COUNT, HUMAN_HOME_ROW, MACHINE_HOME_ROW, PIECES_PER_SIDE};
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, MAX_JITTER, MAX_WEIGHT};
pub use state::{GameState, TurnPhase};
