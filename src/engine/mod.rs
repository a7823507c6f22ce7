//! Turn engine: the in-process API consumed by the request/session layer.
//!
//! ```
//! use elimination_tactics::engine::Engine;
//!
//! let engine = Engine::default();
//! let state = engine.init_game();
//! let state = engine.select_piece(state, 3, 0).unwrap();
//! let state = engine.submit_move(state, 2, 0).unwrap();
//! assert!(state.last_machine_move().is_some());
//! ```

pub mod message;
pub mod turn;

pub use message::TurnSummary;
pub use turn::Engine;
