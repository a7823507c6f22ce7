//! Game state owned by the session layer.
//!
//! The engine never keeps a `GameState` between calls: each operation takes
//! the state by value and hands back the updated one. Callers persist it
//! however they like; `to_bytes`/`from_bytes` are offered for stores that
//! just want an opaque blob.

use serde::{Deserialize, Serialize};

use super::board::{Board, PIECES_PER_SIDE};
use super::cell::{Cell, Side};
use super::position::{Move, Position};
use super::rng::GameRng;
use crate::error::EngineError;
use crate::rules::legal_moves;

/// Where the game is in the select → move cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnPhase {
    /// Waiting for the human to pick one of their pieces.
    AwaitingSelection,
    /// A piece is selected; waiting for its destination.
    AwaitingDestination,
    /// The game has a winner. Only reset changes anything now.
    GameOver,
}

/// Complete state of one game.
///
/// Fields are read through accessors; only the turn engine changes them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,

    /// Human piece chosen for the next move.
    pub(crate) selected: Option<Position>,

    pub(crate) game_over: bool,

    /// Set exactly when `game_over` is.
    pub(crate) winner: Option<Side>,

    /// Human-readable status line. Informational only.
    pub(crate) message: String,

    /// The machine's reply in the most recent turn, for highlighting.
    pub(crate) last_machine_move: Option<Move>,

    /// Jitter source for the machine's search.
    pub(crate) rng: GameRng,
}

impl GameState {
    /// A fresh game on the starting board.
    #[must_use]
    pub fn new(message: impl Into<String>, seed: u64) -> Self {
        Self {
            board: Board::initial(),
            selected: None,
            game_over: false,
            winner: None,
            message: message.into(),
            last_machine_move: None,
            rng: GameRng::new(seed),
        }
    }

    /// A running game on a custom board, human to select.
    ///
    /// Fails with `MalformedState` if the board could not arise in play.
    pub fn from_board(
        board: Board,
        message: impl Into<String>,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let state = Self {
            board,
            ..Self::new(message, seed)
        };
        state.validate()?;
        Ok(state)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn last_machine_move(&self) -> Option<Move> {
        self.last_machine_move
    }

    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.game_over {
            TurnPhase::GameOver
        } else if self.selected.is_some() {
            TurnPhase::AwaitingDestination
        } else {
            TurnPhase::AwaitingSelection
        }
    }

    /// End the game in favor of `winner`.
    pub(crate) fn finish(&mut self, winner: Side, message: impl Into<String>) {
        self.game_over = true;
        self.winner = Some(winner);
        self.selected = None;
        self.message = message.into();
    }

    /// Legal destinations for the selected piece (empty when nothing is selected).
    pub fn valid_destinations(&self) -> Result<Vec<Position>, EngineError> {
        match self.selected {
            Some(piece) if !self.game_over => Ok(legal_moves(&self.board, Side::Human, Some(piece))?
                .into_iter()
                .map(|mv| mv.to)
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    /// Check the state invariants.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.game_over != self.winner.is_some() {
            return Err(EngineError::MalformedState(format!(
                "game_over is {} but winner is {:?}",
                self.game_over, self.winner
            )));
        }
        for side in Side::ALL {
            let count = self.board.piece_count(side);
            if count > PIECES_PER_SIDE {
                return Err(EngineError::MalformedState(format!(
                    "{side} has {count} pieces, at most {PIECES_PER_SIDE} allowed"
                )));
            }
            if count == 0 && self.winner != Some(side.opponent()) {
                return Err(EngineError::MalformedState(format!(
                    "{side} has no pieces but {} has not won",
                    side.opponent()
                )));
            }
        }
        if let Some(pos) = self.selected {
            if self.game_over {
                return Err(EngineError::MalformedState(
                    "selection present after game over".into(),
                ));
            }
            let cell = self.board.get(pos)?;
            if cell != Cell::Human {
                return Err(EngineError::MalformedState(format!(
                    "selected cell {pos} holds {cell:?}, not a human piece"
                )));
            }
        }
        Ok(())
    }

    /// Encode as an opaque binary blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a blob produced by `to_bytes`, rejecting states that violate
    /// the invariants.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let state: GameState = bincode::deserialize(bytes)?;
        state.validate()?;
        Ok(state)
    }
}
