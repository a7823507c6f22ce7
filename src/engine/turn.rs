//! Turn state machine.
//!
//! `AwaitingSelection → AwaitingDestination → (move) → AwaitingSelection | GameOver`
//!
//! A full turn runs to completion inside `submit_move`:
//! human move → elimination → terminal check → machine reply → elimination →
//! terminal check. Requests that make no sense for the current state
//! (selecting an empty cell, a non-adjacent destination) leave the state
//! untouched. Off-board coordinates and malformed states are errors.

use crate::core::{Board, Cell, EngineConfig, GameState, Move, Position, Side};
use crate::error::EngineError;
use crate::rules::{can_move, EliminationResult, EliminationRule, RuleKind};
use crate::search::{GreedySearch, WeightedEvaluator};

use super::message::{self, TurnSummary};

/// Stateless game driver. All game data lives in the `GameState` passed
/// through each call.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The machine's search for this configuration.
    #[must_use]
    pub fn machine(&self) -> GreedySearch<RuleKind, WeightedEvaluator> {
        GreedySearch::new(self.config.rule, WeightedEvaluator::new(self.config.weights))
            .with_jitter(self.config.jitter)
    }

    /// Starting state: machine on row 0, human on row 3, human to select.
    #[must_use]
    pub fn init_game(&self) -> GameState {
        GameState::new(message::OPENING, self.config.seed)
    }

    /// A running game on a custom board, human to select.
    ///
    /// Fails with `MalformedState` if the board could not arise in play
    /// (a side without pieces, or more than it started with).
    pub fn init_game_from(&self, board: Board) -> Result<GameState, EngineError> {
        GameState::from_board(board, message::OPENING, self.config.seed)
    }

    /// Same as `init_game`.
    #[must_use]
    pub fn reset_game(&self) -> GameState {
        self.init_game()
    }

    /// Select the human piece at (row, col).
    ///
    /// Anything other than a human piece on a running game is ignored.
    pub fn select_piece(
        &self,
        mut state: GameState,
        row: usize,
        col: usize,
    ) -> Result<GameState, EngineError> {
        let pos = Position::checked(row, col)?;
        state.validate()?;

        if !state.game_over && state.board.get(pos)? == Cell::Human {
            state.selected = Some(pos);
            state.message = message::PIECE_SELECTED.to_string();
        }
        Ok(state)
    }

    /// Move the selected piece to (row, col) and play out the whole turn.
    ///
    /// Ignored unless a piece is selected, the game is running, and the
    /// destination is an empty orthogonal neighbor. The selection survives
    /// an ignored attempt.
    pub fn submit_move(
        &self,
        mut state: GameState,
        row: usize,
        col: usize,
    ) -> Result<GameState, EngineError> {
        let to = Position::checked(row, col)?;
        state.validate()?;

        if state.game_over {
            return Ok(state);
        }
        let Some(from) = state.selected else {
            return Ok(state);
        };
        let mv = Move::new(from, to);
        if !mv.is_orthogonal_step() || !state.board.get(to)?.is_empty() {
            return Ok(state);
        }

        self.play_turn(&mut state, mv)?;
        Ok(state)
    }

    fn play_turn(&self, state: &mut GameState, mv: Move) -> Result<(), EngineError> {
        let rule = self.config.rule;

        state.board.apply_move(mv)?;
        state.selected = None;
        state.last_machine_move = None;
        log::debug!("human plays {mv}");

        let human_pass = rule.resolve(&mut state.board);
        log_pass(Side::Human, &human_pass);
        let mut summary = TurnSummary::new(human_pass);

        if state.board.piece_count(Side::Machine) == 0 {
            self.finish(state, Side::Human, summary.compose(message::HUMAN_WINS_BY_CAPTURE));
            return Ok(());
        }
        if state.board.piece_count(Side::Human) == 0 {
            self.finish(state, Side::Machine, summary.compose(message::MACHINE_WINS_BY_CAPTURE));
            return Ok(());
        }

        let machine = self.machine();
        let Some(reply) = machine.select_move(&state.board, Side::Machine, &mut state.rng)? else {
            self.finish(state, Side::Human, summary.compose(message::HUMAN_WINS_MACHINE_STUCK));
            return Ok(());
        };
        state.board.apply_move(reply)?;
        state.last_machine_move = Some(reply);
        let machine_pass = rule.resolve(&mut state.board);
        log_pass(Side::Machine, &machine_pass);
        summary.machine_pass = Some(machine_pass);

        if state.board.piece_count(Side::Human) == 0 {
            self.finish(state, Side::Machine, summary.compose(message::MACHINE_WINS_BY_CAPTURE));
        } else if state.board.piece_count(Side::Machine) == 0 {
            self.finish(state, Side::Human, summary.compose(message::HUMAN_WINS_BY_CAPTURE));
        } else if !can_move(&state.board, Side::Human) {
            self.finish(state, Side::Machine, summary.compose(message::MACHINE_WINS_HUMAN_STUCK));
        } else {
            state.message = summary.compose(message::MACHINE_MOVED);
        }
        Ok(())
    }

    fn finish(&self, state: &mut GameState, winner: Side, text: String) {
        log::debug!("game over under {} rule: {winner} wins", self.config.rule);
        state.finish(winner, text);
    }
}

fn log_pass(mover: Side, pass: &EliminationResult) {
    if !pass.is_empty() {
        log::debug!(
            "after {mover} move: removed {} human and {} machine piece(s)",
            pass.human,
            pass.machine
        );
    }
}
