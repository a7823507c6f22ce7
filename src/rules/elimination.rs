//! Piece elimination rules.
//!
//! After every move the active `EliminationRule` removes pieces from the
//! board. All variants judge the whole board as it stood before the pass
//! and only then remove what they found, so one removal never frees or
//! dooms another piece within the same pass.
//!
//! - `Blocking`: nothing is ever removed; a side loses by getting stuck.
//! - `TrappedPieceRemoval`: every single piece without an empty orthogonal
//!   neighbor is removed.
//! - `FloodFillCaptureRemoval`: every connected same-side group without a
//!   liberty is removed, Go style. A move may capture and suicide at once.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Position, Side, CELL_COUNT};

/// Pieces removed from each side in one resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EliminationResult {
    pub human: u32,
    pub machine: u32,
}

impl EliminationResult {
    /// Pieces `side` lost.
    #[must_use]
    pub fn removed(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Machine => self.machine,
        }
    }

    fn credit(&mut self, side: Side) {
        match side {
            Side::Human => self.human += 1,
            Side::Machine => self.machine += 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.human == 0 && self.machine == 0
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.human + self.machine
    }
}

/// Removal rule applied after every move.
///
/// ## Implementation Notes
///
/// - `resolve` mutates the board in place and reports what it removed
/// - Decisions are made against the pre-pass board only
/// - Must be deterministic: the machine's search simulates it
pub trait EliminationRule {
    fn resolve(&self, board: &mut Board) -> EliminationResult;
}

/// No removals.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blocking;

impl EliminationRule for Blocking {
    fn resolve(&self, _board: &mut Board) -> EliminationResult {
        EliminationResult::default()
    }
}

/// Removes every piece with no empty orthogonal neighbor.
///
/// Off-board neighbors neither help nor hurt: a corner piece needs one of
/// its two on-board neighbors empty to survive.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrappedPieceRemoval;

impl EliminationRule for TrappedPieceRemoval {
    fn resolve(&self, board: &mut Board) -> EliminationResult {
        let trapped: SmallVec<[(Position, Side); CELL_COUNT]> = board
            .iter()
            .filter_map(|(pos, cell)| cell.owner().map(|side| (pos, side)))
            .filter(|&(pos, _)| !board.has_liberty(pos))
            .collect();
        remove_all(board, &trapped)
    }
}

/// Removes every connected group that has no liberty.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloodFillCaptureRemoval;

impl EliminationRule for FloodFillCaptureRemoval {
    fn resolve(&self, board: &mut Board) -> EliminationResult {
        let mut visited: FxHashSet<Position> = FxHashSet::default();
        let mut captured: SmallVec<[(Position, Side); CELL_COUNT]> = SmallVec::new();

        for (start, cell) in board.iter() {
            let Some(owner) = cell.owner() else {
                continue;
            };
            if !visited.insert(start) {
                continue;
            }
            let group = collect_group(board, start, owner, &mut visited);
            if !group.iter().any(|&pos| board.has_liberty(pos)) {
                captured.extend(group.into_iter().map(|pos| (pos, owner)));
            }
        }

        remove_all(board, &captured)
    }
}

/// Breadth-first walk over `owner`'s pieces connected to `start`.
///
/// `start` must already be in `visited`.
fn collect_group(
    board: &Board,
    start: Position,
    owner: Side,
    visited: &mut FxHashSet<Position>,
) -> SmallVec<[Position; CELL_COUNT]> {
    let target = owner.cell();
    let mut group = SmallVec::new();
    let mut queue = VecDeque::from([start]);

    while let Some(pos) = queue.pop_front() {
        group.push(pos);
        for next in pos.neighbors() {
            if board.at(next) == target && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    group
}

fn remove_all(board: &mut Board, doomed: &[(Position, Side)]) -> EliminationResult {
    let mut result = EliminationResult::default();
    for &(pos, side) in doomed {
        board.put(pos, Cell::Empty);
        result.credit(side);
    }
    if !result.is_empty() {
        log::trace!(
            "removed {} human and {} machine piece(s)",
            result.human,
            result.machine
        );
    }
    result
}

/// Configuration-level choice of elimination rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Blocking,
    #[default]
    TrappedPiece,
    FloodFillCapture,
}

impl RuleKind {
    pub const ALL: [RuleKind; 3] = [RuleKind::Blocking, RuleKind::TrappedPiece, RuleKind::FloodFillCapture];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::Blocking => "blocking",
            RuleKind::TrappedPiece => "trapped_piece",
            RuleKind::FloodFillCapture => "flood_fill_capture",
        }
    }
}

impl EliminationRule for RuleKind {
    fn resolve(&self, board: &mut Board) -> EliminationResult {
        match self {
            RuleKind::Blocking => Blocking.resolve(board),
            RuleKind::TrappedPiece => TrappedPieceRemoval.resolve(board),
            RuleKind::FloodFillCapture => FloodFillCaptureRemoval.resolve(board),
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown rule {s:?}"))
    }
}
