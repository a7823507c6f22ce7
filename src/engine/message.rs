//! Status lines shown to the player.
//!
//! Messages carry no state; they summarize what a turn did.

use crate::core::Side;
use crate::rules::EliminationResult;

pub const OPENING: &str = "Your turn! Select one of your pieces.";
pub const PIECE_SELECTED: &str = "Piece selected.";
pub const MACHINE_MOVED: &str = "Machine moved.";
pub const HUMAN_WINS_BY_CAPTURE: &str = "VICTORY! All AI pieces captured.";
pub const HUMAN_WINS_MACHINE_STUCK: &str = "VICTORY! Machine is stuck.";
pub const MACHINE_WINS_BY_CAPTURE: &str = "DEFEAT! All your pieces were captured.";
pub const MACHINE_WINS_HUMAN_STUCK: &str = "DEFEAT! You have no legal moves.";

/// Elimination passes of one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// Removals after the human's move.
    pub human_pass: EliminationResult,
    /// Removals after the machine's reply, if it got to move.
    pub machine_pass: Option<EliminationResult>,
}

impl TurnSummary {
    #[must_use]
    pub fn new(human_pass: EliminationResult) -> Self {
        Self {
            human_pass,
            machine_pass: None,
        }
    }

    /// `headline` followed by what each pass removed.
    #[must_use]
    pub fn compose(&self, headline: &str) -> String {
        let mut parts = vec![headline.to_string()];
        parts.extend(pass_report(Side::Human, &self.human_pass));
        if let Some(pass) = &self.machine_pass {
            parts.extend(pass_report(Side::Machine, pass));
        }
        parts.join(" ")
    }
}

/// Sentences describing one pass, from the mover's perspective: opposing
/// pieces removed first, then the mover's own (self-capture).
fn pass_report(mover: Side, pass: &EliminationResult) -> Vec<String> {
    let taken = pass.removed(mover.opponent());
    let lost = pass.removed(mover);
    let mut lines = Vec::new();
    match mover {
        Side::Human => {
            if taken > 0 {
                lines.push(format!("You captured {taken} AI piece(s)!"));
            }
            if lost > 0 {
                lines.push(format!("You lost {lost} piece(s)!"));
            }
        }
        Side::Machine => {
            if taken > 0 {
                lines.push(format!("AI captured {taken} of your piece(s)!"));
            }
            if lost > 0 {
                lines.push(format!("AI lost {lost} piece(s)!"));
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_turn() {
        let summary = TurnSummary {
            human_pass: EliminationResult::default(),
            machine_pass: Some(EliminationResult::default()),
        };
        assert_eq!(summary.compose(MACHINE_MOVED), "Machine moved.");
    }

    #[test]
    fn test_both_passes_reported() {
        let summary = TurnSummary {
            human_pass: EliminationResult { human: 1, machine: 2 },
            machine_pass: Some(EliminationResult { human: 1, machine: 1 }),
        };
        assert_eq!(
            summary.compose(MACHINE_MOVED),
            "Machine moved. You captured 2 AI piece(s)! You lost 1 piece(s)! \
             AI captured 1 of your piece(s)! AI lost 1 piece(s)!"
        );
    }

    #[test]
    fn test_human_pass_only() {
        let summary = TurnSummary::new(EliminationResult { human: 0, machine: 4 });
        assert_eq!(
            summary.compose(HUMAN_WINS_BY_CAPTURE),
            "VICTORY! All AI pieces captured. You captured 4 AI piece(s)!"
        );
    }
}
