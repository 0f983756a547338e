//! Non-interactive play: apply a list of cells and report the result.

use crate::games::tictactoe::{
    GameHistory, Move, MoveList, MoveOutcome, Player, SortOrder, Verdict, status_line,
};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A cell that was played but had no effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredMove {
    /// Cell index as given.
    pub cell: usize,
    /// Why the move was ignored.
    pub reason: String,
}

/// Outcome of a scripted game.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    history: GameHistory,
    sort_order: SortOrder,
    ignored: Vec<IgnoredMove>,
}

#[derive(Serialize)]
struct Summary<'a> {
    current_move: usize,
    snapshot_count: usize,
    to_move: Player,
    verdict: Verdict,
    status: String,
    board: Vec<Option<Player>>,
    moves: Vec<Move>,
    move_list: MoveList,
    ignored: &'a [IgnoredMove],
}

/// Plays `cells` from the empty board, then optionally jumps to `jump`.
///
/// Ignored moves are collected in the report. Out-of-range cells and
/// jump targets abort with an error.
#[instrument]
pub fn run_script(cells: &[usize], jump: Option<usize>, sort_order: SortOrder) -> Result<ScriptReport> {
    let mut history = GameHistory::new();
    let mut ignored = Vec::new();

    for &cell in cells {
        match history
            .play(cell)
            .with_context(|| format!("Cannot play cell {}", cell))?
        {
            MoveOutcome::Applied(_) => {}
            MoveOutcome::Ignored(reason) => {
                warn!(cell, %reason, "Scripted move ignored");
                ignored.push(IgnoredMove {
                    cell,
                    reason: reason.to_string(),
                });
            }
        }
    }

    if let Some(target) = jump {
        history
            .jump_to(target)
            .with_context(|| format!("Cannot jump to move {}", target))?;
    }

    info!(
        moves = history.latest_move(),
        ignored = ignored.len(),
        verdict = %history.verdict(),
        "Script finished"
    );
    Ok(ScriptReport {
        history,
        sort_order,
        ignored,
    })
}

impl ScriptReport {
    /// The resulting history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The move list as printed.
    pub fn move_list(&self) -> MoveList {
        MoveList::from_history(&self.history, self.sort_order)
    }

    /// Moves that had no effect.
    pub fn ignored(&self) -> &[IgnoredMove] {
        &self.ignored
    }

    /// Pretty JSON summary of the viewed snapshot and the move list.
    pub fn to_json(&self) -> Result<String> {
        let summary = Summary {
            current_move: self.history.current_move(),
            snapshot_count: self.history.snapshot_count(),
            to_move: self.history.to_move(),
            verdict: self.history.verdict(),
            status: status_line(&self.history),
            board: self
                .history
                .current_board()
                .squares()
                .iter()
                .map(|s| s.player())
                .collect(),
            moves: self.history.moves(),
            move_list: self.move_list(),
            ignored: &self.ignored,
        };
        serde_json::to_string_pretty(&summary).context("Failed to serialize summary")
    }

    /// Plain-text rendering: board, status, move list, ignored moves.
    ///
    /// Empty squares print as `.`, never as key hints.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.history.current_board().display(false));
        out.push_str("\n\n");
        out.push_str(&status_line(&self.history));
        out.push('\n');

        let list = self.move_list();
        out.push_str(&format!("\nMoves ({}):\n", self.sort_order));
        for entry in list.entries() {
            let marker = if *entry.is_current() { '>' } else { ' ' };
            out.push_str(&format!("{} {}\n", marker, entry.label()));
        }

        for skipped in &self.ignored {
            out.push_str(&format!("ignored cell {}: {}\n", skipped.cell, skipped.reason));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::MoveError;

    #[test]
    fn test_script_collects_ignored_moves() {
        let report = run_script(&[4, 4, 0], None, SortOrder::Ascending).unwrap();
        assert_eq!(report.history().latest_move(), 2);
        assert_eq!(
            report.ignored(),
            &[IgnoredMove {
                cell: 4,
                reason: MoveError::SquareOccupied(crate::Position::Center).to_string(),
            }]
        );
    }

    #[test]
    fn test_script_rejects_out_of_range_cell() {
        let err = run_script(&[0, 12], None, SortOrder::Ascending).unwrap_err();
        assert!(err.to_string().contains("Cannot play cell 12"));
    }

    #[test]
    fn test_script_rejects_bad_jump() {
        assert!(run_script(&[0], Some(5), SortOrder::Ascending).is_err());
    }

    #[test]
    fn test_json_summary() {
        let report = run_script(&[0, 3, 1, 4, 2], None, SortOrder::Ascending).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], "Winner: X");
        assert_eq!(value["current_move"], 5);
        assert_eq!(value["board"][0], "X");
        assert_eq!(value["board"][8], serde_json::Value::Null);
        assert_eq!(value["move_list"]["entries"].as_array().map(Vec::len), Some(6));
    }

    #[test]
    fn test_text_marks_current_entry() {
        let report = run_script(&[4, 0], Some(1), SortOrder::Descending).unwrap();
        let text = report.to_text();
        assert!(text.contains("Next player: O"));
        assert!(text.contains("> You are at move #1"));
        assert!(text.contains("  Go to move #2 (0, 0)"));
        assert!(text.find("#2").unwrap() < text.find("#1").unwrap());
    }
}
