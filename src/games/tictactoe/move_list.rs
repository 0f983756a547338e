//! Presentation model for the move history list.

use super::history::GameHistory;
use super::{Position, Verdict};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveListEntry {
    /// Snapshot index this entry jumps to.
    move_number: usize,
    /// Text shown for the entry.
    label: String,
    /// Whether this is the viewed snapshot (shown as plain text, not a jump target).
    is_current: bool,
    /// Cell played to reach this snapshot; `None` for the game start.
    position: Option<Position>,
}

impl MoveListEntry {
    fn jump_label(move_number: usize, position: Option<Position>) -> String {
        match position {
            Some(pos) if move_number > 0 => {
                format!("Go to move #{} ({}, {})", move_number, pos.row(), pos.col())
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// The move list for a history, ordered for display.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveList {
    /// Entries in display order.
    entries: Vec<MoveListEntry>,
    /// Order the entries were laid out in.
    sort_order: SortOrder,
}

impl MoveList {
    /// Builds the list for a history, laid out in `sort_order`.
    #[instrument(skip(history), fields(len = history.snapshot_count(), current = history.current_move()))]
    pub fn from_history(history: &GameHistory, sort_order: SortOrder) -> Self {
        let mut entries: Vec<MoveListEntry> = (0..history.snapshot_count())
            .map(|n| {
                let position = history.move_at(n).map(|m| m.position);
                let is_current = n == history.current_move();
                let label = if is_current {
                    format!("You are at move #{}", n)
                } else {
                    MoveListEntry::jump_label(n, position)
                };
                MoveListEntry {
                    move_number: n,
                    label,
                    is_current,
                    position,
                }
            })
            .collect();

        if sort_order == SortOrder::Descending {
            entries.reverse();
        }

        Self {
            entries,
            sort_order,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries. Never true for a list built from a history.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display row of the viewed snapshot.
    pub fn current_row(&self) -> Option<usize> {
        self.entries.iter().position(|e| e.is_current)
    }

    /// Label for the control that flips the order.
    pub fn toggle_label(&self) -> &'static str {
        match self.sort_order {
            SortOrder::Ascending => "Sort Descending",
            SortOrder::Descending => "Sort Ascending",
        }
    }
}

/// One-line status for the viewed snapshot.
pub fn status_line(history: &GameHistory) -> String {
    match history.verdict() {
        Verdict::Winner { player, .. } => format!("Winner: {}", player),
        Verdict::Draw => "Draw".to_string(),
        Verdict::Ongoing => format!("Next player: {}", history.to_move()),
    }
}
