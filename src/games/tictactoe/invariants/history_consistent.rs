//! History consistency invariant: the pointer is valid and play stops at game end.

use super::super::GameHistory;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: the move pointer indexes an existing snapshot, and no
/// snapshot follows one that is already won or drawn.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        if history.current_move() >= snapshots.len() {
            return false;
        }

        snapshots
            .iter()
            .take(snapshots.len().saturating_sub(1))
            .all(|board| !evaluate(board).is_terminal())
    }

    fn description() -> &'static str {
        "Move pointer is in range and no move follows a finished game"
    }
}
