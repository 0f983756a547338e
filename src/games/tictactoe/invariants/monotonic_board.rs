//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameHistory, Square};
use super::Invariant;

/// Invariant: the first snapshot is empty and every later snapshot differs
/// from its predecessor in exactly one square, which was empty before.
///
/// Marks are never overwritten or removed along a branch.
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn is_single_step(before: &Board, after: &Board) -> bool {
        match before.changed_positions(after).as_slice() {
            [pos] => before.get(*pos) == Square::Empty && after.get(*pos) != Square::Empty,
            _ => false,
        }
    }
}

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();

        match snapshots.first() {
            Some(first) if *first == Board::new() => {}
            _ => return false,
        }

        snapshots
            .windows(2)
            .all(|pair| Self::is_single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}
