//! Tests that the history invariants hold across play and navigation.

use tictactoe_replay::{
    GameHistory, HistoryConsistentInvariant, Invariant, InvariantSet, MonotonicBoardInvariant,
    ReplayInvariants,
};

#[test]
fn test_invariants_hold_through_branching_session() {
    let mut history = GameHistory::new();
    let script: &[(Option<usize>, usize)] = &[
        (None, 4),
        (None, 0),
        (None, 8),
        (Some(1), 2),
        (None, 6),
        (Some(0), 5),
        (None, 3),
        (None, 4),
    ];

    for &(jump, cell) in script {
        if let Some(target) = jump {
            history.jump_to(target).unwrap();
        }
        history.play(cell).unwrap();
        assert!(ReplayInvariants::check_all(&history).is_ok());
    }
}

#[test]
fn test_invariants_hold_on_finished_game() {
    let history = GameHistory::replay(&[0, 3, 1, 4, 2, 8, 7]).unwrap();
    // The last two cells came after X's win and were ignored.
    assert_eq!(history.snapshot_count(), 6);
    assert!(MonotonicBoardInvariant::holds(&history));
    assert!(HistoryConsistentInvariant::holds(&history));
}
