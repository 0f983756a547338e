//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: players alternate turns along the history.
///
/// The square filled by move `k` (0-based) holds X when `k` is even and O
/// when `k` is odd, no matter how the pointer was moved before playing.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.snapshots().windows(2).enumerate().all(|(k, pair)| {
            let expected = Square::Occupied(Player::for_move_index(k));
            pair[0]
                .changed_positions(&pair[1])
                .iter()
                .all(|pos| pair[1].get(*pos) == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let history = GameHistory::replay(&[0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&history));
        assert_eq!(history.to_move(), Player::O);
    }

    #[test]
    fn test_branching_keeps_alternation() {
        let mut history = GameHistory::replay(&[0, 4, 2]).unwrap();
        history.jump_to(1).unwrap();
        history.play(5).unwrap();
        assert_eq!(history.move_at(2).map(|m| m.player), Some(Player::O));
        assert!(AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::replay(&[0]).unwrap();
        let forced = history.snapshots[1].with_mark(Position::Center, Player::X);
        history.snapshots.push(forced);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
