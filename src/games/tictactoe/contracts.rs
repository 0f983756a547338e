//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::history::GameHistory;
use super::invariants::{InvariantSet, ReplayInvariants};
use super::rules::evaluate;
use super::{Board, Verdict};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the board has no winner and is not full.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a won or drawn board.
    #[instrument(level = "trace", skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if evaluate(board) == Verdict::Ongoing {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(level = "trace", skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(mov.position))
        }
    }
}

/// Precondition: It must be the player's turn at the viewed snapshot.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player who is not on turn.
    #[instrument(level = "trace", skip(history))]
    pub fn check(mov: &Move, history: &GameHistory) -> Result<(), MoveError> {
        if mov.player == history.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions on a history.
///
/// Preconditions, checked in order:
/// - Game not over at the viewed snapshot
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - The history invariants hold
/// - The new history ends one snapshot after the old pointer
pub struct MoveContract;

impl Contract<GameHistory, Move> for MoveContract {
    fn pre(history: &GameHistory, action: &Move) -> Result<(), MoveError> {
        let board = history.current_board();
        GameNotOver::check(board)?;
        SquareIsEmpty::check(action, board)?;
        PlayersTurn::check(action, history)?;
        Ok(())
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), MoveError> {
        ReplayInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let expected_len = before.current_move() + 2;
        if after.snapshot_count() != expected_len || !after.is_at_latest() {
            warn!(
                expected_len,
                actual_len = after.snapshot_count(),
                "History was not truncated to the viewed move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must end one move after the viewed snapshot"
                    .to_string(),
            ));
        }

        if after.snapshots()[..=before.current_move()] != before.snapshots()[..=before.current_move()] {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: earlier snapshots must be kept".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let history = GameHistory::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&history, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let history = GameHistory::new().apply_move(Position::Center).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&history, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let history = GameHistory::new();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&history, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        // X wins top row; O then tries an occupied square.
        let history = GameHistory::replay(&[0, 3, 1, 4, 2]).unwrap();
        let action = Move::new(Player::O, Position::TopLeft);
        assert_eq!(MoveContract::pre(&history, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let history = GameHistory::replay(&[0, 4]).unwrap();
        let after = history.apply_move(Position::BottomRight).unwrap();
        assert!(MoveContract::post(&history, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let history = GameHistory::new();
        let mut after = history.apply_move(Position::Center).unwrap();
        after.snapshots[1].set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&history, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let mut before = GameHistory::replay(&[0, 4, 8]).unwrap();
        before.jump_to(1).unwrap();
        // A history that kept the old tail is not a valid successor.
        let stale = GameHistory::replay(&[0, 4, 8, 2]).unwrap();
        assert!(MoveContract::post(&before, &stale).is_err());
    }
}
