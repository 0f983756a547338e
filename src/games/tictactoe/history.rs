//! Branching move history for a single game.
//!
//! The history is an ordered list of board snapshots starting from the
//! empty board, plus a pointer to the snapshot currently on screen.
//! Whose turn it is follows from the pointer's parity, so navigating
//! backwards and playing on always hands the move to the right player.
//!
//! Playing from an earlier snapshot discards every later snapshot before
//! the new one is appended. There is no redo.

use super::action::{Move, MoveError, MoveOutcome, NavigationError};
use super::contracts::{Contract, MoveContract};
use super::rules::evaluate;
use super::{Board, Player, Position, Verdict};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Snapshots of one game plus the viewed move pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameHistory {
    pub(super) snapshots: Vec<Board>,
    pub(super) current: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Replays cell indices from the empty board.
    ///
    /// Ignored moves are skipped. An out-of-range cell fails the whole
    /// replay and no partial history is returned.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for &cell in cells {
            history.play(cell)?;
        }
        Ok(history)
    }

    /// All snapshots, oldest first. `snapshots()[0]` is the empty board.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Number of snapshots (moves played on this branch plus one).
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    /// The viewed move pointer.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Index of the last snapshot.
    pub fn latest_move(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Returns true when the viewed snapshot is the last one.
    pub fn is_at_latest(&self) -> bool {
        self.current == self.latest_move()
    }

    /// The viewed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// The player who moves next from the viewed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move_index(self.current)
    }

    /// Verdict of the viewed snapshot.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// The move that produced snapshot `n` (`n >= 1`).
    pub fn move_at(&self, n: usize) -> Option<Move> {
        if n == 0 {
            return None;
        }
        let before = self.snapshots.get(n - 1)?;
        let after = self.snapshots.get(n)?;
        match before.changed_positions(after).as_slice() {
            [position] => Some(Move::new(Player::for_move_index(n - 1), *position)),
            _ => None,
        }
    }

    /// Every move on the current branch, in order.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len()).filter_map(|n| self.move_at(n)).collect()
    }

    /// Plays at `pos` for the player whose turn it is, returning the new history.
    ///
    /// `self` is left untouched.
    pub fn apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        self.apply_action(Move::new(self.to_move(), pos))
    }

    /// Applies an explicit move, returning the new history.
    ///
    /// Snapshots after the viewed one are dropped before the new snapshot is
    /// appended, and the pointer moves to the new last index.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the viewed snapshot is won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    /// - [`MoveError::WrongPlayer`] if `action.player` is not on turn.
    /// - [`MoveError::InvariantViolation`] if a debug postcondition fails.
    #[instrument(skip(self), fields(current = self.current, len = self.snapshots.len()))]
    pub fn apply_action(&self, action: Move) -> Result<Self, MoveError> {
        MoveContract::pre(self, &action)?;

        let next = self.current_board().with_mark(action.position, action.player);
        let mut snapshots = Vec::with_capacity(self.current + 2);
        snapshots.extend_from_slice(&self.snapshots[..=self.current]);
        snapshots.push(next);

        let after = Self {
            current: snapshots.len() - 1,
            snapshots,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &after)?;

        Ok(after)
    }

    /// Click-style move at a raw cell index.
    ///
    /// Occupied cells and moves after the game ended are ignored silently:
    /// the history is unchanged and [`MoveOutcome::Ignored`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for `cell >= 9`, and passes through
    /// any non-silent error from [`GameHistory::apply_action`].
    #[instrument(skip(self), fields(current = self.current))]
    pub fn play(&mut self, cell: usize) -> Result<MoveOutcome, MoveError> {
        let position = Position::try_from(cell)?;
        let action = Move::new(self.to_move(), position);

        match self.apply_action(action) {
            Ok(next) => {
                *self = next;
                info!(%action, move_number = self.current, "Move applied");
                let verdict = self.verdict();
                if verdict.is_terminal() {
                    info!(%verdict, "Game finished");
                }
                Ok(MoveOutcome::Applied(action))
            }
            Err(e) if e.is_silent() => {
                debug!(%action, reason = %e, "Move ignored");
                Ok(MoveOutcome::Ignored(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Moves the pointer to `target` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError`] if `target` is past the last snapshot.
    #[instrument(skip(self), fields(current = self.current))]
    pub fn jump_to(&mut self, target: usize) -> Result<usize, NavigationError> {
        if target >= self.snapshots.len() {
            return Err(NavigationError {
                target,
                len: self.snapshots.len(),
            });
        }
        self.current = target;
        info!(move_number = target, "Jumped to move");
        Ok(self.current)
    }

    /// Steps one snapshot back. Returns false at the game start.
    pub fn step_back(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(target) => self.jump_to(target).is_ok(),
            None => false,
        }
    }

    /// Steps one snapshot forward. Returns false at the last snapshot.
    pub fn step_forward(&mut self) -> bool {
        self.jump_to(self.current + 1).is_ok()
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history_has_empty_snapshot() {
        let history = GameHistory::new();
        assert_eq!(history.snapshot_count(), 1);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current_board(), &Board::new());
        assert_eq!(history.to_move(), Player::X);
        assert_eq!(history.verdict(), Verdict::Ongoing);
    }

    #[test]
    fn test_apply_move_is_copy_on_write() {
        let history = GameHistory::new();
        let next = history.apply_move(Position::Center).unwrap();

        assert_eq!(history.snapshot_count(), 1);
        assert_eq!(next.snapshot_count(), 2);
        assert_eq!(next.current_move(), 1);
        assert_eq!(next.to_move(), Player::O);
    }

    #[test]
    fn test_apply_action_wrong_player() {
        let history = GameHistory::new();
        let result = history.apply_action(Move::new(Player::O, Position::Center));
        assert_eq!(result, Err(MoveError::WrongPlayer(Player::O)));
    }

    #[test]
    fn test_play_occupied_is_ignored() {
        let mut history = GameHistory::replay(&[4]).unwrap();
        let before = history.clone();

        let outcome = history.play(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(MoveError::SquareOccupied(Position::Center)));
        assert_eq!(history, before);
    }

    #[test]
    fn test_play_out_of_bounds_is_error() {
        let mut history = GameHistory::new();
        assert_eq!(history.play(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(history, GameHistory::new());
    }

    #[test]
    fn test_move_at_reports_cell_and_player() {
        let history = GameHistory::replay(&[4, 0]).unwrap();
        assert_eq!(history.move_at(0), None);
        assert_eq!(history.move_at(1), Some(Move::new(Player::X, Position::Center)));
        assert_eq!(history.move_at(2), Some(Move::new(Player::O, Position::TopLeft)));
        assert_eq!(history.move_at(3), None);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut history = GameHistory::replay(&[0, 1]).unwrap();
        assert!(!history.step_forward());
        assert!(history.step_back());
        assert!(history.step_back());
        assert!(!history.step_back());
        assert_eq!(history.current_move(), 0);
        assert!(history.step_forward());
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_replay_fails_whole_on_out_of_range_cell() {
        assert_eq!(GameHistory::replay(&[4, 0, 11, 8]), Err(MoveError::OutOfBounds(11)));
    }
}
