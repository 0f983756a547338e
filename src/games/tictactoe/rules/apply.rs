//! Producing the next board snapshot from a move.

use super::super::action::{Move, MoveError};
use super::super::contracts::{GameNotOver, SquareIsEmpty};
use super::super::{Board, Player, Position};
use tracing::instrument;

/// Returns a fresh snapshot with `player`'s mark at `pos`.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if `board` already has a winner or is full.
/// - [`MoveError::SquareOccupied`] if the square is taken.
#[instrument(level = "debug", skip(board))]
pub fn next_snapshot(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    let action = Move::new(player, pos);
    GameNotOver::check(board)?;
    SquareIsEmpty::check(&action, board)?;
    Ok(board.with_mark(pos, player))
}
