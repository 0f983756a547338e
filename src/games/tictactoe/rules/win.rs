//! Win detection and board evaluation for tic-tac-toe.

use super::super::{Board, Player, Position, Square, Verdict, WinningLine};
use super::draw::is_full;
use tracing::{instrument, trace};

use Position::*;

/// The eight winning lines in evaluation order.
///
/// The first completed line in this order is the one reported.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([TopLeft, TopCenter, TopRight]),
    WinningLine::new([MiddleLeft, Center, MiddleRight]),
    WinningLine::new([BottomLeft, BottomCenter, BottomRight]),
    // Columns
    WinningLine::new([TopLeft, MiddleLeft, BottomLeft]),
    WinningLine::new([TopCenter, Center, BottomCenter]),
    WinningLine::new([TopRight, MiddleRight, BottomRight]),
    // Diagonals
    WinningLine::new([TopLeft, Center, BottomRight]),
    WinningLine::new([TopRight, Center, BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first completed line, or `None`.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Classifies a snapshot as ongoing, drawn, or won.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    let verdict = if let Some((player, line)) = check_winner(board) {
        Verdict::Winner { player, line }
    } else if is_full(board) {
        Verdict::Draw
    } else {
        Verdict::Ongoing
    };
    trace!(%verdict, "Evaluated board");
    verdict
}
