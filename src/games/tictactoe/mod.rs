//! Tic-tac-toe with branching move history.

mod action;
mod contracts;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod types;
mod verdict;

pub use action::{Move, MoveError, MoveOutcome, NavigationError};
pub use contracts::{Contract, GameNotOver, MoveContract, PlayersTurn, SquareIsEmpty};
pub use history::GameHistory;
pub use move_list::{MoveList, MoveListEntry, SortOrder, status_line};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_draw, is_full, next_snapshot};
pub use types::{Board, Player, Square};
pub use verdict::{Verdict, WinningLine};
