//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage to enable composition into contract systems.

pub mod apply;
pub mod draw;
pub mod win;

pub use apply::next_snapshot;
pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, evaluate};
