//! Tic-tac-toe with branching move history and replay.
//!
//! # Architecture
//!
//! - **History store**: [`GameHistory`] keeps every board snapshot of one game
//!   and the pointer to the viewed one. Playing from an earlier snapshot
//!   discards the snapshots after it.
//! - **Board evaluator**: [`evaluate`] classifies a snapshot as
//!   [`Verdict::Ongoing`], [`Verdict::Draw`] or a winner with its line.
//! - **Move applier**: [`next_snapshot`] and [`GameHistory::apply_move`]
//!   produce new values and leave their inputs untouched.
//! - **Front ends**: a ratatui terminal UI and a scripted `play` command.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameHistory, MoveOutcome, Player, Verdict};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.play(cell).unwrap();
//! }
//! assert_eq!(game.verdict().winner(), Some(Player::X));
//!
//! // Review the start, then branch from there.
//! game.jump_to(0).unwrap();
//! assert!(matches!(game.play(8), Ok(MoveOutcome::Applied(_))));
//! assert_eq!(game.snapshot_count(), 2);
//! assert_eq!(game.verdict(), Verdict::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod script;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, GameHistory, GameNotOver, Move, MoveContract, MoveError, MoveList,
    MoveListEntry, MoveOutcome, NavigationError, Player, PlayersTurn, Position, SortOrder, Square,
    SquareIsEmpty, Verdict, WinningLine, check_winner, evaluate, is_draw, is_full, next_snapshot,
    status_line,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, ReplayInvariants,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules::LINES;

// Crate-level exports - Front ends
pub use script::{IgnoredMove, ScriptReport, run_script};
pub use tui::{App, Focus, move_cursor, run_tui};
