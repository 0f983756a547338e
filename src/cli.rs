//! Command-line interface for tictactoe_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and replay
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Tic-tac-toe with branching move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a sequence of cells (0-8) and print the result
    Play {
        /// Cells to play in order, X first
        cells: Vec<usize>,

        /// Jump to this move number after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
}
