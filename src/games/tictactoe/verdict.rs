//! Board verdicts: ongoing, draw, or a winner with the completed line.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// An ordered triple of positions that forms a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Creates a line from three positions.
    pub const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The positions in enumeration order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices in enumeration order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Classification of a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No completed line and at least one empty square.
    Ongoing,
    /// Every square filled, no completed line.
    Draw,
    /// A player completed a line.
    Winner {
        /// The player owning the line.
        player: Player,
        /// The completed line.
        line: WinningLine,
    },
}

impl Verdict {
    /// Returns true for `Draw` and `Winner`. No further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Verdict::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Ongoing => write!(f, "Ongoing"),
            Verdict::Draw => write!(f, "Draw"),
            Verdict::Winner { player, .. } => write!(f, "Winner: {}", player),
        }
    }
}
