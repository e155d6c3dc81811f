use serde::{Deserialize, Serialize};

/// State of a single cell, combining what the player sees with whether it holds a mine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Closed,
    ClosedMine,
    MarkedEmpty,
    MarkedMine,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::ClosedMine | Self::MarkedMine)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::MarkedEmpty | Self::MarkedMine)
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn is_unrevealed(self) -> bool {
        !self.is_open()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Closed
    }
}
