//! Engine for a three-dimensional Minesweeper.
//!
//! A [`Minefield`] owns a dense `width x height x depth` grid of [`Cell`]s. Callers open cells with
//! [`Minefield::touch`], toggle flags with [`Minefield::mark`] and read [`Minefield::has_won`] and
//! [`Minefield::mines_remaining`] after every move. [`GameSession`] wraps that loop with win/loss
//! tracking for a presentation layer.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use minefield::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod minefield;
mod session;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub size: Coord3,
    pub mines: CellCount,
}

impl FieldConfig {
    pub const fn new_unchecked(size: Coord3, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Clamps every dimension to at least 1 and the mine count to the number of cells.
    pub fn new((size_x, size_y, size_z): Coord3, mines: CellCount) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        let size_z = size_z.clamp(1, Coord::MAX);
        let mines = mines.min(mult3(size_x, size_y, size_z));
        Self::new_unchecked((size_x, size_y, size_z), mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult3(self.size.0, self.size.1, self.size.2)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<()> {
        let (x, y, z) = self.size;
        if x == 0 || y == 0 || z == 0 {
            return Err(FieldError::InvalidSize);
        }
        // mult3 saturates, so the exact product has to fit before it can be trusted
        let total = CellCount::from(x)
            .checked_mul(y.into())
            .and_then(|n| n.checked_mul(z.into()))
            .ok_or(FieldError::InvalidSize)?;
        if self.mines > total {
            return Err(FieldError::TooManyMines);
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Cube presets offered by the classic desktop game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn side(self) -> Coord {
        match self {
            Self::Easy => 6,
            Self::Medium => 11,
            Self::Hard => 15,
        }
    }

    pub const fn mines(self) -> CellCount {
        match self {
            Self::Easy => 10,
            Self::Medium => 60,
            Self::Hard => 160,
        }
    }

    pub const fn config(self) -> FieldConfig {
        let side = self.side();
        FieldConfig::new_unchecked((side, side, side), self.mines())
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl From<Difficulty> for FieldConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}
