use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Ready,
    Active,
    Won,
    Lost,
}

impl SessionState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Ready
    }
}

/// What a presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Marked,
    Revealed(u8),
    Mine,
    TriggeredMine,
    Misflagged,
}

/// One round of play: a [`Minefield`] plus the win/loss bookkeeping around it.
///
/// Revealing a mine is a loss decided here, before the field is touched; the field itself never
/// opens a mine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    minefield: Minefield,
    state: SessionState,
    triggered_mine: Option<Coord3>,
    moves: u32,
}

impl GameSession {
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self> {
        Ok(Self::from_minefield(Minefield::new(config, seed)?))
    }

    pub fn from_minefield(minefield: Minefield) -> Self {
        Self {
            minefield,
            state: Default::default(),
            triggered_mine: None,
            moves: 0,
        }
    }

    /// Throws the current field away and starts over on a fresh one.
    pub fn restart(&mut self, config: FieldConfig, seed: u64) -> Result<()> {
        let minefield = Minefield::new(config, seed)?;
        log::debug!("Restarting session on {:?}", config);
        *self = Self::from_minefield(minefield);
        Ok(())
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn triggered_mine(&self) -> Option<Coord3> {
        self.triggered_mine
    }

    /// Moves that changed the field, the losing one included.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn mines_remaining(&self) -> i64 {
        self.minefield.mines_remaining()
    }

    pub fn reveal(&mut self, coords: Coord3) -> Result<RevealOutcome> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_not_finished()?;

        match self.minefield[coords] {
            Cell::ClosedMine => {
                self.triggered_mine = Some(coords);
                self.moves += 1;
                self.end_game(false);
                Ok(RevealOutcome::HitMine)
            }
            Cell::Closed => {
                self.minefield.touch(coords)?;
                self.moves += 1;

                if self.minefield.has_won() {
                    self.end_game(true);
                    Ok(RevealOutcome::Won)
                } else {
                    self.mark_started();
                    Ok(RevealOutcome::Revealed)
                }
            }
            _ => Ok(RevealOutcome::NoChange),
        }
    }

    pub fn toggle_mark(&mut self, coords: Coord3) -> Result<MarkOutcome> {
        let coords = self.minefield.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = self.minefield.mark(coords)?;
        if outcome.has_update() {
            self.moves += 1;
            self.mark_started();
        }
        Ok(outcome)
    }

    pub fn cell_view(&self, coords: Coord3) -> Result<CellView> {
        use Cell::*;

        let coords = self.minefield.validate_coords(coords)?;

        Ok(match (self.minefield[coords], self.state) {
            (Open, _) => CellView::Revealed(self.minefield.bombs_near(coords)?),
            (Closed, _) => CellView::Hidden,
            (MarkedEmpty, SessionState::Lost) => CellView::Misflagged,
            (MarkedEmpty, _) | (MarkedMine, _) => CellView::Marked,
            (ClosedMine, SessionState::Lost) if self.triggered_mine == Some(coords) => {
                CellView::TriggeredMine
            }
            (ClosedMine, SessionState::Lost) => CellView::Mine,
            (ClosedMine, SessionState::Won) => CellView::Marked,
            (ClosedMine, _) => CellView::Hidden,
        })
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = SessionState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            SessionState::Won
        } else {
            SessionState::Lost
        };
        log::debug!("Game {:?} after {} moves", self.state, self.moves);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(FieldError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
