use alloc::vec;
use core::ops::Index;
use ndarray::Array3;
use serde::{Deserialize, Serialize};

use crate::*;

/// Dense three-dimensional minefield and the counters derived from play on it.
///
/// Cells are stored in a standard-layout `Array3` shaped `(depth, height, width)`, so the flat
/// offset of `(x, y, z)` is `z * width * height + y * width + x`. Every public accessor checks
/// bounds first and returns [`FieldError::InvalidCoords`] without touching any state.
///
/// Deserializing checks the stored shape and counters against the cells, so a loaded field holds
/// the same invariants as a generated one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMinefield")]
pub struct Minefield {
    cells: Array3<Cell>,
    size: Coord3,
    mines: CellCount,
    opened: CellCount,
    fake_marks: CellCount,
    real_marks: CellCount,
}

impl Minefield {
    /// Random field for `config`, with mine positions fully determined by `seed`.
    pub fn new(config: FieldConfig, seed: u64) -> Result<Self> {
        RandomMinefieldGenerator::new(seed).generate(config)
    }

    pub fn generate(config: FieldConfig, generator: impl MinefieldGenerator) -> Result<Self> {
        generator.generate(config)
    }

    /// Field with mines at exactly `mine_coords`; repeated coordinates hold a single mine.
    pub fn from_mine_coords(size: Coord3, mine_coords: &[Coord3]) -> Result<Self> {
        let mut field = Self::empty(FieldConfig::new_unchecked(size, 0))?;

        for &coords in mine_coords {
            let coords = field.validate_coords(coords)?;
            field.place_mine(coords);
        }

        Ok(field)
    }

    /// All cells closed and no mines; generators populate it with [`Self::place_mine`].
    pub(crate) fn empty(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cells: Array3::from_elem(config.size.to_nd_index(), Cell::Closed),
            size: config.size,
            mines: 0,
            opened: 0,
            fake_marks: 0,
            real_marks: 0,
        })
    }

    /// Turns a closed cell into a mine, returning whether a new mine was placed.
    pub(crate) fn place_mine(&mut self, coords: Coord3) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if *cell == Cell::Closed {
            *cell = Cell::ClosedMine;
            self.mines += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn fill_mines(&mut self) {
        self.cells.fill(Cell::ClosedMine);
        self.mines = self.total_cells();
    }

    pub fn config(&self) -> FieldConfig {
        FieldConfig::new_unchecked(self.size, self.mines)
    }

    pub fn size(&self) -> Coord3 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn depth(&self) -> Coord {
        self.size.2
    }

    pub fn total_cells(&self) -> CellCount {
        mult3(self.size.0, self.size.1, self.size.2)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub fn opened_count(&self) -> CellCount {
        self.opened
    }

    /// Flags placed on cells without a mine.
    pub fn fake_marks(&self) -> CellCount {
        self.fake_marks
    }

    /// Flags placed on mines.
    pub fn real_marks(&self) -> CellCount {
        self.real_marks
    }

    pub fn validate_coords(&self, coords: Coord3) -> Result<Coord3> {
        let (x, y, z) = coords;
        let (w, h, d) = self.size;
        if x < w && y < h && z < d {
            Ok(coords)
        } else {
            Err(FieldError::InvalidCoords)
        }
    }

    pub fn state(&self, coords: Coord3) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn contains_mine(&self, coords: Coord3) -> Result<bool> {
        Ok(self.state(coords)?.is_mine())
    }

    /// Mines in the clamped 3x3x3 block around `coords`, the cell itself included.
    pub fn bombs_near(&self, coords: Coord3) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_mines_near(coords))
    }

    fn count_mines_near(&self, coords: Coord3) -> u8 {
        // at most 27 cells in the block
        BlockIter::new(coords, self.size)
            .filter(|&pos| self[pos].is_mine())
            .count() as u8
    }

    /// Opens `coords` if it is [`Cell::Closed`] and floods through face-adjacent cells from every
    /// opened cell with no mines nearby.
    ///
    /// Returns how many cells this call opened; `0` when the cell was already open, flagged or a
    /// mine. Mines are never opened here: detecting a click on a mine is up to the caller.
    pub fn touch(&mut self, coords: Coord3) -> Result<CellCount> {
        let coords = self.validate_coords(coords)?;

        let mut opened: CellCount = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            if *cell != Cell::Closed {
                continue;
            }
            *cell = Cell::Open;
            opened += 1;

            if self.count_mines_near(visit_coords) == 0 {
                to_visit.extend(
                    FaceNeighborIter::new(visit_coords, self.size)
                        .filter(|&pos| self[pos] == Cell::Closed),
                );
            }
        }

        self.opened += opened;
        log::trace!("touch {:?} opened {} cells", coords, opened);
        Ok(opened)
    }

    /// Toggles the flag on an unopened cell.
    pub fn mark(&mut self, coords: Coord3) -> Result<MarkOutcome> {
        use Cell::*;
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match *cell {
            Closed => {
                *cell = MarkedEmpty;
                self.fake_marks += 1;
                Changed
            }
            ClosedMine => {
                *cell = MarkedMine;
                self.real_marks += 1;
                Changed
            }
            MarkedEmpty => {
                *cell = Closed;
                self.fake_marks -= 1;
                Changed
            }
            MarkedMine => {
                *cell = ClosedMine;
                self.real_marks -= 1;
                Changed
            }
            Open => NoChange,
        })
    }

    /// Mine count minus every flag, right or wrong. Goes negative when the player over-flags.
    pub fn mines_remaining(&self) -> i64 {
        i64::from(self.mines) - i64::from(self.fake_marks) - i64::from(self.real_marks)
    }

    /// Whether every cell without a mine is open. Flags play no part.
    pub fn has_won(&self) -> bool {
        self.opened == self.safe_cell_count()
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord3, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((z, y, x), &cell)| ((x as Coord, y as Coord, z as Coord), cell))
    }

    pub fn iter_mines(&self) -> impl Iterator<Item = Coord3> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_mine())
            .map(|(coords, _)| coords)
    }
}

/// Unchecked serialized form of [`Minefield`].
#[derive(Deserialize)]
struct RawMinefield {
    cells: Array3<Cell>,
    size: Coord3,
    mines: CellCount,
    opened: CellCount,
    fake_marks: CellCount,
    real_marks: CellCount,
}

impl TryFrom<RawMinefield> for Minefield {
    type Error = FieldError;

    fn try_from(raw: RawMinefield) -> Result<Self> {
        FieldConfig::new_unchecked(raw.size, raw.mines).validate()?;

        if raw.cells.shape() != raw.size.to_nd_index() {
            return Err(FieldError::InvalidBoardShape);
        }

        let mut counts: [CellCount; 4] = [0; 4];
        for &cell in raw.cells.iter() {
            if cell.is_mine() {
                counts[0] += 1;
            }
            match cell {
                Cell::Open => counts[1] += 1,
                Cell::MarkedEmpty => counts[2] += 1,
                Cell::MarkedMine => counts[3] += 1,
                Cell::Closed | Cell::ClosedMine => {}
            }
        }
        if counts != [raw.mines, raw.opened, raw.fake_marks, raw.real_marks] {
            return Err(FieldError::InconsistentCounts);
        }

        Ok(Self {
            cells: raw.cells,
            size: raw.size,
            mines: raw.mines,
            opened: raw.opened,
            fake_marks: raw.fake_marks,
            real_marks: raw.real_marks,
        })
    }
}

impl Index<Coord3> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord3) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
