use super::*;

/// Uniform placement: draw a random cell, redraw while it already holds a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: FieldConfig) -> Result<Minefield> {
        use rand::prelude::*;

        let mut field = Minefield::empty(config)?;
        log::debug!(
            "Generating {:?} minefield with {} mines, seed {}",
            config.size,
            config.mines,
            self.seed
        );

        // optimize for full boards
        if config.mines == config.total_cells() {
            field.fill_mines();
            return Ok(field);
        }

        let (size_x, size_y, size_z) = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed = 0;
        while mines_placed < config.mines {
            let coords = (
                rng.random_range(0..size_x),
                rng.random_range(0..size_y),
                rng.random_range(0..size_z),
            );
            if field.place_mine(coords) {
                mines_placed += 1;
            }
        }

        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn different_seeds_give_different_layouts() {
        let config = Difficulty::Easy.config();
        let layouts: Vec<Vec<Coord3>> = (0..4)
            .map(|seed| {
                RandomMinefieldGenerator::new(seed)
                    .generate(config)
                    .unwrap()
                    .iter_mines()
                    .collect()
            })
            .collect();

        assert!(layouts.iter().any(|layout| *layout != layouts[0]));
    }

    #[test]
    fn placed_mines_stay_in_bounds_on_flat_fields() {
        let field = RandomMinefieldGenerator::new(7)
            .generate(FieldConfig::new((9, 1, 2), 12))
            .unwrap();

        assert_eq!(field.mine_count(), 12);
        assert!(field.iter_mines().all(|(_, y, z)| y == 0 && z < 2));
    }

    #[test]
    fn full_board_skips_sampling() {
        let field = RandomMinefieldGenerator::new(0)
            .generate(FieldConfig::new((3, 3, 3), 27))
            .unwrap();

        assert_eq!(field.mine_count(), 27);
        assert!(field.iter_cells().all(|(_, cell)| cell == Cell::ClosedMine));
    }

    #[test]
    fn mineless_field_is_all_closed() {
        let field = RandomMinefieldGenerator::new(0)
            .generate(FieldConfig::new((3, 2, 1), 0))
            .unwrap();

        assert_eq!(field.iter_mines().count(), 0);
        assert!(!field.has_won());
    }
}
