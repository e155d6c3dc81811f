use alloc::vec::Vec;

use super::*;

/// Places mines at a known list of coordinates, mostly for puzzles and tests.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord3>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: Vec<Coord3>) -> Self {
        Self { mines }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(self, config: FieldConfig) -> Result<Minefield> {
        config.validate()?;
        let field = Minefield::from_mine_coords(config.size, &self.mines)?;

        if field.mine_count() != config.mines {
            log::warn!(
                "Fixed minefield count mismatch, actual: {}, requested: {}",
                field.mine_count(),
                config.mines
            );
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn places_given_mines() {
        let config = FieldConfig::new((2, 2, 2), 2);
        let field = Minefield::generate(
            config,
            FixedMinefieldGenerator::new(vec![(1, 1, 1), (0, 1, 0)]),
        )
        .unwrap();

        assert_eq!(field.config(), config);
        assert_eq!(field.contains_mine((1, 1, 1)), Ok(true));
        assert_eq!(field.contains_mine((0, 1, 0)), Ok(true));
        assert_eq!(field.contains_mine((0, 0, 0)), Ok(false));
    }

    #[test]
    fn actual_placement_wins_over_requested_count() {
        let field = FixedMinefieldGenerator::new(vec![(0, 0, 0), (0, 0, 0)])
            .generate(FieldConfig::new((2, 1, 1), 2))
            .unwrap();

        assert_eq!(field.mine_count(), 1);
    }

    #[test]
    fn rejects_mines_outside_the_field() {
        let generated = FixedMinefieldGenerator::new(vec![(0, 0, 2)])
            .generate(FieldConfig::new((2, 2, 2), 1));

        assert_eq!(generated, Err(FieldError::InvalidCoords));
    }
}
