/// Single coordinate axis used for field width, height, depth, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Three-dimensional coordinates `(x, y, z)`.
pub type Coord3 = (Coord, Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord3 {
    type Output = [usize; 3];

    /// Storage is `(depth, height, width)` so that `x` is the fastest axis.
    fn to_nd_index(self) -> Self::Output {
        [self.2.into(), self.1.into(), self.0.into()]
    }
}

pub const fn mult3(a: Coord, b: Coord, c: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    let c = c as CellCount;
    a.saturating_mul(b).saturating_mul(c)
}

/// The six face-adjacent displacements, used by flood fill.
const FACE_DISPLACEMENTS: [(i8, i8, i8); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord3, delta: (i8, i8, i8), bounds: Coord3) -> Option<Coord3> {
    let (x, y, z) = coords;
    let (dx, dy, dz) = delta;
    let (max_x, max_y, max_z) = bounds;

    let next_x = x.checked_add_signed(dx.into())?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.into())?;
    if next_y >= max_y {
        return None;
    }

    let next_z = z.checked_add_signed(dz.into())?;
    if next_z >= max_z {
        return None;
    }

    Some((next_x, next_y, next_z))
}

/// Iterates the up to six in-bounds cells sharing a face with `center`.
#[derive(Debug)]
pub struct FaceNeighborIter {
    center: Coord3,
    bounds: Coord3,
    index: u8,
}

impl FaceNeighborIter {
    pub fn new(center: Coord3, bounds: Coord3) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for FaceNeighborIter {
    type Item = Coord3;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= FACE_DISPLACEMENTS.len() {
                return None;
            }

            let next_item = apply_delta(
                self.center,
                FACE_DISPLACEMENTS[self.index as usize],
                self.bounds,
            );
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

/// Iterates the clamped 3x3x3 block around `center`, the center itself included.
///
/// Each axis is clamped independently to `[c - 1, c + 1]` intersected with the
/// field, so a corner yields 8 cells, an edge 12, a face 18 and the interior 27.
#[derive(Debug)]
pub struct BlockIter {
    min: Coord3,
    max: Coord3,
    next: Option<Coord3>,
}

impl BlockIter {
    pub fn new(center: Coord3, bounds: Coord3) -> Self {
        let (x, y, z) = center;
        let (w, h, d) = bounds;
        let min = (x.saturating_sub(1), y.saturating_sub(1), z.saturating_sub(1));
        let max = (clamp_upper(x, w), clamp_upper(y, h), clamp_upper(z, d));
        Self {
            min,
            max,
            next: Some(min),
        }
    }
}

fn clamp_upper(c: Coord, bound: Coord) -> Coord {
    match c.checked_add(1) {
        Some(up) if up < bound => up,
        _ => c,
    }
}

impl Iterator for BlockIter {
    type Item = Coord3;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let (x, y, z) = current;

        self.next = if x < self.max.0 {
            Some((x + 1, y, z))
        } else if y < self.max.1 {
            Some((self.min.0, y + 1, z))
        } else if z < self.max.2 {
            Some((self.min.0, self.min.1, z + 1))
        } else {
            None
        };

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn nd_index_puts_x_on_the_fastest_axis() {
        assert_eq!((1, 2, 3).to_nd_index(), [3, 2, 1]);
    }

    #[test]
    fn mult3_saturates() {
        assert_eq!(mult3(2, 3, 4), 24);
        assert_eq!(mult3(Coord::MAX, Coord::MAX, Coord::MAX), CellCount::MAX);
    }

    #[test]
    fn face_neighbors_stop_at_both_bounds() {
        let corner: Vec<_> = FaceNeighborIter::new((0, 0, 0), (3, 3, 3)).collect();
        assert_eq!(corner, [(1, 0, 0), (0, 1, 0), (0, 0, 1)]);

        let far: Vec<_> = FaceNeighborIter::new((2, 2, 2), (3, 3, 3)).collect();
        assert_eq!(far, [(1, 2, 2), (2, 1, 2), (2, 2, 1)]);

        assert_eq!(FaceNeighborIter::new((1, 1, 1), (3, 3, 3)).count(), 6);
    }

    #[test]
    fn face_neighbors_use_each_axis_own_bound() {
        // wide but shallow: x may go further than depth allows
        let neighbors: Vec<_> = FaceNeighborIter::new((3, 0, 0), (5, 1, 1)).collect();
        assert_eq!(neighbors, [(4, 0, 0), (2, 0, 0)]);
    }

    #[test]
    fn block_sizes_match_position_class() {
        let bounds = (4, 4, 4);
        assert_eq!(BlockIter::new((0, 0, 0), bounds).count(), 8);
        assert_eq!(BlockIter::new((1, 0, 0), bounds).count(), 12);
        assert_eq!(BlockIter::new((1, 1, 0), bounds).count(), 18);
        assert_eq!(BlockIter::new((1, 1, 1), bounds).count(), 27);
        assert_eq!(BlockIter::new((3, 3, 3), bounds).count(), 8);
    }

    #[test]
    fn block_on_single_cell_field_is_the_cell() {
        let cells: Vec<_> = BlockIter::new((0, 0, 0), (1, 1, 1)).collect();
        assert_eq!(cells, [(0, 0, 0)]);
    }

    #[test]
    fn block_does_not_overflow_at_coord_max() {
        let max = Coord::MAX;
        let bounds = (max, max, max);
        let last = max - 1;
        assert_eq!(BlockIter::new((last, last, last), bounds).count(), 8);
    }
}
