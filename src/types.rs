use smallvec::SmallVec;

/// Single coordinate axis. Boards are square and never exceed `Coord::MAX`
/// cells per side.
pub type Coord = u8;

/// Count type for mines and cell totals; `Coord::MAX * Coord::MAX` fits.
pub type CellCount = u16;

/// Grid position `(x, y)`, zero-based.
pub type Coord2 = (Coord, Coord);

pub(crate) const fn square(side: Coord) -> CellCount {
    (side as CellCount) * (side as CellCount)
}

/// `ndarray` index for `coords`, row-major with `y` as the row.
pub(crate) const fn nd((x, y): Coord2) -> [usize; 2] {
    [y as usize, x as usize]
}

/// In-bounds Moore neighborhood of `center` on a `side`-by-`side` grid.
/// Corners yield 3 positions, edges 5, interior cells 8.
pub(crate) fn moore_neighbors(center: Coord2, side: Coord) -> SmallVec<[Coord2; 8]> {
    let (cx, cy) = (center.0 as i16, center.1 as i16);
    let side = side as i16;

    let mut neighbors = SmallVec::new();
    for ny in (cy - 1)..=(cy + 1) {
        for nx in (cx - 1)..=(cx + 1) {
            if (nx, ny) == (cx, cy) {
                continue;
            }
            if nx < 0 || ny < 0 || nx >= side || ny >= side {
                continue;
            }
            neighbors.push((nx as Coord, ny as Coord));
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let mut neighbors = moore_neighbors((0, 0), 3);
        neighbors.sort_unstable();
        assert_eq!(neighbors.as_slice(), &[(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(moore_neighbors((1, 0), 3).len(), 5);
        assert_eq!(moore_neighbors((0, 1), 3).len(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        assert_eq!(moore_neighbors((1, 1), 3).len(), 8);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert!(moore_neighbors((0, 0), 1).is_empty());
    }
}
