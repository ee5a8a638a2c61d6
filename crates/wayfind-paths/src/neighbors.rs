use wayfind_core::{Cell, Point};

use crate::traits::TerrainMap;

/// Cached neighbor computation helper.
///
/// Enumerates the 8-way neighbours of a point that exist on a map, in the
/// fixed order of [`Point::neighbors_8`]. Out-of-bounds coordinates are
/// never returned.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the in-bounds neighbours of `p` for which `keep` returns `true`.
    pub fn all<M: TerrainMap>(&mut self, map: &M, p: Point, keep: impl Fn(&Cell) -> bool) -> &[Cell] {
        self.buf.clear();
        for n in p.neighbors_8() {
            if let Some(cell) = map.cell_at(n) {
                if keep(&cell) {
                    self.buf.push(cell);
                }
            }
        }
        &self.buf
    }

    /// Return the in-bounds neighbours of `p` that are not blocked.
    pub fn passable<M: TerrainMap>(&mut self, map: &M, p: Point) -> &[Cell] {
        self.all(map, p, |c| !c.is_blocked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::{Grid, Terrain};

    #[test]
    fn corner_has_three_neighbors() {
        let grid = Grid::new(4, 4);
        let mut nb = Neighbors::new();
        let ns = nb.passable(&grid, Point::new(0, 0));
        let pts: Vec<_> = ns.iter().map(|c| c.pos).collect();
        assert_eq!(pts, vec![Point::new(1, 0), Point::new(1, 1), Point::new(0, 1)]);
    }

    #[test]
    fn blocked_cells_are_skipped() {
        let mut grid = Grid::new(3, 3);
        grid.set(Point::new(1, 0), Terrain::Blocked);
        grid.set(Point::new(2, 2), Terrain::Blocked);
        let mut nb = Neighbors::new();
        assert_eq!(nb.passable(&grid, Point::new(1, 1)).len(), 6);
        assert_eq!(nb.all(&grid, Point::new(1, 1), |_| true).len(), 8);
    }
}
