use wayfind_core::{Cell, Grid, Point, Range};

/// What the search engine needs from a map: bounds-checked cell lookup,
/// dimensions, and the two endpoints.
///
/// Searches only read through this trait; they never mutate terrain.
pub trait TerrainMap {
    /// Grid size as `(height, width)`.
    fn dimensions(&self) -> (i32, i32);

    /// The cell at `p`, or `None` if `p` lies outside the map.
    fn cell_at(&self, p: Point) -> Option<Cell>;

    /// Coordinate searches start from.
    fn start(&self) -> Point;

    /// Coordinate searches try to reach.
    fn goal(&self) -> Point;

    /// The rectangle covered by the map, anchored at the origin.
    fn bounds(&self) -> Range {
        let (height, width) = self.dimensions();
        Range::new(0, 0, width, height)
    }
}

impl TerrainMap for Grid {
    fn dimensions(&self) -> (i32, i32) {
        (self.height(), self.width())
    }

    fn cell_at(&self, p: Point) -> Option<Cell> {
        self.at(p)
    }

    fn start(&self) -> Point {
        Grid::start(self)
    }

    fn goal(&self) -> Point {
        Grid::goal(self)
    }
}
