//! A fixed-size terrain grid with start and goal coordinates.
//!
//! [`Grid`] is what map construction produces and what searches read. It is
//! plain owned storage, so a built grid can be shared read-only between
//! threads running independent searches.

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};
use crate::terrain::{Cell, HighwayDir, Terrain};

/// A 2D grid of terrain with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    terrain: Vec<Terrain>,
    highways: Vec<HighwayDir>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Grid {
    /// Create a new all-[`Terrain::Open`] grid.
    ///
    /// The start is the top-left corner and the goal the bottom-right one.
    /// A grid with no cells has no valid endpoints: both sit at the origin,
    /// outside the grid, and searches on it find no path.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let len = bounds.len();
        let goal = if bounds.is_empty() {
            Point::ZERO
        } else {
            Point::new(bounds.width() - 1, bounds.height() - 1)
        };
        Self {
            terrain: vec![Terrain::Open; len],
            highways: vec![HighwayDir::None; len],
            bounds,
            start: Point::ZERO,
            goal,
        }
    }

    /// Returns the bounding range of this grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the grid (number of columns).
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid (number of rows).
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the grid contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Move the start. Points outside the grid are ignored.
    pub fn set_start(&mut self, p: Point) {
        if self.contains(p) {
            self.start = p;
        }
    }

    /// Move the goal. Points outside the grid are ignored.
    pub fn set_goal(&mut self, p: Point) {
        if self.contains(p) {
            self.goal = p;
        }
    }

    /// Set start and goal (builder).
    pub fn with_endpoints(mut self, start: Point, goal: Point) -> Self {
        self.set_start(start);
        self.set_goal(goal);
        self
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        let i = self.index(p)?;
        Some(Cell::new(p, self.terrain[i]).with_highway(self.highways[i]))
    }

    /// Terrain at a point, or `None` if out of bounds.
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.index(p).map(|i| self.terrain[i])
    }

    /// Set the terrain at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, terrain: Terrain) {
        if let Some(i) = self.index(p) {
            self.terrain[i] = terrain;
        }
    }

    /// Set the highway flow direction at a point. Does nothing if out of bounds.
    pub fn set_highway(&mut self, p: Point, dir: HighwayDir) {
        if let Some(i) = self.index(p) {
            self.highways[i] = dir;
        }
    }

    /// Fill every cell of `rng` (clipped to the grid) with `terrain`.
    pub fn fill_range(&mut self, rng: Range, terrain: Terrain) {
        for p in self.bounds.intersect(rng) {
            self.set(p, terrain);
        }
    }

    /// Fill the grid using a function that takes each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Terrain) {
        for p in self.bounds {
            let i = (p.y * self.bounds.width() + p.x) as usize;
            self.terrain[i] = f(p);
        }
    }

    /// Count how many cells have the given terrain.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.terrain.iter().filter(|&&t| t == terrain).count()
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.bounds.iter().zip(self.terrain.iter().zip(self.highways.iter())).map(
            |(p, (&t, &h))| Cell::new(p, t).with_highway(h),
        )
    }
}

/// Parses the text grid format: one row per line, `0` blocked, `1` open,
/// `2` difficult, `a` open highway, `b` difficult highway.
///
/// Surrounding whitespace on each line is ignored, as are blank lines.
impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let Some(first) = rows.first() else {
            return Err(ParseGridError::Empty);
        };
        let width = first.chars().count();
        let mut grid = Grid::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ParseGridError::InconsistentWidth {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let terrain = Terrain::from_char(ch).ok_or(ParseGridError::InvalidRune { ch, pos })?;
                grid.set(pos, terrain);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let i = (y * self.width() + x) as usize;
                write!(f, "{}", self.terrain[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a text grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    /// No rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the terrain alphabet.
    InvalidRune { ch: char, pos: Point },
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(f, "grid: row {row} has width {found}, expected {expected}"),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseGridError {}
