//! Distance estimates to a fixed goal.
//!
//! Every estimate is computed from coordinates alone, never from grid
//! content, so a [`Heuristic`] can be shared freely between threads.

use wayfind_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_delta(b);
    dx + dy
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let (dx, dy) = a.abs_delta(b);
    dx.max(dy)
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f32 {
    let (dx, dy) = a.abs_delta(b);
    ((dx * dx + dy * dy) as f32).sqrt()
}

/// Scale applied by the "quarter" variants; the cheapest move on a highway
/// costs a quarter of its length.
const QUARTER: f32 = 0.25;

/// The available estimators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    /// Always 0; turns A* into Uniform-Cost Search.
    Zero,
    Manhattan,
    /// Manhattan × 0.25.
    ManhattanQuarter,
    Chebyshev,
    Euclidean,
    /// Euclidean × 0.25. Consistent on every grid, highways included.
    #[default]
    EuclideanQuarter,
}

impl HeuristicKind {
    /// The five distance-based kinds.
    pub const DISTANCES: [HeuristicKind; 5] = [
        HeuristicKind::Manhattan,
        HeuristicKind::ManhattanQuarter,
        HeuristicKind::Chebyshev,
        HeuristicKind::Euclidean,
        HeuristicKind::EuclideanQuarter,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::ManhattanQuarter => "manhattan/4",
            HeuristicKind::Chebyshev => "chebyshev",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::EuclideanQuarter => "euclidean/4",
        }
    }
}

/// A [`HeuristicKind`] bound to a goal coordinate.
///
/// The goal is fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Heuristic {
    kind: HeuristicKind,
    goal: Point,
}

impl Heuristic {
    pub const fn new(kind: HeuristicKind, goal: Point) -> Self {
        Self { kind, goal }
    }

    pub const fn kind(&self) -> HeuristicKind {
        self.kind
    }

    pub const fn goal(&self) -> Point {
        self.goal
    }

    /// Estimated cost from `p` to the goal. Always ≥ 0, and 0 at the goal.
    pub fn estimate(&self, p: Point) -> f32 {
        let g = self.goal;
        match self.kind {
            HeuristicKind::Zero => 0.0,
            HeuristicKind::Manhattan => manhattan(p, g) as f32,
            HeuristicKind::ManhattanQuarter => manhattan(p, g) as f32 * QUARTER,
            HeuristicKind::Chebyshev => chebyshev(p, g) as f32,
            HeuristicKind::Euclidean => euclidean(p, g),
            HeuristicKind::EuclideanQuarter => euclidean(p, g) * QUARTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{random_grid, reference_costs};

    #[test]
    fn distance_functions() {
        let a = Point::new(1, 2);
        let b = Point::new(4, 6);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean(a, b), 5.0);
    }

    #[test]
    fn estimates_for_each_kind() {
        let goal = Point::new(4, 6);
        let p = Point::new(1, 2);
        let est = |kind| Heuristic::new(kind, goal).estimate(p);
        assert_eq!(est(HeuristicKind::Zero), 0.0);
        assert_eq!(est(HeuristicKind::Manhattan), 7.0);
        assert_eq!(est(HeuristicKind::ManhattanQuarter), 1.75);
        assert_eq!(est(HeuristicKind::Chebyshev), 4.0);
        assert_eq!(est(HeuristicKind::Euclidean), 5.0);
        assert_eq!(est(HeuristicKind::EuclideanQuarter), 1.25);
    }

    #[test]
    fn zero_at_goal() {
        let goal = Point::new(3, 3);
        for kind in HeuristicKind::DISTANCES {
            assert_eq!(Heuristic::new(kind, goal).estimate(goal), 0.0);
        }
    }

    fn assert_admissible(kind: HeuristicKind, highways: bool) {
        for seed in 0..40 {
            let grid = random_grid(seed, 9, 7, highways);
            let h = Heuristic::new(kind, grid.goal());
            let truth = reference_costs(&grid, grid.goal());
            for (p, cost) in truth {
                assert!(
                    h.estimate(p) <= cost + 1e-4,
                    "{} overestimates at {p} (seed {seed}): {} > {cost}",
                    kind.name(),
                    h.estimate(p),
                );
            }
        }
    }

    #[test]
    fn euclidean_quarter_is_admissible_with_highways() {
        assert_admissible(HeuristicKind::EuclideanQuarter, true);
    }

    #[test]
    fn chebyshev_and_manhattan_quarter_admissible_without_highways() {
        assert_admissible(HeuristicKind::Chebyshev, false);
        assert_admissible(HeuristicKind::ManhattanQuarter, false);
        assert_admissible(HeuristicKind::Euclidean, false);
    }

    #[test]
    fn manhattan_quarter_overestimates_a_highway_diagonal() {
        // One diagonal highway step costs √2/4 ≈ 0.354, Manhattan/4 says 0.5.
        let grid: wayfind_core::Grid = "aa\naa".parse().unwrap();
        let truth = reference_costs(&grid, grid.goal());
        let h = Heuristic::new(HeuristicKind::ManhattanQuarter, grid.goal());
        let start = Point::ZERO;
        assert!(h.estimate(start) > truth[&start]);
    }
}
