//! The single-frontier A* family: A*, Weighted A* and Uniform-Cost Search.

use crate::SearchRange;
use crate::config::Algorithm;
use crate::cost::path_cost;
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::result::PathResult;
use crate::traits::TerrainMap;

impl SearchRange {
    /// Run `algorithm` from the map's start to its goal.
    pub fn run<M: TerrainMap>(&mut self, map: &M, algorithm: Algorithm) -> PathResult {
        let weight = algorithm.weight();
        let weight = if weight >= 1.0 && weight.is_finite() {
            weight
        } else {
            log::warn!("{}: weight {weight} is not a finite value >= 1, using 1", algorithm.name());
            1.0
        };
        let heuristic = Heuristic::new(algorithm.heuristic(), map.goal());
        self.best_first(map, &heuristic, weight, algorithm.name())
    }

    /// A* with an unweighted heuristic.
    pub fn astar<M: TerrainMap>(&mut self, map: &M, heuristic: HeuristicKind) -> PathResult {
        self.run(map, Algorithm::AStar(heuristic))
    }

    /// A* ordering nodes by `g + weight * h`.
    pub fn weighted_astar<M: TerrainMap>(
        &mut self,
        map: &M,
        heuristic: HeuristicKind,
        weight: f32,
    ) -> PathResult {
        self.run(map, Algorithm::WeightedAStar { heuristic, weight })
    }

    /// A* with a zero heuristic.
    pub fn uniform_cost<M: TerrainMap>(&mut self, map: &M) -> PathResult {
        self.run(map, Algorithm::UniformCost)
    }

    fn best_first<M: TerrainMap>(
        &mut self,
        map: &M,
        heuristic: &Heuristic,
        weight: f32,
        name: &str,
    ) -> PathResult {
        self.prepare(map, 1);
        let start = map.start();
        let goal = map.goal();
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            log::debug!("{name}: start {start} or goal {goal} outside {}", self.range());
            return PathResult::default();
        };

        self.seed(0, start_idx, weight * heuristic.estimate(start));

        let found = loop {
            let Some(ci) = self.frontiers[0].pop() else {
                break false;
            };
            self.close(0, ci);
            if ci == goal_idx {
                break true;
            }
            self.relax_neighbors(map, 0, ci, heuristic, weight);
        };

        let expanded = std::mem::take(&mut self.expanded[0]);
        if !found {
            log::debug!("{name}: no path from {start} to {goal} after {} expansions", expanded.len());
            return PathResult {
                expanded,
                ..PathResult::default()
            };
        }

        let path = self.reconstruct(map, 0, goal_idx);
        let cost = path_cost(&path);
        log::debug!(
            "{name} ({}): {} steps, cost {:?}, {} expansions",
            heuristic.kind().name(),
            path.len(),
            cost,
            expanded.len()
        );
        PathResult {
            path,
            cost,
            expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{approx_eq, random_grid, reference_cost};
    use std::f32::consts::SQRT_2;
    use wayfind_core::{Grid, Point, Range, Terrain};

    fn open_5x5() -> Grid {
        Grid::new(5, 5).with_endpoints(Point::new(0, 0), Point::new(4, 4))
    }

    #[test]
    fn open_grid_goes_diagonal() {
        let grid = open_5x5();
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.astar(&grid, HeuristicKind::Euclidean);
        assert!(r.is_found());
        assert_eq!(
            r.points(),
            (0..5).map(|i| Point::new(i, i)).collect::<Vec<_>>()
        );
        assert!(approx_eq(r.cost().unwrap(), 4.0 * SQRT_2));
        assert_eq!(*r.expanded().last().unwrap(), Point::new(4, 4));
    }

    #[test]
    fn wall_forces_route_through_gap() {
        let mut grid = open_5x5();
        grid.fill_range(Range::new(2, 0, 3, 4), Terrain::Blocked);
        let mut sr = SearchRange::for_map(&grid);
        for alg in [
            Algorithm::AStar(HeuristicKind::Euclidean),
            Algorithm::UniformCost,
            Algorithm::WeightedAStar {
                heuristic: HeuristicKind::Manhattan,
                weight: 3.0,
            },
        ] {
            let r = sr.run(&grid, alg);
            let pts = r.points();
            assert!(pts.contains(&Point::new(2, 4)), "{alg:?}: {pts:?}");
            assert_eq!(pts.first(), Some(&Point::new(0, 0)));
            assert_eq!(pts.last(), Some(&Point::new(4, 4)));
        }
    }

    #[test]
    fn enclosed_goal_has_no_path() {
        let mut grid = Grid::new(7, 7).with_endpoints(Point::new(0, 0), Point::new(5, 5));
        for p in Point::new(5, 5).neighbors_8() {
            grid.set(p, Terrain::Blocked);
        }
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
        assert!(!r.is_found());
        assert_eq!(r.path(), None);
        assert_eq!(r.cost(), None);
        // Everything reachable was expanded before giving up.
        assert_eq!(r.expansions(), 49 - 9);
        assert_eq!(sr.node_at(Point::new(5, 5)), None);
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(3, 3).with_endpoints(Point::new(1, 1), Point::new(1, 1));
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.uniform_cost(&grid);
        assert_eq!(r.points(), vec![Point::new(1, 1)]);
        assert_eq!(r.cost(), Some(0.0));
        assert_eq!(r.expansions(), 1);
    }

    #[test]
    fn highways_are_preferred() {
        let grid: Grid = "\
1111111
1aaaaa1
1111111"
            .parse()
            .unwrap();
        let grid = grid.with_endpoints(Point::new(0, 1), Point::new(6, 1));
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
        // Open→highway, four highway steps, highway→open.
        assert!(approx_eq(r.cost().unwrap(), 1.0 + 4.0 * 0.25 + 1.0));
        assert_eq!(r.points().len(), 7);
    }

    #[test]
    fn matches_reference_on_random_grids() {
        let mut sr = SearchRange::new(Range::default());
        for seed in 0..60 {
            let highways = seed % 2 == 0;
            let grid = random_grid(seed, 12, 9, highways);
            let expected = reference_cost(&grid);
            let kinds: &[HeuristicKind] = if highways {
                &[HeuristicKind::Zero, HeuristicKind::EuclideanQuarter]
            } else {
                &[
                    HeuristicKind::Zero,
                    HeuristicKind::EuclideanQuarter,
                    HeuristicKind::ManhattanQuarter,
                    HeuristicKind::Chebyshev,
                    HeuristicKind::Euclidean,
                ]
            };
            for &kind in kinds {
                let r = sr.astar(&grid, kind);
                match expected {
                    Some(opt) => {
                        let got = r.cost().unwrap();
                        assert!(approx_eq(got, opt), "seed {seed} {kind:?}: {got} vs {opt}");
                        assert_eq!(sr.node_at(grid.goal()).map(|n| n.expanded), Some(true));
                    }
                    None => assert!(!r.is_found(), "seed {seed} {kind:?}"),
                }
            }
        }
    }

    #[test]
    fn weighted_cost_within_weight_of_optimal() {
        let mut sr = SearchRange::new(Range::default());
        for seed in 100..140 {
            let grid = random_grid(seed, 12, 9, true);
            let Some(opt) = reference_cost(&grid) else {
                continue;
            };
            for w in [1.5, 2.0, 4.0] {
                let r = sr.weighted_astar(&grid, HeuristicKind::EuclideanQuarter, w);
                assert!(r.cost().unwrap() <= w * opt + 1e-3, "seed {seed} w {w}");
            }
        }
    }

    #[test]
    fn weighted_stores_inflated_estimate() {
        let grid = open_5x5();
        let mut sr = SearchRange::for_map(&grid);
        sr.weighted_astar(&grid, HeuristicKind::Chebyshev, 2.0);
        let start = sr.node_at(Point::new(0, 0)).unwrap();
        assert_eq!(start.g, 0.0);
        assert_eq!(start.h, 8.0);
        assert_eq!(start.f(), 8.0);
        assert_eq!(start.parent, None);
    }

    #[test]
    fn weight_below_one_is_clamped() {
        let grid = open_5x5();
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.weighted_astar(&grid, HeuristicKind::Euclidean, 0.25);
        assert!(approx_eq(r.cost().unwrap(), 4.0 * SQRT_2));
        assert!(approx_eq(sr.node_at(Point::new(0, 0)).unwrap().h, 4.0 * SQRT_2));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let grid = random_grid(7, 15, 15, true);
        let mut sr = SearchRange::for_map(&grid);
        let a = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
        let b = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
        let mut fresh = SearchRange::for_map(&grid);
        let c = fresh.astar(&grid, HeuristicKind::EuclideanQuarter);
        assert_eq!(a.points(), b.points());
        assert_eq!(a.points(), c.points());
        assert_eq!(a.cost(), b.cost());
        assert_eq!(a.expanded(), c.expanded());
    }

    #[test]
    fn parents_trace_the_path() {
        let grid = random_grid(3, 10, 10, true);
        let mut sr = SearchRange::for_map(&grid);
        let r = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
        let Some(path) = r.path() else {
            return;
        };
        for pair in path.windows(2) {
            let n = sr.node_at(pair[1].pos).unwrap();
            assert_eq!(n.parent, Some(pair[0].pos));
        }
        let goal = sr.node_at(grid.goal()).unwrap();
        assert!(approx_eq(goal.g, r.cost().unwrap()));
    }
}
