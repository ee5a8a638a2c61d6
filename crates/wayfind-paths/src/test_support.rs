//! Shared fixtures for unit tests: seeded random grids and a plain Dijkstra
//! reference over the same cost model.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use rand::prelude::*;
use rand::rngs::StdRng;
use wayfind_core::{Grid, Point, Terrain};

use crate::cost::cell_cost;
use crate::traits::TerrainMap;

/// A `width × height` grid with random terrain and random open endpoints.
///
/// Roughly 20% of cells are blocked and 20% difficult; with `highways` a
/// further share becomes highway terrain.
pub(crate) fn random_grid(seed: u64, width: i32, height: i32, highways: bool) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(width, height);
    grid.fill_fn(|_| {
        let roll = rng.random_range(0..100u32);
        match roll {
            0..20 => Terrain::Blocked,
            20..40 => Terrain::Difficult,
            40..55 if highways => Terrain::OpenHighway,
            55..65 if highways => Terrain::DifficultHighway,
            _ => Terrain::Open,
        }
    });
    let start = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    let goal = Point::new(rng.random_range(0..width), rng.random_range(0..height));
    grid.set(start, Terrain::Open);
    grid.set(goal, Terrain::Open);
    grid.with_endpoints(start, goal)
}

#[derive(Clone, Copy, PartialEq)]
struct Queued {
    cost: f32,
    pos: Point,
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest first.
        other.cost.total_cmp(&self.cost).then(other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Optimal cost from `source` to every reachable cell.
pub(crate) fn reference_costs(grid: &Grid, source: Point) -> HashMap<Point, f32> {
    let mut dist: HashMap<Point, f32> = HashMap::new();
    let mut open = BinaryHeap::new();
    if grid.cell_at(source).is_none() {
        return dist;
    }
    dist.insert(source, 0.0);
    open.push(Queued {
        cost: 0.0,
        pos: source,
    });
    while let Some(Queued { cost, pos }) = open.pop() {
        if cost > dist[&pos] {
            continue;
        }
        let Some(here) = grid.cell_at(pos) else {
            continue;
        };
        for np in pos.neighbors_8() {
            let Some(next) = grid.cell_at(np) else {
                continue;
            };
            let Some(step) = cell_cost(&here, &next) else {
                continue;
            };
            let nc = cost + step;
            if dist.get(&np).is_none_or(|&d| nc < d) {
                dist.insert(np, nc);
                open.push(Queued { cost: nc, pos: np });
            }
        }
    }
    dist
}

/// Optimal start-to-goal cost of `grid`, or `None` if the goal is unreachable.
pub(crate) fn reference_cost(grid: &Grid) -> Option<f32> {
    reference_costs(grid, grid.start()).get(&grid.goal()).copied()
}

pub(crate) fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}
