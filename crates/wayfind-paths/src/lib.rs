//! Heuristic search over weighted 8-connected terrain grids.
//!
//! This crate finds start-to-goal paths on maps whose cells carry a terrain
//! kind and an optional highway marking:
//!
//! - **Uniform-Cost Search** ([`SearchRange::uniform_cost`])
//! - **A\*** with a choice of distance heuristics ([`SearchRange::astar`])
//! - **Weighted A\*** ([`SearchRange::weighted_astar`])
//! - **Sequential multi-heuristic A\*** with an admissible anchor and any
//!   number of inadmissible helpers ([`SearchRange::sequential`])
//!
//! All searches run through [`SearchRange`], which owns the node arena and
//! frontiers and reuses them across runs. After a run its node states can be
//! inspected with [`SearchRange::node_at`] and [`SearchRange::layer_node_at`].
//!
//! Step costs come from [`cost`]: a fixed table over terrain pairs for
//! orthogonal and diagonal moves. Any map implementing [`TerrainMap`] can be
//! searched; [`wayfind_core::Grid`] is the stock one.
//!
//! ```
//! use wayfind_core::{Grid, Point};
//! use wayfind_paths::{HeuristicKind, SearchRange};
//!
//! let grid = Grid::new(8, 8).with_endpoints(Point::new(0, 0), Point::new(7, 3));
//! let mut sr = SearchRange::for_map(&grid);
//! let result = sr.astar(&grid, HeuristicKind::EuclideanQuarter);
//! assert_eq!(result.points().last(), Some(&Point::new(7, 3)));
//! ```

mod astar;
mod config;
pub mod cost;
mod frontier;
mod heuristic;
mod neighbors;
mod result;
mod search_range;
mod sequential;
mod traits;

#[cfg(test)]
mod test_support;

pub use config::{Algorithm, ConfigError, SequentialConfig};
pub use cost::{Movement, cell_cost, path_cost, step_cost};
pub use frontier::Frontier;
pub use heuristic::{Heuristic, HeuristicKind, chebyshev, euclidean, manhattan};
pub use neighbors::Neighbors;
pub use result::{PathResult, SequentialResult};
pub use search_range::{NodeState, SearchRange};
pub use traits::TerrainMap;
