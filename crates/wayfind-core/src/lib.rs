//! **wayfind-core**: terrain grid types for weighted pathfinding.
//!
//! This crate provides the types shared by map construction and the search
//! engine in `wayfind-paths`: geometry primitives, terrain kinds, cells, and
//! the [`Grid`] with its start and goal.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::{Point, Range};
pub use grid::{Grid, ParseGridError};
pub use terrain::{Cell, HighwayDir, Terrain};
