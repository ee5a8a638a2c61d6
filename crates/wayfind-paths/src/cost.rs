//! Terrain movement costs.
//!
//! Moving between two adjacent cells costs a value looked up from one of two
//! symmetric 5×5 tables, keyed by the terrain of both cells (in
//! [`Terrain::index`] order). Any entry involving [`Terrain::Blocked`] is
//! impassable, represented as `None`.

use std::f32::consts::SQRT_2;

use wayfind_core::{Cell, Point, Terrain};

const SQRT_8: f32 = 2.0 * SQRT_2;
const MIXED_DIAG: f32 = (SQRT_2 + SQRT_8) / 2.0;

/// Impassable.
const X: Option<f32> = None;

const fn c(v: f32) -> Option<f32> {
    Some(v)
}

// Highways only discount highway-to-highway moves; any other pairing costs
// the same as the underlying open/difficult terrain.
const ORTHOGONAL: [[Option<f32>; 5]; 5] = [
    [c(1.0), c(1.5), X, c(1.0), c(1.5)],
    [c(1.5), c(2.0), X, c(1.5), c(2.0)],
    [X, X, X, X, X],
    [c(1.0), c(1.5), X, c(0.25), c(0.375)],
    [c(1.5), c(2.0), X, c(0.375), c(0.5)],
];

const DIAGONAL: [[Option<f32>; 5]; 5] = [
    [c(SQRT_2), c(MIXED_DIAG), X, c(SQRT_2), c(MIXED_DIAG)],
    [c(MIXED_DIAG), c(SQRT_8), X, c(MIXED_DIAG), c(SQRT_8)],
    [X, X, X, X, X],
    [c(SQRT_2), c(MIXED_DIAG), X, c(SQRT_2 / 4.0), c(MIXED_DIAG / 4.0)],
    [c(MIXED_DIAG), c(SQRT_8), X, c(MIXED_DIAG / 4.0), c(SQRT_8 / 4.0)],
];

/// How one cell relates to another it is being compared with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Same coordinate; used only to seed the start node.
    Stay,
    /// Exactly one axis differs by one.
    Orthogonal,
    /// Both axes differ by one.
    Diagonal,
}

impl Movement {
    /// Classify the step from `from` to `to`.
    ///
    /// # Panics
    ///
    /// If the two points are neither identical nor adjacent. Asking for the
    /// cost of such a pair is a bug in the caller.
    pub fn between(from: Point, to: Point) -> Movement {
        match from.abs_delta(to) {
            (0, 0) => Movement::Stay,
            (1, 0) | (0, 1) => Movement::Orthogonal,
            (1, 1) => Movement::Diagonal,
            _ => panic!("movement cost requested between non-adjacent cells {from} and {to}"),
        }
    }
}

/// Cost of a single move between terrains, or `None` if impassable.
#[inline]
pub fn step_cost(from: Terrain, to: Terrain, movement: Movement) -> Option<f32> {
    match movement {
        Movement::Stay => Some(0.0),
        Movement::Orthogonal => ORTHOGONAL[from.index()][to.index()],
        Movement::Diagonal => DIAGONAL[from.index()][to.index()],
    }
}

/// Cost of moving from `from` to an adjacent (or identical) cell `to`.
///
/// # Panics
///
/// If the cells are not adjacent; see [`Movement::between`].
#[inline]
pub fn cell_cost(from: &Cell, to: &Cell) -> Option<f32> {
    step_cost(from.terrain, to.terrain, Movement::between(from.pos, to.pos))
}

/// Sum of step costs along a path. `None` if any step is impassable.
///
/// An empty or single-cell path costs 0.
pub fn path_cost(path: &[Cell]) -> Option<f32> {
    path.windows(2)
        .try_fold(0.0, |acc, pair| Some(acc + cell_cost(&pair[0], &pair[1])?))
}
