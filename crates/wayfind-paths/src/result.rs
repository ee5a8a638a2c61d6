//! What a search run hands back.

use std::collections::HashSet;

use wayfind_core::{Cell, Point};

/// Outcome of a single-frontier search.
///
/// Not finding a path is a normal outcome: [`path`](Self::path) and
/// [`cost`](Self::cost) are then `None`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub(crate) path: Vec<Cell>,
    pub(crate) cost: Option<f32>,
    pub(crate) expanded: Vec<Point>,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path from start to goal, both included.
    pub fn path(&self) -> Option<&[Cell]> {
        self.is_found().then_some(self.path.as_slice())
    }

    /// Sum of step costs along [`path`](Self::path).
    pub fn cost(&self) -> Option<f32> {
        self.cost
    }

    /// Coordinates of the path, start first. Empty if no path was found.
    pub fn points(&self) -> Vec<Point> {
        self.path.iter().map(|c| c.pos).collect()
    }

    /// Every expanded cell, in expansion order.
    pub fn expanded(&self) -> &[Point] {
        &self.expanded
    }

    /// Number of expansions.
    pub fn expansions(&self) -> usize {
        self.expanded.len()
    }
}

/// Outcome of a Sequential multi-heuristic search.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequentialResult {
    pub(crate) path: Vec<Cell>,
    pub(crate) cost: Option<f32>,
    pub(crate) frontier: Option<usize>,
    pub(crate) expanded: Vec<Vec<Point>>,
}

impl SequentialResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Path from start to goal, both included.
    pub fn path(&self) -> Option<&[Cell]> {
        self.is_found().then_some(self.path.as_slice())
    }

    pub fn cost(&self) -> Option<f32> {
        self.cost
    }

    pub fn points(&self) -> Vec<Point> {
        self.path.iter().map(|c| c.pos).collect()
    }

    /// Index of the heuristic whose frontier produced the path (0 = anchor).
    pub fn frontier(&self) -> Option<usize> {
        self.frontier
    }

    /// Number of frontiers the search ran.
    pub fn frontiers(&self) -> usize {
        self.expanded.len()
    }

    /// Cells expanded by one frontier, in expansion order.
    pub fn expanded(&self, frontier: usize) -> &[Point] {
        self.expanded.get(frontier).map(Vec::as_slice).unwrap_or_default()
    }

    /// Expansion count of each frontier.
    pub fn expansions_per_frontier(&self) -> Vec<usize> {
        self.expanded.iter().map(Vec::len).collect()
    }

    /// Total expansions across every frontier.
    pub fn expansions(&self) -> usize {
        self.expanded.iter().map(Vec::len).sum()
    }

    /// Cells expanded by at least one frontier.
    pub fn explored(&self) -> HashSet<Point> {
        self.expanded.iter().flatten().copied().collect()
    }
}
