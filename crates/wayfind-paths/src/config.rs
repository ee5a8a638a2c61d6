//! Search configuration.

use std::fmt;

use crate::heuristic::HeuristicKind;

/// A single-frontier best-first search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Dijkstra-style search: A* with [`HeuristicKind::Zero`].
    UniformCost,
    AStar(HeuristicKind),
    /// A* with the estimate multiplied by `weight` (≥ 1) for ordering.
    WeightedAStar { heuristic: HeuristicKind, weight: f32 },
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::AStar(HeuristicKind::default())
    }
}

impl Algorithm {
    pub fn heuristic(&self) -> HeuristicKind {
        match *self {
            Algorithm::UniformCost => HeuristicKind::Zero,
            Algorithm::AStar(h) => h,
            Algorithm::WeightedAStar { heuristic, .. } => heuristic,
        }
    }

    pub fn weight(&self) -> f32 {
        match *self {
            Algorithm::WeightedAStar { weight, .. } => weight,
            _ => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::UniformCost => "uniform-cost",
            Algorithm::AStar(_) => "a*",
            Algorithm::WeightedAStar { .. } => "weighted a*",
        }
    }
}

/// Parameters of a Sequential multi-heuristic search.
///
/// `heuristics[0]` is the anchor and must be admissible; the engine does not
/// check this. A returned path costs at most `w1 * w2` times the optimum.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequentialConfig {
    /// Inflation applied to every heuristic (≥ 1).
    pub w1: f32,
    /// How far an inadmissible frontier may trail the anchor and still be
    /// expanded (≥ 1).
    pub w2: f32,
    pub heuristics: Vec<HeuristicKind>,
}

impl Default for SequentialConfig {
    fn default() -> Self {
        Self {
            w1: 1.5,
            w2: 2.0,
            heuristics: vec![
                HeuristicKind::EuclideanQuarter,
                HeuristicKind::Manhattan,
                HeuristicKind::ManhattanQuarter,
                HeuristicKind::Chebyshev,
                HeuristicKind::Euclidean,
            ],
        }
    }
}

impl SequentialConfig {
    pub fn new(w1: f32, w2: f32, heuristics: Vec<HeuristicKind>) -> Self {
        Self { w1, w2, heuristics }
    }

    /// Sub-optimality factor guaranteed for returned paths.
    pub fn bound(&self) -> f32 {
        self.w1 * self.w2
    }

    /// Check the weights and that there is an anchor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heuristics.is_empty() {
            return Err(ConfigError::EmptyHeuristics);
        }
        for (name, value) in [("w1", self.w1), ("w2", self.w2)] {
            if !(value.is_finite() && value >= 1.0) {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Errors from an unusable search configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// No heuristics, hence no anchor.
    EmptyHeuristics,
    /// A weight below 1 or not finite.
    InvalidWeight { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHeuristics => write!(f, "sequential search needs at least an anchor heuristic"),
            Self::InvalidWeight { name, value } => {
                write!(f, "weight {name} must be a finite value >= 1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
