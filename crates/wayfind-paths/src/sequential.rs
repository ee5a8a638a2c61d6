//! Sequential multi-heuristic A*.
//!
//! One frontier per heuristic, each with its own node states. Frontier 0 is
//! the anchor; the others are expanded round-robin while their best key stays
//! within `w2` times the anchor's, and the anchor is expanded otherwise. With
//! a consistent anchor the returned path costs at most `w1 * w2` times the
//! optimum.

use crate::SearchRange;
use crate::config::{ConfigError, SequentialConfig};
use crate::cost::path_cost;
use crate::heuristic::Heuristic;
use crate::result::SequentialResult;
use crate::traits::TerrainMap;

impl SearchRange {
    /// Run a Sequential search from the map's start to its goal.
    ///
    /// Fails only on an invalid `config`; an unreachable goal is an `Ok`
    /// result without a path.
    pub fn sequential<M: TerrainMap>(
        &mut self,
        map: &M,
        config: &SequentialConfig,
    ) -> Result<SequentialResult, ConfigError> {
        config.validate()?;
        let (w1, w2) = (config.w1, config.w2);
        let start = map.start();
        let goal = map.goal();
        let heuristics: Vec<Heuristic> = config
            .heuristics
            .iter()
            .map(|&kind| Heuristic::new(kind, goal))
            .collect();
        let k = heuristics.len();

        self.prepare(map, k);
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            log::debug!("sequential: start {start} or goal {goal} outside {}", self.range());
            return Ok(SequentialResult {
                expanded: vec![Vec::new(); k],
                ..SequentialResult::default()
            });
        };

        for (layer, heuristic) in heuristics.iter().enumerate() {
            // Goal first, so that a start which is also the goal keeps g = 0.
            self.register(layer, goal_idx);
            self.seed(layer, start_idx, w1 * heuristic.estimate(start));
        }

        let found = 'search: loop {
            if !self.frontiers[0].min_key().is_finite() {
                break None;
            }
            if k == 1 {
                if self.anchor_step(map, goal_idx, &heuristics[0], w1) {
                    break Some(0);
                }
                continue;
            }
            for i in 1..k {
                let anchor_key = self.frontiers[0].min_key();
                if !anchor_key.is_finite() {
                    break 'search None;
                }
                let key = self.frontiers[i].min_key();
                log::trace!("sequential: frontier {i} key {key}, anchor key {anchor_key}");
                if key <= w2 * anchor_key {
                    let goal_g = self.g(i, goal_idx);
                    if goal_g.is_finite() && goal_g <= key {
                        break 'search Some(i);
                    }
                    if let Some(ci) = self.frontiers[i].pop() {
                        self.close(i, ci);
                        self.relax_neighbors(map, i, ci, &heuristics[i], w1);
                    }
                } else if self.anchor_step(map, goal_idx, &heuristics[0], w1) {
                    break 'search Some(0);
                }
            }
        };

        let expanded: Vec<_> = self.expanded[..k].iter_mut().map(std::mem::take).collect();
        let Some(layer) = found else {
            log::debug!(
                "sequential: no path from {start} to {goal} after {} expansions",
                expanded.iter().map(Vec::len).sum::<usize>()
            );
            return Ok(SequentialResult {
                expanded,
                ..SequentialResult::default()
            });
        };

        let path = self.reconstruct(map, layer, goal_idx);
        let cost = path_cost(&path);
        log::debug!(
            "sequential: {} steps, cost {:?}, found by frontier {layer} ({}), expansions {:?}",
            path.len(),
            cost,
            heuristics[layer].kind().name(),
            expanded.iter().map(Vec::len).collect::<Vec<_>>()
        );
        Ok(SequentialResult {
            path,
            cost,
            frontier: Some(layer),
            expanded,
        })
    }

    /// Terminate on the goal or expand the anchor's best node. Returns `true`
    /// when the anchor has a good enough path to the goal.
    fn anchor_step<M: TerrainMap>(
        &mut self,
        map: &M,
        goal_idx: usize,
        anchor: &Heuristic,
        w1: f32,
    ) -> bool {
        let key = self.frontiers[0].min_key();
        let goal_g = self.g(0, goal_idx);
        if goal_g.is_finite() && goal_g <= key {
            return true;
        }
        if let Some(ci) = self.frontiers[0].pop() {
            self.close(0, ci);
            self.relax_neighbors(map, 0, ci, anchor, w1);
        }
        false
    }
}
