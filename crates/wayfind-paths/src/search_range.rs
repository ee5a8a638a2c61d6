use wayfind_core::{Cell, Point, Range};

use crate::cost::cell_cost;
use crate::frontier::Frontier;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::traits::TerrainMap;

const NO_PARENT: usize = usize::MAX;

/// Snapshot of one node's search state, as left by the last run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeState {
    /// Best known cost from the start. Infinite until relaxed.
    pub g: f32,
    /// Heuristic estimate to the goal, already multiplied by the run's weight.
    pub h: f32,
    /// Cell whose expansion produced the current `g`. `None` for the start
    /// and for nodes never reached.
    pub parent: Option<Point>,
    /// Whether the node was expanded (closed).
    pub expanded: bool,
}

impl NodeState {
    /// Ordering cost, `g + h`.
    #[inline]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// Internal arena record
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f32,
    pub(crate) h: f32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Node {
    #[inline]
    fn f(&self) -> f32 {
        self.g + self.h
    }
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f32::INFINITY,
            h: 0.0,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// Owner of all per-run search state for a grid rectangle.
///
/// Node states live in one arena with a layer per frontier: a single layer
/// for the A* family, one per heuristic for Sequential search. A node is
/// addressed by `(layer, cell index)` and its parent is the cell index of the
/// node that relaxed it *in the same layer*. States are created lazily on
/// first touch; bumping the generation at the start of a run invalidates every
/// state from the previous one without clearing the arena.
///
/// Every run takes `&mut self`, so one `SearchRange` serves one search at a
/// time. Use separate values for concurrent searches.
pub struct SearchRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) layers: usize,
    pub(crate) generation: u32,
    pub(crate) frontiers: Vec<Frontier>,
    pub(crate) expanded: Vec<Vec<Point>>,
    pub(crate) neighbors: Neighbors,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: Vec::new(),
            layers: 0,
            generation: 0,
            frontiers: Vec::new(),
            expanded: Vec::new(),
            neighbors: Neighbors::new(),
        }
    }

    /// Create a `SearchRange` covering `map`.
    pub fn for_map<M: TerrainMap>(map: &M) -> Self {
        Self::new(map.bounds())
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Replace the underlying range. Node states from earlier runs are
    /// discarded.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.layers = 0;
        self.nodes.clear();
        self.generation = 0;
        for fr in &mut self.frontiers {
            fr.clear();
        }
        for list in &mut self.expanded {
            list.clear();
        }
    }

    /// State of the node at `p` after the last single-frontier run.
    ///
    /// `None` if `p` is outside the range or was never reached.
    pub fn node_at(&self, p: Point) -> Option<NodeState> {
        self.layer_node_at(p, 0)
    }

    /// State of the node at `p` in the given frontier after the last run.
    pub fn layer_node_at(&self, p: Point, layer: usize) -> Option<NodeState> {
        if layer >= self.layers {
            return None;
        }
        let ci = self.idx(p)?;
        let n = self.get(self.id(layer, ci))?;
        Some(NodeState {
            g: n.g,
            h: n.h,
            parent: (n.parent != NO_PARENT).then(|| self.point(n.parent)),
            expanded: n.closed,
        })
    }

    // -----------------------------------------------------------------------
    // Run lifecycle
    // -----------------------------------------------------------------------

    /// Reset for a run over `map` with `layers` frontiers.
    pub(crate) fn prepare<M: TerrainMap>(&mut self, map: &M, layers: usize) {
        let bounds = map.bounds();
        if bounds != self.rng {
            self.set_range(bounds);
        }
        let needed = layers * self.rng.len();
        if self.nodes.len() < needed {
            self.nodes.resize(needed, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale records could alias the new generation.
            for n in &mut self.nodes {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.layers = layers;
        if self.frontiers.len() < layers {
            self.frontiers.resize_with(layers, Frontier::new);
        }
        if self.expanded.len() < layers {
            self.expanded.resize_with(layers, Vec::new);
        }
        for fr in &mut self.frontiers[..layers] {
            fr.clear();
        }
        for list in &mut self.expanded[..layers] {
            list.clear();
        }
    }

    /// Seed `ci` as the start of `layer`.
    pub(crate) fn seed(&mut self, layer: usize, ci: usize, h: f32) {
        let n = self.touch(self.id(layer, ci));
        n.g = 0.0;
        n.h = h;
        n.parent = NO_PARENT;
        let f = n.f();
        self.frontiers[layer].insert(ci, f, h);
    }

    /// Give `ci` a state in `layer` (infinite cost) unless it already has one.
    pub(crate) fn register(&mut self, layer: usize, ci: usize) {
        self.touch(self.id(layer, ci));
    }

    /// Best known cost of `ci` in `layer`; infinite if untouched.
    #[inline]
    pub(crate) fn g(&self, layer: usize, ci: usize) -> f32 {
        self.get(self.id(layer, ci)).map_or(f32::INFINITY, |n| n.g)
    }

    /// Mark `ci` expanded in `layer` and record it for diagnostics.
    pub(crate) fn close(&mut self, layer: usize, ci: usize) {
        let p = self.point(ci);
        self.touch(self.id(layer, ci)).closed = true;
        self.expanded[layer].push(p);
    }

    /// Relax every passable neighbour of `ci` in `layer` only.
    ///
    /// A neighbour is updated when it is not closed in this layer and the
    /// route through `ci` is strictly cheaper than its current cost. Closed
    /// nodes are never reopened.
    pub(crate) fn relax_neighbors<M: TerrainMap>(
        &mut self,
        map: &M,
        layer: usize,
        ci: usize,
        heuristic: &Heuristic,
        weight: f32,
    ) {
        let cp = self.point(ci);
        let Some(current) = map.cell_at(cp) else {
            return;
        };
        let current_g = self.g(layer, ci);

        let mut nb = std::mem::take(&mut self.neighbors);
        for next in nb.passable(map, cp) {
            let Some(ni) = self.idx(next.pos) else {
                continue;
            };
            let Some(step) = cell_cost(&current, next) else {
                continue;
            };
            let tentative = current_g + step;

            let n = self.touch(self.id(layer, ni));
            if n.closed || tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.h = weight * heuristic.estimate(next.pos);
            n.parent = ci;
            let (f, h) = (n.f(), n.h);
            self.frontiers[layer].insert(ni, f, h);
        }
        self.neighbors = nb;
    }

    /// Follow `layer`'s parent chain back from `goal`, start first.
    pub(crate) fn reconstruct<M: TerrainMap>(&self, map: &M, layer: usize, goal: usize) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            if let Some(cell) = map.cell_at(self.point(ci)) {
                path.push(cell);
            }
            ci = self.get(self.id(layer, ci)).map_or(NO_PARENT, |n| n.parent);
        }
        path.reverse();
        path
    }

    // -----------------------------------------------------------------------
    // Arena helpers
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn id(&self, layer: usize, ci: usize) -> usize {
        layer * self.rng.len() + ci
    }

    /// The node if it belongs to the current run.
    #[inline]
    fn get(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id).filter(|n| n.generation == self.generation)
    }

    /// The node, created fresh if it is stale.
    #[inline]
    pub(crate) fn touch(&mut self, id: usize) -> &mut Node {
        let cur = self.generation;
        let n = &mut self.nodes[id];
        if n.generation != cur {
            *n = Node {
                generation: cur,
                ..Node::default()
            };
        }
        n
    }

    /// Convert a `Point` to a flat cell index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat cell index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
