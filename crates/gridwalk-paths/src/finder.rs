use gridwalk_core::{NodeGrid, Point, Range};

use crate::frontier::Frontier;
use crate::neighbors::Neighbors;

/// Sentinel cost meaning "not reached" (+infinity).
pub const UNREACHABLE: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Search status of a single node, as a renderer would colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeState {
    /// Not touched by the current run.
    #[default]
    Unvisited,
    /// Queued in the frontier.
    Open,
    /// Expanded; its cost is final.
    Closed,
}

// ---------------------------------------------------------------------------
// Per-node bookkeeping side table
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: Option<i32>,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) state: NodeState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: None,
            parent: NO_PARENT,
            generation: 0,
            state: NodeState::Unvisited,
        }
    }
}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Owner of all search scratch state for a grid rectangle.
///
/// Bookkeeping (cost so far, estimated total, predecessor, open/closed) is
/// kept in a side table indexed by node, never in the grid itself. Each run
/// bumps a generation counter, which lazily invalidates the previous run's
/// entries, so repeated queries incur no allocations after the first use.
#[derive(Debug, Clone)]
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: Frontier,
    pub(crate) neighbors: Neighbors,
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); len],
            generation: 0,
            frontier: Frontier::new(len),
            neighbors: Neighbors::new(),
        }
    }

    /// Create a `PathFinder` sized for `grid`.
    pub fn for_grid(grid: &NodeGrid) -> Self {
        Self::new(grid.bounds())
    }

    /// Replace the underlying range.
    ///
    /// If the new size fits within existing capacity the node table is kept
    /// and only the generation is bumped. Otherwise it is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.bump_generation();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        self.frontier.reset(new_len);
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Start a new run: invalidate every node and empty the frontier.
    pub(crate) fn begin_run(&mut self) {
        self.bump_generation();
        self.frontier.reset(self.rng.len());
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale stamps could collide with the new generation.
            self.nodes.iter_mut().for_each(|n| *n = Node::default());
            self.generation = 1;
        }
    }

    /// Bookkeeping for node `i` as of the current run.
    #[inline]
    pub(crate) fn current(&self, i: usize) -> Node {
        let n = self.nodes[i];
        if n.generation == self.generation {
            n
        } else {
            Node::default()
        }
    }

    /// Mutable bookkeeping for node `i`, reset first if stale.
    #[inline]
    pub(crate) fn touch(&mut self, i: usize) -> &mut Node {
        let cur_gen = self.generation;
        let n = &mut self.nodes[i];
        if n.generation != cur_gen {
            *n = Node {
                generation: cur_gen,
                ..Node::default()
            };
        }
        n
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Open/closed status of `p` in the most recent run.
    pub fn node_state(&self, p: Point) -> NodeState {
        self.idx(p).map_or(NodeState::Unvisited, |i| self.current(i).state)
    }

    /// Best known cost from the start to `p` (`g`), or [`UNREACHABLE`].
    pub fn cost_at(&self, p: Point) -> i32 {
        self.idx(p).map_or(UNREACHABLE, |i| self.current(i).g)
    }

    /// Frontier key (`f` for A*, `g` for Dijkstra) last assigned to `p`.
    pub fn estimate_at(&self, p: Point) -> Option<i32> {
        self.idx(p).and_then(|i| self.current(i).f)
    }

    /// The node `p` was reached from, if any.
    pub fn predecessor(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        match self.current(i).parent {
            NO_PARENT => None,
            parent => Some(self.point(parent)),
        }
    }

    /// Nodes currently queued, head first, with their keys.
    pub fn open_nodes(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.frontier.iter().map(|(i, key)| (self.point(i), key))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
