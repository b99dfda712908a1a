//! Path reconstruction from predecessor links.

use gridwalk_core::Point;

use crate::finder::{NO_PARENT, NodeState, PathFinder};

impl PathFinder {
    /// Positions from node `idx` back to the start, following predecessor
    /// links of the current run.
    pub(crate) fn walk_back(&self, idx: usize) -> Vec<Point> {
        let mut walk = Vec::new();
        let mut ci = idx;
        // A predecessor chain never visits a node twice.
        while ci != NO_PARENT && walk.len() < self.nodes.len() {
            walk.push(self.point(ci));
            ci = self.current(ci).parent;
        }
        walk
    }

    /// Reconstruct the path from the last run's start to `p`.
    ///
    /// Returns an empty path if `p` was not reached. After a Dijkstra run
    /// this also yields best-known paths to nodes other than the target.
    pub fn path_to(&self, p: Point) -> Vec<Point> {
        let Some(i) = self.idx(p) else {
            return Vec::new();
        };
        let node = self.current(i);
        if node.state == NodeState::Unvisited && node.parent == NO_PARENT {
            return Vec::new();
        }
        let mut path = self.walk_back(i);
        path.reverse();
        path
    }
}
