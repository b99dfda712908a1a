//! The [`NodeGrid`] type: a rectangular, fully populated grid of
//! [`GridNode`]s.
//!
//! Nodes are stored row-major in a flat buffer. Positions run from `(0, 0)`
//! to `(max_x, max_y)` inclusive. The grid tracks which node is the start and
//! which is the target so that at most one of each exists.

use crate::geom::{Point, Range};
use crate::node::{GridNode, NodeKind};

/// A 2D grid of [`GridNode`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGrid {
    nodes: Vec<GridNode>,
    width: i32,
    height: i32,
    start: Option<Point>,
    target: Option<Point>,
}

impl NodeGrid {
    /// Create a grid of passable, zero-weight `Normal` nodes.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let nodes = Range::new(0, 0, width, height)
            .iter()
            .map(GridNode::open)
            .collect();
        Self {
            nodes,
            width,
            height,
            start: None,
            target: None,
        }
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Largest valid x coordinate (inclusive).
    #[inline]
    pub fn max_x(&self) -> i32 {
        self.width - 1
    }

    /// Largest valid y coordinate (inclusive).
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.height - 1
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width.max(1) as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The node at `p`, or `None` if out of bounds.
    pub fn node(&self, p: Point) -> Option<&GridNode> {
        self.index(p).map(|i| &self.nodes[i])
    }

    /// Mutable access to the node at `p`, or `None` if out of bounds.
    ///
    /// Only passability and weight can be edited this way; the start and
    /// target go through [`set_start`](Self::set_start) and
    /// [`set_target`](Self::set_target).
    pub fn node_mut(&mut self, p: Point) -> Option<&mut GridNode> {
        let i = self.index(p)?;
        Some(&mut self.nodes[i])
    }

    /// Whether `p` is in bounds and passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.node(p).is_some_and(GridNode::passable)
    }

    /// Weight of the node at `p`; 0 when out of bounds.
    #[inline]
    pub fn weight_at(&self, p: Point) -> i32 {
        self.node(p).map_or(0, GridNode::weight)
    }

    /// Mark the node at `p` passable or impassable. No-op if out of bounds.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if let Some(node) = self.node_mut(p) {
            node.set_passable(passable);
        }
    }

    /// Set the weight of the node at `p`. No-op if out of bounds.
    pub fn set_weight(&mut self, p: Point, weight: i32) {
        if let Some(node) = self.node_mut(p) {
            node.set_weight(weight);
        }
    }

    /// Designate `p` as the start node. Any previous start is demoted to
    /// `Normal`. If `p` was the target, the grid no longer has a target.
    pub fn set_start(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        self.assign(p, NodeKind::Start);
    }

    /// Designate `p` as the target node. Any previous target is demoted to
    /// `Normal`. If `p` was the start, the grid no longer has a start.
    pub fn set_target(&mut self, p: Point) {
        if !self.contains(p) {
            return;
        }
        self.assign(p, NodeKind::Target);
    }

    fn assign(&mut self, p: Point, kind: NodeKind) {
        let previous = match kind {
            NodeKind::Start => self.start.take(),
            NodeKind::Target => self.target.take(),
            NodeKind::Normal => None,
        };
        if let Some(i) = previous.and_then(|old| self.index(old)) {
            self.nodes[i].set_kind(NodeKind::Normal);
        }
        if let Some(i) = self.index(p) {
            match self.nodes[i].kind() {
                NodeKind::Start => self.start = None,
                NodeKind::Target => self.target = None,
                NodeKind::Normal => {}
            }
            self.nodes[i].set_kind(kind);
        }
        match kind {
            NodeKind::Start => self.start = Some(p),
            NodeKind::Target => self.target = Some(p),
            NodeKind::Normal => {}
        }
    }

    /// Position of the start node, if one is designated.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the target node, if one is designated.
    #[inline]
    pub fn target(&self) -> Option<Point> {
        self.target
    }

    /// Iterate over nodes in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, GridNode> {
        self.nodes.iter()
    }

    /// Count how many nodes satisfy a predicate.
    pub fn count_fn(&self, f: impl FnMut(&&GridNode) -> bool) -> usize {
        self.nodes.iter().filter(f).count()
    }
}

impl<'a> IntoIterator for &'a NodeGrid {
    type Item = &'a GridNode;
    type IntoIter = std::slice::Iter<'a, GridNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_size() {
        let g = NodeGrid::new(10, 5);
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.max_x(), 9);
        assert_eq!(g.max_y(), 4);
        assert_eq!(g.len(), 50);
        assert!(g.iter().all(|n| n.passable() && n.weight() == 0));
    }

    #[test]
    fn test_index_point_round_trip() {
        let g = NodeGrid::new(7, 3);
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
            assert_eq!(g.node(p).unwrap().position(), p);
        }
        assert_eq!(g.index(Point::new(7, 0)), None);
        assert_eq!(g.index(Point::new(0, -1)), None);
    }

    #[test]
    fn test_passable_and_weight() {
        let mut g = NodeGrid::new(4, 4);
        let p = Point::new(2, 3);
        g.set_passable(p, false);
        g.set_weight(Point::new(1, 1), 5);
        assert!(!g.is_passable(p));
        assert!(!g.is_passable(Point::new(10, 10)));
        assert_eq!(g.weight_at(Point::new(1, 1)), 5);
        assert_eq!(g.count_fn(|n| !n.passable()), 1);
        // out of bounds writes are ignored
        g.set_passable(Point::new(-1, 0), false);
        assert_eq!(g.count_fn(|n| !n.passable()), 1);
    }

    #[test]
    fn test_node_mut_edits_in_place() {
        let mut g = NodeGrid::new(3, 3);
        g.set_target(Point::new(2, 2));
        let node = g.node_mut(Point::new(2, 2)).unwrap();
        node.set_passable(false);
        node.set_weight(4);
        assert!(!g.is_passable(Point::new(2, 2)));
        assert_eq!(g.weight_at(Point::new(2, 2)), 4);
        assert_eq!(g.node(Point::new(2, 2)).unwrap().kind(), NodeKind::Target);
        assert!(g.node_mut(Point::new(3, 0)).is_none());
    }

    #[test]
    fn test_single_start_and_target() {
        let mut g = NodeGrid::new(5, 5);
        g.set_start(Point::new(0, 0));
        g.set_target(Point::new(4, 4));
        g.set_start(Point::new(1, 0));
        assert_eq!(g.start(), Some(Point::new(1, 0)));
        assert_eq!(g.node(Point::new(0, 0)).unwrap().kind(), NodeKind::Normal);
        assert_eq!(g.count_fn(|n| n.kind() == NodeKind::Start), 1);

        // Moving the start onto the target clears the target.
        g.set_start(Point::new(4, 4));
        assert_eq!(g.start(), Some(Point::new(4, 4)));
        assert_eq!(g.target(), None);
        assert_eq!(g.count_fn(|n| n.kind() == NodeKind::Target), 0);
        assert_eq!(g.count_fn(|n| n.kind() == NodeKind::Start), 1);
    }

    #[test]
    fn test_empty_grid() {
        let g = NodeGrid::new(0, 3);
        assert!(g.is_empty());
        assert_eq!(g.node(Point::ZERO), None);
    }
}
