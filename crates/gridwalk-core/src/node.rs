//! The per-cell node model: [`NodeKind`] and [`GridNode`].

use crate::geom::Point;

/// Role of a node within its grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Start,
    Target,
    #[default]
    Normal,
}

/// One traversable cell of a [`NodeGrid`](crate::NodeGrid).
///
/// Search bookkeeping (cost so far, estimated total, predecessor) is not
/// stored here; the search engine keeps it in its own side table so a grid
/// can be searched any number of times without being reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridNode {
    kind: NodeKind,
    passable: bool,
    weight: i32,
    position: Point,
}

impl GridNode {
    /// Create a node. Negative weights are clamped to 0.
    pub fn new(kind: NodeKind, passable: bool, weight: i32, position: Point) -> Self {
        Self {
            kind,
            passable,
            weight: weight.max(0),
            position,
        }
    }

    /// A passable, zero-weight `Normal` node at `position`.
    pub fn open(position: Point) -> Self {
        Self::new(NodeKind::Normal, true, 0, position)
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn passable(&self) -> bool {
        self.passable
    }

    /// Extra cost paid on top of the unit step when entering this node.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    pub fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }

    /// Set the extra entry cost. Negative weights are clamped to 0.
    pub fn set_weight(&mut self, weight: i32) {
        self.weight = weight.max(0);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_node_round_trip() {
        let node = GridNode::new(NodeKind::Target, false, 3, Point::new(4, 7));
        let json = serde_json::to_string(&node).unwrap();
        let back: GridNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
