use gridwalk_core::Point;

use crate::distance::manhattan;

/// Search algorithm run by [`PathFinder::search`](crate::PathFinder::search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Frontier ordered by `g + manhattan`, stops as soon as the target is
    /// discovered as a successor.
    #[default]
    AStar,
    /// Frontier ordered by `g`, stops when the target is popped.
    Dijkstra,
}

impl Algorithm {
    /// Estimated remaining cost from `p` to `target`.
    ///
    /// Manhattan distance for A*. Diagonal steps cost the same as orthogonal
    /// ones, so with diagonals enabled this overestimates and A* may return
    /// a longer path than Dijkstra.
    #[inline]
    pub fn heuristic(self, p: Point, target: Point) -> i32 {
        match self {
            Algorithm::AStar => manhattan(p, target),
            Algorithm::Dijkstra => 0,
        }
    }

    /// Whether the target ends the search when discovered as a successor
    /// (`true`) or only when popped from the frontier (`false`).
    #[inline]
    pub fn stops_on_discovery(self) -> bool {
        matches!(self, Algorithm::AStar)
    }
}

/// Options for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Allow moves to the 4 diagonal neighbors.
    pub diagonals: bool,
}

impl SearchConfig {
    pub fn astar(diagonals: bool) -> Self {
        Self {
            algorithm: Algorithm::AStar,
            diagonals,
        }
    }

    pub fn dijkstra(diagonals: bool) -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            diagonals,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = SearchConfig::dijkstra(true);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
