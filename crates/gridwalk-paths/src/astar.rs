use gridwalk_core::Point;

use crate::PathFinder;
use crate::config::SearchConfig;
use crate::traits::Terrain;

impl PathFinder {
    /// Compute a path from `from` to `to` using A*.
    ///
    /// The frontier is ordered by `g + manhattan(p, to)` and the search ends
    /// as soon as `to` is discovered as a successor. Returns the full path
    /// (including both endpoints), `[from]` when `from == to`, or an empty
    /// path if `to` is unreachable.
    ///
    /// With `diagonals` enabled the Manhattan estimate is not admissible, so
    /// the returned path may be longer than the shortest one.
    pub fn astar_path<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        from: Point,
        to: Point,
        diagonals: bool,
    ) -> Vec<Point> {
        self.search(terrain, from, to, SearchConfig::astar(diagonals))
            .run()
    }
}
