use gridwalk_core::Point;

use crate::PathFinder;
use crate::config::SearchConfig;
use crate::traits::Terrain;

impl PathFinder {
    /// Compute a cheapest path from `from` to `to` using Dijkstra's
    /// algorithm.
    ///
    /// The frontier is ordered by cost so far and the search ends when `to`
    /// is popped, at which point its cost is final. Returns the full path,
    /// `[from]` when `from == to`, or an empty path if `to` is unreachable.
    pub fn dijkstra_path<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        from: Point,
        to: Point,
        diagonals: bool,
    ) -> Vec<Point> {
        self.search(terrain, from, to, SearchConfig::dijkstra(diagonals))
            .run()
    }
}
