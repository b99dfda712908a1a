//! A* and Dijkstra search over weighted node grids.
//!
//! Both algorithms run through one engine, [`Search`], parameterized by a
//! [`SearchConfig`]:
//!
//! - **A\*** ([`PathFinder::astar_path`]) orders the frontier by
//!   `g + manhattan` and stops when the target is discovered.
//! - **Dijkstra** ([`PathFinder::dijkstra_path`]) orders the frontier by `g`
//!   and stops when the target is popped.
//!
//! Every step into a node costs `1 + weight`; diagonal steps (when enabled)
//! cost the same as orthogonal ones.
//!
//! [`PathFinder`] owns the per-node bookkeeping as a side table and reuses it
//! across queries, so a grid is never mutated by a search. Searches can be
//! single-stepped and observed through [`SearchEvent`]s to drive a
//! visualisation.
//!
//! ```
//! use gridwalk_core::{NodeGrid, Point};
//!
//! let mut grid = NodeGrid::new(5, 5);
//! grid.set_passable(Point::new(1, 0), false);
//! let path = gridwalk_paths::find_path(&grid, Point::new(0, 0), Point::new(4, 0), false);
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(4, 0)));
//! ```

mod astar;
mod config;
mod dijkstra;
mod distance;
mod events;
mod finder;
mod frontier;
mod neighbors;
mod path;
mod search;
mod traits;

pub use config::{Algorithm, SearchConfig};
pub use distance::manhattan;
pub use events::{ObserveFn, SearchEvent, SearchObserver};
pub use finder::{NodeState, PathFinder, UNREACHABLE};
pub use frontier::Frontier;
pub use neighbors::Neighbors;
pub use search::{Search, SearchState};
pub use traits::Terrain;

use gridwalk_core::{NodeGrid, Point};

/// Find a path from `start` to `target` on `grid` with A*.
///
/// Returns `[start]` when `start == target`, an empty path when either end
/// is impassable or no path exists, and otherwise the path from `start` to
/// `target` inclusive.
pub fn find_path(grid: &NodeGrid, start: Point, target: Point, diagonals: bool) -> Vec<Point> {
    find_path_with(grid, start, target, SearchConfig::astar(diagonals))
}

/// Find a path with an explicit algorithm choice.
pub fn find_path_with<T: Terrain + ?Sized>(
    terrain: &T,
    start: Point,
    target: Point,
    config: SearchConfig,
) -> Vec<Point> {
    PathFinder::new(terrain.bounds())
        .search(terrain, start, target, config)
        .run()
}
