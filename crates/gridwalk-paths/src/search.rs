//! The search engine shared by A* and Dijkstra.
//!
//! A [`Search`] is a small state machine. Each call to [`Search::step`]
//! performs one unit of work (initialisation, or one frontier expansion), so
//! a caller can pace a visualisation between steps; [`Search::run`] just
//! steps until the search is done. Both produce the same path.

use gridwalk_core::Point;
use log::{debug, trace};

use crate::config::SearchConfig;
use crate::events::{SearchEvent, SearchObserver};
use crate::finder::{NO_PARENT, NodeState, PathFinder};
use crate::traits::Terrain;

/// Phase of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchState {
    Initializing,
    Expanding,
    /// A path was found (possibly the single-node path when start equals
    /// target).
    Found,
    /// No path exists.
    Exhausted,
}

impl SearchState {
    /// Whether the search has terminated.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}

/// An in-flight search over a [`Terrain`].
pub struct Search<'a, T: Terrain + ?Sized, O: SearchObserver = ()> {
    finder: &'a mut PathFinder,
    terrain: &'a T,
    start: Point,
    target: Point,
    target_idx: usize,
    config: SearchConfig,
    observer: O,
    state: SearchState,
    active: Option<Point>,
    expansions: usize,
    path: Vec<Point>,
}

impl PathFinder {
    /// Prepare a search from `start` to `target`. Nothing happens until the
    /// returned [`Search`] is stepped or run.
    pub fn search<'a, T: Terrain + ?Sized>(
        &'a mut self,
        terrain: &'a T,
        start: Point,
        target: Point,
        config: SearchConfig,
    ) -> Search<'a, T> {
        self.search_with(terrain, start, target, config, ())
    }

    /// Like [`search`](Self::search), reporting every step to `observer`.
    pub fn search_with<'a, T: Terrain + ?Sized, O: SearchObserver>(
        &'a mut self,
        terrain: &'a T,
        start: Point,
        target: Point,
        config: SearchConfig,
        observer: O,
    ) -> Search<'a, T, O> {
        Search {
            finder: self,
            terrain,
            start,
            target,
            target_idx: NO_PARENT,
            config,
            observer,
            state: SearchState::Initializing,
            active: None,
            expansions: 0,
            path: Vec::new(),
        }
    }
}

impl<T: Terrain + ?Sized, O: SearchObserver> Search<'_, T, O> {
    /// Current phase.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The path found so far: empty until the search is `Found`.
    #[inline]
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Number of nodes popped from the frontier.
    #[inline]
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// The node expanded by the most recent step.
    #[inline]
    pub fn active(&self) -> Option<Point> {
        self.active
    }

    /// Open/closed status of `p` as of the last step.
    pub fn node_state(&self, p: Point) -> NodeState {
        self.finder.node_state(p)
    }

    /// Read-only access to the scratch state as of the last step.
    pub fn finder(&self) -> &PathFinder {
        &*self.finder
    }

    /// Perform one unit of work and return the resulting phase.
    ///
    /// Stepping a finished search is a no-op.
    pub fn step(&mut self) -> SearchState {
        match self.state {
            SearchState::Initializing => self.initialize(),
            SearchState::Expanding => self.expand(),
            SearchState::Found | SearchState::Exhausted => {}
        }
        self.state
    }

    /// Step until done and return the path: start first, target last, or
    /// empty when the target is unreachable.
    pub fn run(mut self) -> Vec<Point> {
        while !self.state.is_done() {
            self.step();
        }
        self.path
    }

    fn initialize(&mut self) {
        let bounds = self.terrain.bounds();
        if self.finder.range() != bounds {
            self.finder.set_range(bounds);
        }
        self.finder.begin_run();

        let (Some(si), Some(ti)) = (self.finder.idx(self.start), self.finder.idx(self.target))
        else {
            debug!("search endpoints {} -> {} outside {}", self.start, self.target, bounds);
            self.exhaust();
            return;
        };

        if si == ti {
            self.path = vec![self.start];
            self.state = SearchState::Found;
            self.observer.on_event(SearchEvent::Found { len: 1 });
            self.observer.on_event(SearchEvent::PathStep(self.start));
            return;
        }

        if !self.terrain.passable(self.start) || !self.terrain.passable(self.target) {
            debug!("search endpoint impassable: {} -> {}", self.start, self.target);
            self.exhaust();
            return;
        }

        self.target_idx = ti;
        let key = self.config.algorithm.heuristic(self.start, self.target);
        {
            let n = self.finder.touch(si);
            n.g = 0;
            n.f = Some(key);
            n.parent = NO_PARENT;
            n.state = NodeState::Open;
        }
        self.finder.frontier.push_front(si, key);
        self.observer.on_event(SearchEvent::Opened {
            pos: self.start,
            key,
        });

        debug!(
            "{:?} search {} -> {} (diagonals: {})",
            self.config.algorithm, self.start, self.target, self.config.diagonals
        );
        self.state = SearchState::Expanding;
    }

    fn expand(&mut self) {
        let Some((ci, _)) = self.finder.frontier.pop_front() else {
            self.exhaust();
            return;
        };

        let cp = self.finder.point(ci);
        let current_g = {
            let n = self.finder.touch(ci);
            n.state = NodeState::Closed;
            n.g
        };
        self.active = Some(cp);
        self.expansions += 1;
        trace!("expand {} (g = {})", cp, current_g);
        self.observer.on_event(SearchEvent::Expanded {
            pos: cp,
            cost: current_g,
        });

        let algorithm = self.config.algorithm;
        if !algorithm.stops_on_discovery() && ci == self.target_idx {
            self.found(ci);
            return;
        }

        let terrain = self.terrain;
        let bounds = self.finder.range();
        let mut successors = [Point::ZERO; 8];
        let count = {
            let found = self.finder.neighbors.successors(cp, self.config.diagonals, |p| {
                bounds.contains(p) && terrain.passable(p)
            });
            successors[..found.len()].copy_from_slice(found);
            found.len()
        };

        for &np in &successors[..count] {
            let Some(ni) = self.finder.idx(np) else {
                continue;
            };
            let tentative_g = current_g.saturating_add(terrain.weight(np).saturating_add(1));

            if algorithm.stops_on_discovery() && ni == self.target_idx {
                let n = self.finder.touch(ni);
                n.g = tentative_g;
                n.parent = ci;
                self.found(ni);
                return;
            }

            let key = tentative_g.saturating_add(algorithm.heuristic(np, self.target));
            let n = self.finder.touch(ni);
            if n.state == NodeState::Closed || n.f.is_some_and(|f| key >= f) {
                continue;
            }
            n.g = tentative_g;
            n.f = Some(key);
            n.parent = ci;
            n.state = NodeState::Open;
            self.finder.frontier.insert_sorted(ni, key);
            self.observer.on_event(SearchEvent::Opened { pos: np, key });
        }
    }

    fn found(&mut self, target_idx: usize) {
        let walk = self.finder.walk_back(target_idx);
        self.observer.on_event(SearchEvent::Found { len: walk.len() });
        for &p in &walk {
            self.observer.on_event(SearchEvent::PathStep(p));
        }
        self.path = walk;
        self.path.reverse();
        self.state = SearchState::Found;
        debug!(
            "path found: {} nodes, cost {}, {} expansions",
            self.path.len(),
            self.finder.current(target_idx).g,
            self.expansions
        );
    }

    fn exhaust(&mut self) {
        self.path.clear();
        self.state = SearchState::Exhausted;
        self.observer.on_event(SearchEvent::Exhausted);
        debug!("no path {} -> {} after {} expansions", self.start, self.target, self.expansions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ObserveFn;
    use gridwalk_core::NodeGrid;

    fn walled_grid() -> NodeGrid {
        // 6x4 with a partial wall at x = 2 forcing a detour through y = 3.
        let mut g = NodeGrid::new(6, 4);
        for y in 0..3 {
            g.set_passable(Point::new(2, y), false);
        }
        g
    }

    #[test]
    fn stepping_matches_run() {
        let grid = walled_grid();
        let (from, to) = (Point::new(0, 0), Point::new(5, 0));
        for config in [SearchConfig::astar(false), SearchConfig::dijkstra(true)] {
            let mut pf = PathFinder::for_grid(&grid);
            let expected = pf.search(&grid, from, to, config).run();

            let mut search = pf.search(&grid, from, to, config);
            assert_eq!(search.state(), SearchState::Initializing);
            let mut steps = 0;
            while !search.step().is_done() {
                steps += 1;
                assert!(steps < 1000);
            }
            assert_eq!(search.state(), SearchState::Found);
            assert_eq!(search.path(), expected.as_slice());
            assert!(!expected.is_empty());
        }
    }

    #[test]
    fn stepping_finished_search_is_noop() {
        let grid = NodeGrid::new(3, 3);
        let mut pf = PathFinder::for_grid(&grid);
        let mut search = pf.search(
            &grid,
            Point::new(0, 0),
            Point::new(2, 2),
            SearchConfig::default(),
        );
        while !search.step().is_done() {}
        let path = search.path().to_vec();
        let expansions = search.expansions();
        assert_eq!(search.step(), SearchState::Found);
        assert_eq!(search.path(), path.as_slice());
        assert_eq!(search.expansions(), expansions);
    }

    #[test]
    fn node_states_track_progress() {
        let grid = NodeGrid::new(5, 5);
        let start = Point::new(0, 0);
        let mut pf = PathFinder::for_grid(&grid);
        let mut search =
            pf.search(&grid, start, Point::new(4, 4), SearchConfig::dijkstra(false));
        search.step();
        assert_eq!(search.node_state(start), NodeState::Open);
        search.step();
        assert_eq!(search.active(), Some(start));
        assert_eq!(search.node_state(start), NodeState::Closed);
        assert_eq!(search.node_state(Point::new(1, 0)), NodeState::Open);
        assert_eq!(search.node_state(Point::new(0, 1)), NodeState::Open);
        assert_eq!(search.node_state(Point::new(1, 1)), NodeState::Unvisited);
        assert_eq!(search.finder().open_nodes().count(), 2);
    }

    #[test]
    fn events_end_with_path_steps() {
        let grid = walled_grid();
        let (from, to) = (Point::new(0, 0), Point::new(5, 0));
        let mut pf = PathFinder::for_grid(&grid);
        let mut events: Vec<SearchEvent> = Vec::new();
        let path = pf
            .search_with(&grid, from, to, SearchConfig::astar(false), &mut events)
            .run();

        assert_eq!(events[0], SearchEvent::Opened { pos: from, key: 5 });
        let found_at = events
            .iter()
            .position(|e| matches!(e, SearchEvent::Found { .. }))
            .unwrap();
        assert_eq!(events[found_at], SearchEvent::Found { len: path.len() });
        let steps: Vec<Point> = events[found_at + 1..]
            .iter()
            .map(|e| match e {
                SearchEvent::PathStep(p) => *p,
                other => panic!("unexpected event after Found: {other:?}"),
            })
            .collect();
        let mut reversed = path.clone();
        reversed.reverse();
        assert_eq!(steps, reversed);
    }

    #[test]
    fn exhausted_event_on_unreachable() {
        let mut grid = NodeGrid::new(3, 3);
        for y in 0..3 {
            grid.set_passable(Point::new(1, y), false);
        }
        let mut pf = PathFinder::for_grid(&grid);
        let mut expanded = 0;
        let mut exhausted = false;
        let path = pf
            .search_with(
                &grid,
                Point::new(0, 0),
                Point::new(2, 2),
                SearchConfig::dijkstra(true),
                ObserveFn(|e: SearchEvent| match e {
                    SearchEvent::Expanded { .. } => expanded += 1,
                    SearchEvent::Exhausted => exhausted = true,
                    _ => {}
                }),
            )
            .run();
        assert!(path.is_empty());
        assert!(exhausted);
        assert_eq!(expanded, 3);
    }

    #[test]
    fn endpoints_out_of_bounds() {
        let grid = NodeGrid::new(3, 3);
        let mut pf = PathFinder::for_grid(&grid);
        let path = pf
            .search(&grid, Point::new(0, 0), Point::new(5, 5), SearchConfig::default())
            .run();
        assert!(path.is_empty());
    }
}
