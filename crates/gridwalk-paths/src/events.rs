//! Step events emitted while a search runs.
//!
//! A renderer can follow a search without the engine knowing anything about
//! drawing: every state change a visualizer needs to colour a cell is
//! reported as a [`SearchEvent`].

use gridwalk_core::Point;

/// One observable change during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// A node was queued (or re-queued with a better key).
    Opened { pos: Point, key: i32 },
    /// A node was popped from the frontier and closed. It is the active
    /// node until the next `Expanded` event.
    Expanded { pos: Point, cost: i32 },
    /// The target was reached; path steps follow.
    Found { len: usize },
    /// The frontier ran dry without reaching the target.
    Exhausted,
    /// A node on the final path, reported from the target back to the start.
    PathStep(Point),
}

/// Receiver of [`SearchEvent`]s.
pub trait SearchObserver {
    fn on_event(&mut self, event: SearchEvent);
}

/// Ignores every event.
impl SearchObserver for () {
    #[inline]
    fn on_event(&mut self, _event: SearchEvent) {}
}

/// Records every event in order.
impl SearchObserver for Vec<SearchEvent> {
    fn on_event(&mut self, event: SearchEvent) {
        self.push(event);
    }
}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_event(&mut self, event: SearchEvent) {
        (**self).on_event(event);
    }
}

/// Adapts a closure into a [`SearchObserver`].
#[derive(Debug, Clone, Copy)]
pub struct ObserveFn<F>(pub F);

impl<F: FnMut(SearchEvent)> SearchObserver for ObserveFn<F> {
    fn on_event(&mut self, event: SearchEvent) {
        (self.0)(event);
    }
}
