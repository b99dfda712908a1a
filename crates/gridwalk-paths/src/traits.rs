use gridwalk_core::{NodeGrid, Point, Range};

/// Grid terrain the search engine walks over.
pub trait Terrain {
    /// Rectangle of valid positions.
    fn bounds(&self) -> Range;

    /// Whether `p` may be entered. Out-of-bounds positions are never
    /// passable.
    fn passable(&self, p: Point) -> bool;

    /// Extra cost of entering `p` on top of the unit step. Must be >= 0.
    fn weight(&self, p: Point) -> i32;
}

impl Terrain for NodeGrid {
    fn bounds(&self) -> Range {
        NodeGrid::bounds(self)
    }

    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }

    fn weight(&self, p: Point) -> i32 {
        self.weight_at(p)
    }
}
