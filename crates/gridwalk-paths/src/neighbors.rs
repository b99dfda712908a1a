use gridwalk_core::Point;

/// Orthogonal steps in successor order: north, south, east, west.
const ORTHOGONAL: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Diagonal steps in successor order: north-west, south-east, north-east,
/// south-west.
const DIAGONAL: [Point; 4] = [
    Point::new(-1, -1),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
];

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal (4-way) or all (8-way) neighbors of a grid
/// point in a fixed order, filtered by a predicate. The order decides which
/// of several equally good successors is explored first.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the 4 orthogonal neighbors of `p`, keeping only those for
    /// which `keep` returns `true`.
    pub fn orthogonal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.extend(p, &ORTHOGONAL, &keep);
        &self.buf
    }

    /// Return the orthogonal neighbors of `p` followed by the diagonal ones,
    /// keeping only those for which `keep` returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.extend(p, &ORTHOGONAL, &keep);
        self.extend(p, &DIAGONAL, &keep);
        &self.buf
    }

    /// Dispatch to [`all`](Self::all) or [`orthogonal`](Self::orthogonal).
    pub fn successors(
        &mut self,
        p: Point,
        diagonals: bool,
        keep: impl Fn(Point) -> bool,
    ) -> &[Point] {
        if diagonals {
            self.all(p, keep)
        } else {
            self.orthogonal(p, keep)
        }
    }

    fn extend(&mut self, p: Point, dirs: &[Point], keep: &impl Fn(Point) -> bool) {
        for &d in dirs {
            let n = p + d;
            if keep(n) {
                self.buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthogonal_order() {
        let mut nb = Neighbors::new();
        let got = nb.orthogonal(Point::new(2, 2), |_| true).to_vec();
        assert_eq!(
            got,
            vec![
                Point::new(2, 1),
                Point::new(2, 3),
                Point::new(3, 2),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn all_appends_diagonals() {
        let mut nb = Neighbors::new();
        let got = nb.all(Point::new(2, 2), |_| true).to_vec();
        assert_eq!(got.len(), 8);
        assert_eq!(got[4], Point::new(1, 1));
        assert_eq!(got[5], Point::new(3, 3));
        assert_eq!(got[6], Point::new(3, 1));
        assert_eq!(got[7], Point::new(1, 3));
    }

    #[test]
    fn filter_applies() {
        let mut nb = Neighbors::new();
        let got = nb.successors(Point::new(0, 0), true, |p| p.x >= 0 && p.y >= 0);
        assert_eq!(got, &[Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]);
    }
}
