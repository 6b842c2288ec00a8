use scenepath_core::{Point, Range};

/// Distance value of a cell the search has not visited.
pub const UNVISITED: i32 = -1;

// ---------------------------------------------------------------------------
// SearchMaps
// ---------------------------------------------------------------------------

/// Result of one breadth-first search over a grid rectangle.
///
/// Holds the distance map (hop count from the start, [`UNVISITED`]
/// otherwise) and the parent map (predecessor on a shortest path). Each
/// search allocates its own maps, so concurrent searches never share
/// state; drop the value when done.
#[derive(Clone, Debug)]
pub struct SearchMaps {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) start: Option<Point>,
    pub(crate) distance: Vec<i32>,
    pub(crate) parent: Vec<Option<Point>>,
    pub(crate) visited: usize,
}

impl SearchMaps {
    /// Fresh maps covering `rng` with every cell unvisited.
    pub fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.width().max(0) as usize,
            start: None,
            distance: vec![UNVISITED; len],
            parent: vec![None; len],
            visited: 0,
        }
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The cell the search started from, if it was inside the range.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Number of cells reached, the start included.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Hop count from the start to `p`, or [`UNVISITED`].
    #[inline]
    pub fn distance(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.distance[i],
            None => UNVISITED,
        }
    }

    /// Whether the search reached `p`.
    #[inline]
    pub fn visited(&self, p: Point) -> bool {
        self.distance(p) != UNVISITED
    }

    /// Predecessor of `p` on its shortest path. `None` for the start and
    /// for unvisited cells.
    #[inline]
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.idx(p).and_then(|i| self.parent[i])
    }

    /// Iterate over every reached cell with its hop count, row by row.
    pub fn reached(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.rng
            .iter()
            .zip(self.distance.iter().copied())
            .filter(|&(_, d)| d != UNVISITED)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Record `p` as reached at `dist` hops via `parent`.
    #[inline]
    pub(crate) fn visit(&mut self, i: usize, dist: i32, parent: Option<Point>) {
        self.distance[i] = dist;
        self.parent[i] = parent;
        self.visited += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maps_are_unvisited() {
        let m = SearchMaps::new(Range::square(4));
        assert_eq!(m.range(), Range::square(4));
        assert_eq!(m.distance(Point::new(2, 3)), UNVISITED);
        assert_eq!(m.parent(Point::new(2, 3)), None);
        assert_eq!(m.visited_count(), 0);
        assert_eq!(m.reached().count(), 0);
        assert_eq!(m.start(), None);
    }

    #[test]
    fn idx_respects_offset_range() {
        let m = SearchMaps::new(Range::new(10, 20, 13, 22));
        assert_eq!(m.idx(Point::new(10, 20)), Some(0));
        assert_eq!(m.idx(Point::new(12, 21)), Some(5));
        assert_eq!(m.idx(Point::new(13, 21)), None);
        assert_eq!(m.idx(Point::new(0, 0)), None);
    }

    #[test]
    fn out_of_range_queries_are_unvisited() {
        let m = SearchMaps::new(Range::square(4));
        assert_eq!(m.distance(Point::new(-1, 0)), UNVISITED);
        assert!(!m.visited(Point::new(4, 4)));
        assert_eq!(m.parent(Point::new(9, 9)), None);
    }
}
