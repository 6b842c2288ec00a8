use scenepath_core::Point;

use crate::maps::SearchMaps;

impl SearchMaps {
    /// Reconstruct the path from the start to `endpoint`.
    ///
    /// The start itself is left out; the last element is `endpoint`. An
    /// unvisited endpoint, or the start as endpoint, yields an empty path.
    pub fn path_to(&self, endpoint: Point) -> Vec<Point> {
        if !self.visited(endpoint) {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut cur = endpoint;
        while let Some(prev) = self.parent(cur) {
            path.push(cur);
            cur = prev;
            // a parent chain never revisits a cell
            if path.len() > self.distance.len() {
                return Vec::new();
            }
        }
        if Some(cur) != self.start {
            return Vec::new();
        }
        path.reverse();
        path
    }
}
