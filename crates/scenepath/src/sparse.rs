use scenepath_core::WorldPoint;

/// Reduce a dense path to the tiles where its direction changes.
///
/// `dense` is a path as returned by the search, so it excludes `start`.
/// A tile is kept when the step into it differs from the step out of it.
/// The final tile is always kept. An empty path stays empty.
pub fn reduce(dense: &[WorldPoint], start: WorldPoint) -> Vec<WorldPoint> {
    let Some(&last) = dense.last() else {
        return Vec::new();
    };
    let mut waypoints = Vec::new();
    let mut prev = start;
    for pair in dense.windows(2) {
        let (cur, next) = (pair[0], pair[1]);
        if cur.xy() - prev.xy() != next.xy() - cur.xy() {
            waypoints.push(cur);
        }
        prev = cur;
    }
    waypoints.push(last);
    waypoints
}
