use scenepath_core::Point;

/// Minimal search interface: neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable from `p` in one step into `buf`, in the
    /// order the search should explore them. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
