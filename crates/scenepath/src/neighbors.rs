use scenepath_core::Point;

/// Order in which the search explores the neighbors of a cell.
///
/// Ties between equally short paths are broken by this order, so changing
/// it changes which path is returned.
pub const SEARCH_ORDER: [Point; 8] = [
    Point::WEST,
    Point::EAST,
    Point::SOUTH,
    Point::NORTH,
    Point::SOUTH_WEST,
    Point::SOUTH_EAST,
    Point::NORTH_WEST,
    Point::NORTH_EAST,
];

/// Return the 8 neighbors of `p` in [`SEARCH_ORDER`].
#[inline]
pub fn neighbors_8(p: Point) -> [Point; 8] {
    SEARCH_ORDER.map(|d| p + d)
}
