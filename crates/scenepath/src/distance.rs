use scenepath_core::Point;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Squared Euclidean distance between two points.
///
/// Orders candidates exactly like the Euclidean distance without leaving
/// integer arithmetic. Computed in `i64`, so any two points fit.
#[inline]
pub fn euclidean_sq(a: Point, b: Point) -> i64 {
    let dx = i64::from(a.x) - i64::from(b.x);
    let dy = i64::from(a.y) - i64::from(b.y);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -1);
        assert_eq!(chebyshev(a, b), 3);
        assert_eq!(euclidean_sq(a, b), 13);
        assert_eq!(euclidean_sq(b, b), 0);
        let far = euclidean_sq(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(far, (1i64 << 32) - 1);
    }
}
