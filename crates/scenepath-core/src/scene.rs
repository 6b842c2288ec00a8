//! Conversion between world coordinates and local scene coordinates.

use crate::collision::SCENE_SIZE;
use crate::geom::{Point, Range, WorldPoint};

/// Maps absolute world tiles onto the loaded scene grid.
///
/// Local coordinates are `world - origin`. Only local coordinates inside
/// `[0, scene_size)²` are valid grid coordinates.
pub trait CoordinateMapper {
    /// World tile of local `(0, 0)`.
    fn origin(&self) -> Point;

    /// Edge length of the loaded scene.
    fn scene_size(&self) -> i32;

    /// Local coordinates of `world`, which may lie outside the scene.
    /// `None` when they do not fit in an `i32`.
    #[inline]
    fn to_local(&self, world: WorldPoint) -> Option<Point> {
        world.xy().checked_sub(self.origin())
    }

    /// Grid coordinate of `world`, or `None` outside the loaded scene.
    fn to_grid(&self, world: WorldPoint) -> Option<Point> {
        let p = self.to_local(world)?;
        Range::square(self.scene_size()).contains(p).then_some(p)
    }

    /// World tile of grid coordinate `p` on `plane`.
    #[inline]
    fn to_world(&self, p: Point, plane: i32) -> WorldPoint {
        let w = p + self.origin();
        WorldPoint::new(w.x, w.y, plane)
    }

    /// Whether `world` lies inside the loaded scene.
    #[inline]
    fn contains(&self, world: WorldPoint) -> bool {
        self.to_grid(world).is_some()
    }

    /// Move `world` onto the nearest tile of the loaded scene, keeping its
    /// plane. Points already inside are returned unchanged.
    fn clamp(&self, world: WorldPoint) -> WorldPoint {
        let last = i64::from(self.scene_size()) - 1;
        if last < 0 {
            return world;
        }
        let origin = self.origin();
        let axis = |v: i32, o: i32| (i64::from(v) - i64::from(o)).clamp(0, last) as i32;
        let p = Point::new(axis(world.x, origin.x), axis(world.y, origin.y));
        self.to_world(p, world.plane)
    }
}

/// A loaded scene anchored at a fixed world origin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneMapper {
    pub origin: Point,
    pub size: i32,
}

impl SceneMapper {
    /// A standard-size scene whose south-west tile is `origin`.
    pub const fn new(origin: Point) -> Self {
        Self {
            origin,
            size: SCENE_SIZE,
        }
    }

    /// Set the edge length (builder).
    pub const fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// The world tiles covered by the scene.
    pub fn world_range(&self) -> Range {
        Range::square(self.size).add(self.origin)
    }
}

impl Default for SceneMapper {
    fn default() -> Self {
        Self::new(Point::ZERO)
    }
}

impl CoordinateMapper for SceneMapper {
    #[inline]
    fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    fn scene_size(&self) -> i32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> SceneMapper {
        SceneMapper::new(Point::new(3136, 3136))
    }

    #[test]
    fn world_to_grid_and_back() {
        let m = mapper();
        let w = WorldPoint::new(3200, 3210, 0);
        let p = m.to_grid(w).unwrap();
        assert_eq!(p, Point::new(64, 74));
        assert_eq!(m.to_world(p, 0), w);
    }

    #[test]
    fn outside_scene_has_no_grid_coordinate() {
        let m = mapper();
        assert_eq!(m.to_grid(WorldPoint::new(3135, 3200, 0)), None);
        assert_eq!(m.to_grid(WorldPoint::new(3240, 3200, 0)), None);
        assert!(m.contains(WorldPoint::new(3239, 3239, 0)));
        // local coordinates exist outside the scene too
        assert_eq!(
            m.to_local(WorldPoint::new(3135, 3200, 0)),
            Some(Point::new(-1, 64))
        );
    }

    #[test]
    fn extreme_world_coordinates() {
        let m = mapper();
        let far_west = WorldPoint::new(i32::MIN, 3200, 0);
        assert_eq!(m.to_local(far_west), None);
        assert_eq!(m.to_grid(far_west), None);
        assert!(!m.contains(far_west));
        assert_eq!(m.clamp(far_west), WorldPoint::new(3136, 3200, 0));

        let m = SceneMapper::new(Point::new(-10, -10));
        let far_east = WorldPoint::new(i32::MAX, i32::MAX, 2);
        assert_eq!(m.to_local(far_east), None);
        assert_eq!(m.clamp(far_east), WorldPoint::new(93, 93, 2));
    }

    #[test]
    fn clamp_onto_scene_edge() {
        let m = mapper();
        let far = WorldPoint::new(3500, 3000, 1);
        assert_eq!(m.clamp(far), WorldPoint::new(3239, 3136, 1));
        let inside = WorldPoint::new(3200, 3200, 1);
        assert_eq!(m.clamp(inside), inside);
    }

    #[test]
    fn custom_size() {
        let m = SceneMapper::new(Point::new(10, 10)).with_size(5);
        assert_eq!(m.world_range(), Range::new(10, 10, 15, 15));
        assert!(m.contains(WorldPoint::new(14, 14, 0)));
        assert!(!m.contains(WorldPoint::new(15, 14, 0)));
    }
}
