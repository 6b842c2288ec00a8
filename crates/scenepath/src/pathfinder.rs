use scenepath_core::{CollisionDataProvider, CoordinateMapper, Point, Range, WorldPoint};

use crate::config::SearchConfig;
use crate::maps::SearchMaps;
use crate::sparse;
use crate::traits::Pather;
use crate::walk::CollisionPather;

/// Shortest path between two grid cells of `rng`.
///
/// Runs one breadth-first search. When `target` is reached the path leads
/// there; otherwise it leads to the stand-in picked by
/// [`SearchMaps::nearest_reachable`]. The path excludes `start` and is
/// empty when `start == target` or nothing suitable was reached.
pub fn grid_path<P: Pather>(
    pather: &P,
    rng: Range,
    start: Point,
    target: Point,
    config: &SearchConfig,
) -> Vec<Point> {
    if start == target {
        return Vec::new();
    }
    let maps = SearchMaps::bfs(pather, rng, start, Some(target));
    if maps.visited(target) {
        return maps.path_to(target);
    }
    maps.approximate_path(target, config)
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Walking routes inside the loaded scene, in world coordinates.
///
/// Borrows the collision snapshot and the coordinate mapping for its
/// lifetime and holds no other state: each query allocates its own search
/// maps, so one `Pathfinder` (or many sharing the same snapshot) can serve
/// queries from several threads at once.
pub struct Pathfinder<'a, C: ?Sized, M: ?Sized> {
    collision: &'a C,
    mapper: &'a M,
    config: SearchConfig,
}

impl<'a, C, M> Pathfinder<'a, C, M>
where
    C: CollisionDataProvider + ?Sized,
    M: CoordinateMapper + ?Sized,
{
    /// Create a pathfinder with the default [`SearchConfig`].
    pub fn new(collision: &'a C, mapper: &'a M) -> Self {
        Self {
            collision,
            mapper,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The active search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Dense walking path from `start` to `target`.
    ///
    /// Every tile after `start` is listed, ending at `target` or at the
    /// closest reachable stand-in. The path is empty when there is nothing
    /// to do or nothing can be done:
    ///
    /// - `start == target`;
    /// - the points are on different planes;
    /// - `start` is outside the loaded scene;
    /// - no collision data exists for the plane;
    /// - `target` is unreachable and no stand-in qualifies.
    pub fn find_path(&self, start: WorldPoint, target: WorldPoint) -> Vec<WorldPoint> {
        if start == target {
            return Vec::new();
        }
        if start.plane != target.plane {
            log::debug!("no path {start} -> {target}: planes differ");
            return Vec::new();
        }
        let Some(from) = self.mapper.to_grid(start) else {
            log::debug!("no path {start} -> {target}: start outside the scene");
            return Vec::new();
        };
        let Some(grid) = self.collision.collision_grid(start.plane) else {
            log::debug!(
                "no path {start} -> {target}: no collision data for plane {}",
                start.plane
            );
            return Vec::new();
        };
        let Some(to) = self.mapper.to_local(target) else {
            log::debug!("no path {start} -> {target}: target too far from the scene");
            return Vec::new();
        };

        let path = grid_path(
            &CollisionPather::new(grid),
            grid.bounds(),
            from,
            to,
            &self.config,
        );
        log::debug!("path {start} -> {target}: {} steps", path.len());
        path.into_iter()
            .map(|p| self.mapper.to_world(p, start.plane))
            .collect()
    }

    /// Like [`find_path`](Self::find_path), after moving a `target` outside
    /// the scene onto the scene's nearest edge tile.
    pub fn find_path_clamped(&self, start: WorldPoint, target: WorldPoint) -> Vec<WorldPoint> {
        self.find_path(start, self.mapper.clamp(target))
    }

    /// Waypoints of [`find_path`](Self::find_path): only the tiles where the
    /// route turns, plus its final tile.
    pub fn find_sparse_path(&self, start: WorldPoint, target: WorldPoint) -> Vec<WorldPoint> {
        sparse::reduce(&self.find_path(start, target), start)
    }

    /// Flood the whole reachable area around `start`.
    ///
    /// Returns `None` when `start` is outside the scene or its plane has no
    /// collision data. The maps are in local grid coordinates.
    pub fn search_maps(&self, start: WorldPoint) -> Option<SearchMaps> {
        let from = self.mapper.to_grid(start)?;
        let grid = self.collision.collision_grid(start.plane)?;
        Some(SearchMaps::bfs(
            &CollisionPather::new(grid),
            grid.bounds(),
            from,
            None,
        ))
    }

    /// Number of steps on the shortest route, or `None` when `target`
    /// cannot be reached exactly.
    pub fn distance(&self, start: WorldPoint, target: WorldPoint) -> Option<i32> {
        if start.plane != target.plane {
            return None;
        }
        let to = self.mapper.to_grid(target)?;
        let maps = self.search_maps(start)?;
        maps.visited(to).then(|| maps.distance(to))
    }

    /// Whether `target` itself can be reached from `start`.
    pub fn is_reachable(&self, start: WorldPoint, target: WorldPoint) -> bool {
        self.distance(start, target).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenepath_core::{CollisionGrid, SceneCollision, SceneMapper};

    const ORIGIN: Point = Point::new(3136, 3136);

    fn world(x: i32, y: i32) -> WorldPoint {
        WorldPoint::new(ORIGIN.x + x, ORIGIN.y + y, 0)
    }

    fn scene(grid: CollisionGrid) -> (SceneCollision, SceneMapper) {
        (SceneCollision::with_plane(0, grid), SceneMapper::new(ORIGIN))
    }

    #[test]
    fn grid_path_exact_and_trivial() {
        let g = CollisionGrid::new(10);
        let pather = CollisionPather::new(&g);
        let cfg = SearchConfig::default();
        let p = grid_path(&pather, g.bounds(), Point::new(1, 1), Point::new(5, 3), &cfg);
        assert_eq!(p.len(), 4);
        assert_eq!(p.last(), Some(&Point::new(5, 3)));
        let same = Point::new(1, 1);
        assert!(grid_path(&pather, g.bounds(), same, same, &cfg).is_empty());
    }

    #[test]
    fn find_path_in_world_coordinates() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        let path = pf.find_path(world(10, 10), world(14, 12));
        assert_eq!(path.len(), 4);
        assert_eq!(path.last(), Some(&world(14, 12)));
        assert!(path.iter().all(|w| w.plane == 0));
    }

    #[test]
    fn trivial_and_invalid_requests_are_empty() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        assert!(pf.find_path(world(5, 5), world(5, 5)).is_empty());
        // start outside the scene
        assert!(pf.find_path(world(-1, 5), world(5, 5)).is_empty());
        assert!(pf.find_path(world(104, 5), world(5, 5)).is_empty());
        // no data for plane 1
        let up = |w: WorldPoint| WorldPoint::new(w.x, w.y, 1);
        assert!(pf.find_path(up(world(1, 1)), up(world(5, 5))).is_empty());
        // cross-plane
        assert!(pf.find_path(world(1, 1), up(world(5, 5))).is_empty());
    }

    #[test]
    fn unloaded_scene_yields_nothing() {
        let c = SceneCollision::new();
        let m = SceneMapper::new(ORIGIN);
        let pf = Pathfinder::new(&c, &m);
        assert!(pf.find_path(world(1, 1), world(5, 5)).is_empty());
        assert!(pf.search_maps(world(1, 1)).is_none());
        assert!(!pf.is_reachable(world(1, 1), world(5, 5)));
    }

    #[test]
    fn target_outside_scene_without_clamping_uses_fallback() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        let path = pf.find_path(world(100, 50), world(108, 50));
        // the window around the target reaches back into the scene; the
        // start is inside it with zero hops
        assert!(path.is_empty());

        // only the two easternmost columns fall inside the window; the
        // nearer one wins on hops
        let path = pf.find_path(world(50, 50), world(112, 50));
        assert_eq!(path.last(), Some(&world(102, 50)));
        assert_eq!(path.len(), 52);

        // a window entirely outside the scene has no candidates
        assert!(pf.find_path(world(50, 50), world(120, 50)).is_empty());
    }

    #[test]
    fn extreme_targets_degrade_to_empty_or_fallback() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        // local coordinates of the target overflow
        assert!(pf.find_path(world(64, 64), WorldPoint::new(i32::MIN, 3200, 0)).is_empty());
        assert!(pf.find_path(world(64, 64), WorldPoint::new(3200, i32::MIN, 0)).is_empty());
        assert!(!pf.is_reachable(world(64, 64), WorldPoint::new(i32::MIN, 0, 0)));

        // the fallback window around a target at the edge of i32 lies far
        // outside the scene
        let m = SceneMapper::new(Point::ZERO);
        let pf = Pathfinder::new(&c, &m);
        let start = WorldPoint::new(50, 50, 0);
        assert!(pf.find_path(start, WorldPoint::new(i32::MAX, 50, 0)).is_empty());
        assert!(pf.find_path(start, WorldPoint::new(i32::MIN, i32::MAX, 0)).is_empty());

        // clamping brings them back onto the scene edge
        let path = pf.find_path_clamped(start, WorldPoint::new(i32::MAX, 50, 0));
        assert_eq!(path.last(), Some(&WorldPoint::new(103, 50, 0)));
        let far = SceneMapper::new(ORIGIN);
        let pf = Pathfinder::new(&c, &far);
        let path = pf.find_path_clamped(world(64, 64), WorldPoint::new(i32::MIN, 3200, 0));
        assert_eq!(path.last(), Some(&world(0, 64)));
    }

    #[test]
    fn clamped_target_walks_to_scene_edge() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        let path = pf.find_path_clamped(world(50, 50), world(300, 60));
        assert_eq!(path.last(), Some(&world(103, 60)));
        assert_eq!(path.len(), 53);
    }

    #[test]
    fn sparse_path_of_diagonal_walk() {
        let (c, m) = scene(CollisionGrid::default());
        let pf = Pathfinder::new(&c, &m);
        assert_eq!(pf.find_sparse_path(world(0, 0), world(9, 9)), vec![world(9, 9)]);
        assert!(pf.find_sparse_path(world(0, 0), world(0, 0)).is_empty());
    }

    #[test]
    fn distance_and_reachability() {
        let mut g = CollisionGrid::default();
        g.draw_ascii(
            Point::new(20, 20),
            "\
#####
#...#
#...#
#...#
#####",
        )
        .unwrap();
        let (c, m) = scene(g);
        let pf = Pathfinder::new(&c, &m);
        assert_eq!(pf.distance(world(0, 0), world(7, 3)), Some(7));
        assert!(!pf.is_reachable(world(0, 0), world(22, 22)));
        assert!(pf.is_reachable(world(21, 21), world(23, 23)));
        assert_eq!(pf.distance(world(21, 21), world(23, 23)), Some(2));
        // the walled room is its own component
        let maps = pf.search_maps(world(22, 22)).unwrap();
        assert_eq!(maps.visited_count(), 9);
    }

    #[test]
    fn exact_config_disables_fallback() {
        let mut g = CollisionGrid::default();
        g.block(Point::new(30, 30));
        let (c, m) = scene(g);
        let pf = Pathfinder::new(&c, &m).with_config(SearchConfig::exact());
        assert_eq!(pf.config(), &SearchConfig::exact());
        assert!(pf.find_path(world(25, 30), world(30, 30)).is_empty());
        let pf = Pathfinder::new(&c, &m);
        assert!(!pf.find_path(world(15, 30), world(30, 30)).is_empty());
    }
}
