//! Shared helpers for the scenepath demos: scene generation and rendering.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use scenepath_core::{CollisionFlags, CollisionGrid, Point};

const CARDINALS: [Point; 4] = [Point::NORTH, Point::EAST, Point::SOUTH, Point::WEST];

/// Random `size`×`size` scene.
///
/// About `density` percent of the tiles are made impassable and a quarter
/// as many get a wall on one of their edges. The same seed always yields
/// the same scene.
pub fn random_grid(seed: u64, size: i32, density: u32) -> CollisionGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = CollisionGrid::new(size);
    for p in grid.bounds() {
        let roll = rng.random_range(0..100u32);
        if roll < density {
            grid.block(p);
        } else if roll < density + density / 4 {
            let dir = CARDINALS[rng.random_range(0..CARDINALS.len())];
            grid.add_wall(p, dir);
        }
    }
    log::debug!(
        "generated {size}x{size} scene from seed {seed}: {} blocked tiles",
        grid.blocked_count()
    );
    grid
}

/// Parse a point written as `x,y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("point must have 2 components, got {}", parts.len()));
    }
    let x = parts[0].trim().parse::<i32>().map_err(|e| e.to_string())?;
    let y = parts[1].trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

/// Draw `grid` with a route on top, northern row first.
///
/// `S` start, `T` target, `o` waypoint, `*` other route tile, `#` an
/// impassable tile and `.` anything else.
pub fn render(
    grid: &CollisionGrid,
    start: Point,
    target: Point,
    dense: &[Point],
    waypoints: &[Point],
) -> String {
    let dense: HashSet<Point> = dense.iter().copied().collect();
    let waypoints: HashSet<Point> = waypoints.iter().copied().collect();
    let size = grid.size();
    let mut out = String::with_capacity(((size + 1) * size) as usize);
    for y in (0..size).rev() {
        for x in 0..size {
            let p = Point::new(x, y);
            let ch = if p == start {
                'S'
            } else if p == target {
                'T'
            } else if waypoints.contains(&p) {
                'o'
            } else if dense.contains(&p) {
                '*'
            } else if grid.at(p).is_some_and(CollisionFlags::is_impassable) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        if y > 0 {
            out.push('\n');
        }
    }
    out
}
