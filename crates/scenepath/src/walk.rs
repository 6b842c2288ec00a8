//! The movement rule: which single steps the collision data permits.

use scenepath_core::{CollisionGrid, Point};

use crate::neighbors::neighbors_8;
use crate::traits::Pather;

/// Whether a single step from `from` to the adjacent cell `to` is allowed.
///
/// - an impassable destination is never enterable;
/// - a cardinal step needs the source edge and the facing destination edge
///   to be open;
/// - a diagonal step needs both source edges along its axes open, both
///   facing destination edges open, and neither of the two corner cells
///   it passes between may be impassable.
///
/// Cells outside the grid and non-adjacent pairs are never walkable.
pub fn walkable(grid: &CollisionGrid, from: Point, to: Point) -> bool {
    let Some(dest) = grid.at(to) else {
        return false;
    };
    if dest.is_impassable() {
        return false;
    }
    if from == to {
        return true;
    }
    let Some(src) = grid.at(from) else {
        return false;
    };
    let d = to - from;
    if d.x.abs() > 1 || d.y.abs() > 1 {
        return false;
    }
    if !d.is_diagonal() {
        return !src.blocks(d) && !dest.blocks(-d);
    }

    let dx = Point::new(d.x, 0);
    let dy = Point::new(0, d.y);
    if src.blocks(dx) || src.blocks(dy) {
        return false;
    }
    if dest.blocks(-dx) || dest.blocks(-dy) {
        return false;
    }
    // no cutting past a solid corner
    let corner_open = |c: Point| grid.at(c).is_some_and(|f| !f.is_impassable());
    corner_open(from + dx) && corner_open(from + dy)
}

/// [`Pather`] over a collision snapshot using [`walkable`].
#[derive(Clone, Copy, Debug)]
pub struct CollisionPather<'a> {
    grid: &'a CollisionGrid,
}

impl<'a> CollisionPather<'a> {
    pub fn new(grid: &'a CollisionGrid) -> Self {
        Self { grid }
    }
}

impl Pather for CollisionPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in neighbors_8(p) {
            if walkable(self.grid, p, n) {
                buf.push(n);
            }
        }
    }
}
