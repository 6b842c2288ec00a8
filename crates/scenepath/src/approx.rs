//! Fallback when the requested target cannot be reached.
//!
//! A target behind a wall is common (clicking a tile inside a building from
//! outside it); walking up to it beats not moving at all.

use scenepath_core::{Point, Range};

use crate::config::SearchConfig;
use crate::distance::euclidean_sq;
use crate::maps::{SearchMaps, UNVISITED};

impl SearchMaps {
    /// Pick a reached cell to stand in for an unreachable `target`.
    ///
    /// Scans the square window of radius `config.approx_radius` around
    /// `target`, column by column from west to east and south to north
    /// within a column. Candidates must have been reached in fewer than
    /// `config.approx_max_hops` steps. The winner has the fewest hops from
    /// the start, then the smallest Euclidean distance to `target`; on a
    /// full tie the first candidate scanned is kept.
    pub fn nearest_reachable(&self, target: Point, config: &SearchConfig) -> Option<Point> {
        let r = config.approx_radius;
        if r < 0 {
            return None;
        }
        // cells outside the searched range are never reached
        let window = Range::new(
            target.x.saturating_sub(r),
            target.y.saturating_sub(r),
            target.x.saturating_add(r).saturating_add(1),
            target.y.saturating_add(r).saturating_add(1),
        )
        .intersect(self.rng);
        let mut best: Option<(i32, i64, Point)> = None;
        for x in window.min.x..window.max.x {
            for y in window.min.y..window.max.y {
                let p = Point::new(x, y);
                let hops = self.distance(p);
                if hops == UNVISITED || hops >= config.approx_max_hops {
                    continue;
                }
                let dist = euclidean_sq(p, target);
                let better = match best {
                    None => true,
                    Some((bh, bd, _)) => hops < bh || (hops == bh && dist < bd),
                };
                if better {
                    best = Some((hops, dist, p));
                }
            }
        }
        best.map(|(_, _, p)| p)
    }

    /// Path to the [`nearest_reachable`](Self::nearest_reachable) stand-in
    /// for `target`, or an empty path when there is none.
    pub fn approximate_path(&self, target: Point, config: &SearchConfig) -> Vec<Point> {
        match self.nearest_reachable(target, config) {
            Some(endpoint) => {
                log::debug!("target {target} unreachable, substituting {endpoint}");
                self.path_to(endpoint)
            }
            None => {
                log::debug!("target {target} unreachable and no substitute in range");
                Vec::new()
            }
        }
    }
}
