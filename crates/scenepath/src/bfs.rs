use std::collections::VecDeque;

use scenepath_core::{Point, Range};

use crate::maps::{SearchMaps, UNVISITED};
use crate::traits::Pather;

impl SearchMaps {
    /// Breadth-first search from `start` over the cells of `rng`.
    ///
    /// Each step has cost 1. Neighbors are explored in the order the
    /// `pather` yields them, which decides the tie-break between equally
    /// short paths. The search stops as soon as `target` is dequeued; with
    /// no target every reachable cell is visited.
    ///
    /// A `start` outside `rng` leaves every cell unvisited.
    pub fn bfs<P: Pather>(pather: &P, rng: Range, start: Point, target: Option<Point>) -> Self {
        let mut maps = Self::new(rng);
        let Some(si) = maps.idx(start) else {
            return maps;
        };
        maps.start = Some(start);
        maps.visit(si, 0, None);

        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(start);
        let mut nbuf: Vec<Point> = Vec::with_capacity(8);

        while let Some(cp) = queue.pop_front() {
            if Some(cp) == target {
                break;
            }
            let current_dist = maps.distance(cp);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = maps.idx(np) else {
                    continue;
                };
                if maps.distance[ni] != UNVISITED {
                    continue;
                }
                maps.visit(ni, current_dist + 1, Some(cp));
                queue.push_back(np);
            }
        }

        log::trace!(
            "bfs from {start} over {rng}: {} cells visited",
            maps.visited_count()
        );
        maps
    }
}
