use std::collections::BinaryHeap;

use log::debug;
use pathviz_core::{CellState, Context, Grid, Point};

use crate::frontier::QueueEntry;
use crate::path::CameFrom;
use crate::progress::Progress;

/// Sentinel distance for cells not reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Dijkstra's algorithm from `start` to `end` with unit edge costs.
///
/// Cells come off the queue in order of accumulated distance, ties in
/// insertion order, so the route found is a shortest one.
pub fn dijkstra<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
) -> bool {
    best_first("dijkstra", progress, grid, start, end, ctx, |_| 0)
}

/// Shared loop for the priority-queue searches, keyed by `g + heuristic`.
///
/// A cell's distance may drop several times while it waits in the queue.
/// It is pushed only when it is not already queued, so its entry keeps the
/// score it was pushed with. That is enough with unit edge costs but would
/// need decrease-key or re-pushing for weighted edges.
pub(crate) fn best_first<P, H>(
    name: &str,
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
    heuristic: H,
) -> bool
where
    P: Progress + ?Sized,
    H: Fn(Point) -> i32,
{
    let Some(si) = crate::endpoints(grid, start, end) else {
        return false;
    };

    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut queued = vec![false; grid.len()];
    let mut came_from = CameFrom::new();
    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut seq: u64 = 0;
    let mut expanded = 0usize;

    dist[si] = 0;
    queued[si] = true;
    open.push(QueueEntry {
        score: heuristic(start),
        seq,
        pos: start,
    });

    loop {
        if ctx.is_done() {
            debug!("{name}: cancelled after expanding {expanded} cells");
            return false;
        }
        let Some(QueueEntry { pos: current, .. }) = open.pop() else {
            break;
        };
        let Some(ci) = grid.index(current) else {
            continue;
        };
        queued[ci] = false;

        if current == end {
            debug!(
                "{name}: reached {end} at distance {} after expanding {expanded} cells",
                dist[ci]
            );
            crate::finish(progress, grid, &came_from, end);
            return true;
        }

        let tentative = dist[ci] + 1;
        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(current));

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if tentative >= dist[ni] {
                continue;
            }
            came_from.insert(np, current);
            dist[ni] = tentative;
            if !queued[ni] {
                seq += 1;
                open.push(QueueEntry {
                    score: tentative + heuristic(np),
                    seq,
                    pos: np,
                });
                queued[ni] = true;
                if np != end {
                    grid.set(np, CellState::Frontier);
                }
            }
        }

        if current != start {
            grid.set(current, CellState::Visited);
        }
        expanded += 1;
        progress.step(grid);
    }

    debug!("{name}: queue exhausted after expanding {expanded} cells");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &Grid) {}

    #[test]
    fn shortest_around_a_wall() {
        // . . . .
        // # # # .
        // . . . .
        let mut g = Grid::new(4);
        for col in 0..3 {
            g.set(Point::new(1, col), CellState::Barrier);
        }
        g.update_neighbors();
        assert!(dijkstra(
            &mut noop,
            &mut g,
            Point::new(0, 0),
            Point::new(2, 0),
            &Context::new()
        ));
        // 0,0 -> 0,3 -> 2,3 -> 2,0 is 8 edges
        assert_eq!(g.path_count(), 7);
    }

    #[test]
    fn sealed_target_fails() {
        let mut g = Grid::new(3);
        g.set(Point::new(1, 2), CellState::Barrier);
        g.set(Point::new(2, 1), CellState::Barrier);
        g.update_neighbors();
        assert!(!dijkstra(
            &mut noop,
            &mut g,
            Point::new(0, 0),
            Point::new(2, 2),
            &Context::new()
        ));
        assert_eq!(g.path_count(), 0);
    }
}
