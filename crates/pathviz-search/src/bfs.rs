use std::collections::VecDeque;

use log::debug;
use pathviz_core::{CellState, Context, Grid, Point};

use crate::frontier::Frontier;
use crate::path::CameFrom;
use crate::progress::Progress;

/// Breadth-first search from `start` to `end`.
///
/// Cells are expanded in non-decreasing edge count from `start`, so the
/// route found is a shortest one. Returns `true` and marks the route on
/// `grid` when `end` is reached.
pub fn bfs<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
) -> bool {
    traverse(VecDeque::new(), "bfs", progress, grid, start, end, ctx)
}

/// Shared loop for the unweighted searches; `frontier` decides the order.
///
/// A cell is flagged as discovered when it is first pushed, so it enters
/// the frontier at most once and keeps its first predecessor.
pub(crate) fn traverse<F: Frontier, P: Progress + ?Sized>(
    mut frontier: F,
    name: &str,
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
) -> bool {
    let Some(si) = crate::endpoints(grid, start, end) else {
        return false;
    };

    let mut discovered = vec![false; grid.len()];
    let mut came_from = CameFrom::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut expanded = 0usize;

    discovered[si] = true;
    frontier.push(start);

    loop {
        if ctx.is_done() {
            debug!("{name}: cancelled after expanding {expanded} cells");
            return false;
        }
        let Some(current) = frontier.pop() else {
            break;
        };

        if current == end {
            debug!("{name}: reached {end} after expanding {expanded} cells");
            crate::finish(progress, grid, &came_from, end);
            return true;
        }

        nbuf.clear();
        nbuf.extend_from_slice(grid.neighbors(current));

        for &np in nbuf.iter() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if discovered[ni] {
                continue;
            }
            discovered[ni] = true;
            came_from.insert(np, current);
            frontier.push(np);
            if np != end {
                grid.set(np, CellState::Frontier);
            }
        }

        if current != start {
            grid.set(current, CellState::Visited);
        }
        expanded += 1;
        progress.step(grid);
    }

    debug!("{name}: frontier exhausted after expanding {expanded} cells");
    false
}
