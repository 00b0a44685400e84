use pathviz_core::{Context, Grid, Point};

use crate::bfs::traverse;
use crate::progress::Progress;

/// Depth-first search from `start` to `end`.
///
/// Uses a stack instead of a queue. It finds a route whenever one exists,
/// but not necessarily a shortest one: the route follows stack order, which
/// is fixed by the down, up, right, left neighbour order.
pub fn dfs<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
) -> bool {
    traverse(Vec::new(), "dfs", progress, grid, start, end, ctx)
}
