use pathviz_core::{Context, Grid, Point};

use crate::dijkstra::best_first;
use crate::progress::Progress;

/// A* search from `start` to `end`, guided by the Manhattan distance to `end`.
///
/// The heuristic is admissible and consistent for unit-cost 4-way moves, so
/// the route found is a shortest one. The search stops as soon as `end`
/// comes off the queue.
pub fn astar<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    start: Point,
    end: Point,
    ctx: &Context,
) -> bool {
    best_first("a_star", progress, grid, start, end, ctx, |p| Grid::distance(p, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra;

    fn noop(_: &Grid) {}

    #[test]
    fn expands_fewer_cells_than_dijkstra_on_open_board() {
        let start = Point::new(0, 0);
        let end = Point::new(0, 9);

        let mut a = Grid::new(10);
        a.update_neighbors();
        assert!(astar(&mut noop, &mut a, start, end, &Context::new()));

        let mut d = Grid::new(10);
        d.update_neighbors();
        assert!(dijkstra(&mut noop, &mut d, start, end, &Context::new()));

        assert_eq!(a.path_count(), 8);
        assert_eq!(d.path_count(), 8);
        assert!(a.explored_count() < d.explored_count());
    }
}
