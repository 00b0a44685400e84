use std::collections::HashMap;

use pathviz_core::{CellState, Grid, Point};

use crate::progress::Progress;

/// Predecessor map: each reached cell points back to the cell that reached it.
///
/// The start never gets an entry, so walking back from any reached cell
/// ends at the start.
#[derive(Clone, Debug, Default)]
pub struct CameFrom {
    links: HashMap<Point, Point>,
}

impl CameFrom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `p` was reached from `from`, replacing any earlier link.
    #[inline]
    pub fn insert(&mut self, p: Point, from: Point) {
        self.links.insert(p, from);
    }

    #[inline]
    pub fn get(&self, p: Point) -> Option<Point> {
        self.links.get(&p).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Walk `came_from` back from `end` and mark the route on `grid`.
///
/// Only intermediate cells become [`CellState::Path`]; the endpoints keep
/// their states. `progress` is called once per step. Returns the route from
/// start to end, both included.
///
/// The walk takes at most one step per map entry, so a map that was not
/// built as a tree still terminates.
pub fn reconstruct<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    came_from: &CameFrom,
    end: Point,
) -> Vec<Point> {
    let mut route = vec![end];
    let mut current = end;
    while let Some(prev) = came_from.get(current) {
        if route.len() > came_from.len() {
            log::warn!("predecessor chain from {end} loops, stopping at {current}");
            break;
        }
        if came_from.get(prev).is_some() {
            grid.set(prev, CellState::Path);
        }
        route.push(prev);
        current = prev;
        progress.step(grid);
    }
    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(points: &[Point]) -> CameFrom {
        let mut cf = CameFrom::new();
        for w in points.windows(2) {
            cf.insert(w[1], w[0]);
        }
        cf
    }

    #[test]
    fn marks_only_intermediate_cells() {
        let mut g = Grid::new(3);
        let route = [
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(2, 2),
        ];
        g.set(route[0], CellState::Start);
        g.set(route[4], CellState::End);
        let mut steps = 0;
        let got = reconstruct(&mut |_: &Grid| steps += 1, &mut g, &chain(&route), route[4]);

        assert_eq!(got, route.to_vec());
        assert_eq!(steps, 4);
        assert_eq!(g.path_count(), 3);
        assert_eq!(g.state(route[0]), Some(CellState::Start));
        assert_eq!(g.state(route[4]), Some(CellState::End));
    }

    #[test]
    fn end_without_predecessor_is_a_single_cell() {
        let mut g = Grid::new(2);
        let got = reconstruct(&mut |_: &Grid| {}, &mut g, &CameFrom::new(), Point::new(1, 1));
        assert_eq!(got, vec![Point::new(1, 1)]);
        assert_eq!(g.path_count(), 0);
    }

    #[test]
    fn cyclic_map_terminates() {
        let mut g = Grid::new(2);
        let mut cf = CameFrom::new();
        cf.insert(Point::new(0, 0), Point::new(0, 1));
        cf.insert(Point::new(0, 1), Point::new(1, 1));
        cf.insert(Point::new(1, 1), Point::new(0, 0));
        let got = reconstruct(&mut |_: &Grid| {}, &mut g, &cf, Point::new(0, 0));
        assert!(got.len() <= cf.len() + 1);
    }
}
