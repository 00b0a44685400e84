//! Step-by-step graph searches over a [`pathviz_core::Grid`].
//!
//! Four searches share one contract and differ only in their frontier:
//!
//! | Search | Frontier | Shortest route |
//! |---|---|---|
//! | [`bfs`] | FIFO queue | yes |
//! | [`dfs`] | LIFO stack | no |
//! | [`dijkstra`] | min-queue on distance | yes |
//! | [`astar`] | min-queue on distance + [`manhattan`] | yes |
//!
//! Each one calls a [`Progress`] sink after expanding a cell, polls a
//! [`Context`](pathviz_core::Context) for cancellation once per iteration, marks cells
//! `Frontier` / `Visited` as it goes, and on success marks the route via
//! [`reconstruct`] and returns `true`. Every run builds its own working set;
//! nothing is kept between calls.

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod frontier;
mod path;
mod progress;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use path::{CameFrom, reconstruct};
pub use pathviz_core::manhattan;
pub use progress::Progress;

use pathviz_core::{CellState, Grid, Point};

/// Index of `start` when both endpoints lie on a non-empty grid.
fn endpoints(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    if grid.is_empty() || !grid.contains(end) {
        return None;
    }
    grid.index(start)
}

/// Mark the route to `end` and flag the end cell. An empty map means `end`
/// was the start itself, which keeps its own marker.
fn finish<P: Progress + ?Sized>(
    progress: &mut P,
    grid: &mut Grid,
    came_from: &CameFrom,
    end: Point,
) {
    if came_from.is_empty() {
        return;
    }
    let route = reconstruct(progress, grid, came_from, end);
    grid.set(end, CellState::End);
    log::trace!("route: {} cells", route.len());
}
