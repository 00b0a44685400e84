use pathviz_core::Grid;

/// Checkpoint callback invoked after every search step.
///
/// The search hands over a shared view of the grid so the sink can render
/// it; nothing the sink does is fed back into the search. Stopping a run
/// goes through the [`Context`](pathviz_core::Context) passed alongside.
pub trait Progress {
    fn step(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Progress for F {
    #[inline]
    fn step(&mut self, grid: &Grid) {
        self(grid)
    }
}
