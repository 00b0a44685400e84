//! Change tracking between drawn frames.

use pathviz_core::{CellState, Grid, Point};

/// Remembers the state each cell had when it was last drawn.
#[derive(Clone, Debug, Default)]
pub struct FrameCache {
    drawn: Vec<Option<CellState>>,
}

impl FrameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything so the next diff repaints the whole board.
    pub fn invalidate(&mut self) {
        self.drawn.clear();
    }

    /// Cells whose state differs from the last diff, in row-major order.
    /// The cache is updated to the current grid.
    pub fn diff(&mut self, grid: &Grid) -> Vec<(Point, CellState)> {
        if self.drawn.len() != grid.len() {
            self.drawn = vec![None; grid.len()];
        }
        let mut changed = Vec::new();
        for (slot, cell) in self.drawn.iter_mut().zip(grid.iter()) {
            if *slot != Some(cell.state) {
                *slot = Some(cell.state);
                changed.push((cell.pos(), cell.state));
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_diff_is_full_then_incremental() {
        let mut g = Grid::new(3);
        let mut cache = FrameCache::new();
        assert_eq!(cache.diff(&g).len(), 9);
        assert!(cache.diff(&g).is_empty());

        g.set(Point::new(1, 2), CellState::Frontier);
        assert_eq!(cache.diff(&g), vec![(Point::new(1, 2), CellState::Frontier)]);
    }

    #[test]
    fn invalidate_and_resize_repaint_everything() {
        let g = Grid::new(2);
        let mut cache = FrameCache::new();
        cache.diff(&g);
        cache.invalidate();
        assert_eq!(cache.diff(&g).len(), 4);
        assert_eq!(cache.diff(&Grid::new(3)).len(), 9);
    }
}
