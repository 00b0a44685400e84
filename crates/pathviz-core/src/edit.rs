//! Painting rules for the board: where the start, end and barriers go.

use log::info;

use crate::cell::CellState;
use crate::error::GridError;
use crate::geom::Point;
use crate::grid::Grid;

/// Tracks the chosen endpoints while the user paints on a [`Grid`].
///
/// The first painted cell becomes the start, the second the end, and every
/// further cell a barrier. Endpoints are never painted over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Editor {
    start: Option<Point>,
    end: Option<Point>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Both endpoints, once the board is ready for a search.
    pub fn endpoints(&self) -> Option<(Point, Point)> {
        Some((self.start?, self.end?))
    }

    /// Paint the cell at `p`. Returns the state applied, or `None` when the
    /// cell is already an endpoint.
    pub fn paint(&mut self, grid: &mut Grid, p: Point) -> Result<Option<CellState>, GridError> {
        check(grid, p)?;
        let state = if self.start.is_none() && self.end != Some(p) {
            self.start = Some(p);
            CellState::Start
        } else if self.end.is_none() && self.start != Some(p) {
            self.end = Some(p);
            CellState::End
        } else if self.start != Some(p) && self.end != Some(p) {
            CellState::Barrier
        } else {
            return Ok(None);
        };
        grid.set(p, state);
        Ok(Some(state))
    }

    /// Return the cell at `p` to `Free`, forgetting it if it was an endpoint.
    pub fn erase(&mut self, grid: &mut Grid, p: Point) -> Result<(), GridError> {
        check(grid, p)?;
        grid.set(p, CellState::Free);
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
        Ok(())
    }

    /// Wipe the board and forget both endpoints.
    pub fn clear(&mut self, grid: &mut Grid) {
        grid.reset();
        self.start = None;
        self.end = None;
        info!("cleared {}x{} board", grid.rows(), grid.rows());
    }
}

fn check(grid: &Grid, p: Point) -> Result<(), GridError> {
    if grid.contains(p) {
        Ok(())
    } else {
        Err(GridError::OutOfBounds {
            pos: p,
            rows: grid.rows(),
        })
    }
}
