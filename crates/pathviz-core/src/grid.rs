//! The [`Grid`] type: a square board of [`Cell`]s forming an implicit graph.
//!
//! Edges are computed explicitly by [`Grid::update_neighbors`]. Changing a
//! barrier invalidates the neighbour lists until the next recomputation;
//! nothing recomputes them implicitly.

use crate::cell::{Cell, CellState};
use crate::error::GridError;
use crate::geom::{Point, manhattan};

/// A `rows × rows` grid of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of free cells. A non-positive `rows` gives an empty grid.
    pub fn new(rows: i32) -> Self {
        let rows = rows.max(0);
        let mut cells = Vec::with_capacity((rows as usize) * (rows as usize));
        for row in 0..rows {
            for col in 0..rows {
                cells.push(Cell::new(Point::new(row, col)));
            }
        }
        Self { rows, cells }
    }

    /// Side length of the square.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.rows
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row as usize) * (self.rows as usize) + (p.col as usize))
    }

    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// State of the cell at `p`, or `None` if out of bounds.
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(|c| c.state)
    }

    /// Set the state of the cell at `p`. No-op if `p` is out of bounds.
    pub fn set(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.index(p) {
            self.cells[i].state = state;
        }
    }

    /// Precomputed neighbours of `p`; empty when `p` is out of bounds.
    pub fn neighbors(&self, p: Point) -> &[Point] {
        match self.index(p) {
            Some(i) => &self.cells[i].neighbors,
            None => &[],
        }
    }

    /// Replace the neighbour list of a single cell.
    ///
    /// Useful to shape arbitrary graphs on top of the grid; the next
    /// [`update_neighbors`](Grid::update_neighbors) call overwrites it.
    pub fn set_neighbors(&mut self, p: Point, neighbors: Vec<Point>) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            rows: self.rows,
        })?;
        self.cells[i].neighbors = neighbors;
        Ok(())
    }

    /// Recompute every cell's neighbour list.
    ///
    /// A neighbour is an orthogonally adjacent in-bounds cell that is not a
    /// barrier, listed in the order down, up, right, left.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos();
            let mut nbuf = std::mem::take(&mut self.cells[i].neighbors);
            nbuf.clear();
            for n in p.neighbors_4() {
                if let Some(ni) = self.index(n) {
                    if !self.cells[ni].is_barrier() {
                        nbuf.push(n);
                    }
                }
            }
            self.cells[i].neighbors = nbuf;
        }
    }

    /// Manhattan distance between two cells, the A* heuristic.
    #[inline]
    pub fn distance(a: Point, b: Point) -> i32 {
        manhattan(a, b)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells a search discovered or expanded.
    pub fn explored_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c.state, CellState::Visited | CellState::Frontier))
            .count()
    }

    /// Number of cells marked as part of the reconstructed route.
    pub fn path_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state == CellState::Path)
            .count()
    }

    /// Return every visited, frontier and path cell to `Free`.
    ///
    /// Barriers and endpoints are kept.
    pub fn clear_search_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state.is_search_mark() {
                c.state = CellState::Free;
            }
        }
    }

    /// Return every cell to `Free` and drop all neighbour lists.
    pub fn reset(&mut self) {
        for c in self.cells.iter_mut() {
            c.state = CellState::Free;
            c.neighbors.clear();
        }
    }
}
