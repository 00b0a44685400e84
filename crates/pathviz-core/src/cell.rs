//! The [`Cell`] type: one node of the grid graph, and its [`CellState`].

use crate::geom::Point;

/// What a cell currently is. Exactly one state is active at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Free,
    Barrier,
    Start,
    End,
    /// Expanded by a search; its distance is final.
    Visited,
    /// Discovered by a search but not yet expanded.
    Frontier,
    /// On the reconstructed route between start and end.
    Path,
}

impl CellState {
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }

    /// Whether the state was left behind by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }
}

/// A grid cell: identity, state, and its precomputed traversable neighbours.
///
/// Neighbours are stored as positions into the owning [`Grid`](crate::Grid);
/// they are only valid right after [`Grid::update_neighbors`](crate::Grid::update_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    pub state: CellState,
    pub(crate) neighbors: Vec<Point>,
}

impl Cell {
    /// A free cell at `pos` with no neighbours yet.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Free,
            neighbors: Vec::new(),
        }
    }

    /// The cell's coordinate.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn neighbors(&self) -> &[Point] {
        &self.neighbors
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state.is_barrier()
    }
}
