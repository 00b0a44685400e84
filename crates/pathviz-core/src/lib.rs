//! **pathviz-core**: the grid graph behind the pathviz search visualizer.
//!
//! This crate provides the data model the search engine runs on: cell
//! coordinates, per-cell state, a square grid with precomputed 4-way
//! neighbour lists, the painting rules used to set up a board, and a
//! cooperative cancellation token.

pub mod cell;
pub mod context;
pub mod edit;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use context::Context;
pub use edit::Editor;
pub use error::GridError;
pub use geom::{Point, manhattan};
pub use grid::Grid;
