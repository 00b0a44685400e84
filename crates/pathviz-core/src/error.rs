//! Error type for grid edits.

use std::error::Error;
use std::fmt;

use crate::geom::Point;

/// Errors from addressing or editing a [`Grid`](crate::Grid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The position lies outside the `rows × rows` square.
    OutOfBounds {
        pos: Point,
        rows: i32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows } => {
                write!(f, "position {pos} is outside the {rows}x{rows} grid")
            }
        }
    }
}

impl Error for GridError {}
