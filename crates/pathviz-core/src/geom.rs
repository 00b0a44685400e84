//! Grid coordinates: [`Point`] and the [`manhattan`] distance.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A cell coordinate. Rows grow downwards, columns grow to the right.
///
/// A point is the identity of a cell: two cells are the same node of the
/// grid graph exactly when their points are equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours in search order: down, up, right, left.
    ///
    /// DFS output depends on this order, so it must stay fixed.
    #[inline]
    pub const fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(1, 0),
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(0, -1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Distance
// ---------------------------------------------------------------------------

/// Manhattan (L1) distance between two points.
///
/// With unit edge costs and 4-way movement this never overestimates the
/// remaining path length, which keeps A* optimal.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_down_up_right_left() {
        let p = Point::new(2, 3);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(3, 3),
                Point::new(1, 3),
                Point::new(2, 4),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(2, 2)), 4);
        assert_eq!(manhattan(Point::new(3, 1), Point::new(1, 4)), 5);
        assert_eq!(manhattan(Point::new(4, 4), Point::new(4, 4)), 0);
    }

    #[test]
    fn shift_and_display() {
        let p = Point::new(1, 2).shift(3, -2);
        assert_eq!(p, Point::new(4, 0));
        assert_eq!(Point::new(7, 9).to_string(), "(7, 9)");
    }
}
