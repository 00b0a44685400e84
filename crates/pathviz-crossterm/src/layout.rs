//! Where the board sits on screen, and mapping mouse positions back to cells.

use pathviz_core::Point;

/// Screen layout of a `rows × rows` board: one terminal line per grid row,
/// `cell_width` terminal columns per grid column, anchored at the top-left.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    rows: i32,
    cell_width: i32,
}

impl Layout {
    /// Fit `rows` cells into `width` terminal columns (at least one column
    /// per cell).
    pub fn new(rows: i32, width: i32) -> Self {
        let rows = rows.max(0);
        Self {
            rows,
            cell_width: (width / rows.max(1)).max(1),
        }
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn cell_width(&self) -> i32 {
        self.cell_width
    }

    /// Board size in terminal (columns, lines).
    pub fn board_size(&self) -> (u16, u16) {
        (clamp_u16(self.rows * self.cell_width), clamp_u16(self.rows))
    }

    /// Terminal line of the status bar, just under the board.
    pub fn status_line(&self) -> u16 {
        clamp_u16(self.rows)
    }

    /// Top-left terminal (column, line) of the cell at `p`.
    pub fn screen_pos(&self, p: Point) -> (u16, u16) {
        (clamp_u16(p.col * self.cell_width), clamp_u16(p.row))
    }

    /// Grid cell under a terminal position, or `None` off the board.
    pub fn cell_at(&self, screen: Point) -> Option<Point> {
        if screen.row < 0 || screen.col < 0 {
            return None;
        }
        let p = Point::new(screen.row, screen.col / self.cell_width);
        (p.row < self.rows && p.col < self.rows).then_some(p)
    }
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
