//! Crossterm terminal front end for pathviz.
//!
//! Provides a [`CrosstermDriver`] that draws a [`Grid`] as coloured blocks,
//! repainting only the cells that changed, and turns terminal events into
//! [`Msg`]s.

pub mod frame;
pub mod input;
pub mod layout;
pub mod palette;

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, execute, queue,
    style::{self, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::Grid;

pub use frame::FrameCache;
pub use input::{Key, MouseAction, Msg, to_msg};
pub use layout::Layout;
pub use palette::Color;

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    out: Stdout,
    frame: FrameCache,
}

impl CrosstermDriver {
    /// Create a new driver.
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            frame: FrameCache::new(),
        }
    }

    /// Enter raw mode and the alternate screen, with mouse capture on.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        self.frame.invalidate();
        Ok(())
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Msg>> {
        let mut msgs = Vec::new();
        if !event::poll(timeout)? {
            return Ok(msgs);
        }
        while event::poll(Duration::ZERO)? {
            if let Some(msg) = to_msg(event::read()?) {
                if let Msg::Screen { .. } = msg {
                    self.redraw_all()?;
                }
                msgs.push(msg);
            }
        }
        Ok(msgs)
    }

    /// Clear the screen and repaint the whole board on the next draw.
    pub fn redraw_all(&mut self) -> io::Result<()> {
        execute!(self.out, style::ResetColor, terminal::Clear(ClearType::All))?;
        self.frame.invalidate();
        Ok(())
    }

    /// Paint the cells that changed since the last call.
    pub fn draw(&mut self, grid: &Grid, layout: &Layout) -> io::Result<()> {
        let width = layout.cell_width() as usize;
        let fill = " ".repeat(width.saturating_sub(1));
        // with room for it, the last column of each cell is a grid line
        let edge = if width > 1 { "▕" } else { " " };

        for (p, state) in self.frame.diff(grid) {
            let (col, line) = layout.screen_pos(p);
            queue!(
                self.out,
                cursor::MoveTo(col, line),
                SetBackgroundColor(to_ct_color(palette::state_color(state))),
                SetForegroundColor(to_ct_color(palette::GRID_LINE)),
                style::Print(&fill),
                style::Print(edge)
            )?;
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }

    /// Replace the status line under the board.
    pub fn status(&mut self, layout: &Layout, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, layout.status_line()),
            style::ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            style::Print(text)
        )?;
        self.out.flush()
    }

    /// Restore the terminal.
    pub fn close(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}
