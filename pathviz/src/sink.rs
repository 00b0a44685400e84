//! Drawing a search as it runs.

use std::io;
use std::time::Duration;

use log::{debug, error};
use pathviz_core::{Context, Grid};
use pathviz_crossterm::{CrosstermDriver, Key, Layout, Msg};
use pathviz_search::Progress;

/// Stop requested by input read while a search runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interrupt {
    /// Escape: stop this search.
    Cancel,
    /// `q` or Ctrl-C: stop this search and leave.
    Quit,
}

/// The stop request carried by a batch of input, if any. Quitting wins.
pub fn interrupt(msgs: &[Msg]) -> Option<Interrupt> {
    let mut found = None;
    for msg in msgs {
        match msg {
            Msg::KeyDown(Key::Char('q')) | Msg::Quit => return Some(Interrupt::Quit),
            Msg::KeyDown(Key::Escape) => found = Some(Interrupt::Cancel),
            _ => {}
        }
    }
    found
}

/// A [`Progress`] sink that repaints the board after every step, then
/// waits `delay` for input and forwards stop requests to `ctx`.
pub struct TermProgress<'a> {
    driver: &'a mut CrosstermDriver,
    layout: Layout,
    ctx: Context,
    delay: Duration,
    error: Option<io::Error>,
}

impl<'a> TermProgress<'a> {
    pub fn new(driver: &'a mut CrosstermDriver, layout: Layout, ctx: Context, delay: Duration) -> Self {
        Self {
            driver,
            layout,
            ctx,
            delay,
            error: None,
        }
    }

    fn refresh(&mut self, grid: &Grid) -> io::Result<()> {
        self.driver.draw(grid, &self.layout)?;
        let msgs = self.driver.poll(self.delay)?;
        match interrupt(&msgs) {
            Some(Interrupt::Cancel) => {
                debug!("search cancelled from the keyboard");
                self.ctx.cancel();
            }
            Some(Interrupt::Quit) => self.ctx.quit(),
            None => {}
        }
        Ok(())
    }

    /// The terminal error that ended the run early, if any.
    pub fn finish(self) -> io::Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Progress for TermProgress<'_> {
    fn step(&mut self, grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.refresh(grid) {
            error!("terminal error during search: {err}");
            self.error = Some(err);
            self.ctx.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_wins_over_escape() {
        assert_eq!(interrupt(&[]), None);
        assert_eq!(interrupt(&[Msg::KeyDown(Key::Space)]), None);
        assert_eq!(
            interrupt(&[Msg::KeyDown(Key::Escape)]),
            Some(Interrupt::Cancel)
        );
        assert_eq!(
            interrupt(&[Msg::KeyDown(Key::Escape), Msg::Quit]),
            Some(Interrupt::Quit)
        );
        assert_eq!(
            interrupt(&[Msg::KeyDown(Key::Char('q'))]),
            Some(Interrupt::Quit)
        );
    }
}
