//! The visualizer state: the board being edited, the selected search, and
//! what the status line says.

use std::time::Duration;

use log::{debug, info, warn};
use pathviz_core::{Editor, Grid, Point};
use pathviz_crossterm::{Key, Layout, MouseAction, Msg};
use pathviz_search::Algorithm;

use crate::cli::Config;

/// What the main loop should do after a message.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// Run the selected search on the current board.
    Run,
    Quit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    Edit,
    /// A result is on screen; the next key or click dismisses it.
    Result,
}

/// How a search run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub found: bool,
    pub cancelled: bool,
    pub elapsed: Duration,
}

pub struct Visualizer {
    grid: Grid,
    editor: Editor,
    layout: Layout,
    algorithm: Algorithm,
    mode: Mode,
    status: String,
}

impl Visualizer {
    pub fn new(config: &Config) -> Self {
        let mut vis = Self {
            grid: Grid::new(config.rows),
            editor: Editor::new(),
            layout: Layout::new(config.rows, config.width),
            algorithm: config.algorithm,
            mode: Mode::Edit,
            status: String::new(),
        };
        vis.show_help();
        vis
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    fn show_help(&mut self) {
        self.status = format!(
            "[{}] left: start/end/walls  right: erase  space: run  tab: algorithm  c: clear  q: quit",
            self.algorithm
        );
    }

    /// Process one input message.
    pub fn update(&mut self, msg: Msg) -> Action {
        if msg == Msg::Quit {
            return Action::Quit;
        }
        if self.mode == Mode::Result {
            let dismiss = match msg {
                Msg::KeyDown(_) => true,
                Msg::Mouse { action, .. } => {
                    matches!(action, MouseAction::Main | MouseAction::Secondary)
                }
                _ => false,
            };
            if dismiss {
                self.mode = Mode::Edit;
                self.show_help();
            }
            return Action::None;
        }

        match msg {
            Msg::Mouse { action, pos } => {
                let Some(p) = self.layout.cell_at(pos) else {
                    return Action::None;
                };
                let edited = match action {
                    MouseAction::Main => self.editor.paint(&mut self.grid, p).map(|_| ()),
                    MouseAction::Secondary => self.editor.erase(&mut self.grid, p),
                    _ => Ok(()),
                };
                if let Err(e) = edited {
                    debug!("ignoring edit: {e}");
                }
                Action::None
            }
            Msg::KeyDown(Key::Space) => {
                if self.editor.endpoints().is_some() {
                    Action::Run
                } else {
                    self.status = "Place a start and an end first".to_string();
                    Action::None
                }
            }
            Msg::KeyDown(Key::Tab) => {
                self.algorithm = self.algorithm.next();
                self.show_help();
                Action::None
            }
            Msg::KeyDown(Key::Char('c')) => {
                self.editor.clear(&mut self.grid);
                self.show_help();
                Action::None
            }
            Msg::KeyDown(Key::Char('q')) | Msg::KeyDown(Key::Escape) => Action::Quit,
            _ => Action::None,
        }
    }

    /// Get the board ready for a search: fresh neighbour lists, no marks
    /// left over from the previous run. Returns the endpoints.
    pub fn prepare_run(&mut self) -> Option<(Point, Point)> {
        let (start, end) = self.editor.endpoints()?;
        self.grid.clear_search_marks();
        self.grid.update_neighbors();
        self.status = format!("Running {}... (esc: cancel)", self.algorithm);
        info!("running {} from {start} to {end}", self.algorithm);
        Some((start, end))
    }

    /// Record how the last search ended and what to show for it.
    pub fn finish_run(&mut self, outcome: RunOutcome) {
        let explored = self.grid.explored_count();
        if outcome.cancelled {
            warn!("{} cancelled after exploring {explored} cells", self.algorithm);
            self.mode = Mode::Edit;
            self.status = "Search cancelled".to_string();
            return;
        }
        self.mode = Mode::Result;
        if outcome.found {
            let length = self.grid.path_count() + 1;
            info!(
                "{} found a path of length {length}, explored {explored} cells in {:?}",
                self.algorithm, outcome.elapsed
            );
            self.status = format!(
                "Nodes traversed: {explored} | Path length: {length} | Time taken: {:.2}s  (press any key)",
                outcome.elapsed.as_secs_f64()
            );
        } else {
            info!("{} found no path, explored {explored} cells", self.algorithm);
            self.status = "No path found!  (press any key)".to_string();
        }
    }
}
