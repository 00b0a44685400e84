//! The terminal session: event loop and search runs.

use std::error::Error;
use std::time::{Duration, Instant};

use log::{info, warn};
use pathviz_core::Context;
use pathviz_crossterm::CrosstermDriver;

use crate::cli::Config;
use crate::model::{Action, RunOutcome, Visualizer};
use crate::sink::TermProgress;

const FRAME: Duration = Duration::from_millis(16);

/// Run the visualizer until the user quits. The terminal is restored even
/// when the loop fails.
pub fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut driver = CrosstermDriver::new();
    driver.init()?;
    info!(
        "started: {}x{} board, {} columns, {}",
        config.rows, config.rows, config.width, config.algorithm
    );
    let res = event_loop(&mut driver, config);
    driver.close();
    if let Err(e) = &res {
        warn!("session ended with an error: {e}");
    }
    res
}

fn event_loop(driver: &mut CrosstermDriver, config: &Config) -> Result<(), Box<dyn Error>> {
    let mut vis = Visualizer::new(config);
    loop {
        let layout = vis.layout();
        driver.draw(vis.grid(), &layout)?;
        driver.status(&layout, vis.status())?;

        for msg in driver.poll(FRAME)? {
            match vis.update(msg) {
                Action::None => {}
                Action::Quit => {
                    info!("quit");
                    return Ok(());
                }
                Action::Run => {
                    if search(driver, &mut vis, config.step_delay)? {
                        info!("quit during a search");
                        return Ok(());
                    }
                    // drop anything queued behind the run
                    break;
                }
            }
        }
    }
}

/// Run the selected search with live drawing. Returns whether the user
/// asked to quit while it ran.
fn search(
    driver: &mut CrosstermDriver,
    vis: &mut Visualizer,
    delay: Duration,
) -> Result<bool, Box<dyn Error>> {
    let Some((start, end)) = vis.prepare_run() else {
        return Ok(false);
    };
    let layout = vis.layout();
    driver.draw(vis.grid(), &layout)?;
    driver.status(&layout, vis.status())?;

    let ctx = Context::new();
    let algorithm = vis.algorithm();
    let mut sink = TermProgress::new(driver, layout, ctx.clone(), delay);
    let started = Instant::now();
    let found = algorithm.run(&mut sink, vis.grid_mut(), start, end, &ctx);
    let elapsed = started.elapsed();
    sink.finish()?;

    vis.finish_run(RunOutcome {
        found,
        cancelled: ctx.is_done() && !found,
        elapsed,
    });
    Ok(ctx.wants_quit())
}
