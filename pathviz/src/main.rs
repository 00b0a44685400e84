//! pathviz: paint a grid in the terminal and watch BFS, DFS, Dijkstra and
//! A* search it.

mod app;
mod cli;
mod logging;
mod model;
mod sink;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Config};

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    // held until return so buffered lines get flushed
    let _logger = match config.log.as_ref().map(logging::init).transpose() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: cannot start logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
