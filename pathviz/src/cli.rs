//! Command-line arguments and the [`Config`] they produce.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use pathviz_search::Algorithm;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Bfs,
    Dfs,
    Dijkstra,
    #[value(name = "a_star", alias = "astar")]
    AStar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dfs => Algorithm::Dfs,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::AStar => Algorithm::AStar,
        }
    }
}

/// Paint a grid and watch graph searches explore it.
#[derive(Parser, Debug)]
#[command(name = "pathviz", version, about)]
pub struct Cli {
    /// Number of rows (and columns) in the grid
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(i32).range(1..=500))]
    pub rows: i32,

    /// Width of the board in terminal columns
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(i32).range(1..=10_000))]
    pub width: i32,

    /// Algorithm to use for pathfinding
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
    pub algorithm: AlgorithmArg,

    /// Pause after each search step, in milliseconds
    #[arg(long, default_value_t = 5)]
    pub delay_ms: u64,

    /// Write logs into this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log filter, e.g. "info" or "debug,pathviz_search=trace"
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// File logging settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: String,
}

/// Settings for one visualizer session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rows: i32,
    pub width: i32,
    pub algorithm: Algorithm,
    pub step_delay: Duration,
    pub log: Option<LogConfig>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            rows: cli.rows,
            width: cli.width,
            algorithm: cli.algorithm.into(),
            step_delay: Duration::from_millis(cli.delay_ms),
            log: cli.log_dir.map(|dir| LogConfig {
                dir,
                level: cli.log_level,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::from(Cli::try_parse_from(["pathviz"]).unwrap());
        assert_eq!(config.rows, 50);
        assert_eq!(config.width, 100);
        assert_eq!(config.algorithm, Algorithm::Dijkstra);
        assert_eq!(config.step_delay, Duration::from_millis(5));
        assert_eq!(config.log, None);
    }

    #[test]
    fn all_flags() {
        let cli = Cli::try_parse_from([
            "pathviz",
            "-r",
            "20",
            "--width",
            "60",
            "--algorithm",
            "a_star",
            "--delay-ms",
            "0",
            "--log-dir",
            "logs",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.rows, 20);
        assert_eq!(config.width, 60);
        assert_eq!(config.algorithm, Algorithm::AStar);
        assert_eq!(config.step_delay, Duration::ZERO);
        assert_eq!(
            config.log,
            Some(LogConfig {
                dir: PathBuf::from("logs"),
                level: "debug".to_string()
            })
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Cli::try_parse_from(["pathviz", "--algorithm", "greedy"]).is_err());
        assert!(Cli::try_parse_from(["pathviz", "--rows", "0"]).is_err());
        assert!(Cli::try_parse_from(["pathviz", "-a", "astar"]).is_ok());
    }
}
