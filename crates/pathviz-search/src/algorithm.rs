use std::error::Error;
use std::fmt;
use std::str::FromStr;

use pathviz_core::{Context, Grid, Point};

use crate::progress::Progress;

/// The available searches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Dfs,
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::AStar];

    /// Command-line name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "a_star",
        }
    }

    /// The next algorithm in [`ALL`](Self::ALL) order, wrapping around.
    pub const fn next(self) -> Self {
        match self {
            Self::Bfs => Self::Dfs,
            Self::Dfs => Self::Dijkstra,
            Self::Dijkstra => Self::AStar,
            Self::AStar => Self::Bfs,
        }
    }

    /// Whether a found route is always a shortest one.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Self::Dfs)
    }

    /// Run this search. See [`bfs`](crate::bfs) for the shared contract.
    pub fn run<P: Progress + ?Sized>(
        self,
        progress: &mut P,
        grid: &mut Grid,
        start: Point,
        end: Point,
        ctx: &Context,
    ) -> bool {
        log::debug!("running {self} from {start} to {end} on {} cells", grid.len());
        match self {
            Self::Bfs => crate::bfs(progress, grid, start, end, ctx),
            Self::Dfs => crate::dfs(progress, grid, start, end, ctx),
            Self::Dijkstra => crate::dijkstra(progress, grid, start, end, ctx),
            Self::AStar => crate::astar(progress, grid, start, end, ctx),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm name that matches none of the searches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected bfs, dfs, dijkstra or a_star)",
            self.0
        )
    }
}

impl Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "a_star" | "astar" | "a*" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
