//! # ascii_pathfinding
//!
//! Shortest paths on ASCII maps. A map such as
//!
//! ```text
//! ##########
//! #S...#...#
//! #.##.#.#.#
//! #........#
//! #.####.#G#
//! ##########
//! ```
//!
//! is parsed into a [CharGrid], the `S` and `G` markers are located and an
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search with the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic finds a
//! shortest route using orthogonal unit-cost moves. Equal estimates are explored in the order in
//! which they were discovered, so a given map always yields the same route. The route is drawn
//! back onto the map with `*`:
//!
//! ```
//! use ascii_pathfinding::{solve, Cell, Outcome};
//!
//! let outcome = solve("S.#\n..G").unwrap();
//! assert_eq!(outcome, Outcome::Found {
//!     path: vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
//!     rendered: "S.#\n**G".to_owned(),
//! });
//! ```
//!
//! Connected components are pre-computed to avoid flood-filling behaviour if no path exists.
pub mod cell;
pub mod char_grid;
pub mod error;
pub mod render;
pub mod search;
pub mod solver;

pub use cell::{Cell, Direction};
pub use char_grid::{CharGrid, Symbols};
pub use error::{Error, Result};

use log::info;
use solver::{astar::AstarSolver, GridSolver};

pub const WALL: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';
pub const PATH: char = '*';
/// Cost of a single orthogonal move.
pub const STEP_COST: u32 = 1;
pub const N_SMALLVEC_SIZE: usize = 4;

/// Result of running the full pipeline on a map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found { path: Vec<Cell>, rendered: String },
    NoPath,
}

/// Couples a parsed [CharGrid] with an [AstarSolver] to answer the start-to-goal query of the
/// map.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    pub grid: CharGrid,
    pub solver: AstarSolver,
}

impl Pathfinder {
    pub fn new(grid: CharGrid) -> Pathfinder {
        Pathfinder {
            grid,
            solver: AstarSolver::new(),
        }
    }

    pub fn parse(text: &str) -> Result<Pathfinder> {
        Ok(Self::new(CharGrid::parse(text)?))
    }

    /// Route from the start marker to the goal marker, or [None] if the goal cannot be reached.
    /// Fails with [Error::MarkerNotFound] before searching if either marker is missing.
    pub fn find_path(&self) -> Result<Option<Vec<Cell>>> {
        let start = self.grid.start()?;
        let goal = self.grid.goal()?;
        Ok(self.solver.get_path_single_goal(&self.grid, start, goal))
    }

    pub fn solve(&self) -> Result<Outcome> {
        Ok(match self.find_path()? {
            Some(path) => {
                info!("Found path with {} steps", path.len() - 1);
                let rendered = render::render(&self.grid, &path);
                Outcome::Found { path, rendered }
            }
            None => Outcome::NoPath,
        })
    }
}

/// Parses `text`, searches from `S` to `G` and renders the route.
pub fn solve(text: &str) -> Result<Outcome> {
    Pathfinder::parse(text)?.solve()
}
