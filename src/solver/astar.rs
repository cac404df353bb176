use smallvec::SmallVec;

use crate::{cell::Cell, char_grid::CharGrid, solver::GridSolver, N_SMALLVEC_SIZE};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Scales the Manhattan estimate. Values above 1.0 expand fewer nodes but may return longer
    /// paths.
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Cell, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &CharGrid, node: &Cell) -> Self::Successors {
        grid.neighbours_and_cost(node)
    }

    /// Just the cost times a heuristic factor.
    fn heuristic(&self, _grid: &CharGrid, p1: &Cell, p2: &Cell) -> u32 {
        (self.cost(p1, p2) as f32 * self.heuristic_factor) as u32
    }
}
