use smallvec::SmallVec;

use crate::{cell::Cell, char_grid::CharGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// Uninformed search with a zero heuristic. Expands more nodes than [AstarSolver](super::astar::AstarSolver)
/// but serves as a reference for shortest path lengths.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Cell, u32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &CharGrid, node: &Cell) -> Self::Successors {
        grid.neighbours_and_cost(node)
    }

    fn heuristic(&self, _: &CharGrid, _: &Cell, _: &Cell) -> u32 {
        0
    }
}
