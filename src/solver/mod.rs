use crate::cell::Cell;
use crate::char_grid::CharGrid;
use crate::search::GridSearchContext;
use crate::STEP_COST;
use itertools::Itertools;
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Cell, u32)>;

    /// Estimate of the remaining cost from `p1` to `p2`.
    fn heuristic(&self, grid: &CharGrid, p1: &Cell, p2: &Cell) -> u32;

    fn successors(&self, grid: &CharGrid, node: &Cell) -> Self::Successors;

    /// Cost of walking from `p1` to `p2` on an empty grid.
    fn cost(&self, p1: &Cell, p2: &Cell) -> u32 {
        p1.manhattan_distance(p2) as u32 * STEP_COST
    }

    fn get_path_cost(&self, path: &[Cell]) -> u32 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.cost(p1, p2))
            .sum()
    }

    /// Runs the search without consulting the connected components first, so an unreachable
    /// goal is only detected once the frontier runs dry. Buffers of `ctx` are reused.
    fn search_single_goal(
        &self,
        grid: &CharGrid,
        ctx: &mut GridSearchContext,
        start: Cell,
        goal: Cell,
    ) -> Option<Vec<Cell>> {
        ctx.astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(grid, point, &goal),
            |point| *point == goal,
        )
        .map(|(v, _c)| v)
    }

    /// Computes a path from start to goal, both inclusive. Returns [None] straight away if the
    /// two cells are on different connected components.
    fn get_path_single_goal(&self, grid: &CharGrid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        if grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return None;
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let path = self.search_single_goal(grid, &mut GridSearchContext::new(), start, goal);
        if path.is_none() {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        path
    }

    /// Computes a path from the start to the goal that is cheapest to reach and returns the
    /// selected goal in addition to the found path. The heuristic is the smallest estimate over
    /// all reachable goals.
    fn get_path_multiple_goals(
        &self,
        grid: &CharGrid,
        start: Cell,
        goals: &[Cell],
    ) -> Option<(Cell, Vec<Cell>)> {
        let goals = goals
            .iter()
            .filter(|goal| grid.reachable(&start, goal))
            .collect::<Vec<_>>();
        if goals.is_empty() {
            info!("None of the goals are reachable from {}", start);
            return None;
        }
        GridSearchContext::new()
            .astar(
                &start,
                |node| self.successors(grid, node),
                |point| {
                    goals
                        .iter()
                        .map(|goal| self.heuristic(grid, point, goal))
                        .min()
                        .unwrap_or(0)
                },
                |point| goals.contains(&point),
            )
            .and_then(|(v, _c)| v.last().copied().map(|goal| (goal, v)))
    }
}
