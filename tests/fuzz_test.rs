/// Fuzzes the pathfinding system on many random maps: a path must be found exactly when the goal is
/// on the start's connected component, and any path found must be a shortest, valid route.
use ascii_pathfinding::{
    render::render,
    search::GridSearchContext,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Cell, CharGrid,
};
use rand::prelude::*;
use std::collections::{HashMap, VecDeque};

/// Map with `S` in the top-left and `G` in the bottom-right corner. With `jagged` set, rows get
/// random lengths, but always long enough to hold the markers.
fn random_map(n: usize, rng: &mut StdRng, jagged: bool) -> String {
    let mut lines = Vec::with_capacity(n);
    for row in 0..n {
        let width = if jagged && row != 0 && row != n - 1 {
            rng.gen_range(1..=n)
        } else {
            n
        };
        let line: String = (0..width)
            .map(|col| {
                if row == 0 && col == 0 {
                    'S'
                } else if row == n - 1 && col == n - 1 {
                    'G'
                } else if rng.gen_bool(0.4) {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        lines.push(line);
    }
    lines.join("\n")
}

/// Reference distance by breadth-first search.
fn bfs_distance(grid: &CharGrid, start: Cell, goal: Cell) -> Option<usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == goal {
            return Some(d);
        }
        for n in grid.neighbours(&cell) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_valid_path(grid: &CharGrid, path: &[Cell], start: Cell, goal: Cell) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for cell in path {
        assert!(grid.can_move_to(*cell), "{} is not an open cell", cell);
    }
    for w in path.windows(2) {
        assert!(w[0].is_adjacent(&w[1]), "{} -> {} is not a step", w[0], w[1]);
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 10000;
    let mut rng = StdRng::seed_from_u64(0);
    let solver = AstarSolver::new();
    let mut ctx = GridSearchContext::new();
    for jagged in [false, true] {
        for _ in 0..N_GRIDS {
            let map = random_map(N, &mut rng, jagged);
            let grid = CharGrid::parse(&map).unwrap();
            let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
            let reachable = grid.reachable(&start, &goal);
            // Skip the component check so that exhausting the frontier is exercised too.
            let path = solver.search_single_goal(&grid, &mut ctx, start, goal);
            // Show the grid if the outcome is wrong
            if path.is_some() != reachable {
                println!("{map}");
            }
            assert!(path.is_some() == reachable);
            assert_eq!(solver.get_path_single_goal(&grid, start, goal), path);
        }
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let astar_solver = AstarSolver::new();
    let dijkstra_solver = DijkstraSolver;

    for jagged in [false, true] {
        for _ in 0..N_GRIDS {
            let map = random_map(N, &mut rng, jagged);
            let grid = CharGrid::parse(&map).unwrap();
            let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
            let expected = bfs_distance(&grid, start, goal);
            let astar_path = astar_solver.get_path_single_goal(&grid, start, goal);
            let dijkstra_path = dijkstra_solver.get_path_single_goal(&grid, start, goal);
            match (expected, astar_path, dijkstra_path) {
                (Some(distance), Some(astar_path), Some(dijkstra_path)) => {
                    assert_valid_path(&grid, &astar_path, start, goal);
                    assert_valid_path(&grid, &dijkstra_path, start, goal);
                    if astar_path.len() - 1 != distance {
                        println!("{map}\n\n{}", render(&grid, &astar_path));
                    }
                    assert_eq!(astar_path.len() - 1, distance);
                    assert_eq!(astar_solver.get_path_cost(&astar_path) as usize, distance);
                    assert_eq!(dijkstra_path.len(), astar_path.len());
                }
                (None, None, None) => {}
                (expected, astar_path, dijkstra_path) => panic!(
                    "disagreement on\n{map}\nbfs: {expected:?}\nastar: {astar_path:?}\ndijkstra: {dijkstra_path:?}"
                ),
            }
        }
    }
}

/// Identical input must produce byte-identical output, also when a context is reused.
#[test]
fn fuzz_determinism() {
    const N: usize = 12;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(2);
    let solver = AstarSolver::new();
    let mut ctx = GridSearchContext::new();
    for _ in 0..N_GRIDS {
        let map = random_map(N, &mut rng, false);
        let grid = CharGrid::parse(&map).unwrap();
        let (start, goal) = (grid.start().unwrap(), grid.goal().unwrap());
        let first = solver.search_single_goal(&grid, &mut ctx, start, goal);
        let second = solver.search_single_goal(&grid, &mut GridSearchContext::new(), start, goal);
        assert_eq!(first, second);
        if let Some(path) = first {
            let rendered = render(&grid, &path);
            assert_eq!(rendered, render(&CharGrid::parse(&map).unwrap(), &path));
            // Only route cells change and the markers survive.
            for (out_line, in_line) in rendered.lines().zip(map.lines()) {
                assert_eq!(out_line.len(), in_line.len());
                for (o, i) in out_line.chars().zip(in_line.chars()) {
                    assert!(o == i || (o == '*' && i == '.'));
                }
            }
            assert_eq!(rendered.matches('*').count(), path.len() - 2);
        }
    }
}
