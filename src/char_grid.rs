use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::{GOAL, N_SMALLVEC_SIZE, PATH, START, STEP_COST, WALL};
use core::fmt;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::str::FromStr;

/// Characters with a special meaning on a map. Every other character is open floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Symbols {
    pub wall: char,
    pub start: char,
    pub goal: char,
    /// Written over route cells by [render](crate::render::render).
    pub path: char,
}

impl Default for Symbols {
    fn default() -> Symbols {
        Symbols {
            wall: WALL,
            start: START,
            goal: GOAL,
            path: PATH,
        }
    }
}

/// [CharGrid] keeps the parsed rows of an ASCII map together with a [UnionFind] structure
/// recording which open cells are orthogonally connected. Rows keep the length they had in the
/// source text, so a map does not have to be rectangular. The grid is never modified after
/// parsing and can be shared between concurrent searches.
#[derive(Clone, Debug)]
pub struct CharGrid {
    rows: Vec<Vec<char>>,
    symbols: Symbols,
    /// Index of the first cell of each row in the flattened component numbering.
    row_offsets: Vec<usize>,
    components: UnionFind<usize>,
}

impl CharGrid {
    /// Parses a map using the default [Symbols].
    pub fn parse(text: &str) -> Result<CharGrid> {
        Self::parse_with_symbols(text, Symbols::default())
    }

    /// Every non-empty line of `text` becomes a row, empty lines are dropped entirely. Fails with
    /// [Error::EmptyGrid] if nothing is left.
    pub fn parse_with_symbols(text: &str, symbols: Symbols) -> Result<CharGrid> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let mut row_offsets = Vec::with_capacity(rows.len());
        let mut n_cells = 0;
        for row in &rows {
            row_offsets.push(n_cells);
            n_cells += row.len();
        }
        let mut grid = CharGrid {
            rows,
            symbols,
            row_offsets,
            components: UnionFind::new(0),
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the given row, 0 for rows past the bottom.
    pub fn width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.len())
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        self.rows.get(cell.row)?.get(cell.col).copied()
    }

    /// First cell holding `marker` in row-major order.
    pub fn find(&self, marker: char) -> Option<Cell> {
        self.rows.iter().enumerate().find_map(|(row, chars)| {
            chars
                .iter()
                .position(|&c| c == marker)
                .map(|col| Cell::new(row, col))
        })
    }

    fn find_marker(&self, marker: char) -> Result<Cell> {
        self.find(marker).ok_or(Error::MarkerNotFound { marker })
    }

    pub fn start(&self) -> Result<Cell> {
        self.find_marker(self.symbols.start)
    }

    pub fn goal(&self) -> Result<Cell> {
        self.find_marker(self.symbols.goal)
    }

    /// Bounds are checked against the length of the cell's own row.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height() && cell.col < self.width(cell.row)
    }

    /// Whether the cell is not a wall. The cell has to be [in bounds](Self::in_bounds).
    pub fn is_passable(&self, cell: Cell) -> bool {
        debug_assert!(self.in_bounds(cell), "{} is outside the grid", cell);
        self.rows[cell.row][cell.col] != self.symbols.wall
    }

    pub fn can_move_to(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.is_passable(cell)
    }

    /// Open orthogonal neighbours, always in up, down, left, right order.
    pub fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood().filter(|&n| self.can_move_to(n)).collect()
    }

    pub fn neighbours_and_cost(&self, cell: &Cell) -> SmallVec<[(Cell, u32); N_SMALLVEC_SIZE]> {
        cell.neumann_neighborhood()
            .filter(|&n| self.can_move_to(n))
            .map(|n| (n, STEP_COST))
            .collect()
    }

    fn get_ix(&self, cell: &Cell) -> usize {
        self.row_offsets[cell.row] + cell.col
    }

    /// Retrieves the component id a given open [Cell] belongs to.
    pub fn get_component(&self, cell: &Cell) -> Option<usize> {
        self.can_move_to(*cell).then(|| self.components.find(self.get_ix(cell)))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            self.components.equiv(self.get_ix(start), self.get_ix(goal))
        } else {
            false
        }
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }

    /// Links every open cell to its open neighbours below and to the right, which covers every
    /// orthogonal adjacency exactly once.
    fn generate_components(&mut self) {
        let n_cells: usize = self.rows.iter().map(Vec::len).sum();
        let mut components = UnionFind::new(n_cells);
        for (row, chars) in self.rows.iter().enumerate() {
            for col in 0..chars.len() {
                let cell = Cell::new(row, col);
                if !self.is_passable(cell) {
                    continue;
                }
                let parent_ix = self.get_ix(&cell);
                [Cell::new(row + 1, col), Cell::new(row, col + 1)]
                    .into_iter()
                    .filter(|&n| self.can_move_to(n))
                    .for_each(|n| {
                        components.union(parent_ix, self.get_ix(&n));
                    });
            }
        }
        info!("Generated connected components over {} cells", n_cells);
        self.components = components;
    }
}

impl FromStr for CharGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<CharGrid> {
        CharGrid::parse(s)
    }
}

/// Prints the rows as they were parsed, separated by newlines.
impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
