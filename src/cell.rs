use core::fmt;

/// A `(row, col)` coordinate on a [CharGrid](crate::char_grid::CharGrid). Rows grow downwards,
/// columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Cell {
        Cell { row, col }
    }

    /// Number of orthogonal steps between two cells when nothing is in the way.
    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell one step in `dir`, or [None] if that would leave the non-negative quadrant.
    pub fn step(&self, dir: Direction) -> Option<Cell> {
        let (d_row, d_col) = dir.offset();
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// The up to four orthogonal neighbours in [Direction::ALL] order, ignoring obstacles.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Cell> {
        let cell = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| cell.step(dir))
    }

    /// True if the two cells differ by exactly one unit along exactly one axis.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Cell {
        Cell { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal move directions. The order of [Direction::ALL] decides the order in which
/// successors are generated and therefore how equal-cost ties are explored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, col)` offset of a single step.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
