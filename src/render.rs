use crate::cell::Cell;
use crate::char_grid::CharGrid;

/// Draws `path` onto a copy of the grid's rows with the path symbol. Cells carrying the start or
/// goal marker keep it, and cells outside the grid are skipped. Rows are joined by newlines
/// without a trailing one.
pub fn render(grid: &CharGrid, path: &[Cell]) -> String {
    let symbols = grid.symbols();
    let mut rows = grid.rows().to_vec();
    for cell in path {
        if let Some(c) = rows.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
            if *c != symbols.start && *c != symbols.goal {
                *c = symbols.path;
            }
        }
    }
    rows.iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
