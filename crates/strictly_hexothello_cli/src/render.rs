//! Text rendering of the hex board.
//!
//! Each row `r` is shifted half a cell per step so that axial neighbours
//! line up, with the column of cell `(q, r)` at `2q + r`.

use strictly_hexothello::{Board, Cell};

/// Draws the board with one line per row, `.` for empty cells.
pub fn render(board: &Board) -> String {
    let column = |cell: Cell| 2 * cell.q + cell.r;
    let Some(left) = board.cells().map(column).min() else {
        return String::new();
    };

    let mut rows: Vec<(i32, String)> = Vec::new();
    let mut cells: Vec<(Cell, char)> = board
        .iter()
        .map(|(cell, state)| (cell, state.symbol()))
        .collect();
    cells.sort_by_key(|(cell, _)| (cell.r, cell.q));

    for (cell, symbol) in cells {
        if rows.last().is_none_or(|(r, _)| *r != cell.r) {
            rows.push((cell.r, String::new()));
        }
        if let Some((_, line)) = rows.last_mut() {
            let target = usize::try_from(column(cell) - left).unwrap_or(0);
            while line.chars().count() < target {
                line.push(' ');
            }
            line.push(symbol);
        }
    }

    rows.into_iter()
        .map(|(r, line)| format!("{r:>3} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
