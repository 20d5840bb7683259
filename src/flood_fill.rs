use crate::error::{GraphError, Result};

/// Repaints the 4-connected region of cells that share the color of
/// `grid[row][col]` with `new_color`.
///
/// Rows may differ in length; cells past the end of a row simply do
/// not exist.
pub fn flood_fill(
    grid: &mut [Vec<i32>],
    row: usize,
    col: usize,
    new_color: i32,
) -> Result<()> {
    let original = match grid.get(row).and_then(|r| r.get(col)) {
        Some(&color) => color,
        None => return Err(GraphError::CellOutOfRange { row, col }),
    };

    let mut visited: Vec<Vec<bool>> =
        grid.iter().map(|r| vec![false; r.len()]).collect();
    let mut stack = vec![(row, col)];

    while let Some((r, c)) = stack.pop() {
        if visited[r][c] || grid[r][c] != original {
            continue;
        }
        visited[r][c] = true;
        grid[r][c] = new_color;

        if c > 0 {
            stack.push((r, c - 1));
        }
        if c + 1 < grid[r].len() {
            stack.push((r, c + 1));
        }
        if r > 0 && c < grid[r - 1].len() {
            stack.push((r - 1, c));
        }
        if r + 1 < grid.len() && c < grid[r + 1].len() {
            stack.push((r + 1, c));
        }
    }

    Ok(())
}
