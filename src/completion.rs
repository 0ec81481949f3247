//! Cell completion and end-of-game detection.

use crate::common::Orientation;
use crate::grid::Grid;

/// Returns `true` if the cell at (row, col) has all four edges drawn.
///
/// Coordinates outside the grid, negative ones included, are never
/// completed, so neighbours of border edges can be probed without checks.
pub fn is_completed(grid: &Grid, row: i64, col: i64) -> bool {
    let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
        return false;
    };
    if r >= grid.height() || c >= grid.width() {
        return false;
    }
    let drawn = |orientation, row, col| grid.edge(orientation, row, col).unwrap_or(false);
    drawn(Orientation::Horizontal, r, c)
        && drawn(Orientation::Horizontal, r + 1, c)
        && drawn(Orientation::Vertical, r, c)
        && drawn(Orientation::Vertical, r, c + 1)
}

/// Returns `true` once every cell has an owner.
pub fn is_complete(grid: &Grid) -> bool {
    grid.owners().iter().all(Option::is_some)
}
