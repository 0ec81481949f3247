//! Drawing edges and crediting the cells they complete.

use log::debug;

use crate::common::{MoveResult, Orientation};
use crate::completion::is_completed;
use crate::grid::Grid;
use crate::player::{PlayerId, Players};

/// Draw the edge at (row, col) for `player`.
///
/// A horizontal edge is valid for `0 <= row <= height`, `0 <= col < width`
/// and borders the cells at (row, col) and (row - 1, col). A vertical edge is
/// valid for `0 <= row < height`, `0 <= col <= width` and borders (row, col)
/// and (row, col - 1). Every bordering cell that becomes completed and has no
/// owner yet is claimed by `player`, whose score grows by one per cell.
///
/// Redrawing an existing edge is accepted and changes nothing. Out-of-range
/// coordinates, or a `player` not in `players`, are rejected with no state
/// change.
pub fn apply_move(
    grid: &mut Grid,
    players: &mut Players,
    orientation: Orientation,
    row: i64,
    col: i64,
    player: PlayerId,
) -> MoveResult {
    if !players.contains(player) || !edge_in_range(grid, orientation, row, col) {
        return MoveResult::Rejected;
    }
    let (r, c) = (row as usize, col as usize);
    if grid.set_edge(orientation, r, c).is_err() {
        return MoveResult::Rejected;
    }

    let neighbours = match orientation {
        Orientation::Horizontal => [(row, col), (row - 1, col)],
        Orientation::Vertical => [(row, col), (row, col - 1)],
    };
    let mut completed = 0;
    for (cell_row, cell_col) in neighbours {
        if claim(grid, players, cell_row, cell_col, player) {
            completed += 1;
        }
    }
    debug!(
        "player {} drew {} {} {}, completing {} cell(s)",
        player,
        row,
        col,
        orientation.token(),
        completed
    );
    MoveResult::Accepted { completed }
}

/// Returns `true` when (row, col) addresses an edge slot of `grid`.
pub fn edge_in_range(grid: &Grid, orientation: Orientation, row: i64, col: i64) -> bool {
    let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
        return false;
    };
    match orientation {
        Orientation::Horizontal => r <= grid.height() && c < grid.width(),
        Orientation::Vertical => r < grid.height() && c <= grid.width(),
    }
}

/// Claim a completed, unowned cell. Returns `true` if ownership changed.
fn claim(grid: &mut Grid, players: &mut Players, row: i64, col: i64, player: PlayerId) -> bool {
    if !is_completed(grid, row, col) {
        return false;
    }
    // is_completed guarantees both coordinates are inside the grid
    let (r, c) = (row as usize, col as usize);
    if grid.set_owner(r, c, player).is_err() {
        return false;
    }
    players.credit(player).is_ok()
}
