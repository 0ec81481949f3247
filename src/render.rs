//! ASCII rendering of the dot/edge/cell lattice.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::common::Orientation;
use crate::grid::Grid;
use crate::player::PlayerId;

const DOT: char = '+';
const HORIZONTAL_EDGE: char = '-';
const VERTICAL_EDGE: char = '|';
const BLANK: char = ' ';

/// One line per lattice row: `+` for dots, `-` and `|` for drawn edges and
/// the owner's letter (or a blank) for cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for j in 0..2 * self.height() + 1 {
            for k in 0..2 * self.width() + 1 {
                f.write_char(lattice_char(self, j, k))?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

fn lattice_char(grid: &Grid, j: usize, k: usize) -> char {
    let drawn = |orientation, row, col| grid.edge(orientation, row, col).unwrap_or(false);
    match (j % 2, k % 2) {
        (0, 0) => DOT,
        (0, _) if drawn(Orientation::Horizontal, j / 2, k / 2) => HORIZONTAL_EDGE,
        (_, 0) if drawn(Orientation::Vertical, j / 2, k / 2) => VERTICAL_EDGE,
        (1, 1) => match grid.owner(j / 2, k / 2) {
            Ok(Some(owner)) => owner.label(),
            _ => BLANK,
        },
        _ => BLANK,
    }
}

/// `Winner(s): A, C` for the given players.
pub fn winners_line(winners: &[PlayerId]) -> String {
    let mut line = String::from("Winner(s): ");
    for (i, id) in winners.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        let _ = write!(line, "{}", id);
    }
    line
}
