//! Grid state: drawn edges and cell owners.
//!
//! Edges and owners are kept in three separate structures indexed by integer
//! coordinates rather than one character lattice:
//!
//! - horizontal edges, `(height + 1) × width`
//! - vertical edges, `height × (width + 1)`
//! - cell owners, `height × width`
//!
//! Dots are implicit. The lattice view only exists when rendering.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitgrid::BitGrid;
use crate::common::{GridError, Orientation};
use crate::config::dimension_in_range;
use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    height: usize,
    width: usize,
    horizontal: BitGrid,
    vertical: BitGrid,
    owners: Vec<Option<PlayerId>>,
}

impl Grid {
    /// Create a grid of `height × width` cells with no edges drawn.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if !dimension_in_range(height) || !dimension_in_range(width) {
            return Err(GridError::InvalidDimensions { height, width });
        }
        Ok(Grid {
            height,
            width,
            horizontal: BitGrid::new(height + 1, width),
            vertical: BitGrid::new(height, width + 1),
            owners: vec![None; height * width],
        })
    }

    /// Number of cell rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cell columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of edge slots, drawn or not.
    pub fn edge_slots(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    /// Number of edges drawn so far.
    pub fn edges_drawn(&self) -> usize {
        self.horizontal.count_ones() + self.vertical.count_ones()
    }

    /// Returns `true` if the edge is drawn.
    pub fn edge(
        &self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<bool, GridError> {
        self.edges(orientation)
            .get(row, col)
            .map_err(|_| GridError::EdgeOutOfBounds {
                orientation,
                row,
                col,
            })
    }

    /// Draw an edge. Returns `true` if it was already present.
    pub fn set_edge(
        &mut self,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<bool, GridError> {
        let edges = match orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        edges.set(row, col).map_err(|_| GridError::EdgeOutOfBounds {
            orientation,
            row,
            col,
        })
    }

    /// Owner of the cell at (row, col), if claimed.
    pub fn owner(&self, row: usize, col: usize) -> Result<Option<PlayerId>, GridError> {
        let idx = self.cell_index(row, col)?;
        Ok(self.owners.get(idx).copied().flatten())
    }

    /// Claim an unowned cell for `player`. Owners are permanent.
    pub fn set_owner(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), GridError> {
        let idx = self.cell_index(row, col)?;
        match self.owners.get_mut(idx) {
            Some(Some(_)) => Err(GridError::CellAlreadyOwned { row, col }),
            Some(slot) => {
                *slot = Some(player);
                Ok(())
            }
            None => Err(GridError::CellOutOfBounds { row, col }),
        }
    }

    /// Cell owners, row-major.
    pub fn owners(&self) -> &[Option<PlayerId>] {
        &self.owners
    }

    /// Horizontal or vertical edge storage.
    pub fn edges(&self, orientation: Orientation) -> &BitGrid {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    fn cell_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::CellOutOfBounds { row, col });
        }
        Ok(row * self.width + col)
    }
}
