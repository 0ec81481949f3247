//! Common types for Dots and Boxes: edge orientation, move outcomes and errors.

use crate::bitgrid::BitGridError;
use crate::config::{MAX_DIMENSION, MAX_PLAYERS, MIN_DIMENSION, MIN_PLAYERS};
use core::fmt;

/// Direction of an edge between two adjacent dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Joins `(row, col)` to `(row, col + 1)`.
    Horizontal,
    /// Joins `(row, col)` to `(row + 1, col)`.
    Vertical,
}

impl Orientation {
    /// Parse the single-letter token typed by a player (`h` or `v`).
    pub fn from_token(token: char) -> Option<Self> {
        match token {
            'h' => Some(Orientation::Horizontal),
            'v' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn token(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }
}

/// Result of attempting to draw one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Coordinates or orientation were invalid; nothing changed.
    Rejected,
    /// The edge is drawn, completing `completed` new cells (0, 1 or 2).
    Accepted { completed: usize },
}

impl MoveResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// Returns `true` when play should pass to the next player.
    pub fn advances_turn(&self) -> bool {
        matches!(self, MoveResult::Accepted { completed: 0 })
    }
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Height or width outside the playable range.
    InvalidDimensions { height: usize, width: usize },
    /// Edge coordinates outside the grid for the given orientation.
    EdgeOutOfBounds {
        orientation: Orientation,
        row: usize,
        col: usize,
    },
    /// Cell coordinates outside the grid.
    CellOutOfBounds { row: usize, col: usize },
    /// Attempted to claim a cell that already has an owner.
    CellAlreadyOwned { row: usize, col: usize },
    /// Underlying storage error.
    BitGrid(BitGridError),
}

impl From<BitGridError> for GridError {
    fn from(err: BitGridError) -> Self {
        GridError::BitGrid(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { height, width } => write!(
                f,
                "Grid dimensions {}x{} outside {}..={}",
                height, width, MIN_DIMENSION, MAX_DIMENSION
            ),
            GridError::EdgeOutOfBounds {
                orientation,
                row,
                col,
            } => write!(
                f,
                "Edge {} {} {} is outside the grid",
                row,
                col,
                orientation.token()
            ),
            GridError::CellOutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the grid", row, col)
            }
            GridError::CellAlreadyOwned { row, col } => {
                write!(f, "Cell ({}, {}) already has an owner", row, col)
            }
            GridError::BitGrid(e) => write!(f, "BitGrid error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Errors raised while validating game parameters or restoring a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDimensions { height: usize, width: usize },
    InvalidPlayerCount { count: usize },
    /// A snapshot refers to a player number the game does not have.
    UnknownPlayer { number: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { height, width } => write!(
                f,
                "Grid dimensions {}x{} outside {}..={}",
                height, width, MIN_DIMENSION, MAX_DIMENSION
            ),
            ConfigError::InvalidPlayerCount { count } => write!(
                f,
                "Player count {} outside {}..={}",
                count, MIN_PLAYERS, MAX_PLAYERS
            ),
            ConfigError::UnknownPlayer { number } => {
                write!(f, "Player {} is not part of this game", number)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
