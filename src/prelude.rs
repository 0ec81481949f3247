//! Commonly used types and utilities for ease of import.

pub use crate::{
    apply_move, is_complete, is_completed, GameConfig, GameEngine, GameState, GameStatus, Grid,
    MoveResult, Orientation, PlayerId, Players,
};

#[cfg(feature = "std")]
pub use crate::{Command, Outcome, Session};
