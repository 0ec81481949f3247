#![cfg(feature = "std")]

//! Command-line arguments and their validation.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use crate::common::ConfigError;
use crate::config::GameConfig;
use crate::exit_codes;

/// Play Dots and Boxes in the terminal.
///
/// Players take turns drawing edges with `<row> <col> <h|v>`; completing a
/// cell claims it and earns another turn. `w <file>` saves the game.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "boxes",
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Number of cell rows (2-999).
    #[arg(allow_hyphen_values = true)]
    pub height: String,
    /// Number of cell columns (2-999).
    #[arg(allow_hyphen_values = true)]
    pub width: String,
    /// Number of players (2-100).
    #[arg(allow_hyphen_values = true)]
    pub players: String,
    /// Save file to resume from.
    #[arg(allow_hyphen_values = true)]
    pub save_file: Option<PathBuf>,
}

impl Args {
    /// Validate height and width, then the player count.
    ///
    /// Each value must be a base-10 integer, optionally preceded by
    /// whitespace, with nothing after it.
    pub fn config(&self) -> Result<GameConfig, CliError> {
        let height = parse_count(&self.height).ok_or(CliError::InvalidDimensions)?;
        let width = parse_count(&self.width).ok_or(CliError::InvalidDimensions)?;
        let players = parse_count(&self.players).ok_or(CliError::InvalidPlayerCount)?;
        GameConfig::new(height, width, players).map_err(CliError::from)
    }
}

/// Negative values parse but can never be in range, so they map to zero.
fn parse_count(arg: &str) -> Option<usize> {
    let value: i64 = arg.trim_start().parse().ok()?;
    Some(usize::try_from(value).unwrap_or(0))
}

/// Fatal problems with the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliError {
    /// Wrong number of arguments, or an unknown flag.
    Usage,
    InvalidDimensions,
    InvalidPlayerCount,
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(self) -> i32 {
        match self {
            CliError::Usage => exit_codes::USAGE,
            CliError::InvalidDimensions => exit_codes::INVALID_DIMENSIONS,
            CliError::InvalidPlayerCount => exit_codes::INVALID_PLAYER_COUNT,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidDimensions { .. } => CliError::InvalidDimensions,
            ConfigError::InvalidPlayerCount { .. } | ConfigError::UnknownPlayer { .. } => {
                CliError::InvalidPlayerCount
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage => write!(f, "Usage: boxes height width playercount [filename]"),
            CliError::InvalidDimensions => write!(f, "Invalid grid dimensions"),
            CliError::InvalidPlayerCount => write!(f, "Invalid player count"),
        }
    }
}

impl std::error::Error for CliError {}
