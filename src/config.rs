use crate::common::ConfigError;
use log::LevelFilter;

/// Smallest number of cell rows or columns.
pub const MIN_DIMENSION: usize = 2;
/// Largest number of cell rows or columns.
pub const MAX_DIMENSION: usize = 999;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 100;
/// Interactive lines longer than this many bytes are discarded unread.
pub const MAX_LINE_LEN: usize = 2048;

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "BOXES_LOG";
/// Log level used when [`LOG_ENV_VAR`] is unset or unrecognised.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Returns `true` when `n` is a playable row or column count.
pub const fn dimension_in_range(n: usize) -> bool {
    n >= MIN_DIMENSION && n <= MAX_DIMENSION
}

/// Returns `true` when `n` is a supported number of players.
pub const fn player_count_in_range(n: usize) -> bool {
    n >= MIN_PLAYERS && n <= MAX_PLAYERS
}

/// Validated parameters of one game: grid size and number of players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    height: usize,
    width: usize,
    players: usize,
}

impl GameConfig {
    /// Validate dimensions first, then the player count.
    pub fn new(height: usize, width: usize, players: usize) -> Result<Self, ConfigError> {
        if !dimension_in_range(height) || !dimension_in_range(width) {
            return Err(ConfigError::InvalidDimensions { height, width });
        }
        if !player_count_in_range(players) {
            return Err(ConfigError::InvalidPlayerCount { count: players });
        }
        Ok(Self {
            height,
            width,
            players,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn players(&self) -> usize {
        self.players
    }
}
