use alloc::vec::Vec;
use log::debug;

use crate::{
    common::{ConfigError, MoveResult, Orientation},
    completion::is_complete,
    config::GameConfig,
    grid::Grid,
    moves::apply_move,
    player::{PlayerId, Players},
};

/// Serializable overall game state.
///
/// Scores are not stored: they are recomputed from cell owners on restore.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    pub player_count: usize,
    pub current: PlayerId,
}

/// Current status of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every cell is owned; `winners` hold the top score, in player order.
    Finished { winners: Vec<PlayerId> },
}

/// Core game logic: the grid, the players and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    players: Players,
    current: PlayerId,
}

impl GameEngine {
    /// Start a fresh game: empty grid, all scores zero, player `A` to move.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let grid = Grid::new(config.height(), config.width()).map_err(|_| {
            ConfigError::InvalidDimensions {
                height: config.height(),
                width: config.width(),
            }
        })?;
        let players = Players::new(config.players())?;
        Ok(Self {
            grid,
            players,
            current: PlayerId::FIRST,
        })
    }

    /// Restore an engine from a snapshot, rebuilding scores from cell owners.
    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        let mut players = Players::new(state.player_count)?;
        if !players.contains(state.current) {
            return Err(ConfigError::UnknownPlayer {
                number: state.current.number(),
            });
        }
        for owner in state.grid.owners().iter().flatten() {
            players.credit(*owner)?;
        }
        Ok(Self {
            grid: state.grid,
            players,
            current: state.current,
        })
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            player_count: self.players.len(),
            current: self.current,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The player whose move is awaited.
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Draw an edge for the current player and apply the turn rule.
    ///
    /// `token` is the orientation letter as typed (`h` or `v`); anything else
    /// is rejected. An accepted move that completes no cell passes the turn
    /// to the next player; completing one or more cells grants another turn.
    pub fn play(&mut self, row: i64, col: i64, token: char) -> MoveResult {
        let Some(orientation) = Orientation::from_token(token) else {
            debug!("rejected orientation token {:?}", token);
            return MoveResult::Rejected;
        };
        self.play_edge(orientation, row, col)
    }

    /// Same as [`GameEngine::play`] with an already-parsed orientation.
    pub fn play_edge(&mut self, orientation: Orientation, row: i64, col: i64) -> MoveResult {
        let result = apply_move(
            &mut self.grid,
            &mut self.players,
            orientation,
            row,
            col,
            self.current,
        );
        if result.advances_turn() {
            self.current = self.players.next_after(self.current);
        }
        result
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if is_complete(&self.grid) {
            GameStatus::Finished {
                winners: self.players.leaders(),
            }
        } else {
            GameStatus::InProgress
        }
    }
}
