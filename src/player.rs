//! Player identities and the ordered score table.

use alloc::vec::Vec;
use core::fmt;

use crate::common::ConfigError;
use crate::config::{player_count_in_range, MAX_PLAYERS};

/// Zero-based position of a player in turn order.
///
/// Players are labelled `A`, `B`, … by position and numbered from 1 in save
/// files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player who moves first in a fresh game.
    pub const FIRST: PlayerId = PlayerId(0);

    pub fn from_index(index: usize) -> Option<Self> {
        if index < MAX_PLAYERS {
            Some(PlayerId(index as u8))
        } else {
            None
        }
    }

    /// Build from the 1-based number used by the save format.
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(Self::from_index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Display letter: `A` for the first player, `B` for the second, and so on.
    pub fn label(self) -> char {
        char::from(b'A' + self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One participant and the number of cells they have claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub score: usize,
}

/// All players in turn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    /// Create `count` players, all with a score of zero.
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if !player_count_in_range(count) {
            return Err(ConfigError::InvalidPlayerCount { count });
        }
        let players = (0..count)
            .map(|i| Player {
                id: PlayerId(i as u8),
                score: 0,
            })
            .collect();
        Ok(Self { players })
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if `id` takes part in this game.
    pub fn contains(&self, id: PlayerId) -> bool {
        id.index() < self.players.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn score(&self, id: PlayerId) -> Option<usize> {
        self.players.get(id.index()).map(|p| p.score)
    }

    /// Scores in player order.
    pub fn scores(&self) -> Vec<usize> {
        self.players.iter().map(|p| p.score).collect()
    }

    pub fn total_score(&self) -> usize {
        self.players.iter().map(|p| p.score).sum()
    }

    /// Add one claimed cell to `id`'s score.
    pub fn credit(&mut self, id: PlayerId) -> Result<(), ConfigError> {
        match self.players.get_mut(id.index()) {
            Some(p) => {
                p.score += 1;
                Ok(())
            }
            None => Err(ConfigError::UnknownPlayer { number: id.number() }),
        }
    }

    /// The player after `id` in round-robin order, wrapping to the first.
    pub fn next_after(&self, id: PlayerId) -> PlayerId {
        let next = (id.index() + 1) % self.players.len().max(1);
        PlayerId(next as u8)
    }

    /// Every player holding the highest score, in identifier order.
    pub fn leaders(&self) -> Vec<PlayerId> {
        let Some(best) = self.players.iter().map(|p| p.score).max() else {
            return Vec::new();
        };
        self.players
            .iter()
            .filter(|p| p.score == best)
            .map(|p| p.id)
            .collect()
    }
}
