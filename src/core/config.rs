//! Table configuration.
//!
//! `TableConfig` fixes everything about a table before the first card is
//! dealt. Builder-style `with_*` methods keep call sites short:
//!
//! ```
//! use rust_uno::cards::DeckKind;
//! use rust_uno::core::TableConfig;
//!
//! let config = TableConfig::new(3)
//!     .with_hand_size(8)
//!     .with_deck(DeckKind::Fixture)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::PlayerId;
use crate::cards::{DeckKind, DECK_SIZE};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_HAND_SIZE: usize = 7;
pub const DEFAULT_HAND_LIMIT: usize = 20;
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
/// The visible history must cover presentation needs.
pub const MIN_HISTORY_CAPACITY: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub player_count: usize,

    /// Cards dealt to each player.
    pub hand_size: usize,

    /// Default cap on hand size. Skills may override per seat.
    pub hand_limit: usize,

    /// Records kept in the visible discard history.
    pub history_capacity: usize,

    pub deck: DeckKind,

    pub seed: u64,

    /// Force the starting seat instead of drawing one at random.
    #[serde(default)]
    pub starting_player: Option<PlayerId>,

    /// Team per seat. `None` puts every seat on its own team.
    #[serde(default)]
    pub teams: Option<Vec<u8>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(4)
    }
}

impl TableConfig {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            hand_size: DEFAULT_HAND_SIZE,
            hand_limit: DEFAULT_HAND_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            deck: DeckKind::Standard,
            seed: 0,
            starting_player: None,
            teams: None,
        }
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_hand_limit(mut self, hand_limit: usize) -> Self {
        self.hand_limit = hand_limit;
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = Some(player);
        self
    }

    #[must_use]
    pub fn with_teams(mut self, teams: Vec<u8>) -> Self {
        self.teams = Some(teams);
        self
    }

    /// Team of a seat.
    #[must_use]
    pub fn team_of(&self, player: PlayerId) -> u8 {
        self.teams
            .as_ref()
            .and_then(|teams| teams.get(player.index()).copied())
            .unwrap_or(player.0)
    }

    /// Check that a table can be built from this configuration.
    ///
    /// Dealing must leave at least one card for the opening reveal.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count {} outside {}..={}",
                self.player_count, MIN_PLAYERS, MAX_PLAYERS
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be positive".into()));
        }
        if self.hand_size > self.hand_limit {
            return Err(GameError::InvalidConfig(format!(
                "hand size {} exceeds hand limit {}",
                self.hand_size, self.hand_limit
            )));
        }
        if self.hand_size * self.player_count >= DECK_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "{} hands of {} leave no opening card",
                self.player_count, self.hand_size
            )));
        }
        if self.history_capacity < MIN_HISTORY_CAPACITY {
            return Err(GameError::InvalidConfig(format!(
                "history capacity {} below minimum {}",
                self.history_capacity, MIN_HISTORY_CAPACITY
            )));
        }
        if let Some(start) = self.starting_player {
            if start.index() >= self.player_count {
                return Err(GameError::InvalidConfig(format!("{} is not seated", start)));
            }
        }
        if let Some(teams) = &self.teams {
            if teams.len() != self.player_count {
                return Err(GameError::InvalidConfig(format!(
                    "{} team entries for {} players",
                    teams.len(),
                    self.player_count
                )));
            }
        }
        Ok(())
    }
}
