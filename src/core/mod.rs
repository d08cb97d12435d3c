//! Core engine types: players, RNG, configuration, actions, state, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{TableConfig, DEFAULT_HAND_LIMIT, DEFAULT_HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, IllegalReason};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{
    DiscardRequest, Direction, DrawTaken, GameState, Phase, PublicState, TableState, TurnProgress,
};
