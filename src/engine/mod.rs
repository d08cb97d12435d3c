//! The turn and resolution state machine.
//!
//! ## Protocol
//!
//! 1. `Game::current_legal_actions(player)` lists what the seat may do.
//! 2. `Game::submit_action(player, action)` validates and resolves it:
//!    play, effect hooks, win check, forced discards, jump-in cascade,
//!    advance. Everything happens inside one call.
//! 3. The returned `Observation` carries the events; registered observers
//!    receive the same events.
//!
//! A rejected action restores the checkpoint taken before resolution.

pub mod builder;
pub mod game;
mod jump;
mod turn;

pub use builder::GameBuilder;
pub use game::{Game, Observation};
