//! # rust-uno
//!
//! A rule engine for a UNO variant with hero skills and jump-ins.
//!
//! ## Design Principles
//!
//! 1. **One Mutation Path**: Turn order, direction, active color and the
//!    draw chain change only inside `Game::submit_action`.
//!
//! 2. **Atomic Actions**: An action resolves completely, cascade and all,
//!    or is rejected and leaves no trace.
//!
//! 3. **Skills Are Opaque**: Heroes are `SkillHook` trait objects called
//!    at fixed extension points. The engine never asks which hero it holds.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: History and draw chain use `im-rs`,
//!   so the checkpoint taken before each action is cheap.
//!
//! - **Deterministic**: All randomness comes from a seeded ChaCha8 stream.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, actions, state, errors
//! - `cards`: card values and deck construction
//! - `zones`: draw pile and discard history
//! - `rules`: legality, effects, outcomes
//! - `skills`: skill hook trait and reference hooks
//! - `events`: event stream and observers
//! - `engine`: the turn state machine and its builder
//! - `decision`: action choosers and the play-out driver

pub mod cards;
pub mod core;
pub mod decision;
pub mod engine;
pub mod events;
pub mod rules;
pub mod skills;
pub mod zones;

pub use crate::core::{
    Action, ActionRecord, Direction, GameError, GameRng, GameRngState, GameState, IllegalReason, Phase, Player,
    PlayerId, PlayerMap, PublicState, TableConfig, TableState,
};

pub use crate::cards::{Card, CardKind, Color, DeckKind};

pub use crate::zones::{DiscardHistory, DrawPile, PlayRecord};

pub use crate::rules::{apply_effect, is_legal, EndReason, GameOutcome, GameResult, TableDelta};

pub use crate::skills::{HookContext, HookPoint, NoSkill, SkillHook};

pub use crate::events::{EventLog, GameEvent, Observer};

pub use crate::engine::{Game, GameBuilder, Observation};

pub use crate::decision::{play_out, ActionChooser, GreedyChooser, Playout, RandomChooser};
