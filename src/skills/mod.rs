//! Hero skills.
//!
//! A hero is a `SkillHook` trait object attached to a seat. The engine
//! calls it at five extension points and never matches on its identity.
//!
//! ## Key Types
//!
//! - `SkillHook`: the extension points, all defaulting to no-ops
//! - `HookContext`: engine-mediated primitives (draw, transfer, discard
//!   request, skip) handed to mutating hooks
//! - `HookPoint`: names of the extension points
//! - `builtin`: reference hooks

pub mod builtin;
pub mod context;
pub mod hook;

pub use builtin::{ChainAbsorber, ChainExtender, HandLimit, Opportunist, Pickpocket, Purge, Scavenger};
pub use context::HookContext;
pub use hook::{HookPoint, NoSkill, SkillHook};

pub(crate) use hook::HookLedger;
