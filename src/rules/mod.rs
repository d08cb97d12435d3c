//! Rules: legality, effects, and outcomes.
//!
//! Everything here is a pure function of table state. The engine decides
//! when to call them; nothing here decides whose turn it is.

pub mod effect;
pub mod legality;
pub mod outcome;

pub use effect::{apply_effect, chain_contribution, TableDelta};
pub use legality::{can_stack, is_jump_match, is_legal};
pub use outcome::{resolve_exhaustion, EndReason, GameOutcome, GameResult};
