//! Card zones owned by the table.
//!
//! ## Key Types
//!
//! - `DrawPile`: ordered pile, drawn from one end
//! - `DiscardHistory`: bounded window of `PlayRecord`s over the full discard pile
//!
//! Hands live on `Player`. A card is always in exactly one of the three.

pub mod discard;
pub mod pile;

pub use discard::{DiscardHistory, PlayRecord};
pub use pile::DrawPile;
