//! Cards and deck construction.
//!
//! ## Key Types
//!
//! - `Color`, `CardKind`: what a card is
//! - `Card`: immutable value type, moved between zones
//! - `DeckKind`: standard (shuffled) or fixture (reproducible) build

pub mod card;
pub mod deck;

pub use card::{Card, CardKind, Color};
pub use deck::{
    build_deck, build_fixture_deck, build_standard_deck, shuffle, DeckKind, DECK_SIZE,
    FIXTURE_PATTERN,
};
