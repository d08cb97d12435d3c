//! Deck construction.
//!
//! Two construction paths produce the 108 cards a table starts with:
//!
//! - [`build_standard_deck`]: the regular UNO composition, meant to be
//!   shuffled before play.
//! - [`build_fixture_deck`]: a fixed, unshuffled sequence for reproducible
//!   tests. It repeats [`FIXTURE_PATTERN`] so that dealing hands of 8 (or any
//!   multiple of 8) in blocks gives every player the same hand, and the
//!   card revealed after dealing is always `FIXTURE_PATTERN[0]`.
//!
//! Decks are returned with the draw end last: `pop()` yields the next card.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardKind, Color};
use crate::core::GameRng;

/// Cards in a full deck of either kind.
pub const DECK_SIZE: usize = 108;

/// Which deck a table is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    /// Standard composition, shuffled with the table seed.
    #[default]
    Standard,
    /// Fixed unshuffled composition for reproducible tests.
    Fixture,
}

/// Repeating unit of the fixture deck, in draw order.
pub const FIXTURE_PATTERN: [(Color, CardKind, u8); 8] = [
    (Color::Red, CardKind::Number, 5),
    (Color::Blue, CardKind::Number, 7),
    (Color::Green, CardKind::DrawTwo, Card::NO_VALUE),
    (Color::Yellow, CardKind::Skip, Card::NO_VALUE),
    (Color::Red, CardKind::Reverse, Card::NO_VALUE),
    (Color::Blue, CardKind::Number, 3),
    (Color::Wild, CardKind::Wild, Card::NO_VALUE),
    (Color::Wild, CardKind::WildDrawFour, Card::NO_VALUE),
];

/// Build the 108-card standard deck, unshuffled.
///
/// Per color: one 0, two each of 1-9, two each of Skip, Reverse and
/// DrawTwo (25 cards, 100 total). Plus four Wild and four WildDrawFour.
#[must_use]
pub fn build_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for color in Color::CHOOSABLE {
        deck.push(Card::number(color, 0));
        for value in 1..=9 {
            deck.push(Card::number(color, value));
            deck.push(Card::number(color, value));
        }
        for kind in [CardKind::Skip, CardKind::Reverse, CardKind::DrawTwo] {
            deck.push(Card::action(color, kind));
            deck.push(Card::action(color, kind));
        }
    }

    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }

    deck
}

/// Build the 108-card fixture deck.
///
/// [`FIXTURE_PATTERN`] repeated 13 times on top of one 0 of each color.
#[must_use]
pub fn build_fixture_deck() -> Vec<Card> {
    let mut deck: Vec<Card> = Color::CHOOSABLE
        .iter()
        .map(|&color| Card::number(color, 0))
        .collect();

    let repeats = (DECK_SIZE - deck.len()) / FIXTURE_PATTERN.len();
    for _ in 0..repeats {
        // Reversed so the first pattern entry sits on the draw end.
        for &(color, kind, value) in FIXTURE_PATTERN.iter().rev() {
            deck.push(Card { color, kind, value });
        }
    }

    deck
}

/// Build a deck of the requested kind. Standard decks are shuffled.
#[must_use]
pub fn build_deck(kind: DeckKind, rng: &mut GameRng) -> Vec<Card> {
    match kind {
        DeckKind::Standard => {
            let mut deck = build_standard_deck();
            shuffle(&mut deck, rng);
            deck
        }
        DeckKind::Fixture => build_fixture_deck(),
    }
}

/// Shuffle a deck in place.
pub fn shuffle(deck: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(deck);
}
