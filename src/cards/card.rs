//! Card value type.
//!
//! A `Card` is nothing more than its fields: two Red 5s are interchangeable.
//! Cards are created once when the deck is built and then move between the
//! draw pile, hands, and the discard history by value.
//!
//! `Card` is `Clone` but not `Copy`.

use serde::{Deserialize, Serialize};

/// Card color. `Wild` is the color of both wild kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl Color {
    /// The four colors a player may name for a wild card.
    pub const CHOOSABLE: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Check if this is one of the four playable colors.
    #[must_use]
    pub const fn is_choosable(self) -> bool {
        !matches!(self, Color::Wild)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        };
        f.write_str(name)
    }
}

/// What a card does when it resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Number,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardKind {
    /// Check if this kind needs a color choice when played.
    #[must_use]
    pub const fn is_wild(self) -> bool {
        matches!(self, CardKind::Wild | CardKind::WildDrawFour)
    }

    /// Check if this kind adds to a draw chain.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, CardKind::DrawTwo | CardKind::WildDrawFour)
    }
}

/// An immutable card.
///
/// `value` is 0-9 for `Number` cards and [`Card::NO_VALUE`] otherwise.
///
/// ```
/// use rust_uno::cards::{Card, CardKind, Color};
///
/// let five = Card::number(Color::Red, 5);
/// assert_eq!(five.kind, CardKind::Number);
/// assert_eq!(five.face_value(), 5);
///
/// let wild = Card::wild_draw_four();
/// assert!(wild.is_wild());
/// assert_eq!(wild.face_value(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub color: Color,
    pub kind: CardKind,
    pub value: u8,
}

impl Card {
    /// Sentinel `value` for every non-number card.
    pub const NO_VALUE: u8 = u8::MAX;

    /// Nominal face value of Skip, Reverse and DrawTwo for tie-breaks.
    pub const ACTION_FACE_VALUE: u32 = 20;

    /// Nominal face value of both wild kinds for tie-breaks.
    pub const WILD_FACE_VALUE: u32 = 50;

    /// Create a numbered card.
    ///
    /// Panics if `value` is above 9 or `color` is `Wild`.
    #[must_use]
    pub fn number(color: Color, value: u8) -> Self {
        assert!(value <= 9, "Number cards run from 0 to 9");
        assert!(color.is_choosable(), "Number cards must have a playable color");
        Self { color, kind: CardKind::Number, value }
    }

    /// Create a colored action card (Skip, Reverse, or DrawTwo).
    ///
    /// Panics on a wild or number kind, or a `Wild` color.
    #[must_use]
    pub fn action(color: Color, kind: CardKind) -> Self {
        assert!(
            matches!(kind, CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo),
            "Action cards are Skip, Reverse or DrawTwo"
        );
        assert!(color.is_choosable(), "Action cards must have a playable color");
        Self { color, kind, value: Self::NO_VALUE }
    }

    #[must_use]
    pub fn skip(color: Color) -> Self {
        Self::action(color, CardKind::Skip)
    }

    #[must_use]
    pub fn reverse(color: Color) -> Self {
        Self::action(color, CardKind::Reverse)
    }

    #[must_use]
    pub fn draw_two(color: Color) -> Self {
        Self::action(color, CardKind::DrawTwo)
    }

    #[must_use]
    pub fn wild() -> Self {
        Self { color: Color::Wild, kind: CardKind::Wild, value: Self::NO_VALUE }
    }

    #[must_use]
    pub fn wild_draw_four() -> Self {
        Self { color: Color::Wild, kind: CardKind::WildDrawFour, value: Self::NO_VALUE }
    }

    /// The same card treated as another kind, keeping its color.
    ///
    /// Used by skills that substitute an effective card: a red card played
    /// "as" a red DrawTwo. Substituting to a wild kind yields a wild card.
    #[must_use]
    pub fn treated_as(&self, kind: CardKind) -> Self {
        match kind {
            CardKind::Number => Self { color: self.color, kind, value: self.value.min(9) },
            CardKind::Wild => Self::wild(),
            CardKind::WildDrawFour => Self::wild_draw_four(),
            _ => Self { color: self.color, kind, value: Self::NO_VALUE },
        }
    }

    /// Check if this card needs a color choice when played.
    #[must_use]
    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    /// Face value used by the pile-exhaustion tie-break.
    #[must_use]
    pub fn face_value(&self) -> u32 {
        match self.kind {
            CardKind::Number => u32::from(self.value),
            CardKind::Skip | CardKind::Reverse | CardKind::DrawTwo => Self::ACTION_FACE_VALUE,
            CardKind::Wild | CardKind::WildDrawFour => Self::WILD_FACE_VALUE,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            CardKind::Number => write!(f, "{} {}", self.color, self.value),
            CardKind::Skip => write!(f, "{} Skip", self.color),
            CardKind::Reverse => write!(f, "{} Reverse", self.color),
            CardKind::DrawTwo => write!(f, "{} +2", self.color),
            CardKind::Wild => f.write_str("Wild"),
            CardKind::WildDrawFour => f.write_str("Wild +4"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_card() {
        let card = Card::number(Color::Blue, 7);
        assert_eq!(card.color, Color::Blue);
        assert_eq!(card.kind, CardKind::Number);
        assert_eq!(card.value, 7);
        assert!(!card.is_wild());
        assert_eq!(format!("{}", card), "Blue 7");
    }

    #[test]
    fn test_action_cards_have_sentinel_value() {
        for card in [Card::skip(Color::Red), Card::reverse(Color::Green), Card::draw_two(Color::Yellow)] {
            assert_eq!(card.value, Card::NO_VALUE);
            assert_eq!(card.face_value(), Card::ACTION_FACE_VALUE);
        }
    }

    #[test]
    fn test_wild_cards() {
        assert!(Card::wild().is_wild());
        assert!(Card::wild_draw_four().is_wild());
        assert_eq!(Card::wild_draw_four().color, Color::Wild);
        assert_eq!(Card::wild().face_value(), 50);
    }

    #[test]
    fn test_treated_as_keeps_color() {
        let red_five = Card::number(Color::Red, 5);
        let as_draw = red_five.treated_as(CardKind::DrawTwo);
        assert_eq!(as_draw, Card::draw_two(Color::Red));

        let as_wild = red_five.treated_as(CardKind::WildDrawFour);
        assert_eq!(as_wild, Card::wild_draw_four());
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CardKind::DrawTwo.is_draw());
        assert!(CardKind::WildDrawFour.is_draw());
        assert!(!CardKind::Skip.is_draw());
        assert!(CardKind::Wild.is_wild());
        assert!(!CardKind::DrawTwo.is_wild());
    }

    #[test]
    #[should_panic(expected = "Number cards run from 0 to 9")]
    fn test_number_out_of_range() {
        let _ = Card::number(Color::Red, 10);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::draw_two(Color::Green);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
