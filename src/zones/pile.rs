//! The draw pile.
//!
//! Owned by the table. The draw end is the end of the backing `Vec`, so
//! drawing is a `pop`. Cards returned to the pile go underneath.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, GameRng};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    /// Create a pile whose last card is drawn first.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Create a pile from cards listed in the order they will be drawn.
    #[must_use]
    pub fn from_draw_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The next card to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Draw a single card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return `n` cards from the draw end, in draw order.
    ///
    /// All or nothing: if fewer than `n` remain the pile is untouched.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::EmptyDrawPile {
                needed: n,
                remaining: self.cards.len(),
            });
        }
        let split = self.cards.len() - n;
        let mut dealt = self.cards.split_off(split);
        dealt.reverse();
        Ok(dealt)
    }

    /// Return cards underneath the pile.
    pub fn put_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        let returned: Vec<Card> = cards.into_iter().collect();
        if !returned.is_empty() {
            self.cards.splice(0..0, returned);
        }
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Cards from the draw end down.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn numbers(values: &[u8]) -> Vec<Card> {
        values.iter().map(|&v| Card::number(Color::Red, v)).collect()
    }

    #[test]
    fn test_deal_from_draw_end() {
        let mut pile = DrawPile::from_draw_order(numbers(&[1, 2, 3, 4]));
        let dealt = pile.deal(3).unwrap();
        assert_eq!(dealt, numbers(&[1, 2, 3]));
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.peek(), Some(&Card::number(Color::Red, 4)));
    }

    #[test]
    fn test_deal_too_many_leaves_pile_intact() {
        let mut pile = DrawPile::from_draw_order(numbers(&[1, 2]));
        let err = pile.deal(3).unwrap_err();
        assert_eq!(err, GameError::EmptyDrawPile { needed: 3, remaining: 2 });
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_deal_zero() {
        let mut pile = DrawPile::default();
        assert_eq!(pile.deal(0).unwrap(), Vec::new());
    }

    #[test]
    fn test_put_bottom() {
        let mut pile = DrawPile::from_draw_order(numbers(&[1]));
        pile.put_bottom(numbers(&[8, 9]));
        let order: Vec<_> = pile.iter().cloned().collect();
        assert_eq!(order, numbers(&[1, 9, 8]));
        assert_eq!(pile.draw(), Some(Card::number(Color::Red, 1)));
    }
}
