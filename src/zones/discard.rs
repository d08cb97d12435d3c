//! Discard history.
//!
//! Every played card lands here as a [`PlayRecord`]. The most recent
//! `capacity` records form the visible window that legality checks,
//! jump-in matching, skills, and presentation read. Older records are
//! buried but still counted, as are cards that left a hand without being
//! played (forced discards, wild opening reveals).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;

/// One play: the card removed from a hand, what it resolved as, and who
/// played it. `source` is `None` only for the opening card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub effective: Card,
    pub original: Card,
    pub source: Option<PlayerId>,
}

impl PlayRecord {
    #[must_use]
    pub fn new(effective: Card, original: Card, source: Option<PlayerId>) -> Self {
        Self { effective, original, source }
    }

    /// Record for the face-up opening card.
    #[must_use]
    pub fn opening(card: Card) -> Self {
        Self { effective: card.clone(), original: card, source: None }
    }

    /// Check if a skill changed what this card resolved as.
    #[must_use]
    pub fn is_substituted(&self) -> bool {
        self.effective != self.original
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardHistory {
    window: Vector<PlayRecord>,
    buried: Vector<PlayRecord>,
    set_aside: Vector<Card>,
    capacity: usize,
}

impl DiscardHistory {
    /// Create an empty history keeping `capacity` visible records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity >= 2, "History must retain at least 2 records");
        Self {
            window: Vector::new(),
            buried: Vector::new(),
            set_aside: Vector::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a play, burying the oldest visible record when full.
    pub fn push(&mut self, record: PlayRecord) {
        self.window.push_back(record);
        while self.window.len() > self.capacity {
            if let Some(oldest) = self.window.pop_front() {
                self.buried.push_back(oldest);
            }
        }
    }

    /// Put a card on the discard pile without it becoming a play.
    pub fn set_aside(&mut self, card: Card) {
        self.set_aside.push_back(card);
    }

    /// The most recent play.
    #[must_use]
    pub fn top(&self) -> Option<&PlayRecord> {
        self.window.back()
    }

    /// The play before the most recent one.
    #[must_use]
    pub fn previous(&self) -> Option<&PlayRecord> {
        let len = self.window.len();
        if len >= 2 {
            self.window.get(len - 2)
        } else {
            None
        }
    }

    /// Up to `n` most recent plays, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &PlayRecord> {
        let skip = self.window.len().saturating_sub(n);
        self.window.iter().skip(skip)
    }

    /// Visible plays, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PlayRecord> {
        self.window.iter()
    }

    /// Number of visible records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Every card on the discard pile, visible or not.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.window.len() + self.buried.len() + self.set_aside.len()
    }

    /// Take back the `n` most recent plays, most recent first.
    ///
    /// Buried records are promoted so the window stays as full as the
    /// remaining history allows.
    pub fn retract(&mut self, n: usize) -> Vec<PlayRecord> {
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            match self.window.pop_back().or_else(|| self.buried.pop_back()) {
                Some(record) => taken.push(record),
                None => break,
            }
        }
        while self.window.len() < self.capacity {
            match self.buried.pop_back() {
                Some(record) => self.window.push_front(record),
                None => break,
            }
        }
        taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;

    fn play(value: u8, seat: u8) -> PlayRecord {
        let card = Card::number(Color::Green, value);
        PlayRecord::new(card.clone(), card, Some(PlayerId::new(seat)))
    }

    #[test]
    fn test_top_and_previous() {
        let mut history = DiscardHistory::new(5);
        assert!(history.top().is_none());

        history.push(PlayRecord::opening(Card::number(Color::Red, 4)));
        assert!(history.previous().is_none());
        assert_eq!(history.top().unwrap().source, None);

        history.push(play(6, 1));
        assert_eq!(history.top().unwrap().original.value, 6);
        assert_eq!(history.previous().unwrap().original.value, 4);
    }

    #[test]
    fn test_window_is_bounded_but_cards_are_kept() {
        let mut history = DiscardHistory::new(5);
        for v in 0..8 {
            history.push(play(v, 0));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(history.card_count(), 8);

        let visible: Vec<u8> = history.iter().map(|r| r.original.value).collect();
        assert_eq!(visible, vec![3, 4, 5, 6, 7]);

        let last_two: Vec<u8> = history.recent(2).map(|r| r.original.value).collect();
        assert_eq!(last_two, vec![6, 7]);
    }

    #[test]
    fn test_set_aside_counts_without_becoming_top() {
        let mut history = DiscardHistory::new(5);
        history.push(play(1, 0));
        history.set_aside(Card::wild());
        assert_eq!(history.top().unwrap().original.value, 1);
        assert_eq!(history.card_count(), 2);
    }

    #[test]
    fn test_retract_promotes_buried_records() {
        let mut history = DiscardHistory::new(5);
        for v in 0..8 {
            history.push(play(v, 0));
        }
        let taken = history.retract(2);
        let values: Vec<u8> = taken.iter().map(|r| r.original.value).collect();
        assert_eq!(values, vec![7, 6]);

        let visible: Vec<u8> = history.iter().map(|r| r.original.value).collect();
        assert_eq!(visible, vec![1, 2, 3, 4, 5]);
        assert_eq!(history.card_count(), 6);
    }

    #[test]
    fn test_substitution_flag() {
        let red_five = Card::number(Color::Red, 5);
        let record = PlayRecord::new(Card::draw_two(Color::Red), red_five.clone(), Some(PlayerId::new(0)));
        assert!(record.is_substituted());
        assert!(!PlayRecord::opening(red_five).is_substituted());
    }
}
