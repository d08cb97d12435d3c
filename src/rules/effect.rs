//! Card effects.
//!
//! [`apply_effect`] is pure: it reads the table and returns the
//! [`TableDelta`] a resolved play produces. [`commit_effect`] writes that
//! delta, and is only called from the engine's resolution path.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind, Color};
use crate::core::TableState;
use crate::zones::PlayRecord;

/// Cards a play of this kind adds to the pending draw count.
#[must_use]
pub const fn chain_contribution(kind: CardKind) -> u32 {
    match kind {
        CardKind::DrawTwo => 2,
        CardKind::WildDrawFour => 4,
        _ => 0,
    }
}

/// State change produced by one resolved play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDelta {
    pub active_color: Color,
    pub reverse: bool,
    pub skip: bool,
    /// Non-zero extends the draw chain; zero clears it.
    pub draw_added: u32,
}

impl TableDelta {
    #[must_use]
    pub fn extends_chain(&self) -> bool {
        self.draw_added > 0
    }
}

/// Compute what `effective` does to the table.
///
/// `chosen` is the color named for a wild card; it is ignored for colored
/// cards. A wild with no choosable color keeps the active color. The turn
/// engine never gets here that way, since it rejects a wild play without
/// a color, so the fallback only matters to direct callers. At a two-seat
/// table Reverse also skips, so the player who reversed goes again.
#[must_use]
pub fn apply_effect(effective: &Card, chosen: Option<Color>, table: &TableState) -> TableDelta {
    let active_color = if effective.is_wild() {
        chosen.filter(|c| c.is_choosable()).unwrap_or(table.active_color())
    } else {
        effective.color
    };

    let mut delta = TableDelta {
        active_color,
        reverse: false,
        skip: false,
        draw_added: chain_contribution(effective.kind),
    };

    match effective.kind {
        CardKind::Skip => delta.skip = true,
        CardKind::Reverse => {
            delta.reverse = true;
            delta.skip = table.player_count() == 2;
        }
        CardKind::Number | CardKind::DrawTwo | CardKind::Wild | CardKind::WildDrawFour => {}
    }

    delta
}

/// Write a delta to the table for the play described by `record`.
pub(crate) fn commit_effect(table: &mut TableState, delta: &TableDelta, record: &PlayRecord) {
    table.active_color = delta.active_color;
    table.last_effective = record.effective.clone();
    if delta.reverse {
        table.direction = table.direction.flipped();
    }
    if delta.skip {
        table.skip_pending = true;
    }
    if delta.extends_chain() {
        table.draw_chain.push_back(record.clone());
        table.pending_draw_count += delta.draw_added;
    } else {
        table.clear_chain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, PlayerId};

    fn table(players: usize) -> TableState {
        TableState::new(players, PlayerId::new(0), &Card::number(Color::Red, 1))
    }

    fn play(table: &mut TableState, card: Card, chosen: Option<Color>) -> TableDelta {
        let delta = apply_effect(&card, chosen, table);
        let record = PlayRecord::new(card.clone(), card, Some(PlayerId::new(0)));
        commit_effect(table, &delta, &record);
        delta
    }

    #[test]
    fn test_number_sets_color_only() {
        let mut t = table(3);
        let delta = play(&mut t, Card::number(Color::Blue, 1), None);
        assert_eq!(delta.active_color, Color::Blue);
        assert!(!delta.skip && !delta.reverse && !delta.extends_chain());
        assert_eq!(t.active_color(), Color::Blue);
    }

    #[test]
    fn test_skip_sets_flag() {
        let mut t = table(3);
        play(&mut t, Card::skip(Color::Red), None);
        assert!(t.skip_pending());
    }

    #[test]
    fn test_reverse_flips_direction() {
        let mut t = table(4);
        play(&mut t, Card::reverse(Color::Red), None);
        assert_eq!(t.direction(), Direction::CounterClockwise);
        assert!(!t.skip_pending());
    }

    #[test]
    fn test_two_player_reverse_skips() {
        let mut t = table(2);
        let delta = play(&mut t, Card::reverse(Color::Red), None);
        assert!(delta.reverse && delta.skip);
        assert!(t.skip_pending());
    }

    #[test]
    fn test_draw_chain_accumulates() {
        let mut t = table(3);
        play(&mut t, Card::draw_two(Color::Red), None);
        assert_eq!(t.pending_draw_count(), 2);
        play(&mut t, Card::wild_draw_four(), Some(Color::Blue));
        assert_eq!(t.pending_draw_count(), 6);
        assert_eq!(t.draw_chain().len(), 2);
        assert_eq!(t.chain_total(), t.pending_draw_count());
        assert_eq!(t.active_color(), Color::Blue);
    }

    #[test]
    fn test_non_draw_play_clears_chain() {
        let mut t = table(3);
        play(&mut t, Card::draw_two(Color::Red), None);
        play(&mut t, Card::wild(), Some(Color::Green));
        assert_eq!(t.pending_draw_count(), 0);
        assert!(t.draw_chain().is_empty());
        assert_eq!(t.active_color(), Color::Green);
    }

    #[test]
    fn test_wild_without_choice_keeps_color() {
        let t = table(3);
        let delta = apply_effect(&Card::wild(), None, &t);
        assert_eq!(delta.active_color, Color::Red);
        let delta = apply_effect(&Card::wild(), Some(Color::Wild), &t);
        assert_eq!(delta.active_color, Color::Red);
    }

    #[test]
    fn test_chain_contribution() {
        assert_eq!(chain_contribution(CardKind::DrawTwo), 2);
        assert_eq!(chain_contribution(CardKind::WildDrawFour), 4);
        assert_eq!(chain_contribution(CardKind::Skip), 0);
    }
}
