//! Card legality.
//!
//! Pure functions over `TableState`. Skills never appear here: the engine
//! asks the seat's skill for an effective card first and checks that.
//!
//! With nothing pending, a card is legal if it is wild, matches the active
//! color, or matches the last effective card (by value for numbers, by
//! kind for actions). With a draw chain pending, only a stacking card is
//! legal, and stacking is asymmetric:
//!
//! | on top of      | DrawTwo | WildDrawFour |
//! |----------------|---------|--------------|
//! | DrawTwo        | yes     | yes          |
//! | WildDrawFour   | no      | yes          |

use crate::cards::{Card, CardKind, Color};
use crate::core::TableState;

/// Check if `card` may be played on the table as it stands.
///
/// ```
/// use rust_uno::cards::{Card, Color};
/// use rust_uno::core::{PlayerId, TableState};
/// use rust_uno::rules::is_legal;
///
/// let table = TableState::new(3, PlayerId::new(0), &Card::number(Color::Red, 5));
/// assert!(is_legal(&Card::number(Color::Red, 9), &table));
/// assert!(is_legal(&Card::number(Color::Blue, 5), &table));
/// assert!(is_legal(&Card::wild(), &table));
/// assert!(!is_legal(&Card::number(Color::Blue, 6), &table));
/// ```
#[must_use]
pub fn is_legal(card: &Card, table: &TableState) -> bool {
    if table.pending_draw_count() > 0 {
        return can_stack(card.kind, table.last_effective().kind);
    }
    card.color == Color::Wild
        || card.color == table.active_color()
        || matches_last(card, table.last_effective())
}

/// Check if a card of kind `card` continues a chain topped by `top`.
#[must_use]
pub fn can_stack(card: CardKind, top: CardKind) -> bool {
    matches!(
        (top, card),
        (CardKind::DrawTwo, CardKind::DrawTwo | CardKind::WildDrawFour)
            | (CardKind::WildDrawFour, CardKind::WildDrawFour)
    )
}

fn matches_last(card: &Card, last: &Card) -> bool {
    match card.kind {
        CardKind::Number => last.kind == CardKind::Number && last.value == card.value,
        kind => kind == last.kind,
    }
}

/// Check if `card` exactly matches the last effective card for a jump-in.
///
/// Wild cards never jump in.
#[must_use]
pub fn is_jump_match(card: &Card, last: &Card) -> bool {
    !card.is_wild() && card == last
}
