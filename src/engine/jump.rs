//! Jump-in scan.
//!
//! After every resolved play the other seats are checked in turn order,
//! starting after the seat that just played. The first seat holding an
//! exact match of the last effective card plays it at once; its play can
//! be matched again, and so on until a scan finds nobody.

use crate::cards::Card;
use crate::core::{GameError, PlayerId};
use crate::events::GameEvent;
use crate::rules::is_jump_match;
use crate::skills::HookPoint;

use super::turn::Resolver;

impl Resolver<'_> {
    /// Run one scan after `last` played. Returns the seat that jumped.
    ///
    /// The post-forced-draw guard is consumed here whether or not anyone
    /// jumps.
    pub(super) fn jump_scan(&mut self, last: PlayerId) -> Result<Option<PlayerId>, GameError> {
        let guard = self.state.table.post_forced_draw_guard.take();
        let target = self.state.table.last_effective.clone();
        if target.is_wild() {
            return Ok(None);
        }

        let mut seat = self.state.table.next_seat(last);
        for _ in 1..self.state.player_count() {
            if guard != Some(seat) {
                if let Some((index, effective)) = self.jump_candidate(seat, &target) {
                    self.jump_in(seat, index, effective)?;
                    return Ok(Some(seat));
                }
            }
            seat = self.state.table.next_seat(seat);
        }
        Ok(None)
    }

    /// A card in `seat`'s hand that matches `target` exactly, as itself or
    /// through the seat's skill. Plain matches come first.
    fn jump_candidate(&self, seat: PlayerId, target: &Card) -> Option<(usize, Card)> {
        let hand = self.state.hand(seat);
        if let Some(index) = hand.iter().position(|card| is_jump_match(card, target)) {
            return Some((index, hand[index].clone()));
        }
        hand.iter().enumerate().find_map(|(index, card)| {
            let effective = self.effective_card(seat, card);
            (effective != *card && is_jump_match(&effective, target)).then_some((index, effective))
        })
    }

    fn jump_in(&mut self, seat: PlayerId, index: usize, effective: Card) -> Result<(), GameError> {
        let card = self.state.players[seat].hand.remove(index);
        log::debug!("{} jumps in with {}", seat, card);
        self.events.push(GameEvent::JumpedIn { player: seat, card: card.clone() });

        self.ledger.reset();
        self.ledger.fire(seat, HookPoint::LegalityCheck);
        self.resolve_play(seat, card.clone(), effective, None, None, true)?;
        self.state.table.current = seat;

        self.run_hook(seat, None, HookPoint::Jump, |hero, ctx| hero.on_jump(ctx, &card))
    }
}
