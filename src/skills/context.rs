//! Engine-mediated primitives available to skill hooks.
//!
//! A hook never holds the table directly. It gets a `HookContext` scoped to
//! one extension point, reads through it, and changes hands only through
//! its primitives, which keep the card count and the event stream intact.

use crate::cards::Card;
use crate::core::{DiscardRequest, GameError, GameState, PlayerId, TableState};
use crate::events::GameEvent;
use crate::zones::DiscardHistory;

pub struct HookContext<'a> {
    owner: PlayerId,
    target: Option<PlayerId>,
    state: &'a mut GameState,
    events: &'a mut Vec<GameEvent>,
}

impl<'a> HookContext<'a> {
    pub(crate) fn new(
        owner: PlayerId,
        target: Option<PlayerId>,
        state: &'a mut GameState,
        events: &'a mut Vec<GameEvent>,
    ) -> Self {
        Self { owner, target, state, events }
    }

    /// Seat whose hero skill is running.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Target seat named in the submitted play, if any.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        self.target
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        self.state.table()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Check if `player` sits at this table.
    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.state.players().contains(player)
    }

    /// Cards held by `player`; empty for a seat that does not exist.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        if self.is_seated(player) {
            self.state.hand(player)
        } else {
            &[]
        }
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.hand(player).len()
    }

    #[must_use]
    pub fn history(&self) -> &DiscardHistory {
        self.state.history()
    }

    #[must_use]
    pub fn pile_size(&self) -> usize {
        self.state.pile_size()
    }

    /// Draw up to `n` bonus cards into a hand, capped by its hand limit.
    ///
    /// Returns how many were drawn. If the pile cannot cover the draw,
    /// nothing is drawn and the game ends by exhaustion once the current
    /// play finishes resolving. An unseated player is rejected with
    /// `InvalidTargetSelection`.
    pub fn draw(&mut self, player: PlayerId, n: usize) -> Result<usize, GameError> {
        if !self.is_seated(player) {
            return Err(GameError::InvalidTargetSelection(format!("{} is not seated", player)));
        }
        match self.state.draw_capped(player, n) {
            Ok(count) => {
                self.events.push(GameEvent::CardsDrawn { player, count, requested: n, forced: false });
                Ok(count)
            }
            Err(err) => {
                log::debug!("skill draw for {} failed: {}", player, err);
                self.state.exhausted = true;
                Ok(0)
            }
        }
    }

    /// Move the card at `index` in `from`'s hand to `to`'s hand.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, index: usize) -> Result<Card, GameError> {
        let card = self.state.transfer(from, to, index)?;
        self.events.push(GameEvent::CardTransferred { from, to });
        Ok(card)
    }

    /// Make `player` discard `count` cards of their choice before play
    /// resumes. Clamped to the hand size when the selection opens.
    pub fn request_discard(&mut self, player: PlayerId, count: usize) -> Result<(), GameError> {
        if !self.is_seated(player) {
            return Err(GameError::InvalidTargetSelection(format!("{} is not seated", player)));
        }
        if count > 0 {
            self.state.discard_queue.push_back(DiscardRequest { player, count });
        }
        Ok(())
    }

    /// Skip the seat that would take the next turn.
    pub fn skip_next(&mut self) {
        self.state.table.skip_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::engine::GameBuilder;

    #[test]
    fn test_context_primitives_keep_card_count() {
        let mut game = GameBuilder::new(3)
            .arranged(
                vec![
                    vec![Card::number(Color::Red, 1), Card::number(Color::Red, 2)],
                    vec![Card::number(Color::Blue, 1)],
                    vec![Card::number(Color::Green, 1)],
                ],
                Card::number(Color::Red, 9),
                vec![Card::number(Color::Yellow, 1), Card::number(Color::Yellow, 2)],
            )
            .build()
            .unwrap();

        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);
        let mut events = Vec::new();
        let state = game.state_mut_for_tests();
        let mut ctx = HookContext::new(p0, Some(p1), state, &mut events);

        assert_eq!(ctx.owner(), p0);
        assert_eq!(ctx.target(), Some(p1));
        assert_eq!(ctx.draw(p0, 1), Ok(1));
        assert!(ctx.draw(PlayerId::new(5), 1).is_err());
        assert!(ctx.hand(PlayerId::new(5)).is_empty());
        assert!(ctx.transfer(p1, p0, 0).is_ok());
        assert!(ctx.transfer(p1, p0, 0).is_err());
        assert!(ctx.request_discard(PlayerId::new(7), 1).is_err());
        ctx.request_discard(p0, 2).unwrap();
        ctx.skip_next();

        assert_eq!(ctx.hand_size(p0), 4);
        assert!(ctx.table().skip_pending());
        assert_eq!(events.len(), 2);

        let state = game.state();
        assert_eq!(state.card_count(), state.total_cards());
        assert_eq!(state.discard_queue.len(), 1);
    }

    #[test]
    fn test_context_draw_on_empty_pile_flags_exhaustion() {
        let mut game = GameBuilder::new(2)
            .arranged(
                vec![vec![Card::number(Color::Red, 1)], vec![Card::number(Color::Blue, 1)]],
                Card::number(Color::Red, 9),
                vec![],
            )
            .build()
            .unwrap();

        let mut events = Vec::new();
        let mut ctx = HookContext::new(PlayerId::new(0), None, game.state_mut_for_tests(), &mut events);
        assert_eq!(ctx.draw(PlayerId::new(0), 2), Ok(0));
        assert!(events.is_empty());
        assert!(game.state().exhausted);
    }
}
