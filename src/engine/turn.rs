//! Action resolution.
//!
//! A `Resolver` borrows the state and the heroes for one submitted action.
//! It is the only code that writes turn order, direction, active color and
//! the draw chain. Events are buffered and handed back to `Game`, which
//! delivers them only if the whole action succeeds.

use crate::cards::{Card, Color};
use crate::core::{
    Action, DrawTaken, GameError, GameState, IllegalReason, Phase, PlayerId, PlayerMap, TurnProgress,
};
use crate::events::GameEvent;
use crate::rules::effect::commit_effect;
use crate::rules::{apply_effect, is_legal, resolve_exhaustion, GameOutcome};
use crate::skills::{HookContext, HookLedger, HookPoint, SkillHook};
use crate::zones::PlayRecord;

pub(crate) struct Resolver<'a> {
    pub(super) state: &'a mut GameState,
    pub(super) heroes: &'a mut PlayerMap<Box<dyn SkillHook>>,
    pub(super) events: Vec<GameEvent>,
    pub(super) ledger: HookLedger,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(state: &'a mut GameState, heroes: &'a mut PlayerMap<Box<dyn SkillHook>>) -> Self {
        Self {
            state,
            heroes,
            events: Vec::new(),
            ledger: HookLedger::default(),
        }
    }

    pub(crate) fn into_events(self) -> Vec<GameEvent> {
        self.events
    }

    /// Resolve one action from `player` to completion.
    pub(crate) fn resolve(&mut self, player: PlayerId, action: &Action) -> Result<(), GameError> {
        match self.state.phase.clone() {
            Phase::GameOver(_) => Err(IllegalReason::GameOver.into()),
            Phase::DiscardSelection { player: chooser, count } => {
                if player != chooser {
                    return Err(IllegalReason::NotYourTurn.into());
                }
                match action {
                    Action::Discard { indices } => self.discard(chooser, count, indices),
                    _ => Err(IllegalReason::DiscardRequired.into()),
                }
            }
            Phase::AwaitingAction(current) => {
                if player != current {
                    return Err(IllegalReason::NotYourTurn.into());
                }
                match action {
                    Action::Play { index, color, target } => self.play(player, *index, *color, *target),
                    Action::Draw => self.draw(player),
                    Action::EndTurn => self.end_turn(player),
                    Action::Discard { .. } => Err(IllegalReason::NoDiscardPending.into()),
                }
            }
            Phase::JumpWindowOpen => Err(IllegalReason::NotYourTurn.into()),
        }
    }

    /// What `card` in `player`'s hand resolves as.
    pub(super) fn effective_card(&self, player: PlayerId, card: &Card) -> Card {
        match self.heroes[player].on_legality_check(card, &self.state.table) {
            Some(effective) if effective != *card => effective,
            _ => card.clone(),
        }
    }

    fn play(
        &mut self,
        player: PlayerId,
        index: usize,
        color: Option<Color>,
        target: Option<PlayerId>,
    ) -> Result<(), GameError> {
        if let Some(DrawTaken::Voluntary { index: drawn }) = self.state.turn.drew {
            if drawn != Some(index) {
                return Err(IllegalReason::MustPlayDrawnCard.into());
            }
        }
        let card = self
            .state
            .hand(player)
            .get(index)
            .cloned()
            .ok_or(IllegalReason::NoSuchCard)?;
        if let Some(t) = target.filter(|&t| !self.state.players.contains(t)) {
            return Err(GameError::InvalidTargetSelection(format!("{} is not seated", t)));
        }

        self.ledger.reset();
        self.ledger.fire(player, HookPoint::LegalityCheck);
        let effective = self.effective_card(player, &card);
        if effective != card {
            log::debug!("{} plays {} as {} ({})", player, card, effective, self.heroes[player].name());
        }
        if !is_legal(&effective, &self.state.table) {
            return Err(IllegalReason::NotPlayable.into());
        }
        if effective.is_wild() {
            match color {
                None => return Err(IllegalReason::ColorRequired.into()),
                Some(c) if !c.is_choosable() => return Err(IllegalReason::InvalidColor.into()),
                Some(_) => {}
            }
        }

        self.state.players[player].hand.remove(index);
        self.resolve_play(player, card, effective, color, target, false)?;
        self.finish_play(player)
    }

    /// Put a card on the history, apply its effect, and run the effect
    /// hooks. The card has already left the hand.
    pub(super) fn resolve_play(
        &mut self,
        player: PlayerId,
        card: Card,
        effective: Card,
        color: Option<Color>,
        target: Option<PlayerId>,
        jump_in: bool,
    ) -> Result<(), GameError> {
        let record = PlayRecord::new(effective.clone(), card.clone(), Some(player));
        self.state.history.push(record.clone());

        self.run_hook(player, target, HookPoint::BeforeEffect, |hero, ctx| {
            hero.before_effect(ctx, &effective)
        })?;

        let delta = apply_effect(&effective, color, &self.state.table);
        commit_effect(&mut self.state.table, &delta, &record);
        log::debug!(
            "{} played {} (color {:?}, pending {})",
            player,
            effective,
            delta.active_color,
            self.state.table.pending_draw_count
        );
        self.events.push(GameEvent::CardPlayed {
            player,
            card,
            effective: effective.clone(),
            active_color: delta.active_color,
            jump_in,
        });
        if delta.reverse {
            self.events.push(GameEvent::DirectionChanged { direction: self.state.table.direction });
        }

        self.run_hook(player, target, HookPoint::AfterEffect, |hero, ctx| {
            hero.after_effect(ctx, &effective)
        })
    }

    /// Call one hook of `owner`'s hero with a fresh context, unless that
    /// point already fired for this play.
    pub(super) fn run_hook<F>(
        &mut self,
        owner: PlayerId,
        target: Option<PlayerId>,
        point: HookPoint,
        call: F,
    ) -> Result<(), GameError>
    where
        F: FnOnce(&mut dyn SkillHook, &mut HookContext<'_>) -> Result<(), GameError>,
    {
        if !self.ledger.fire(owner, point) {
            log::warn!("{:?} already fired for {} this play", point, owner);
            return Ok(());
        }
        let hero = &mut self.heroes[owner];
        let mut ctx = HookContext::new(owner, target, &mut *self.state, &mut self.events);
        call(hero.as_mut(), &mut ctx)
    }

    /// Everything after a play resolves: win check, pending discards,
    /// jump-in cascade, then the normal advance.
    pub(super) fn finish_play(&mut self, by: PlayerId) -> Result<(), GameError> {
        let mut last = by;
        loop {
            if self.check_terminal(last) {
                return Ok(());
            }
            if let Some(request) = self.state.discard_queue.pop_front() {
                let count = request.count.min(self.state.hand(request.player).len());
                if count > 0 {
                    self.state.resume = Some(last);
                    self.state.table.jump_window_open = false;
                    self.state.phase = Phase::DiscardSelection { player: request.player, count };
                    self.events.push(GameEvent::DiscardRequested { player: request.player, count });
                    log::debug!("{} must discard {}", request.player, count);
                    return Ok(());
                }
                continue;
            }

            self.state.phase = Phase::JumpWindowOpen;
            self.state.table.jump_window_open = true;
            match self.jump_scan(last)? {
                Some(jumper) => last = jumper,
                None => break,
            }
        }
        self.state.table.jump_window_open = false;
        self.advance(last);
        Ok(())
    }

    fn draw(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.state.turn.drew.is_some() {
            return Err(IllegalReason::AlreadyDrew.into());
        }
        let pending = self.state.table.pending_draw_count as usize;
        if pending > 0 {
            self.forced_draw(player, pending)
        } else {
            self.voluntary_draw(player)
        }
    }

    fn voluntary_draw(&mut self, player: PlayerId) -> Result<(), GameError> {
        let count = match self.state.draw_capped(player, 1) {
            Ok(count) => count,
            Err(GameError::EmptyDrawPile { .. }) => {
                self.exhaust(player);
                return Ok(());
            }
            Err(err) => return Err(err),
        };
        let index = (count == 1).then(|| self.state.hand(player).len() - 1);
        self.state.turn = TurnProgress { acted: true, drew: Some(DrawTaken::Voluntary { index }) };
        self.events.push(GameEvent::CardsDrawn { player, count, requested: 1, forced: false });
        log::debug!("{} drew {} by choice", player, count);
        Ok(())
    }

    fn forced_draw(&mut self, player: PlayerId, pending: usize) -> Result<(), GameError> {
        self.ledger.reset();
        let acquire = if self.ledger.fire(player, HookPoint::ForcedDrawIncoming) {
            self.heroes[player].on_forced_draw_incoming(player, &self.state.table.draw_chain)
        } else {
            None
        };

        if acquire == Some(true) {
            self.acquire_chain(player);
        } else {
            match self.state.draw_capped(player, pending) {
                Ok(count) => {
                    self.events.push(GameEvent::CardsDrawn { player, count, requested: pending, forced: true });
                    log::debug!("{} forced to draw {}, took {}", player, pending, count);
                }
                Err(GameError::EmptyDrawPile { .. }) => {
                    self.exhaust(player);
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }

        self.state.table.clear_chain();
        self.state.table.post_forced_draw_guard = Some(player);
        self.state.turn = TurnProgress { acted: true, drew: Some(DrawTaken::Forced) };
        if let Some(winner) = self.state.first_empty_hand(player) {
            self.end_game(GameOutcome::empty_hand(winner));
        }
        Ok(())
    }

    /// Take the chain's physical cards back out of the history.
    fn acquire_chain(&mut self, player: PlayerId) {
        let links = self.state.table.draw_chain.len();
        let mut taken = 0;
        for record in self.state.history.retract(links) {
            if self.state.players[player].room() > 0 {
                self.state.players[player].hand.push(record.original);
                taken += 1;
            } else {
                self.state.pile.put_bottom([record.original]);
            }
        }
        if let Some(top) = self.state.history.top() {
            let top = top.effective.clone();
            if !top.is_wild() {
                self.state.table.active_color = top.color;
            }
            self.state.table.last_effective = top;
        }
        self.events.push(GameEvent::DrawChainAcquired { player, count: taken });
        log::debug!("{} acquired the draw chain ({} cards kept)", player, taken);
    }

    fn end_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        if !self.state.turn.acted {
            return Err(IllegalReason::NothingTaken.into());
        }
        self.advance(player);
        Ok(())
    }

    fn discard(&mut self, player: PlayerId, count: usize, indices: &[usize]) -> Result<(), GameError> {
        if indices.len() != count {
            return Err(GameError::InvalidTargetSelection(format!(
                "{} must discard {} cards, chose {}",
                player,
                count,
                indices.len()
            )));
        }
        self.state.discard_from_hand(player, indices)?;
        self.events.push(GameEvent::CardsDiscarded { player, count });
        log::debug!("{} discarded {}", player, count);
        let resume = self.state.resume.take().unwrap_or(player);
        self.finish_play(resume)
    }

    /// Pass the turn on from `from`, consuming a pending skip.
    pub(super) fn advance(&mut self, from: PlayerId) {
        let table = &mut self.state.table;
        let mut next = table.next_seat(from);
        if table.skip_pending {
            table.skip_pending = false;
            self.events.push(GameEvent::PlayerSkipped { player: next });
            log::debug!("{} skipped", next);
            next = table.next_seat(next);
        }
        table.current = next;
        self.state.phase = Phase::AwaitingAction(next);
        self.state.turn = TurnProgress::default();
        self.state.turn_number += 1;
        self.events.push(GameEvent::TurnAdvanced { player: next, turn: self.state.turn_number });
        log::debug!("turn {} to {}", self.state.turn_number, next);
    }

    /// A draw could not be covered; settle the game by hand size.
    fn exhaust(&mut self, player: PlayerId) {
        log::debug!("draw pile exhausted on {}'s draw", player);
        self.state.exhausted = true;
        self.check_terminal(player);
    }

    /// End the game if a hand is empty or the pile ran out.
    pub(super) fn check_terminal(&mut self, from: PlayerId) -> bool {
        if let Some(winner) = self.state.first_empty_hand(from) {
            self.end_game(GameOutcome::empty_hand(winner));
            return true;
        }
        if self.state.exhausted {
            let result = resolve_exhaustion(&self.state.players);
            self.end_game(GameOutcome::exhausted(result));
            return true;
        }
        false
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        log::info!("game over after {} turns: {:?}", self.state.turn_number, outcome);
        self.state.table.jump_window_open = false;
        self.state.discard_queue.clear();
        self.state.resume = None;
        self.state.phase = Phase::GameOver(outcome.clone());
        self.events.push(GameEvent::GameEnded { outcome });
    }
}
