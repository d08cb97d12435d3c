//! Reference hooks, one per extension point.
//!
//! These are generic building blocks rather than a hero catalogue. Tables
//! and tests compose them with `GameBuilder::hero`.

use im::Vector;

use super::context::HookContext;
use super::hook::SkillHook;
use crate::cards::{Card, CardKind, Color};
use crate::core::{GameError, PlayerId, TableState};
use crate::rules::chain_contribution;
use crate::zones::PlayRecord;

/// Cards of one color can continue a +2 chain as if they were +2s.
#[derive(Clone, Copy, Debug)]
pub struct ChainExtender {
    pub color: Color,
}

impl ChainExtender {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl SkillHook for ChainExtender {
    fn name(&self) -> &str {
        "chain_extender"
    }

    fn on_legality_check(&self, card: &Card, table: &TableState) -> Option<Card> {
        let chain_open = table.pending_draw_count() > 0 && table.last_effective().kind == CardKind::DrawTwo;
        if chain_open && card.color == self.color && !card.kind.is_draw() {
            Some(card.treated_as(CardKind::DrawTwo))
        } else {
            None
        }
    }
}

/// Takes the chain's own cards whenever it would be forced to draw at
/// least `min_pending`.
#[derive(Clone, Copy, Debug)]
pub struct ChainAbsorber {
    pub min_pending: u32,
}

impl Default for ChainAbsorber {
    fn default() -> Self {
        Self { min_pending: 1 }
    }
}

impl SkillHook for ChainAbsorber {
    fn name(&self) -> &str {
        "chain_absorber"
    }

    fn on_forced_draw_incoming(&self, _player: PlayerId, chain: &Vector<PlayRecord>) -> Option<bool> {
        let pending: u32 = chain.iter().map(|r| chain_contribution(r.effective.kind)).sum();
        Some(pending >= self.min_pending)
    }
}

/// Overrides the table's hand limit for one seat.
#[derive(Clone, Copy, Debug)]
pub struct HandLimit(pub usize);

impl SkillHook for HandLimit {
    fn name(&self) -> &str {
        "hand_limit"
    }

    fn hand_limit(&self, _default: usize) -> usize {
        self.0
    }
}

/// After playing a Skip, take the first card of the targeted seat's hand.
///
/// A play without a target takes nothing. A target that is the owner or
/// not seated rejects the play.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pickpocket;

impl SkillHook for Pickpocket {
    fn name(&self) -> &str {
        "pickpocket"
    }

    fn after_effect(&mut self, ctx: &mut HookContext<'_>, effective: &Card) -> Result<(), GameError> {
        if effective.kind != CardKind::Skip {
            return Ok(());
        }
        let Some(target) = ctx.target() else {
            return Ok(());
        };
        if target == ctx.owner() || !ctx.is_seated(target) {
            return Err(GameError::InvalidTargetSelection(format!("cannot pick from {}", target)));
        }
        if ctx.hand_size(target) == 0 {
            return Err(GameError::InvalidTargetSelection(format!("{} has nothing to take", target)));
        }
        ctx.transfer(target, ctx.owner(), 0)?;
        Ok(())
    }
}

/// After playing a plain Wild, the targeted seat (or the next seat if
/// none is named) must discard `count` cards.
#[derive(Clone, Copy, Debug)]
pub struct Purge {
    pub count: usize,
}

impl Default for Purge {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl SkillHook for Purge {
    fn name(&self) -> &str {
        "purge"
    }

    fn after_effect(&mut self, ctx: &mut HookContext<'_>, effective: &Card) -> Result<(), GameError> {
        if effective.kind != CardKind::Wild {
            return Ok(());
        }
        let victim = match ctx.target() {
            Some(target) if target == ctx.owner() => {
                return Err(GameError::InvalidTargetSelection("cannot purge yourself".into()));
            }
            Some(target) => target,
            None => ctx.table().next_seat(ctx.owner()),
        };
        ctx.request_discard(victim, self.count)
    }
}

/// Jumping in also skips the seat after the jumper.
#[derive(Clone, Copy, Debug, Default)]
pub struct Opportunist;

impl SkillHook for Opportunist {
    fn name(&self) -> &str {
        "opportunist"
    }

    fn on_jump(&mut self, ctx: &mut HookContext<'_>, _card: &Card) -> Result<(), GameError> {
        ctx.skip_next();
        Ok(())
    }
}

/// Draws one bonus card after each Reverse it plays.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scavenger;

impl SkillHook for Scavenger {
    fn name(&self) -> &str {
        "scavenger"
    }

    fn before_effect(&mut self, ctx: &mut HookContext<'_>, effective: &Card) -> Result<(), GameError> {
        if effective.kind == CardKind::Reverse {
            ctx.draw(ctx.owner(), 1)?;
        }
        Ok(())
    }
}
