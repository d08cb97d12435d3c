//! The skill hook trait.
//!
//! Each seat carries one hero, a `Box<dyn SkillHook>`. The engine calls it
//! structurally at fixed extension points and never asks what it is.
//!
//! ## Implementation Notes
//!
//! - `on_legality_check` and `on_forced_draw_incoming` are queries. They
//!   must not depend on call count: the engine also probes
//!   `on_legality_check` while listing legal actions and scanning for
//!   jump-ins.
//! - `before_effect`, `after_effect` and `on_jump` fire at most once per
//!   resolving play. An `Err` rejects the whole submitted action and the
//!   table is restored.
//! - Table changes go through [`HookContext`]. Hero-local fields are not
//!   covered by the rollback, so hooks should not keep state they would
//!   need to undo.

use im::Vector;
use rustc_hash::FxHashSet;

use super::context::HookContext;
use crate::cards::Card;
use crate::core::{GameError, PlayerId, TableState};
use crate::zones::PlayRecord;

/// Extension points a hero can intercept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookPoint {
    LegalityCheck,
    BeforeEffect,
    AfterEffect,
    ForcedDrawIncoming,
    Jump,
}

pub trait SkillHook {
    /// Display name, for logs only.
    fn name(&self) -> &str {
        "none"
    }

    /// Hand limit for the owning seat, given the table default.
    fn hand_limit(&self, default: usize) -> usize {
        default
    }

    /// What `card` should resolve as, if not itself.
    fn on_legality_check(&self, _card: &Card, _table: &TableState) -> Option<Card> {
        None
    }

    /// Runs after the card is on the history, before its effect applies.
    fn before_effect(&mut self, _ctx: &mut HookContext<'_>, _effective: &Card) -> Result<(), GameError> {
        Ok(())
    }

    /// Runs after the effect is committed.
    fn after_effect(&mut self, _ctx: &mut HookContext<'_>, _effective: &Card) -> Result<(), GameError> {
        Ok(())
    }

    /// `Some(true)` takes the chain's own cards instead of drawing fresh.
    fn on_forced_draw_incoming(&self, _player: PlayerId, _chain: &Vector<PlayRecord>) -> Option<bool> {
        None
    }

    /// Runs once a jump-in by the owner has resolved, before the next scan.
    fn on_jump(&mut self, _ctx: &mut HookContext<'_>, _card: &Card) -> Result<(), GameError> {
        Ok(())
    }
}

/// A hero with no skill.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSkill;

impl SkillHook for NoSkill {}

/// Which hook points already fired for the play being resolved.
#[derive(Clone, Debug, Default)]
pub(crate) struct HookLedger {
    fired: FxHashSet<(PlayerId, HookPoint)>,
}

impl HookLedger {
    /// Start a new resolving play.
    pub(crate) fn reset(&mut self) {
        self.fired.clear();
    }

    /// Mark `point` fired for `player`. Returns false if it already had.
    pub(crate) fn fire(&mut self, player: PlayerId, point: HookPoint) -> bool {
        self.fired.insert((player, point))
    }
}
