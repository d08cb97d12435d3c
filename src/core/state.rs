//! Table and game state.
//!
//! ## TableState
//!
//! The flags the rules read: whose turn, direction, active color, the last
//! effective card, the pending draw chain, skip, jump window, and the
//! post-forced-draw guard. Only the engine mutates it.
//!
//! ## GameState
//!
//! Everything on the table: `TableState`, hands, draw pile, discard
//! history, RNG, and the engine's resolution bookkeeping. History and draw
//! chain are `im` vectors, so cloning a `GameState` for a checkpoint is
//! cheap.
//!
//! ## PublicState
//!
//! A serializable snapshot of what every seat can see.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::action::ActionRecord;
use super::error::GameError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, Color};
use crate::rules::{chain_contribution, GameOutcome};
use crate::zones::{DiscardHistory, DrawPile, PlayRecord};

/// Turn order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Increasing seat index.
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// The seat after `from` in this direction, wrapping.
    #[must_use]
    pub fn step(self, from: PlayerId, player_count: usize) -> PlayerId {
        let n = player_count;
        let next = match self {
            Direction::Clockwise => (from.index() + 1) % n,
            Direction::CounterClockwise => (from.index() + n - 1) % n,
        };
        PlayerId::new(next as u8)
    }
}

/// The rule-relevant flags of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub(crate) player_count: usize,
    pub(crate) current: PlayerId,
    pub(crate) direction: Direction,
    pub(crate) active_color: Color,
    pub(crate) last_effective: Card,
    pub(crate) pending_draw_count: u32,
    pub(crate) draw_chain: Vector<PlayRecord>,
    pub(crate) skip_pending: bool,
    pub(crate) jump_window_open: bool,
    pub(crate) post_forced_draw_guard: Option<PlayerId>,
}

impl TableState {
    /// Table state right after the opening card is revealed.
    #[must_use]
    pub fn new(player_count: usize, starting: PlayerId, opening: &Card) -> Self {
        Self {
            player_count,
            current: starting,
            direction: Direction::Clockwise,
            active_color: opening.color,
            last_effective: opening.clone(),
            pending_draw_count: 0,
            draw_chain: Vector::new(),
            skip_pending: false,
            jump_window_open: false,
            post_forced_draw_guard: None,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Seat currently holding the turn.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// What the most recent play resolved as.
    #[must_use]
    pub fn last_effective(&self) -> &Card {
        &self.last_effective
    }

    #[must_use]
    pub fn pending_draw_count(&self) -> u32 {
        self.pending_draw_count
    }

    /// Plays contributing to the pending draw count, oldest first.
    #[must_use]
    pub fn draw_chain(&self) -> &Vector<PlayRecord> {
        &self.draw_chain
    }

    #[must_use]
    pub fn skip_pending(&self) -> bool {
        self.skip_pending
    }

    #[must_use]
    pub fn jump_window_open(&self) -> bool {
        self.jump_window_open
    }

    #[must_use]
    pub fn post_forced_draw_guard(&self) -> Option<PlayerId> {
        self.post_forced_draw_guard
    }

    /// Seat after `from` in the current direction.
    #[must_use]
    pub fn next_seat(&self, from: PlayerId) -> PlayerId {
        self.direction.step(from, self.player_count)
    }

    /// Sum of draw-chain contributions; always equals `pending_draw_count`.
    #[must_use]
    pub fn chain_total(&self) -> u32 {
        self.draw_chain
            .iter()
            .map(|record| chain_contribution(record.effective.kind))
            .sum()
    }

    pub(crate) fn clear_chain(&mut self) {
        self.draw_chain.clear();
        self.pending_draw_count = 0;
    }
}

/// What the table is waiting for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A seat must play, draw, or end its turn.
    AwaitingAction(PlayerId),
    /// A play just resolved and out-of-turn matches are being checked.
    JumpWindowOpen,
    /// A skill forced a seat to discard `count` cards of its choice.
    DiscardSelection { player: PlayerId, count: usize },
    GameOver(GameOutcome),
}

impl Phase {
    /// The seat expected to submit the next action, if any.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        match self {
            Phase::AwaitingAction(player) => Some(*player),
            Phase::DiscardSelection { player, .. } => Some(*player),
            Phase::JumpWindowOpen | Phase::GameOver(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }
}

/// How the current turn's draw was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawTaken {
    /// One card by choice; `index` is where it landed, `None` if the hand
    /// limit stopped it.
    Voluntary { index: Option<usize> },
    /// The pending chain was answered.
    Forced,
}

/// Per-turn progress of the seat holding the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnProgress {
    pub acted: bool,
    pub drew: Option<DrawTaken>,
}

/// A skill's demand that `player` discard `count` cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardRequest {
    pub player: PlayerId,
    pub count: usize,
}

/// Full game state, including every hand.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) table: TableState,
    pub(crate) phase: Phase,
    pub(crate) turn: TurnProgress,
    pub(crate) turn_number: u32,
    pub(crate) players: PlayerMap<Player>,
    pub(crate) pile: DrawPile,
    pub(crate) history: DiscardHistory,
    pub(crate) rng: GameRng,
    pub(crate) discard_queue: VecDeque<DiscardRequest>,
    /// Seat whose play resolution is suspended behind a discard selection.
    pub(crate) resume: Option<PlayerId>,
    /// Set when a draw could not be completed.
    pub(crate) exhausted: bool,
    pub(crate) total_cards: usize,
    pub(crate) action_log: Vector<ActionRecord>,
    pub(crate) sequence: u32,
}

impl GameState {
    /// Assemble a state from dealt zones.
    pub(crate) fn new(
        table: TableState,
        players: PlayerMap<Player>,
        pile: DrawPile,
        history: DiscardHistory,
        rng: GameRng,
    ) -> Self {
        let mut state = Self {
            phase: Phase::AwaitingAction(table.current),
            table,
            turn: TurnProgress::default(),
            turn_number: 1,
            players,
            pile,
            history,
            rng,
            discard_queue: VecDeque::new(),
            resume: None,
            exhausted: false,
            total_cards: 0,
            action_log: Vector::new(),
            sequence: 0,
        };
        state.total_cards = state.card_count();
        state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        &self.table
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn turn(&self) -> TurnProgress {
        self.turn
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &[Card] {
        &self.players[player].hand
    }

    #[must_use]
    pub fn hand_sizes(&self) -> PlayerMap<usize> {
        self.players.map(Player::hand_size)
    }

    #[must_use]
    pub fn pile_size(&self) -> usize {
        self.pile.len()
    }

    #[must_use]
    pub fn history(&self) -> &DiscardHistory {
        &self.history
    }

    /// Every resolved action so far.
    #[must_use]
    pub fn action_log(&self) -> &Vector<ActionRecord> {
        &self.action_log
    }

    /// Cards placed on the table at construction.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    /// Cards currently in the pile, every hand, and the discard pile.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pile.len()
            + self.players.iter().map(|(_, p)| p.hand.len()).sum::<usize>()
            + self.history.card_count()
    }

    /// Draw up to `n` cards into a hand, capped by the hand limit.
    ///
    /// Returns how many cards were actually drawn. Fails without drawing
    /// anything if the pile cannot cover the capped amount.
    pub(crate) fn draw_capped(&mut self, player: PlayerId, n: usize) -> Result<usize, GameError> {
        let want = n.min(self.players[player].room());
        let cards = self.pile.deal(want)?;
        self.players[player].hand.extend(cards);
        Ok(want)
    }

    /// Move one card between hands.
    pub(crate) fn transfer(&mut self, from: PlayerId, to: PlayerId, index: usize) -> Result<Card, GameError> {
        if !self.players.contains(from) || !self.players.contains(to) {
            return Err(GameError::InvalidTargetSelection("seat is not at this table".into()));
        }
        if from == to {
            return Err(GameError::InvalidTargetSelection("cannot transfer a card to its own hand".into()));
        }
        if index >= self.players[from].hand.len() {
            return Err(GameError::InvalidTargetSelection(format!("{} has no card #{}", from, index)));
        }
        if self.players[to].room() == 0 {
            return Err(GameError::InvalidTargetSelection(format!("{} is at the hand limit", to)));
        }
        let card = self.players[from].hand.remove(index);
        self.players[to].hand.push(card.clone());
        Ok(card)
    }

    /// Discard the cards at `indices` onto the discard pile, outside history.
    pub(crate) fn discard_from_hand(&mut self, player: PlayerId, indices: &[usize]) -> Result<Vec<Card>, GameError> {
        let hand_len = self.players[player].hand.len();
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != indices.len() {
            return Err(GameError::InvalidTargetSelection("duplicate discard index".into()));
        }
        if let Some(&bad) = sorted.iter().find(|&&i| i >= hand_len) {
            return Err(GameError::InvalidTargetSelection(format!("{} has no card #{}", player, bad)));
        }
        let mut discarded = Vec::with_capacity(sorted.len());
        for &index in sorted.iter().rev() {
            discarded.push(self.players[player].hand.remove(index));
        }
        for card in &discarded {
            self.history.set_aside(card.clone());
        }
        Ok(discarded)
    }

    /// First seat with an empty hand, scanning in turn order from `from`.
    #[must_use]
    pub fn first_empty_hand(&self, from: PlayerId) -> Option<PlayerId> {
        let mut seat = from;
        for _ in 0..self.player_count() {
            if self.players[seat].hand.is_empty() {
                return Some(seat);
            }
            seat = self.table.next_seat(seat);
        }
        None
    }

    pub(crate) fn record_action(&mut self, player: PlayerId, action: crate::core::Action) {
        let record = ActionRecord::new(player, action, self.turn_number, self.sequence);
        self.sequence += 1;
        self.action_log.push_back(record);
    }

    /// Snapshot of what every seat can see.
    #[must_use]
    pub fn public_state(&self) -> PublicState {
        PublicState {
            table: self.table.clone(),
            phase: self.phase.clone(),
            turn_number: self.turn_number,
            hand_sizes: self.hand_sizes(),
            recent: self.history.iter().cloned().collect(),
            pile_size: self.pile.len(),
        }
    }
}

/// Serializable public view of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub table: TableState,
    pub phase: Phase,
    pub turn_number: u32,
    pub hand_sizes: PlayerMap<usize>,
    /// Visible discard history, oldest first.
    pub recent: Vec<PlayRecord>,
    pub pile_size: usize,
}
