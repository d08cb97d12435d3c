//! Game events.
//!
//! The engine reports everything that happens as a `GameEvent`, in the
//! order it happens. Events describe; they never carry handles that could
//! change the table.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color};
use crate::core::{Direction, PlayerId};
use crate::rules::GameOutcome;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The face-up opening card and the seat that starts.
    GameStarted { opening: Card, starting: PlayerId },

    /// A card left a hand and resolved. `card` is the physical card,
    /// `effective` what it resolved as.
    CardPlayed {
        player: PlayerId,
        card: Card,
        effective: Card,
        active_color: Color,
        jump_in: bool,
    },

    /// Cards moved from the pile to a hand. `requested` is what the rules
    /// or skill asked for before the hand limit applied.
    CardsDrawn {
        player: PlayerId,
        count: usize,
        requested: usize,
        forced: bool,
    },

    /// A seat took the draw chain's own cards instead of drawing.
    DrawChainAcquired { player: PlayerId, count: usize },

    /// A seat played out of turn on an exact match.
    JumpedIn { player: PlayerId, card: Card },

    DirectionChanged { direction: Direction },

    /// A card moved between hands through a skill.
    CardTransferred { from: PlayerId, to: PlayerId },

    /// A skill demands a discard; the seat must answer before play resumes.
    DiscardRequested { player: PlayerId, count: usize },

    CardsDiscarded { player: PlayerId, count: usize },

    PlayerSkipped { player: PlayerId },

    /// The turn passed to `player`.
    TurnAdvanced { player: PlayerId, turn: u32 },

    GameEnded { outcome: GameOutcome },
}

impl GameEvent {
    /// Seat the event is about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::GameStarted { starting, .. } => Some(*starting),
            GameEvent::CardPlayed { player, .. }
            | GameEvent::CardsDrawn { player, .. }
            | GameEvent::DrawChainAcquired { player, .. }
            | GameEvent::JumpedIn { player, .. }
            | GameEvent::DiscardRequested { player, .. }
            | GameEvent::CardsDiscarded { player, .. }
            | GameEvent::PlayerSkipped { player }
            | GameEvent::TurnAdvanced { player, .. } => Some(*player),
            GameEvent::CardTransferred { from, .. } => Some(*from),
            GameEvent::DirectionChanged { .. } | GameEvent::GameEnded { .. } => None,
        }
    }

    /// Short stable name, for logs and telemetry keys.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::CardPlayed { .. } => "card_played",
            GameEvent::CardsDrawn { .. } => "cards_drawn",
            GameEvent::DrawChainAcquired { .. } => "draw_chain_acquired",
            GameEvent::JumpedIn { .. } => "jumped_in",
            GameEvent::DirectionChanged { .. } => "direction_changed",
            GameEvent::CardTransferred { .. } => "card_transferred",
            GameEvent::DiscardRequested { .. } => "discard_requested",
            GameEvent::CardsDiscarded { .. } => "cards_discarded",
            GameEvent::PlayerSkipped { .. } => "player_skipped",
            GameEvent::TurnAdvanced { .. } => "turn_advanced",
            GameEvent::GameEnded { .. } => "game_ended",
        }
    }
}
