//! Actions a seat can submit.
//!
//! An action names a verb and whatever sub-choices it needs: the hand index
//! for a play, the color for a wild, an optional skill target, or the hand
//! indices for a forced discard.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::Color;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `index` in hand.
    Play {
        index: usize,
        /// Required for wild cards, ignored otherwise.
        color: Option<Color>,
        /// Sub-choice read by skills that act on another seat.
        target: Option<PlayerId>,
    },
    /// Draw the pending chain, or one card when nothing is pending.
    Draw,
    /// Close a turn in which a draw was taken.
    EndTurn,
    /// Answer a forced discard with the hand indices to give up.
    Discard { indices: SmallVec<[usize; 4]> },
}

impl Action {
    /// Play a colored card.
    ///
    /// ```
    /// use rust_uno::cards::Color;
    /// use rust_uno::core::{Action, PlayerId};
    ///
    /// let play = Action::play(2);
    /// let wild = Action::play_wild(0, Color::Blue);
    /// let aimed = Action::play(1).with_target(PlayerId::new(3));
    /// assert_eq!(play.hand_index(), Some(2));
    /// assert_ne!(wild, aimed);
    /// ```
    #[must_use]
    pub fn play(index: usize) -> Self {
        Action::Play { index, color: None, target: None }
    }

    /// Play a wild card naming a color.
    #[must_use]
    pub fn play_wild(index: usize, color: Color) -> Self {
        Action::Play { index, color: Some(color), target: None }
    }

    /// Attach a skill target to a play. Other actions are returned unchanged.
    #[must_use]
    pub fn with_target(self, target: PlayerId) -> Self {
        match self {
            Action::Play { index, color, .. } => Action::Play { index, color, target: Some(target) },
            other => other,
        }
    }

    #[must_use]
    pub fn discard(indices: &[usize]) -> Self {
        Action::Discard { indices: SmallVec::from_slice(indices) }
    }

    /// Hand index of a play.
    #[must_use]
    pub fn hand_index(&self) -> Option<usize> {
        match self {
            Action::Play { index, .. } => Some(*index),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Action::Play { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play { index, color: Some(color), .. } => write!(f, "play #{} as {}", index, color),
            Action::Play { index, .. } => write!(f, "play #{}", index),
            Action::Draw => f.write_str("draw"),
            Action::EndTurn => f.write_str("end turn"),
            Action::Discard { indices } => write!(f, "discard {:?}", indices.as_slice()),
        }
    }
}

/// A resolved action, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Turn number when the action was taken.
    pub turn: u32,
    /// Sequence number across the whole game.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self { player, action, turn, sequence }
    }
}
