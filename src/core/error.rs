//! Engine error types.
//!
//! Player-facing errors (`IllegalAction`, `InvalidTargetSelection`) are
//! recoverable: the state is untouched and the caller re-prompts.
//! `EmptyDrawPile` never leaves the engine; it becomes the pile-exhaustion
//! terminal path. `InvariantViolation` means the engine has a bug.

use thiserror::Error;

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("the game is over")]
    GameOver,
    #[error("no card at that hand index")]
    NoSuchCard,
    #[error("card cannot be played on the current table")]
    NotPlayable,
    #[error("a wild card needs a color choice")]
    ColorRequired,
    #[error("chosen color must be red, blue, green or yellow")]
    InvalidColor,
    #[error("already drew this turn")]
    AlreadyDrew,
    #[error("after a voluntary draw only the drawn card may be played")]
    MustPlayDrawnCard,
    #[error("cannot end the turn before acting")]
    NothingTaken,
    #[error("a discard selection is pending")]
    DiscardRequired,
    #[error("no discard selection is pending")]
    NoDiscardPending,
}

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal action: {0}")]
    IllegalAction(#[from] IllegalReason),
    #[error("draw pile is empty: needed {needed}, {remaining} remaining")]
    EmptyDrawPile { needed: usize, remaining: usize },
    #[error("invalid target selection: {0}")]
    InvalidTargetSelection(String),
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),
    #[error("engine invariant violated: {0}")]
    InvariantViolation(String),
}

impl GameError {
    /// Check if the caller may simply re-prompt with a different action.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::IllegalAction(_) | GameError::InvalidTargetSelection(_))
    }
}
