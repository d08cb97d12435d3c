//! Action choosers.
//!
//! A chooser is handed the legal actions for a seat and picks one. The
//! engine still validates whatever comes back.

use crate::cards::{CardKind, Color};
use crate::core::{Action, GameRng, PlayerId};
use crate::engine::Game;

/// Picks an action for a seat.
pub trait ActionChooser {
    /// Choose one of `legal` for `player`.
    ///
    /// Returns `None` to defer to the caller's fallback.
    fn choose(&mut self, game: &Game, player: PlayerId, legal: &[Action]) -> Option<Action>;
}

/// Uniform random choice over the legal actions.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
}

impl RandomChooser {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl ActionChooser for RandomChooser {
    fn choose(&mut self, _game: &Game, _player: PlayerId, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).cloned()
    }
}

/// Plays whenever it can, saving wilds for last, and names the color it
/// holds most of. Draws only when nothing is playable.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyChooser;

impl GreedyChooser {
    fn rank(game: &Game, player: PlayerId, action: &Action) -> u8 {
        match action {
            Action::Play { index, .. } => match game.state().hand(player).get(*index).map(|c| c.kind) {
                Some(CardKind::DrawTwo) | Some(CardKind::Skip) | Some(CardKind::Reverse) => 0,
                Some(CardKind::Number) => 1,
                Some(CardKind::Wild) => 2,
                Some(CardKind::WildDrawFour) => 3,
                None => 9,
            },
            Action::Discard { .. } => 4,
            Action::Draw => 5,
            Action::EndTurn => 6,
        }
    }

    fn favourite_color(game: &Game, player: PlayerId) -> Color {
        let hand = game.state().hand(player);
        Color::CHOOSABLE
            .iter()
            .copied()
            .max_by_key(|&color| hand.iter().filter(|c| c.color == color).count())
            .unwrap_or(Color::Red)
    }
}

impl ActionChooser for GreedyChooser {
    fn choose(&mut self, game: &Game, player: PlayerId, legal: &[Action]) -> Option<Action> {
        let favourite = Self::favourite_color(game, player);
        legal
            .iter()
            .filter(|action| match action {
                Action::Play { color: Some(color), .. } => *color == favourite,
                _ => true,
            })
            .min_by_key(|action| Self::rank(game, player, action))
            .cloned()
    }
}
