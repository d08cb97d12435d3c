//! Play-out driver.
//!
//! Runs a game to completion with one chooser per seat. When a chooser
//! abstains or its action is rejected, the driver substitutes
//! [`Game::fallback_action`].

use crate::core::{GameError, PlayerMap};
use crate::engine::Game;
use crate::rules::GameOutcome;

use super::chooser::ActionChooser;

/// Summary of a play-out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    /// `None` if the action cap was reached first.
    pub outcome: Option<GameOutcome>,
    /// Actions accepted by the engine.
    pub actions: usize,
    /// Times the fallback replaced a chooser's pick.
    pub fallbacks: usize,
}

/// Drive `game` until it ends or `max_actions` actions were accepted.
///
/// Only non-recoverable errors are returned; a recoverable rejection is
/// answered with the fallback action.
pub fn play_out(
    game: &mut Game,
    choosers: &mut PlayerMap<Box<dyn ActionChooser>>,
    max_actions: usize,
) -> Result<Playout, GameError> {
    let mut summary = Playout { outcome: None, actions: 0, fallbacks: 0 };

    while summary.actions < max_actions {
        if let Some(outcome) = game.outcome() {
            summary.outcome = Some(outcome.clone());
            return Ok(summary);
        }
        let player = game
            .actor()
            .ok_or_else(|| GameError::InvariantViolation(format!("no seat to act in {:?}", game.phase())))?;

        let legal = game.current_legal_actions(player);
        let picked = choosers[player].choose(game, player, &legal);

        let accepted = match picked {
            Some(action) => match game.submit_action(player, action) {
                Ok(_) => true,
                Err(err) if err.is_recoverable() => false,
                Err(err) => return Err(err),
            },
            None => false,
        };

        if !accepted {
            summary.fallbacks += 1;
            let fallback = game
                .fallback_action(player)
                .ok_or_else(|| GameError::InvariantViolation(format!("{} has no legal action", player)))?;
            game.submit_action(player, fallback)?;
        }
        summary.actions += 1;
    }

    summary.outcome = game.outcome().cloned();
    if summary.outcome.is_none() {
        log::debug!("play-out stopped after {} actions", summary.actions);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckKind;
    use crate::core::{Action, PlayerId};
    use crate::decision::{GreedyChooser, RandomChooser};
    use crate::engine::GameBuilder;

    /// Always asks for something illegal.
    struct Stubborn;

    impl ActionChooser for Stubborn {
        fn choose(&mut self, _game: &Game, _player: PlayerId, _legal: &[Action]) -> Option<Action> {
            Some(Action::play(99))
        }
    }

    #[test]
    fn test_random_play_out_finishes() {
        let mut game = GameBuilder::new(4).seed(17).build().unwrap();
        let mut choosers: PlayerMap<Box<dyn ActionChooser>> =
            PlayerMap::new(4, |p| Box::new(RandomChooser::new(100 + p.0 as u64)) as Box<dyn ActionChooser>);

        let summary = play_out(&mut game, &mut choosers, 5_000).unwrap();
        assert!(summary.outcome.is_some());
        assert!(game.is_over());
        assert_eq!(summary.fallbacks, 0);
        assert_eq!(game.state().card_count(), 108);
    }

    #[test]
    fn test_fallback_replaces_rejected_actions() {
        let mut game = GameBuilder::new(2).seed(4).deck(DeckKind::Fixture).build().unwrap();
        let mut choosers: PlayerMap<Box<dyn ActionChooser>> =
            PlayerMap::new(2, |_| Box::new(Stubborn) as Box<dyn ActionChooser>);

        let summary = play_out(&mut game, &mut choosers, 6).unwrap();
        assert_eq!(summary.actions, 6);
        assert_eq!(summary.fallbacks, 6);
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_greedy_against_random() {
        let mut game = GameBuilder::new(3).seed(99).build().unwrap();
        let mut choosers: PlayerMap<Box<dyn ActionChooser>> = PlayerMap::new(3, |p| {
            if p.0 == 0 {
                Box::new(GreedyChooser) as Box<dyn ActionChooser>
            } else {
                Box::new(RandomChooser::new(p.0 as u64)) as Box<dyn ActionChooser>
            }
        });
        let summary = play_out(&mut game, &mut choosers, 5_000).unwrap();
        assert_eq!(summary.outcome.as_ref(), game.outcome());
    }
}
