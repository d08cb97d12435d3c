//! Property tests over random play-outs.
//!
//! Seeded tables of every size play random legal actions with a mix of
//! heroes attached. After every accepted action the table-wide invariants
//! must hold, and a rejected action must change nothing.

use proptest::prelude::*;

use rust_uno::cards::Color;
use rust_uno::core::{Action, GameRng, PlayerId};
use rust_uno::decision::{ActionChooser, RandomChooser};
use rust_uno::engine::{Game, GameBuilder};
use rust_uno::skills::{ChainAbsorber, ChainExtender, Opportunist, Purge, Scavenger};

const DECK_SIZE: usize = 108;
const MAX_ACTIONS: usize = 3_000;

fn build(seed: u64, players: usize, heroes: &[u8]) -> Game {
    let mut builder = GameBuilder::new(players).seed(seed);
    for (i, hero) in heroes.iter().take(players).enumerate() {
        let seat = PlayerId::new(i as u8);
        builder = match hero % 6 {
            0 => builder.hero(seat, ChainAbsorber::default()),
            1 => builder.hero(seat, Purge::default()),
            2 => builder.hero(seat, ChainExtender::new(Color::CHOOSABLE[i % 4])),
            3 => builder.hero(seat, Opportunist),
            4 => builder.hero(seat, Scavenger),
            _ => builder,
        };
    }
    builder.build().unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Test that card conservation and chain accounting hold after every
    /// action of a random game.
    #[test]
    fn test_invariants_hold_through_random_play(
        seed in any::<u64>(),
        players in 2usize..=6,
        heroes in prop::collection::vec(0u8..6, 6),
    ) {
        let mut game = build(seed, players, &heroes);
        let mut chooser = RandomChooser::new(seed ^ 0x5eed);

        for _ in 0..MAX_ACTIONS {
            let Some(player) = game.actor() else { break };
            let legal = game.current_legal_actions(player);
            prop_assert!(!legal.is_empty(), "{} has nothing to do", player);

            let action = chooser.choose(&game, player, &legal).unwrap();
            game.submit_action(player, action).unwrap();

            prop_assert!(game.check_invariants().is_ok());
            prop_assert_eq!(game.state().card_count(), DECK_SIZE);
            prop_assert_eq!(game.table().pending_draw_count(), game.table().chain_total());
            prop_assert!(!game.table().jump_window_open());
        }
    }

    /// Test that an action from a seat that is not acting is rejected
    /// without touching the table.
    #[test]
    fn test_out_of_turn_actions_are_inert(
        seed in any::<u64>(),
        players in 2usize..=6,
        steps in 0usize..40,
    ) {
        let mut game = build(seed, players, &[]);
        let mut rng = GameRng::new(seed);

        for _ in 0..steps {
            let Some(player) = game.actor() else { break };
            let legal = game.current_legal_actions(player);
            let action = rng.choose(&legal).cloned().unwrap();
            game.submit_action(player, action).unwrap();
        }

        if let Some(actor) = game.actor() {
            let before = game.public_state();
            let log_len = game.state().action_log().len();
            for other in PlayerId::all(players).filter(|&p| p != actor) {
                for action in [Action::Draw, Action::play(0), Action::EndTurn] {
                    let err = game.submit_action(other, action).unwrap_err();
                    prop_assert!(err.is_recoverable());
                }
            }
            prop_assert_eq!(game.public_state(), before);
            prop_assert_eq!(game.state().action_log().len(), log_len);
        }
    }

    /// Test that a given seed always produces the same game.
    #[test]
    fn test_seeded_games_replay(seed in any::<u64>(), players in 2usize..=6) {
        let run = || {
            let mut game = build(seed, players, &[0, 1, 2, 3, 4, 5]);
            let mut chooser = RandomChooser::new(seed);
            for _ in 0..200 {
                let Some(player) = game.actor() else { break };
                let legal = game.current_legal_actions(player);
                let action = chooser.choose(&game, player, &legal).unwrap();
                game.submit_action(player, action).unwrap();
            }
            game.public_state()
        };
        prop_assert_eq!(run(), run());
    }
}
