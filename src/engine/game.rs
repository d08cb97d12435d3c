//! The game state machine.
//!
//! `Game` owns the state, one hero per seat, and the observers. Callers
//! ask for [`Game::current_legal_actions`], pick one, and hand it to
//! [`Game::submit_action`], which resolves it completely or not at all.

use crate::cards::Color;
use crate::core::{
    Action, DrawTaken, GameError, GameState, Phase, PlayerId, PlayerMap, PublicState, TableConfig, TableState,
};
use crate::events::{GameEvent, Observer};
use crate::rules::{is_legal, GameOutcome};
use crate::skills::SkillHook;

use super::turn::Resolver;

/// What a successful action produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
    /// Phase after the action.
    pub phase: Phase,
}

impl Observation {
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Check whether an event with the given name was produced.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.events.iter().any(|e| e.name() == name)
    }
}

pub struct Game {
    pub(super) config: TableConfig,
    pub(super) state: GameState,
    pub(super) heroes: PlayerMap<Box<dyn SkillHook>>,
    pub(super) observers: Vec<Box<dyn Observer>>,
}

impl Game {
    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn table(&self) -> &TableState {
        self.state.table()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.phase().is_over()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        match self.state.phase() {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Seat expected to act next, if any.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        self.state.phase().actor()
    }

    /// Name of the hero attached to a seat.
    #[must_use]
    pub fn hero_name(&self, player: PlayerId) -> &str {
        self.heroes[player].name()
    }

    #[must_use]
    pub fn public_state(&self) -> PublicState {
        self.state.public_state()
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Actions `player` may submit right now.
    ///
    /// Informational: `submit_action` validates again. Wild plays are listed
    /// once per choosable color. A discard selection of more than one card
    /// lists only the first and last `count` cards; any valid selection is
    /// accepted on submission.
    #[must_use]
    pub fn current_legal_actions(&self, player: PlayerId) -> Vec<Action> {
        match self.state.phase() {
            Phase::AwaitingAction(current) if *current == player => self.turn_actions(player),
            Phase::DiscardSelection { player: chooser, count } if *chooser == player => {
                discard_actions(self.state.hand(player).len(), *count)
            }
            _ => Vec::new(),
        }
    }

    fn turn_actions(&self, player: PlayerId) -> Vec<Action> {
        let turn = self.state.turn();
        let table = self.state.table();
        let hero = &self.heroes[player];
        let mut actions = Vec::new();

        for (index, card) in self.state.hand(player).iter().enumerate() {
            if let Some(DrawTaken::Voluntary { index: drawn }) = turn.drew {
                if drawn != Some(index) {
                    continue;
                }
            }
            let effective = hero.on_legality_check(card, table).unwrap_or_else(|| card.clone());
            if !is_legal(&effective, table) {
                continue;
            }
            if effective.is_wild() {
                actions.extend(Color::CHOOSABLE.iter().map(|&color| Action::play_wild(index, color)));
            } else {
                actions.push(Action::play(index));
            }
        }

        if turn.drew.is_none() {
            actions.push(Action::Draw);
        }
        if turn.acted {
            actions.push(Action::EndTurn);
        }
        actions
    }

    /// Action to substitute when a chooser fails to produce a valid one:
    /// draw if possible, otherwise end the turn. `None` if `player` has
    /// nothing to do.
    #[must_use]
    pub fn fallback_action(&self, player: PlayerId) -> Option<Action> {
        let legal = self.current_legal_actions(player);
        [Action::Draw, Action::EndTurn]
            .into_iter()
            .find(|action| legal.contains(action))
            .or_else(|| legal.into_iter().next())
    }

    /// Resolve one action from `player`.
    ///
    /// On error the table is exactly as it was before the call and no
    /// events are delivered. An `InvariantViolation` is the exception: the
    /// resolved state is kept for inspection.
    pub fn submit_action(&mut self, player: PlayerId, action: Action) -> Result<Observation, GameError> {
        let checkpoint = self.state.clone();

        let resolved = {
            let mut resolver = Resolver::new(&mut self.state, &mut self.heroes);
            resolver.resolve(player, &action).map(|()| resolver.into_events())
        };

        let events = match resolved {
            Ok(events) => events,
            Err(err) => {
                self.state = checkpoint;
                log::warn!("rejected {} from {}: {}", action, player, err);
                return Err(err);
            }
        };

        self.state.record_action(player, action);
        self.check_invariants()?;

        for event in &events {
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }

        Ok(Observation { events, phase: self.state.phase().clone() })
    }

    /// Verify the table-wide invariants.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let state = &self.state;
        let table = state.table();

        let mut problems = Vec::new();
        if state.card_count() != state.total_cards() {
            problems.push(format!("card count {} != {}", state.card_count(), state.total_cards()));
        }
        if table.pending_draw_count() != table.chain_total() {
            problems.push(format!(
                "pending draw {} != chain sum {}",
                table.pending_draw_count(),
                table.chain_total()
            ));
        }
        if let Some(top) = state.history().top() {
            if top.effective != *table.last_effective() {
                problems.push(format!("last effective {} != history top {}", table.last_effective(), top.effective));
            }
        }
        for (id, player) in state.players().iter() {
            if player.hand_size() > player.hand_limit {
                problems.push(format!("{} holds {} over limit {}", id, player.hand_size(), player.hand_limit));
            }
        }
        if let Phase::AwaitingAction(current) = state.phase() {
            if *current != table.current() {
                problems.push(format!("phase awaits {} but {} holds the turn", current, table.current()));
            }
            if table.skip_pending() {
                problems.push("skip still pending at turn start".into());
            }
        }
        if matches!(state.phase(), Phase::JumpWindowOpen) {
            problems.push("jump window left open between actions".into());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            let message = problems.join("; ");
            log::error!("invariant violation: {}", message);
            Err(GameError::InvariantViolation(message))
        }
    }

    #[cfg(test)]
    pub(crate) fn state_mut_for_tests(&mut self) -> &mut GameState {
        &mut self.state
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

fn discard_actions(hand_len: usize, count: usize) -> Vec<Action> {
    if count == 1 {
        return (0..hand_len).map(|i| Action::discard(&[i])).collect();
    }
    let first: Vec<usize> = (0..count).collect();
    let last: Vec<usize> = (hand_len - count..hand_len).collect();
    let mut actions = vec![Action::discard(&first)];
    if last != first {
        actions.push(Action::discard(&last));
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::core::IllegalReason;
    use crate::engine::GameBuilder;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn small_game() -> Game {
        GameBuilder::new(3)
            .arranged(
                vec![
                    vec![Card::number(Color::Red, 3), Card::wild(), Card::number(Color::Blue, 9)],
                    vec![Card::number(Color::Green, 1), Card::number(Color::Green, 2)],
                    vec![Card::number(Color::Yellow, 1), Card::number(Color::Yellow, 2)],
                ],
                Card::number(Color::Red, 5),
                vec![Card::number(Color::Green, 7), Card::number(Color::Blue, 4)],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_legal_actions_expand_wilds() {
        let game = small_game();
        let actions = game.current_legal_actions(p(0));
        // Red 3, four wild colors, draw.
        assert_eq!(actions.len(), 6);
        assert!(actions.contains(&Action::play(0)));
        assert!(actions.contains(&Action::play_wild(1, Color::Yellow)));
        assert!(!actions.contains(&Action::play(2)));
        assert!(!actions.contains(&Action::EndTurn));
        assert!(game.current_legal_actions(p(1)).is_empty());
    }

    #[test]
    fn test_rejected_action_leaves_no_trace() {
        let mut game = small_game();
        let before = game.public_state();

        let err = game.submit_action(p(0), Action::play(2)).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::NotPlayable));
        let err = game.submit_action(p(1), Action::Draw).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::NotYourTurn));
        let err = game.submit_action(p(0), Action::play(1)).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::ColorRequired));
        let err = game.submit_action(p(0), Action::EndTurn).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::NothingTaken));

        assert_eq!(game.public_state(), before);
        assert!(game.state().action_log().is_empty());
    }

    #[test]
    fn test_voluntary_draw_restricts_play() {
        let mut game = small_game();
        let obs = game.submit_action(p(0), Action::Draw).unwrap();
        assert!(obs.contains("cards_drawn"));
        assert_eq!(game.state().hand(p(0)).len(), 4);

        // Green 7 was drawn; only it may be played, and it is not legal on Red 5.
        let actions = game.current_legal_actions(p(0));
        assert_eq!(actions, vec![Action::EndTurn]);
        let err = game.submit_action(p(0), Action::play(0)).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::MustPlayDrawnCard));
        let err = game.submit_action(p(0), Action::Draw).unwrap_err();
        assert_eq!(err, GameError::IllegalAction(IllegalReason::AlreadyDrew));

        let obs = game.submit_action(p(0), Action::EndTurn).unwrap();
        assert_eq!(obs.phase, Phase::AwaitingAction(p(1)));
    }

    #[test]
    fn test_play_advances_turn() {
        let mut game = small_game();
        let obs = game.submit_action(p(0), Action::play(0)).unwrap();
        assert_eq!(obs.phase, Phase::AwaitingAction(p(1)));
        assert_eq!(game.table().active_color(), Color::Red);
        assert_eq!(game.table().last_effective(), &Card::number(Color::Red, 3));
        assert_eq!(game.state().turn_number(), 2);
        assert_eq!(game.state().action_log().len(), 1);
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_wild_sets_chosen_color() {
        let mut game = small_game();
        game.submit_action(p(0), Action::play_wild(1, Color::Green)).unwrap();
        assert_eq!(game.table().active_color(), Color::Green);
        assert!(game.current_legal_actions(p(1)).contains(&Action::play(0)));
    }

    #[test]
    fn test_fallback_action() {
        let mut game = small_game();
        assert_eq!(game.fallback_action(p(0)), Some(Action::Draw));
        game.submit_action(p(0), Action::Draw).unwrap();
        assert_eq!(game.fallback_action(p(0)), Some(Action::EndTurn));
        assert_eq!(game.fallback_action(p(2)), None);
    }

    #[test]
    fn test_discard_actions() {
        assert_eq!(discard_actions(3, 1).len(), 3);
        assert_eq!(
            discard_actions(4, 2),
            vec![Action::discard(&[0, 1]), Action::discard(&[2, 3])]
        );
        assert_eq!(discard_actions(2, 2), vec![Action::discard(&[0, 1])]);
    }

    #[test]
    fn test_observers_only_see_accepted_actions() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut game = small_game();
        game.add_observer(Box::new(move |e: &GameEvent| sink.borrow_mut().push(e.name())));

        assert!(game.submit_action(p(0), Action::play(2)).is_err());
        assert!(seen.borrow().is_empty());

        game.submit_action(p(0), Action::play(0)).unwrap();
        assert_eq!(*seen.borrow(), vec!["card_played", "turn_advanced"]);
    }
}
