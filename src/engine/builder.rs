//! Game construction.
//!
//! ```
//! use rust_uno::cards::{Color, DeckKind};
//! use rust_uno::engine::GameBuilder;
//! use rust_uno::skills::HandLimit;
//! use rust_uno::core::PlayerId;
//!
//! let game = GameBuilder::new(3)
//!     .hand_size(8)
//!     .deck(DeckKind::Fixture)
//!     .seed(42)
//!     .hero(PlayerId::new(2), HandLimit(12))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.table().active_color(), Color::Red);
//! assert_eq!(game.state().card_count(), 108);
//! ```

use rustc_hash::FxHashMap;

use crate::cards::{build_deck, Card, DeckKind};
use crate::core::{GameError, GameRng, GameState, Player, PlayerId, PlayerMap, TableConfig, TableState};
use crate::events::{GameEvent, Observer};
use crate::skills::{NoSkill, SkillHook};
use crate::zones::{DiscardHistory, DrawPile, PlayRecord};

use super::game::Game;

/// Explicit table contents instead of a dealt deck.
struct Arrangement {
    hands: Vec<Vec<Card>>,
    opening: Card,
    pile: Vec<Card>,
}

/// Builder for [`Game`].
pub struct GameBuilder {
    config: TableConfig,
    heroes: FxHashMap<PlayerId, Box<dyn SkillHook>>,
    observers: Vec<Box<dyn Observer>>,
    arrangement: Option<Arrangement>,
}

impl GameBuilder {
    /// Builder for a table of `player_count` seats with default settings.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::from_config(TableConfig::new(player_count))
    }

    #[must_use]
    pub fn from_config(config: TableConfig) -> Self {
        Self {
            config,
            heroes: FxHashMap::default(),
            observers: Vec::new(),
            arrangement: None,
        }
    }

    #[must_use]
    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn hand_limit(mut self, hand_limit: usize) -> Self {
        self.config.hand_limit = hand_limit;
        self
    }

    #[must_use]
    pub fn deck(mut self, deck: DeckKind) -> Self {
        self.config.deck = deck;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    #[must_use]
    pub fn starting_player(mut self, player: PlayerId) -> Self {
        self.config.starting_player = Some(player);
        self
    }

    /// Attach a hero to a seat. Seats without one get [`NoSkill`].
    #[must_use]
    pub fn hero(mut self, player: PlayerId, hook: impl SkillHook + 'static) -> Self {
        self.heroes.insert(player, Box::new(hook));
        self
    }

    #[must_use]
    pub fn observer(mut self, observer: impl Observer + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Use explicit hands, opening card and draw pile (in draw order)
    /// instead of dealing from a deck.
    ///
    /// The starting seat is the configured one, or seat 0.
    #[must_use]
    pub fn arranged(mut self, hands: Vec<Vec<Card>>, opening: Card, pile: Vec<Card>) -> Self {
        self.arrangement = Some(Arrangement { hands, opening, pile });
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        let GameBuilder { config, heroes: hero_map, mut observers, arrangement } = self;
        config.validate()?;
        let n = config.player_count;

        let mut heroes: PlayerMap<Box<dyn SkillHook>> = PlayerMap::new(n, |_| Box::new(NoSkill) as Box<dyn SkillHook>);
        for (player, hook) in hero_map {
            if !heroes.contains(player) {
                return Err(GameError::InvalidConfig(format!("hero for unseated {}", player)));
            }
            heroes[player] = hook;
        }

        let mut players = PlayerMap::new(n, |id| {
            Player::new(id, config.team_of(id), heroes[id].hand_limit(config.hand_limit))
        });
        let mut rng = GameRng::new(config.seed);
        let mut history = DiscardHistory::new(config.history_capacity);

        let (pile, opening, starting) = match arrangement {
            Some(arrangement) => {
                if arrangement.hands.len() != n {
                    return Err(GameError::InvalidConfig(format!(
                        "{} arranged hands for {} players",
                        arrangement.hands.len(),
                        n
                    )));
                }
                if arrangement.opening.is_wild() {
                    return Err(GameError::InvalidConfig("opening card cannot be wild".into()));
                }
                for (id, hand) in PlayerId::all(n).zip(arrangement.hands) {
                    players[id].hand = hand;
                }
                let starting = config.starting_player.unwrap_or(PlayerId::new(0));
                (DrawPile::from_draw_order(arrangement.pile), arrangement.opening, starting)
            }
            None => {
                let mut deck_rng = rng.for_context("deck");
                let mut pile = DrawPile::new(build_deck(config.deck, &mut deck_rng));
                for id in PlayerId::all(n) {
                    players[id].hand = pile.deal(config.hand_size)?;
                }
                let opening = loop {
                    let card = pile
                        .draw()
                        .ok_or_else(|| GameError::InvalidConfig("no non-wild card left to open".into()))?;
                    if card.is_wild() {
                        log::debug!("opening {} set aside, redrawing", card);
                        history.set_aside(card);
                    } else {
                        break card;
                    }
                };
                let starting = match config.starting_player {
                    Some(player) => player,
                    None => PlayerId::new(rng.gen_range_usize(0..n) as u8),
                };
                (pile, opening, starting)
            }
        };

        for (id, player) in players.iter() {
            if player.hand_size() > player.hand_limit {
                return Err(GameError::InvalidConfig(format!(
                    "{} starts with {} cards over limit {}",
                    id,
                    player.hand_size(),
                    player.hand_limit
                )));
            }
        }

        history.push(PlayRecord::opening(opening.clone()));
        let table = TableState::new(n, starting, &opening);
        let state = GameState::new(table, players, pile, history, rng);

        log::info!(
            "new game: {} players, {} cards, opening {}, {} starts",
            n,
            state.total_cards(),
            opening,
            starting
        );
        let started = GameEvent::GameStarted { opening, starting };
        for observer in &mut observers {
            observer.on_event(&started);
        }

        let game = Game { config, state, heroes, observers };
        game.check_invariants()?;
        Ok(game)
    }
}
