//! Game results and the pile-exhaustion tie-break.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Declared draw among the tied seats.
    Draw(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a seat won or shares the draw.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw(tied) => tied.contains(&player),
        }
    }

    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Draw(tied) => tied.clone(),
        }
    }

    /// Teams of the winning seats, deduplicated, in seat order.
    #[must_use]
    pub fn winning_teams(&self, players: &PlayerMap<Player>) -> Vec<u8> {
        let mut teams: Vec<u8> = Vec::new();
        for player in self.winners() {
            let team = players[player].team;
            if !teams.contains(&team) {
                teams.push(team);
            }
        }
        teams
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// A seat played or gave away its last card.
    EmptyHand,
    /// A draw could not be completed.
    PileExhausted,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub result: GameResult,
    pub reason: EndReason,
}

impl GameOutcome {
    #[must_use]
    pub fn empty_hand(winner: PlayerId) -> Self {
        Self { result: GameResult::Winner(winner), reason: EndReason::EmptyHand }
    }

    #[must_use]
    pub fn exhausted(result: GameResult) -> Self {
        Self { result, reason: EndReason::PileExhausted }
    }
}

/// Decide a game whose draw pile ran out.
///
/// Fewest cards wins; ties go to the lowest face-value sum; a remaining tie
/// is a draw among the tied seats.
#[must_use]
pub fn resolve_exhaustion(players: &PlayerMap<Player>) -> GameResult {
    let fewest = players.iter().map(|(_, p)| p.hand_size()).min().unwrap_or(0);
    let by_count: Vec<&Player> = players
        .iter()
        .map(|(_, p)| p)
        .filter(|p| p.hand_size() == fewest)
        .collect();

    let lowest = by_count.iter().map(|p| p.hand_value()).min().unwrap_or(0);
    let tied: Vec<PlayerId> = by_count
        .iter()
        .filter(|p| p.hand_value() == lowest)
        .map(|p| p.position)
        .collect();

    match tied.as_slice() {
        [single] => GameResult::Winner(*single),
        _ => GameResult::Draw(tied),
    }
}
