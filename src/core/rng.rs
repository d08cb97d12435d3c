//! Deterministic randomness for a table.
//!
//! Everything random about a game (deck order, starting seat, random
//! choosers) comes from one seed, so a seed plus the submitted actions
//! replays a game exactly.
//!
//! ```
//! use rust_uno::core::GameRng;
//!
//! let rng = GameRng::new(42);
//! let mut deck_stream = rng.for_context("deck");
//! let mut again = GameRng::new(42).for_context("deck");
//! assert_eq!(deck_stream.gen_range_usize(0..100), again.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// ChaCha8-backed RNG with forkable, context-separated streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Split off an independent stream, e.g. for a random chooser.
    ///
    /// Each fork advances the fork counter, so successive forks differ but
    /// are reproducible from the same seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// A stream dedicated to one purpose (deck shuffling, seat draw).
    ///
    /// Depends only on the seed and `context`, never on how much of the
    /// main stream has been consumed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Capture the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume a stream from a captured position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG position, independent of how much was generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        for _ in 0..50 {
            assert_eq!(a.gen_range_usize(0..1000), b.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_forks_differ_but_replay() {
        let mut rng = GameRng::new(42);
        let mut first = rng.fork();
        let mut second = rng.fork();
        let a: Vec<_> = (0..10).map(|_| first.gen_range_usize(0..1000)).collect();
        let b: Vec<_> = (0..10).map(|_| second.gen_range_usize(0..1000)).collect();
        assert_ne!(a, b);

        let mut replay = GameRng::new(42);
        assert_eq!(replay.fork().seed(), GameRng::new(42).fork().seed());
    }

    #[test]
    fn test_context_ignores_main_stream_position() {
        let mut rng = GameRng::new(9);
        let before = rng.for_context("deck").gen_range_usize(0..1_000_000);
        for _ in 0..20 {
            rng.gen_range_usize(0..10);
        }
        let after = rng.for_context("deck").gen_range_usize(0..1_000_000);
        assert_eq!(before, after);
        assert_ne!(
            rng.for_context("deck").seed(),
            rng.for_context("seat").seed()
        );
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = GameRng::new(1);
        let empty: Vec<u8> = vec![];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }

    #[test]
    fn test_state_round_trip_resumes_stream() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }
        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();
        assert_eq!(expected, actual);
    }
}
