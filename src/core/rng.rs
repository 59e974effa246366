//! Deterministic random number generation with forking.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Forkable**: Each game in a session gets an independent stream
//!
//! ## Usage
//!
//! ```
//! use rust_bowling::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//!
//! // One fork per game keeps games independent of each other
//! let mut first = session.fork();
//! let mut second = session.fork();
//! assert_ne!(first.seed(), second.seed());
//!
//! // Pin counts never exceed the pins standing
//! assert!(first.gen_pins(7) <= 7);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for independent games.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Knock down a uniform number of pins in `0..=standing`.
    pub fn gen_pins(&mut self, standing: u8) -> u8 {
        self.inner.gen_range(0..=standing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_pins(10), rng2.gen_pins(10));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_pins(10)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_pins(10)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_gen_pins_bounds() {
        let mut rng = GameRng::new(7);
        for standing in 0..=10 {
            for _ in 0..50 {
                assert!(rng.gen_pins(standing) <= standing);
            }
        }
        assert_eq!(rng.gen_pins(0), 0);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| rng.gen_pins(10)).collect();
        let seq2: Vec<_> = (0..20).map(|_| forked.gen_pins(10)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..3 {
            assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        }
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(42);
        let a = rng.fork();
        let b = rng.fork();
        assert_ne!(a.seed(), b.seed());
    }
}
