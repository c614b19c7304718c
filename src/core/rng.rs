//! Deterministic random number generation for move sources.
//!
//! - **Deterministic**: same seed, same sequence of proposals
//! - **Checkpointable**: O(1) state capture alongside a game snapshot
//!
//! ```
//! use quantum_go::core::GameRng;
//!
//! let cells = [1, 2, 3, 4, 5];
//! let mut rng = GameRng::new(42);
//! let _ = rng.choose(&cells);
//!
//! let saved = rng.state();
//! let mut resumed = GameRng::from_state(&saved);
//! assert_eq!(rng.choose(&cells), resumed.choose(&cells));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8 RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self { inner, seed: state.seed }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(rng: &mut GameRng, n: usize) -> Vec<usize> {
        let cells: Vec<usize> = (0..361).collect();
        (0..n).map(|_| *rng.choose(&cells).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(picks(&mut rng1, 100), picks(&mut rng2, 100));
    }

    #[test]
    fn test_seeds_differ() {
        assert_ne!(picks(&mut GameRng::new(1), 20), picks(&mut GameRng::new(2), 20));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(7);
        let items = [1, 2, 3];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_roundtrip_continues_sequence() {
        let mut rng = GameRng::new(42);
        let _ = picks(&mut rng, 50);

        let state = rng.state();
        let expected = picks(&mut rng, 10);

        let mut restored = GameRng::from_state(&state);
        assert_eq!(expected, picks(&mut restored, 10));
    }
}
