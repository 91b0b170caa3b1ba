//! Deterministic random number generation.
//!
//! Every random decision (deck shuffles, patron draws, AI choices, the
//! experience gate) goes through a `GameRng` passed in explicitly. Seed
//! it for reproducible games; use `from_entropy` when reproducibility
//! does not matter.
//!
//! ## Simulation Usage
//!
//! ```
//! use rust_gems::core::GameRng;
//!
//! let master = GameRng::new(42);
//!
//! // Each game (and each retry of a game) gets its own stream
//! let mut game_3 = master.for_game(3, 0);
//! let mut again = master.for_game(3, 0);
//! assert_eq!(game_3.gen_index(100), again.gen_index(100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seedable RNG for setup and AI decisions.
///
/// ChaCha8 keeps streams fast and portable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Outcomes are not reproducible; tests should use `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one game attempt of a simulation.
    ///
    /// Depends only on this RNG's seed, the game index and the attempt
    /// number, so games can run in any order or in parallel and still
    /// reproduce.
    #[must_use]
    pub fn for_game(&self, game_index: u64, attempt: u64) -> Self {
        let mixed = self
            .seed
            .wrapping_add(game_index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
            .rotate_left(17)
            ^ attempt.wrapping_mul(GOLDEN_GAMMA.rotate_left(29));
        Self::new(mixed)
    }

    /// Uniform draw in [0, 1).
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform index in `0..len`. Panics if `len` is 0.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a uniformly random element.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Current position, for checkpointing alongside a game snapshot.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume from a checkpoint.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}
