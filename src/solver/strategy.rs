//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{SampleCaps, select_exhaustive, select_sampled};
use crate::core::Code;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for selecting the next guess from the live candidate set
pub trait Strategy {
    /// Select the next guess given the current candidates
    ///
    /// Returns `None` if the candidate set is empty.
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Sampled minimax (default)
    Sampled(SampledMinimax),
    /// Full minimax scan of the candidate set
    Exhaustive(ExhaustiveMinimax),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        match self {
            Self::Sampled(s) => s.select_guess(candidates),
            Self::Exhaustive(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "sampled", "exhaustive", "full", "random".
    /// Defaults to sampled minimax if the name is unrecognized. A seed makes
    /// the randomized strategies reproducible.
    #[must_use]
    pub fn from_name(name: &str, caps: SampleCaps, seed: Option<u64>) -> Self {
        match name {
            "exhaustive" | "full" => Self::Exhaustive(ExhaustiveMinimax),
            "random" => Self::Random(seed.map_or_else(RandomStrategy::new, RandomStrategy::seeded)),
            _ => Self::Sampled(seed.map_or_else(
                || SampledMinimax::new(caps),
                |s| SampledMinimax::seeded(caps, s),
            )),
        }
    }
}

/// Sampled minimax strategy
///
/// Approximates the classical minimax scan by drawing capped samples of
/// candidate guesses and candidate secrets each round.
pub struct SampledMinimax {
    caps: SampleCaps,
    rng: StdRng,
}

impl SampledMinimax {
    /// Create a sampled minimax strategy with an OS-seeded RNG
    #[must_use]
    pub fn new(caps: SampleCaps) -> Self {
        Self {
            caps,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a sampled minimax strategy with a fixed seed
    ///
    /// Seeded runs make guess sequences reproducible in tests.
    #[must_use]
    pub fn seeded(caps: SampleCaps, seed: u64) -> Self {
        Self {
            caps,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The sample caps in use
    #[must_use]
    pub const fn caps(&self) -> SampleCaps {
        self.caps
    }
}

impl Default for SampledMinimax {
    fn default() -> Self {
        Self::new(SampleCaps::default())
    }
}

impl Strategy for SampledMinimax {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        select_sampled(candidates, self.caps, &mut self.rng).map(|(code, _)| code)
    }
}

/// Exhaustive minimax strategy
///
/// Scans the full candidate set every round. Accurate but quadratic; fine once
/// the first feedback has cut the space down.
pub struct ExhaustiveMinimax;

impl Strategy for ExhaustiveMinimax {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        select_exhaustive(candidates).map(|(code, _)| code)
    }
}

/// Random strategy
///
/// Uniformly picks a live candidate. A baseline, and the degenerate endgame
/// choice when one or two candidates remain.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy with an OS-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a random strategy with a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_guess(&mut self, candidates: &[Code]) -> Option<Code> {
        candidates.choose(&mut self.rng).copied()
    }
}
