//! Codebreaking algorithms
//!
//! Candidate-set management and guess selection strategies.

mod engine;
pub mod minimax;
pub mod strategy;

pub use engine::{OPENING_GUESS, Solver};
pub use strategy::{ExhaustiveMinimax, RandomStrategy, SampledMinimax, Strategy, StrategyType};
