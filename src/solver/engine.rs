//! Codebreaker solver
//!
//! Owns the candidate set for one game and drives guess selection.

use super::strategy::Strategy;
use crate::core::{Code, Color, Feedback};

/// Fixed opening guess: two pegs of the first palette color, two of the
/// second (Knuth's "1122" seed). The full space is uniformly uninformative,
/// so no search is spent on the first move.
pub const OPENING_GUESS: Code = Code::new([Color::Red, Color::Red, Color::Yellow, Color::Yellow]);

/// Codebreaker solver for a single game.
///
/// Holds the set of codes still consistent with every feedback received.
/// The set starts at the full 4096-code space and only ever shrinks; the
/// true secret stays a member as long as the feedback provider is honest.
pub struct Solver<S: Strategy> {
    strategy: S,
    candidates: Vec<Code>,
}

impl<S: Strategy> Solver<S> {
    /// Create a solver with a fresh full candidate set
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            candidates: Code::all(),
        }
    }

    /// Produce the next guess to play
    ///
    /// - Untouched full space: the fixed opening guess.
    /// - Single candidate: that candidate, no search.
    /// - Empty set: `None`. The feedback received so far is inconsistent,
    ///   which is a caller contract violation, not a solver state.
    pub fn next_guess(&mut self) -> Option<Code> {
        match self.candidates.len() {
            0 => None,
            1 => Some(self.candidates[0]),
            Code::SPACE_SIZE => Some(OPENING_GUESS),
            _ => self.strategy.select_guess(&self.candidates),
        }
    }

    /// Filter the candidate set on feedback received for a played guess
    ///
    /// Exact elimination: keeps precisely the codes that would have produced
    /// this feedback for this guess.
    pub fn apply_feedback(&mut self, guess: Code, feedback: Feedback) {
        self.candidates
            .retain(|candidate| Feedback::score(&guess, candidate) == feedback);
    }

    /// Codes still consistent with all feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Number of live candidates
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// Restore the full candidate set for a new game
    pub fn reset(&mut self) {
        self.candidates = Code::all();
    }
}
