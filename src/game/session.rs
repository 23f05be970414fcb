//! Game session loop
//!
//! One turn-based round loop shared by every mode that lets the solver play:
//! suggest a guess, have the oracle score it, filter, repeat until the code is
//! cracked or the round cap runs out.

use super::oracle::Oracle;
use crate::core::{Code, Feedback};
use crate::solver::{Solver, Strategy};
use std::fmt;

/// Session parameters.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Maximum number of rounds before the game is lost (default 10)
    pub max_rounds: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_rounds: 10 }
    }
}

/// Terminal outcome of a session. Exhaustion is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The secret was guessed exactly, in this many rounds
    Solved { rounds: usize },
    /// The round cap was reached without an exact match
    Exhausted,
}

/// Record of one played round.
#[derive(Debug, Clone, Copy)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: usize,
    pub guess: Code,
    pub feedback: Feedback,
    /// Candidate count before this round's filtering
    pub candidates_before: usize,
    /// Candidate count after this round's filtering
    pub candidates_after: usize,
}

/// Full account of a finished session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: Outcome,
    pub rounds: Vec<RoundRecord>,
}

impl SessionReport {
    /// Whether the session ended with the code cracked
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, Outcome::Solved { .. })
    }
}

/// Session failure: the candidate set emptied out mid-game.
///
/// Can only happen when the oracle reports feedback inconsistent with its own
/// secret, e.g. a human codemaker mis-scoring a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    Inconsistent { round: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inconsistent { round } => write!(
                f,
                "no candidates remain at round {round}: feedback so far is inconsistent"
            ),
        }
    }
}

impl std::error::Error for SessionError {}

/// Run one complete session.
///
/// The sink receives every [`RoundRecord`] as it is produced, for live
/// rendering; callers that only want the report can pass `|_| ()`. Any pacing
/// delay between rounds belongs in the sink, not here.
///
/// # Errors
///
/// Returns [`SessionError::Inconsistent`] if the candidate set empties out,
/// which means the oracle's feedback contradicted itself.
pub fn run<S, O, F>(
    solver: &mut Solver<S>,
    oracle: &mut O,
    config: &SessionConfig,
    mut sink: F,
) -> Result<SessionReport, SessionError>
where
    S: Strategy,
    O: Oracle,
    F: FnMut(&RoundRecord),
{
    let mut rounds = Vec::new();

    for round in 1..=config.max_rounds {
        let candidates_before = solver.remaining();
        let guess = solver
            .next_guess()
            .ok_or(SessionError::Inconsistent { round })?;

        let feedback = oracle.score(&guess);

        if feedback.is_win() {
            let record = RoundRecord {
                round,
                guess,
                feedback,
                candidates_before,
                candidates_after: 1,
            };
            sink(&record);
            rounds.push(record);
            return Ok(SessionReport {
                outcome: Outcome::Solved { rounds: round },
                rounds,
            });
        }

        solver.apply_feedback(guess, feedback);

        let record = RoundRecord {
            round,
            guess,
            feedback,
            candidates_before,
            candidates_after: solver.remaining(),
        };
        sink(&record);
        rounds.push(record);
    }

    Ok(SessionReport {
        outcome: Outcome::Exhausted,
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::oracle::Codemaker;
    use crate::solver::minimax::SampleCaps;
    use crate::solver::{ExhaustiveMinimax, OPENING_GUESS, SampledMinimax};

    fn crack(secret: &str) -> SessionReport {
        let mut solver = Solver::new(ExhaustiveMinimax);
        let mut oracle = Codemaker::new(Code::parse(secret).unwrap());
        run(&mut solver, &mut oracle, &SessionConfig::default(), |_| ()).unwrap()
    }

    #[test]
    fn cracks_distinct_color_secret_within_cap() {
        let report = crack("rgby");

        assert!(report.is_solved());
        assert!(report.rounds.len() <= 10);
        assert_eq!(report.rounds[0].guess, OPENING_GUESS);

        // Secret with 4 distinct colors: the full scan stays under the cap
        if let Outcome::Solved { rounds } = report.outcome {
            assert!(rounds <= 8);
        }
    }

    #[test]
    fn cracks_monochrome_secret_within_cap() {
        let report = crack("kkkk");
        assert!(report.is_solved());
        assert!(report.rounds.len() <= 10);
    }

    #[test]
    fn rounds_shrink_candidates_until_determined() {
        let report = crack("opsk");

        for window in report.rounds.windows(2) {
            let earlier = window[0];
            assert!(earlier.candidates_after <= earlier.candidates_before);
            // Strict shrink unless already uniquely determined
            if earlier.candidates_before > 1 {
                assert!(earlier.candidates_after < earlier.candidates_before);
            }
        }
    }

    #[test]
    fn sampled_strategy_cracks_within_cap() {
        let mut solver = Solver::new(SampledMinimax::seeded(SampleCaps::default(), 1234));
        let mut oracle = Codemaker::new(Code::parse("rgby").unwrap());

        let report = run(&mut solver, &mut oracle, &SessionConfig::default(), |_| ()).unwrap();
        assert!(report.is_solved());
        assert!(report.rounds.len() <= 10);
    }

    #[test]
    fn lying_oracle_reported_as_inconsistent() {
        struct Liar;
        impl Oracle for Liar {
            fn score(&mut self, guess: &Code) -> Feedback {
                // (3,0) for every guess contradicts itself quickly
                let _ = guess;
                Feedback::new(3, 0)
            }
        }

        let mut solver = Solver::new(ExhaustiveMinimax);
        let result = run(&mut solver, &mut Liar, &SessionConfig::default(), |_| ());

        assert!(matches!(result, Err(SessionError::Inconsistent { .. })));
    }

    #[test]
    fn round_cap_yields_exhausted() {
        let mut solver = Solver::new(ExhaustiveMinimax);
        let mut oracle = Codemaker::new(Code::parse("rgby").unwrap());
        let config = SessionConfig { max_rounds: 1 };

        let report = run(&mut solver, &mut oracle, &config, |_| ()).unwrap();
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.rounds.len(), 1);
    }

    #[test]
    fn sink_sees_every_round() {
        let mut solver = Solver::new(ExhaustiveMinimax);
        let mut oracle = Codemaker::new(Code::parse("gbos").unwrap());

        let mut seen = 0;
        let report = run(
            &mut solver,
            &mut oracle,
            &SessionConfig::default(),
            |_record| seen += 1,
        )
        .unwrap();

        assert_eq!(seen, report.rounds.len());
    }
}
