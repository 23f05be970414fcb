//! Code solving command
//!
//! Cracks a specific secret code and returns the solution path.

use crate::core::Code;
use crate::game::{Codemaker, RoundRecord, SessionConfig, SessionError, SessionReport, session};
use crate::solver::{Solver, Strategy};

/// Configuration for cracking a code
pub struct SolveConfig {
    pub secret: Code,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self {
            secret,
            max_rounds: 10,
        }
    }
}

/// Result of cracking a code
pub struct SolveResult {
    pub secret: Code,
    pub report: SessionReport,
}

/// Crack a secret code with the given solver.
///
/// The sink receives each round as it is played, so callers can render the
/// game live (and pace it, if they want).
///
/// # Errors
///
/// Returns [`SessionError::Inconsistent`] only if the solver's candidate set
/// empties out, which cannot happen with an honest codemaker.
pub fn solve_code<S, F>(
    config: &SolveConfig,
    solver: &mut Solver<S>,
    sink: F,
) -> Result<SolveResult, SessionError>
where
    S: Strategy,
    F: FnMut(&RoundRecord),
{
    let mut codemaker = Codemaker::new(config.secret);
    let session_config = SessionConfig {
        max_rounds: config.max_rounds,
    };

    let report = session::run(solver, &mut codemaker, &session_config, sink)?;

    Ok(SolveResult {
        secret: config.secret,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::solver::ExhaustiveMinimax;

    #[test]
    fn solve_finds_secret() {
        let secret = Code::parse("bgyr").unwrap();
        let mut solver = Solver::new(ExhaustiveMinimax);

        let result = solve_code(&SolveConfig::new(secret), &mut solver, |_| ()).unwrap();

        assert!(result.report.is_solved());
        assert_eq!(result.secret, secret);
        assert_eq!(result.report.rounds.last().unwrap().guess, secret);
    }

    #[test]
    fn solve_records_candidate_reduction() {
        let secret = Code::parse("posk").unwrap();
        let mut solver = Solver::new(ExhaustiveMinimax);

        let result = solve_code(&SolveConfig::new(secret), &mut solver, |_| ()).unwrap();

        for round in &result.report.rounds {
            assert!(round.candidates_after <= round.candidates_before);
        }
    }

    #[test]
    fn solve_respects_round_limit() {
        let secret = Code::parse("rgby").unwrap();
        let mut solver = Solver::new(ExhaustiveMinimax);
        let mut config = SolveConfig::new(secret);
        config.max_rounds = 1;

        let result = solve_code(&config, &mut solver, |_| ()).unwrap();

        assert!(result.report.rounds.len() <= 1);
        // One round is not enough for this secret
        assert_eq!(result.report.outcome, Outcome::Exhausted);
    }

    #[test]
    fn solve_opener_as_secret_wins_first_round() {
        let secret = crate::solver::OPENING_GUESS;
        let mut solver = Solver::new(ExhaustiveMinimax);

        let result = solve_code(&SolveConfig::new(secret), &mut solver, |_| ()).unwrap();

        assert_eq!(result.report.outcome, Outcome::Solved { rounds: 1 });
    }
}
