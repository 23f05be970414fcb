//! Benchmark command
//!
//! Measures solver performance across many random secrets.

use crate::core::Code;
use crate::game::{Codemaker, Outcome, SessionConfig, session};
use crate::solver::{Solver, Strategy};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub failures: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run the solver against each secret in turn.
///
/// The solver is reset between games so every game starts from the full
/// candidate space.
pub fn run_benchmark<S: Strategy>(solver: &mut Solver<S>, secrets: &[Code]) -> BenchmarkResult {
    let config = SessionConfig::default();
    let start = Instant::now();

    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut failures = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for &secret in secrets {
        solver.reset();
        let mut codemaker = Codemaker::new(secret);

        match session::run(solver, &mut codemaker, &config, |_| ()) {
            Ok(report) => match report.outcome {
                Outcome::Solved { rounds } => {
                    total_rounds += rounds;
                    min_rounds = min_rounds.min(rounds);
                    max_rounds = max_rounds.max(rounds);
                    *distribution.entry(rounds).or_insert(0) += 1;
                }
                Outcome::Exhausted => failures += 1,
            },
            // Cannot happen against an honest codemaker, but count it rather
            // than abort the whole run
            Err(_) => failures += 1,
        }
    }

    let duration = start.elapsed();
    let total_games = secrets.len();
    let solved = total_games - failures;

    BenchmarkResult {
        total_games,
        total_rounds,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        failures,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64(),
    }
}
