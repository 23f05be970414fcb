//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret code and gathers statistics.

use crate::core::Code;
use crate::game::{Codemaker, Outcome, SessionConfig, session};
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub num_rounds: usize,
    pub success: bool,
    pub duration: Duration,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    pub worst_codes: Vec<(Code, usize)>,
}

/// Run the solver on every possible secret (or a limited prefix of the
/// lexicographic enumeration).
pub fn run_test_all<S: Strategy>(solver: &mut Solver<S>, limit: Option<usize>) -> TestAllStatistics {
    let space = Code::all();
    let test_codes = &space[..limit.unwrap_or(space.len()).min(space.len())];

    println!("Testing {} secrets...", test_codes.len());

    let pb = ProgressBar::new(test_codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let config = SessionConfig::default();
    let mut results = Vec::with_capacity(test_codes.len());
    let mut round_distribution: HashMap<usize, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, &secret) in test_codes.iter().enumerate() {
        let game_start = Instant::now();
        solver.reset();
        let mut codemaker = Codemaker::new(secret);

        let (num_rounds, success) = match session::run(solver, &mut codemaker, &config, |_| ()) {
            Ok(report) => match report.outcome {
                Outcome::Solved { rounds } => (rounds, true),
                Outcome::Exhausted => (report.rounds.len(), false),
            },
            Err(_) => (0, false),
        };

        results.push(CodeTestResult {
            secret,
            num_rounds,
            success,
            duration: game_start.elapsed(),
        });

        if success {
            *round_distribution.entry(num_rounds).or_insert(0) += 1;
        }

        if idx % 64 == 0 && !results.is_empty() {
            let avg =
                results.iter().map(|r| r.num_rounds).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let total_rounds: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_rounds)
        .sum();
    let average_rounds = if solved_count > 0 {
        total_rounds as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_rounds = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_rounds)
        .max()
        .unwrap_or(0);

    let min_rounds = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_rounds)
        .min()
        .unwrap_or(0);

    let mut worst_codes: Vec<(Code, usize)> = results
        .iter()
        .filter(|r| r.success)
        .filter(|r| r.num_rounds >= 6)
        .map(|r| (r.secret, r.num_rounds))
        .collect();
    worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved_count,
        failed: failed_count,
        round_distribution,
        total_time,
        average_rounds,
        max_rounds,
        min_rounds,
        worst_codes,
    }
}

/// Print test-all statistics with colored formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n{}", "Overall Performance".bright_cyan().bold());
    println!("  Secrets tested:      {}", stats.total_codes);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_codes as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_codes as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:     {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_codes as f64
    );

    println!("\n{}", "Round Distribution".bright_cyan().bold());
    let max_count = *stats.round_distribution.values().max().unwrap_or(&1);
    for rounds in 1..=10 {
        let count = stats.round_distribution.get(&rounds).unwrap_or(&0);
        if stats.solved > 0 && *count > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = (*count * 40 / max_count).max(1);
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {rounds:2} rounds: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    // Each round distinguishes at most 14 feedback values, so no policy can
    // beat log base 14 of the space size on average
    println!("\n{}", "Theoretical Comparison".bright_cyan().bold());
    let floor = (stats.total_codes as f64).ln() / 14_f64.ln();
    println!("  Information floor:   {floor:.2} rounds (log\u{2081}\u{2084} of space)");
    println!(
        "  Our average:         {} rounds",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );

    if !stats.worst_codes.is_empty() {
        println!("\n{}", "Hardest Secrets (6+ rounds)".yellow().bold());
        for (code, rounds) in stats.worst_codes.iter().take(5) {
            println!("  {} ({} rounds)", code.to_string().yellow(), rounds);
        }
    }
}
