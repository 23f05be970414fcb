//! Display functions for command results

use super::formatters::{code_pegs, feedback_pegs, reduction_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::game::RoundRecord;
use colored::Colorize;

/// Print one played round on a single line
pub fn print_round(record: &RoundRecord) {
    println!(
        "Round {}: {} {} {}  [{} → {} candidates]",
        record.round,
        code_pegs(&record.guess),
        record.guess.to_string().bright_white().bold(),
        feedback_pegs(record.feedback),
        record.candidates_before,
        record.candidates_after
    );
}

/// Print the result of cracking a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {} {}",
        code_pegs(&result.secret),
        result.secret.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &result.report.rounds {
        println!(
            "\nRound {}: {} {} {}",
            record.round,
            code_pegs(&record.guess),
            record.guess.to_string().bright_white().bold(),
            feedback_pegs(record.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                record.candidates_before, record.candidates_after
            );

            if record.candidates_after > 0 {
                let reduction = record.candidates_before as f64 / record.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    if result.report.is_solved() {
        println!(
            "{}",
            format!("Cracked in {} rounds!", result.report.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not cracked in {} rounds", result.report.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {}",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        code_pegs(&result.code),
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = reduction_bar(result.metrics.max_partition, result.total_candidates, 30);

    println!("\nAgainst {} possible codes:", result.total_candidates);
    println!(
        "   Reduction:   [{}] worst case keeps {}",
        bar.green(),
        format!("{}", result.metrics.max_partition).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    println!("   Buckets:     {} feedback values", result.metrics.partitions);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    if result.failures > 0 {
        println!(
            "   Unsolved:         {}",
            format!("{}", result.failures).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=10 {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {rounds:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
