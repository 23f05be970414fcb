//! Worst-case partition calculation
//!
//! Given a guess and a set of candidate secrets, partitions the candidates by
//! the feedback the guess would receive and measures the partition sizes.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Partition metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Largest partition size (worst-case remaining candidates)
    pub max_partition: usize,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Number of distinct feedback values the guess can produce
    pub partitions: usize,
}

/// Count candidates per feedback value for a guess.
#[must_use]
pub fn partition_counts(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate the worst-case remaining candidates for a guess.
///
/// For each feedback the guess could receive, count how many candidates would
/// produce it; the maximum count is the worst case.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::Code;
/// use mastermind_minimax::solver::minimax::max_partition;
///
/// let guess = Code::parse("rryy").unwrap();
/// let candidates = vec![Code::parse("rgby").unwrap(), Code::parse("oopp").unwrap()];
///
/// let worst = max_partition(&guess, &candidates);
/// assert!(worst <= 2); // Can't be more than total candidates
/// ```
#[must_use]
pub fn max_partition(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    partition_counts(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Calculate full partition metrics for a guess.
///
/// Returns worst case, expected remaining candidates, and partition count.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            max_partition: 0,
            expected_remaining: 0.0,
            partitions: 0,
        };
    }

    let counts = partition_counts(guess, candidates);
    let total = candidates.len() as f64;

    // Expected remaining = sum over partitions of p * |partition|
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        max_partition,
        expected_remaining,
        partitions: counts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_partition_perfect_split() {
        // Each candidate produces a different feedback: worst case is 1
        let guess = Code::parse("rgby").unwrap();
        let candidates = vec![
            Code::parse("rgby").unwrap(), // (4,0)
            Code::parse("oopp").unwrap(), // (0,0)
        ];

        assert_eq!(max_partition(&guess, &candidates), 1);
    }

    #[test]
    fn max_partition_no_split() {
        // All candidates score identically: worst case is all of them
        let guess = Code::parse("kkkk").unwrap();
        let candidates = vec![
            Code::parse("rrrr").unwrap(),
            Code::parse("gggg").unwrap(),
            Code::parse("bbbb").unwrap(),
        ];

        assert_eq!(max_partition(&guess, &candidates), 3);
    }

    #[test]
    fn max_partition_empty_candidates() {
        let guess = Code::parse("rgby").unwrap();
        assert_eq!(max_partition(&guess, &[]), 0);
    }

    #[test]
    fn max_partition_bounds() {
        let guess = Code::parse("rryy").unwrap();
        let candidates: Vec<Code> = Code::all().into_iter().step_by(37).collect();

        let worst = max_partition(&guess, &candidates);
        assert!(worst >= 1);
        assert!(worst <= candidates.len());
    }

    #[test]
    fn partition_counts_cover_all_candidates() {
        let guess = Code::parse("rryy").unwrap();
        let candidates: Vec<Code> = Code::all().into_iter().step_by(17).collect();

        let counts = partition_counts(&guess, &candidates);
        assert_eq!(counts.values().sum::<usize>(), candidates.len());
    }

    #[test]
    fn metrics_consistency() {
        let guess = Code::parse("rryy").unwrap();
        let candidates: Vec<Code> = Code::all().into_iter().step_by(11).collect();

        let metrics = calculate_metrics(&guess, &candidates);

        // Expected remaining can never exceed the worst case
        assert!(metrics.expected_remaining <= metrics.max_partition as f64);
        assert!(metrics.expected_remaining >= 1.0);
        // Feedback has at most 14 reachable values for 4 pegs
        assert!(metrics.partitions >= 1 && metrics.partitions <= 14);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Code::parse("rgby").unwrap();
        let metrics = calculate_metrics(&guess, &[]);

        assert_eq!(metrics.max_partition, 0);
        assert_eq!(metrics.partitions, 0);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }

    #[test]
    fn discriminating_guess_beats_blind_guess() {
        let candidates = vec![
            Code::parse("rrrr").unwrap(),
            Code::parse("gggg").unwrap(),
        ];

        // A guess sharing no colors with either candidate cannot split them
        let blind = Code::parse("kkkk").unwrap();
        // A candidate guess guarantees a split
        let sharp = Code::parse("rrrr").unwrap();

        assert!(max_partition(&sharp, &candidates) <= max_partition(&blind, &candidates));
    }
}
