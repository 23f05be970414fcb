//! Guess analysis command
//!
//! Measures how well a guess splits a candidate set into feedback buckets.

use crate::core::Code;
use crate::solver::minimax::{GuessMetrics, calculate_metrics};

/// Result of analyzing a guess against a candidate set
pub struct AnalysisResult {
    pub code: Code,
    pub total_candidates: usize,
    pub metrics: GuessMetrics,
}

/// Analyze a guess against a set of still-possible codes.
#[must_use]
pub fn analyze_code(code: Code, candidates: &[Code]) -> AnalysisResult {
    let metrics = calculate_metrics(&code, candidates);

    AnalysisResult {
        code,
        total_candidates: candidates.len(),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::OPENING_GUESS;

    #[test]
    fn analyze_against_full_space() {
        let space = Code::all();
        let result = analyze_code(OPENING_GUESS, &space);

        assert_eq!(result.total_candidates, Code::SPACE_SIZE);
        assert!(result.metrics.max_partition > 0);
        assert!(result.metrics.max_partition < Code::SPACE_SIZE);
        // At most 14 feedback values are reachable
        assert!(result.metrics.partitions <= 14);
    }

    #[test]
    fn expected_remaining_bounded_by_worst_case() {
        let space = Code::all();
        let result = analyze_code(Code::parse("rgby").unwrap(), &space);

        assert!(result.metrics.expected_remaining > 0.0);
        assert!(result.metrics.expected_remaining <= result.metrics.max_partition as f64);
    }

    #[test]
    fn repeated_colors_split_worse_than_distinct() {
        let space = Code::all();
        let distinct = analyze_code(Code::parse("rgby").unwrap(), &space);
        let monochrome = analyze_code(Code::parse("rrrr").unwrap(), &space);

        assert!(distinct.metrics.max_partition < monochrome.metrics.max_partition);
    }
}
