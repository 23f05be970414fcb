//! Formatting utilities for terminal output

use crate::core::{Code, Feedback};
use colored::Colorize;

/// Format a code as a row of colored pegs
#[must_use]
pub fn code_pegs(code: &Code) -> String {
    let mut result = String::new();
    for &peg in code.pegs() {
        let (r, g, b) = peg.rgb();
        result.push_str(&"●".truecolor(r, g, b).to_string());
    }
    result
}

/// Format feedback as key pegs: filled for exact, hollow for color-only
#[must_use]
pub fn feedback_pegs(feedback: Feedback) -> String {
    let mut result = String::with_capacity(Code::LENGTH);
    for _ in 0..feedback.exact() {
        result.push('●');
    }
    for _ in 0..feedback.color() {
        result.push('○');
    }
    for _ in (feedback.exact() + feedback.color()) as usize..Code::LENGTH {
        result.push('·');
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how sharply a guess cuts the candidate set down
#[must_use]
pub fn reduction_bar(worst_case: usize, total: usize, width: usize) -> String {
    if total == 0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    let kept = worst_case as f64 / total as f64;
    create_progress_bar(1.0 - kept, 1.0, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_pegs_win() {
        assert_eq!(feedback_pegs(Feedback::WIN), "●●●●");
    }

    #[test]
    fn feedback_pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1)), "●●○·");
        assert_eq!(feedback_pegs(Feedback::new(0, 0)), "····");
    }

    #[test]
    fn code_pegs_renders_four_pegs() {
        colored::control::set_override(false);
        let code = Code::parse("rgby").unwrap();
        assert_eq!(code_pegs(&code), "●●●●");
        colored::control::unset_override();
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn reduction_bar_sharper_cut_is_fuller() {
        let sharp = reduction_bar(10, 1000, 10);
        let blunt = reduction_bar(900, 1000, 10);
        let sharp_filled = sharp.chars().filter(|&c| c == '█').count();
        let blunt_filled = blunt.chars().filter(|&c| c == '█').count();
        assert!(sharp_filled > blunt_filled);
    }
}
