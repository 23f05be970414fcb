//! Feedback scoring
//!
//! Feedback is the `(exact, color)` pair scoring a guess against a secret:
//! `exact` counts pegs with the right color in the right position, `color`
//! counts additional right colors in wrong positions. Each peg of either code
//! is consumed at most once across both counts, so `exact + color <= 4`.

use super::{Code, Color};
use std::fmt;

/// Feedback for a guess: exact-position matches and color-only matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    color: u8,
}

impl Feedback {
    /// The winning feedback: all four pegs in place.
    pub const WIN: Self = Self { exact: 4, color: 0 };

    /// Create feedback from raw counts.
    ///
    /// # Panics
    /// Panics in debug mode if the counts cannot score a 4-peg guess.
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color: u8) -> Self {
        debug_assert!(exact + color <= 4, "at most 4 pegs can score");
        Self { exact, color }
    }

    /// Pegs with the right color in the right position.
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Additional pegs with a right color in a wrong position.
    #[inline]
    #[must_use]
    pub const fn color(self) -> u8 {
        self.color
    }

    /// Whether this feedback means the guess equals the secret.
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact == 4
    }

    /// Score a guess against a secret.
    ///
    /// # Algorithm
    /// 1. First pass: count exact-position matches, consuming both pegs.
    /// 2. Second pass: for each unconsumed guess peg, consume the first
    ///    unconsumed secret peg of the same color (first match only, so
    ///    repeated colors are never double counted).
    ///
    /// Scoring is symmetric: `score(g, s) == score(s, g)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Feedback};
    ///
    /// let guess = Code::parse("rryy").unwrap();
    /// let secret = Code::parse("rgby").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    /// assert_eq!((feedback.exact(), feedback.color()), (2, 0));
    /// ```
    #[must_use]
    pub fn score(guess: &Code, secret: &Code) -> Self {
        Self::score_pegs(guess.pegs(), secret.pegs())
    }

    /// Score raw peg slices.
    ///
    /// Mismatched or wrong-length input reports `(0, 0)` rather than failing,
    /// so a caller holding malformed board state cannot crash the game loop.
    /// The typed [`Code`] path never hits this case.
    #[must_use]
    pub fn score_pegs(guess: &[Color], secret: &[Color]) -> Self {
        if guess.len() != Code::LENGTH || secret.len() != Code::LENGTH {
            return Self::new(0, 0);
        }

        let mut guess_used = [false; Code::LENGTH];
        let mut secret_used = [false; Code::LENGTH];

        let mut exact = 0;
        for i in 0..Code::LENGTH {
            if guess[i] == secret[i] {
                exact += 1;
                guess_used[i] = true;
                secret_used[i] = true;
            }
        }

        let mut color = 0;
        for i in 0..Code::LENGTH {
            if guess_used[i] {
                continue;
            }
            for j in 0..Code::LENGTH {
                if !secret_used[j] && guess[i] == secret[j] {
                    color += 1;
                    secret_used[j] = true;
                    break;
                }
            }
        }

        Self::new(exact, color)
    }

    /// Parse feedback entered as two counts, e.g. `"2 1"`, `"2,1"` or `"21"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();

        let (exact, color) = if let Some((e, c)) = s.split_once([' ', ',', '/']) {
            (e.trim().parse().ok()?, c.trim().parse().ok()?)
        } else {
            // Compact two-digit form
            let mut chars = s.chars();
            let e = chars.next()?.to_digit(10)?;
            let c = chars.next()?.to_digit(10)?;
            if chars.next().is_some() {
                return None;
            }
            (e as u8, c as u8)
        };

        if exact > 4 || color > 4 || exact + color > 4 {
            return None;
        }
        Some(Self::new(exact, color))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.exact, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fb(exact: u8, color: u8) -> Feedback {
        Feedback::new(exact, color)
    }

    #[test]
    fn reflexive_full_match() {
        for s in ["rrrr", "rgby", "opsk", "ryry"] {
            let code = Code::parse(s).unwrap();
            assert_eq!(Feedback::score(&code, &code), Feedback::WIN);
        }
    }

    #[test]
    fn win_iff_four_exact() {
        assert!(fb(4, 0).is_win());
        assert!(!fb(3, 0).is_win());
        assert!(!fb(0, 4).is_win());
    }

    #[test]
    fn no_matches() {
        let guess = Code::parse("rrrr").unwrap();
        let secret = Code::parse("gggg").unwrap();
        assert_eq!(Feedback::score(&guess, &secret), fb(0, 0));
    }

    #[test]
    fn color_only_matches() {
        // All four colors present, all in the wrong place
        let guess = Code::parse("rgby").unwrap();
        let secret = Code::parse("ybrg").unwrap();
        assert_eq!(Feedback::score(&guess, &secret), fb(0, 4));
    }

    #[test]
    fn exact_consumes_before_color() {
        // Secret has one red at position 0; the guess's second red must not
        // also score as a color match.
        let guess = Code::parse("rryy").unwrap();
        let secret = Code::parse("rgby").unwrap();
        assert_eq!(Feedback::score(&guess, &secret), fb(2, 0));
    }

    #[test]
    fn repeated_colors_not_double_counted() {
        // Guess has two reds, secret has one red in a different position:
        // exactly one color match.
        let guess = Code::parse("rrgg").unwrap();
        let secret = Code::parse("byyr").unwrap();
        assert_eq!(Feedback::score(&guess, &secret), fb(0, 1));

        // Guess has one red, secret has two reds: still one color match.
        let guess = Code::parse("gyyr").unwrap();
        let secret = Code::parse("rryy").unwrap();
        assert_eq!(Feedback::score(&guess, &secret), fb(1, 2));
    }

    #[test]
    fn counts_bounded_by_four() {
        let codes = Code::all();
        // Spot check a stride of pairs across the space
        for g in codes.iter().step_by(131) {
            for s in codes.iter().step_by(157) {
                let result = Feedback::score(g, s);
                assert!(result.exact() + result.color() <= 4);
                assert_eq!(result.is_win(), g == s);
            }
        }
    }

    #[test]
    fn scoring_is_symmetric() {
        let codes = Code::all();
        for g in codes.iter().step_by(97) {
            for s in codes.iter().step_by(113) {
                assert_eq!(Feedback::score(g, s), Feedback::score(s, g));
            }
        }
    }

    #[test]
    fn wrong_length_input_scores_zero() {
        let four = [Color::Red; 4];
        let three = [Color::Red; 3];
        assert_eq!(Feedback::score_pegs(&three, &four), fb(0, 0));
        assert_eq!(Feedback::score_pegs(&four, &three), fb(0, 0));
        assert_eq!(Feedback::score_pegs(&[], &four), fb(0, 0));
    }

    #[test]
    fn parse_accepts_common_forms() {
        assert_eq!(Feedback::parse("2 1"), Some(fb(2, 1)));
        assert_eq!(Feedback::parse("2,1"), Some(fb(2, 1)));
        assert_eq!(Feedback::parse("2/1"), Some(fb(2, 1)));
        assert_eq!(Feedback::parse("21"), Some(fb(2, 1)));
        assert_eq!(Feedback::parse(" 4 0 "), Some(Feedback::WIN));
        assert_eq!(Feedback::parse("0 0"), Some(fb(0, 0)));
    }

    #[test]
    fn parse_rejects_impossible_counts() {
        assert_eq!(Feedback::parse("3 2"), None);
        assert_eq!(Feedback::parse("5 0"), None);
        assert_eq!(Feedback::parse("321"), None);
        assert_eq!(Feedback::parse(""), None);
        assert_eq!(Feedback::parse("abc"), None);
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", fb(2, 1)), "(2,1)");
    }
}
