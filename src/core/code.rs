//! Code representation
//!
//! A Code is an ordered sequence of exactly four pegs, repetition allowed.

use super::Color;
use rand::Rng;
use std::fmt;

/// A four-peg code.
///
/// Two codes are equal iff all four positions match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Color; 4]);

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnknownColor(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {} pegs, got {len}", Code::LENGTH)
            }
            Self::UnknownColor(c) => write!(f, "Unknown color letter '{c}' (use r y o p b g s k)"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Number of pegs in a code.
    pub const LENGTH: usize = 4;

    /// Size of the full code space (8^4).
    pub const SPACE_SIZE: usize = Color::COUNT.pow(4);

    /// Create a code from four pegs.
    #[inline]
    #[must_use]
    pub const fn new(pegs: [Color; 4]) -> Self {
        Self(pegs)
    }

    /// Create a code from a peg slice.
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` if the slice is not exactly 4 pegs.
    pub fn from_slice(pegs: &[Color]) -> Result<Self, CodeError> {
        let pegs: [Color; 4] = pegs
            .try_into()
            .map_err(|_| CodeError::InvalidLength(pegs.len()))?;
        Ok(Self(pegs))
    }

    /// Parse a code from four color initials, e.g. `"rgby"`.
    ///
    /// # Errors
    /// Returns `CodeError` if the string is not exactly four known initials.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Color};
    ///
    /// let code = Code::parse("rryy").unwrap();
    /// assert_eq!(code.peg(0), Color::Red);
    /// assert_eq!(code.peg(3), Color::Yellow);
    ///
    /// assert!(Code::parse("rgb").is_err());
    /// assert!(Code::parse("rgbx").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != Self::LENGTH {
            return Err(CodeError::InvalidLength(chars.len()));
        }

        let mut pegs = [Color::Red; 4];
        for (i, &c) in chars.iter().enumerate() {
            pegs[i] = Color::from_initial(c).ok_or(CodeError::UnknownColor(c))?;
        }
        Ok(Self(pegs))
    }

    /// The pegs as an array.
    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Color; 4] {
        &self.0
    }

    /// The peg at a position (0-3).
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn peg(self, position: usize) -> Color {
        self.0[position]
    }

    /// Enumerate the full code space in lexicographic palette order.
    ///
    /// Returns all 4096 codes; the initial candidate set of every game.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(Self::SPACE_SIZE);
        for a in Color::ALL {
            for b in Color::ALL {
                for c in Color::ALL {
                    for d in Color::ALL {
                        codes.push(Self([a, b, c, d]));
                    }
                }
            }
        }
        codes
    }

    /// Draw a uniformly random code.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pegs = [Color::Red; 4];
        for peg in &mut pegs {
            let index = rng.random_range(0..Color::COUNT);
            // Index is always in range by construction
            *peg = Color::from_index(index).unwrap_or(Color::Red);
        }
        Self(pegs)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in self.0 {
            write!(f, "{}", peg.initial().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_valid() {
        let code = Code::parse("rgby").unwrap();
        assert_eq!(
            code.pegs(),
            &[Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
    }

    #[test]
    fn parse_uppercase_normalized() {
        assert_eq!(Code::parse("RGBY").unwrap(), Code::parse("rgby").unwrap());
        assert_eq!(Code::parse("RgBy").unwrap(), Code::parse("rgby").unwrap());
    }

    #[test]
    fn parse_invalid_length() {
        assert!(matches!(Code::parse("rgb"), Err(CodeError::InvalidLength(3))));
        assert!(matches!(
            Code::parse("rgbyr"),
            Err(CodeError::InvalidLength(5))
        ));
        assert!(matches!(Code::parse(""), Err(CodeError::InvalidLength(0))));
    }

    #[test]
    fn parse_unknown_color() {
        assert!(matches!(
            Code::parse("rgbx"),
            Err(CodeError::UnknownColor('x'))
        ));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(matches!(
            Code::from_slice(&[Color::Red; 3]),
            Err(CodeError::InvalidLength(3))
        ));
        assert!(matches!(
            Code::from_slice(&[Color::Red; 5]),
            Err(CodeError::InvalidLength(5))
        ));
        assert!(Code::from_slice(&[Color::Red; 4]).is_ok());
    }

    #[test]
    fn all_enumerates_full_space() {
        let codes = Code::all();
        assert_eq!(codes.len(), 4096);
        assert_eq!(codes.len(), Code::SPACE_SIZE);

        // First and last codes in lexicographic order
        assert_eq!(codes[0], Code::new([Color::Red; 4]));
        assert_eq!(codes[4095], Code::new([Color::Black; 4]));
    }

    #[test]
    fn all_has_no_duplicates() {
        let codes = Code::all();
        let unique: std::collections::HashSet<Code> = codes.iter().copied().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn random_is_deterministic_for_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(Code::random(&mut a), Code::random(&mut b));
    }

    #[test]
    fn equality_is_positional() {
        assert_eq!(Code::parse("rgby").unwrap(), Code::parse("rgby").unwrap());
        assert_ne!(Code::parse("rgby").unwrap(), Code::parse("ygbr").unwrap());
    }

    #[test]
    fn display_round_trips() {
        let code = Code::parse("opsk").unwrap();
        assert_eq!(format!("{code}"), "OPSK");
        assert_eq!(Code::parse(&format!("{code}")).unwrap(), code);
    }
}
