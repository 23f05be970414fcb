//! Feedback providers
//!
//! The oracle is whoever holds the secret: a generated code when the computer
//! is codemaker, or a human scoring guesses by hand. The solver only ever sees
//! the feedback pairs.

use crate::core::{Code, Feedback};
use rand::Rng;

/// Source of feedback for played guesses.
pub trait Oracle {
    /// Score a guess against the held secret.
    fn score(&mut self, guess: &Code) -> Feedback;
}

/// Codemaker holding a fixed secret for the duration of one game.
#[derive(Debug, Clone, Copy)]
pub struct Codemaker {
    secret: Code,
}

impl Codemaker {
    /// Hold a given secret.
    #[must_use]
    pub const fn new(secret: Code) -> Self {
        Self { secret }
    }

    /// Hold a freshly drawn random secret.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            secret: Code::random(rng),
        }
    }

    /// Reveal the secret (game-end reveal only).
    #[must_use]
    pub const fn secret(&self) -> Code {
        self.secret
    }
}

impl Oracle for Codemaker {
    fn score(&mut self, guess: &Code) -> Feedback {
        Feedback::score(guess, &self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codemaker_scores_against_secret() {
        let secret = Code::parse("rgby").unwrap();
        let mut maker = Codemaker::new(secret);

        assert_eq!(maker.score(&secret), Feedback::WIN);
        assert_eq!(
            maker.score(&Code::parse("oops").unwrap()),
            Feedback::new(0, 0)
        );
        assert_eq!(maker.secret(), secret);
    }

    #[test]
    fn random_codemaker_is_seed_stable() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let a = Codemaker::random(&mut StdRng::seed_from_u64(11));
        let b = Codemaker::random(&mut StdRng::seed_from_u64(11));
        assert_eq!(a.secret(), b.secret());
    }
}
