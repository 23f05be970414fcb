//! Minimax guess selection
//!
//! Selects the guess minimizing the worst-case remaining candidate count,
//! either over the full candidate set or over random samples of it.

use super::calculator::max_partition;
use crate::core::Code;
use rand::Rng;
use rayon::prelude::*;

/// Sample-size caps for the sampled minimax scan.
///
/// The classical minimax scan costs |candidates|² feedback evaluations per
/// round. Capping both the guesses considered and the secrets simulated keeps
/// a round under `guess_cap * eval_cap` evaluations at the price of a slightly
/// worse split. Both caps are tunable.
#[derive(Debug, Clone, Copy)]
pub struct SampleCaps {
    /// Maximum number of candidate guesses to consider (default 50)
    pub guess_cap: usize,
    /// Maximum number of candidate secrets to simulate (default 80)
    pub eval_cap: usize,
}

impl Default for SampleCaps {
    fn default() -> Self {
        Self {
            guess_cap: 50,
            eval_cap: 80,
        }
    }
}

/// Select the best guess from random samples of the candidate set.
///
/// Draws a guess sample and an evaluation sample (uniform, without
/// replacement, whole set when under the cap) and returns the sampled guess
/// with the lowest worst-case bucket, plus that worst case. Ties keep the
/// first minimizer found; every sampled guess is itself a live candidate, so
/// the live-membership preference never displaces it.
///
/// Returns `None` if the candidate set is empty.
#[must_use]
pub fn select_sampled<R: Rng + ?Sized>(
    candidates: &[Code],
    caps: SampleCaps,
    rng: &mut R,
) -> Option<(Code, usize)> {
    if candidates.is_empty() {
        return None;
    }
    if candidates.len() == 1 {
        return Some((candidates[0], 0));
    }

    let guess_pool = sample_codes(candidates, caps.guess_cap.max(1), rng);
    let eval_pool = sample_codes(candidates, caps.eval_cap.max(1), rng);

    let mut best: Option<(Code, usize)> = None;
    for &guess in &guess_pool {
        let worst = max_partition(&guess, &eval_pool);
        match best {
            Some((_, best_worst)) if worst >= best_worst => {}
            _ => best = Some((guess, worst)),
        }
    }

    best
}

/// Select the best guess by scanning the full candidate set.
///
/// Every candidate is scored as a guess against every candidate as a secret;
/// ties break toward the earliest candidate so results are deterministic.
///
/// Returns `None` if the candidate set is empty.
#[must_use]
pub fn select_exhaustive(candidates: &[Code]) -> Option<(Code, usize)> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (max_partition(guess, candidates), index))
        .min_by_key(|&(worst, index)| (worst, index))
        .map(|(worst, index)| (candidates[index], worst))
}

/// Draw up to `cap` codes uniformly without replacement.
fn sample_codes<R: Rng + ?Sized>(codes: &[Code], cap: usize, rng: &mut R) -> Vec<Code> {
    if codes.len() <= cap {
        return codes.to_vec();
    }

    rand::seq::index::sample(rng, codes.len(), cap)
        .into_iter()
        .map(|i| codes[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_candidates() -> Vec<Code> {
        vec![
            Code::parse("rrrr").unwrap(),
            Code::parse("rrgg").unwrap(),
            Code::parse("ggrr").unwrap(),
            Code::parse("gggg").unwrap(),
        ]
    }

    #[test]
    fn sampled_returns_live_candidate() {
        let candidates = small_candidates();
        let mut rng = StdRng::seed_from_u64(1);

        let (best, worst) = select_sampled(&candidates, SampleCaps::default(), &mut rng).unwrap();

        assert!(candidates.contains(&best));
        assert!(worst <= candidates.len());
    }

    #[test]
    fn sampled_empty_candidates() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_sampled(&[], SampleCaps::default(), &mut rng).is_none());
    }

    #[test]
    fn sampled_single_candidate_shortcut() {
        let only = Code::parse("rgby").unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        let (best, worst) = select_sampled(&[only], SampleCaps::default(), &mut rng).unwrap();
        assert_eq!(best, only);
        assert_eq!(worst, 0);
    }

    #[test]
    fn sampled_deterministic_for_seed() {
        let candidates: Vec<Code> = Code::all().into_iter().step_by(13).collect();
        let caps = SampleCaps::default();

        let a = select_sampled(&candidates, caps, &mut StdRng::seed_from_u64(42));
        let b = select_sampled(&candidates, caps, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn sampled_respects_caps_below_set_size() {
        // With caps of 1 the scan still returns a live candidate
        let candidates = small_candidates();
        let caps = SampleCaps {
            guess_cap: 1,
            eval_cap: 1,
        };
        let mut rng = StdRng::seed_from_u64(3);

        let (best, _) = select_sampled(&candidates, caps, &mut rng).unwrap();
        assert!(candidates.contains(&best));
    }

    #[test]
    fn exhaustive_minimizes_worst_case() {
        let candidates = small_candidates();
        let (best, worst) = select_exhaustive(&candidates).unwrap();

        for guess in &candidates {
            assert!(worst <= max_partition(guess, &candidates));
        }
        assert!(candidates.contains(&best));
    }

    #[test]
    fn exhaustive_is_deterministic() {
        let candidates: Vec<Code> = Code::all().into_iter().step_by(101).collect();
        assert_eq!(select_exhaustive(&candidates), select_exhaustive(&candidates));
    }

    #[test]
    fn exhaustive_empty_candidates() {
        assert!(select_exhaustive(&[]).is_none());
    }

    #[test]
    fn sample_codes_without_replacement() {
        let codes = Code::all();
        let mut rng = StdRng::seed_from_u64(9);

        let sample = sample_codes(&codes, 50, &mut rng);
        assert_eq!(sample.len(), 50);

        let unique: std::collections::HashSet<Code> = sample.iter().copied().collect();
        assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn sample_codes_returns_all_when_under_cap() {
        let codes = small_candidates();
        let mut rng = StdRng::seed_from_u64(9);

        let sample = sample_codes(&codes, 50, &mut rng);
        assert_eq!(sample, codes);
    }
}
