//! Guess scoring
//!
//! The "power" of a guess is the number of candidates left after it, summed
//! over every candidate taken as the hypothetical answer. Smaller is better.

use super::filter::count_consistent;
use crate::core::{Clue, WordSet, generate_clue};
use rustc_hash::FxHashMap;

/// Power of `guess` against `candidates`
///
/// For each candidate `c`: generate the clue `guess` would get if `c` were the
/// answer, filter `candidates` by it, and add up the survivors. Candidates that
/// share a clue share a filter result, so each distinct clue is filtered once.
///
/// Bounds for a non-empty set of `n` candidates: `n` when every candidate gets
/// its own clue, `n * n` when the guess tells them all apart not at all.
///
/// # Examples
/// ```
/// use wordle_power::core::{WordCodec, WordSet};
/// use wordle_power::solver::power;
///
/// let codec = WordCodec::default();
/// let words = codec.encode_all(["roate", "abase", "abide"]).unwrap();
/// let candidates = WordSet::from_words(5, &words).unwrap();
///
/// // ROATE separates all three answers
/// assert_eq!(power(&codec.encode("roate").unwrap(), &candidates), 3);
/// // ZZZZZ learns nothing: 3 answers x 3 survivors
/// assert_eq!(power(&codec.encode("zzzzz").unwrap(), &candidates), 9);
/// ```
#[must_use]
pub fn power(guess: impl AsRef<[u8]>, candidates: &WordSet) -> u64 {
    let guess = guess.as_ref();
    let mut remaining_by_clue: FxHashMap<Clue, usize> = FxHashMap::default();

    candidates
        .rows()
        .map(|candidate| {
            let clue = generate_clue(candidate, guess);
            let remaining = *remaining_by_clue
                .entry(clue)
                .or_insert_with_key(|clue| count_consistent(candidates, guess, clue));
            remaining as u64
        })
        .sum()
}

/// Power of a guess together with the figures reported alongside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSummary {
    pub power: u64,
    pub candidates: usize,
}

impl PowerSummary {
    #[must_use]
    pub fn evaluate(guess: impl AsRef<[u8]>, candidates: &WordSet) -> Self {
        Self {
            power: power(guess, candidates),
            candidates: candidates.len(),
        }
    }

    /// Expected candidates left if every answer is equally likely
    #[must_use]
    pub fn average_remaining(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        self.power as f64 / self.candidates as f64
    }

    /// Expected fraction of the candidates eliminated, in `[0, 1)`
    #[must_use]
    pub fn eliminated_fraction(&self) -> f64 {
        if self.candidates == 0 {
            return 0.0;
        }
        1.0 - self.average_remaining() / self.candidates as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;
    use crate::solver::filter::filter;

    fn set(words: &[&str]) -> WordSet {
        let codec = WordCodec::default();
        WordSet::from_words(5, &codec.encode_all(words).unwrap()).unwrap()
    }

    fn word(text: &str) -> crate::core::Word {
        WordCodec::default().encode(text).unwrap()
    }

    /// Literal definition, one filter per candidate
    fn power_by_filtering(guess: &[u8], candidates: &WordSet) -> u64 {
        candidates
            .rows()
            .map(|c| filter(candidates, guess, &generate_clue(c, guess)).len() as u64)
            .sum()
    }

    #[test]
    fn matches_literal_definition() {
        let candidates = set(&[
            "speed", "creep", "erase", "geese", "abase", "abide", "roate", "snbue", "crane",
            "slate", "irate", "crate", "grate",
        ]);
        for guess in ["roate", "eerie", "crane", "zzzzz", "geese", "aaaac"] {
            let guess = word(guess);
            assert_eq!(
                power(&guess, &candidates),
                power_by_filtering(guess.ranks(), &candidates)
            );
        }
    }

    #[test]
    fn lower_and_upper_bounds() {
        let candidates = set(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let n = candidates.len() as u64;
        for guess in ["crane", "zzzzz", "abide", "eerie"] {
            let p = power(word(guess), &candidates);
            assert!(p >= n, "{guess}: {p} < {n}");
            assert!(p <= n * n, "{guess}: {p} > {}", n * n);
        }
    }

    #[test]
    fn no_discrimination_scores_square() {
        let candidates = set(&["aaaaa", "bbbbb", "ccccc"]);
        assert_eq!(power(word("zzzzz"), &candidates), 9);
    }

    #[test]
    fn perfect_split_scores_size() {
        let candidates = set(&["slate", "zzzzz"]);
        assert_eq!(power(word("slate"), &candidates), 2);
    }

    #[test]
    fn empty_candidates_score_zero() {
        assert_eq!(power(word("crane"), &WordSet::empty(5)), 0);
    }

    #[test]
    fn summary_figures() {
        let candidates = set(&["aaaaa", "bbbbb", "ccccc"]);
        let summary = PowerSummary::evaluate(word("zzzzz"), &candidates);
        assert_eq!(summary.power, 9);
        assert!((summary.average_remaining() - 3.0).abs() < f64::EPSILON);
        assert!(summary.eliminated_fraction().abs() < f64::EPSILON);

        let summary = PowerSummary::evaluate(word("aaaaa"), &candidates);
        // buckets {aaaaa}, {bbbbb, ccccc}: 1 + 2 + 2
        assert_eq!(summary.power, 5);
        assert!((summary.eliminated_fraction() - (1.0 - 5.0 / 9.0)).abs() < 1e-9);
    }
}
