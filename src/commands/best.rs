//! Best guess command
//!
//! Runs a single full scan over the loaded vocabularies.

use crate::core::WordSet;
use crate::solver::{BestGuesses, ScoreObserver, ScoringContext, best_guess};
use anyhow::Result;
use std::time::{Duration, Instant};

/// Best guesses for the opening position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestReport {
    pub best: BestGuesses,
    pub candidates: usize,
    pub duration: Duration,
}

/// Score every guess against every candidate and keep the tied best
///
/// # Errors
///
/// Returns an error if either vocabulary is empty or a scoring worker fails.
pub fn find_best(
    guesses: &WordSet,
    candidates: &WordSet,
    ctx: &ScoringContext,
    observer: &mut dyn ScoreObserver,
) -> Result<BestReport> {
    let start = Instant::now();
    let candidates = candidates.dedup();
    let best = best_guess(&guesses.dedup(), &candidates, ctx, observer)?;

    Ok(BestReport {
        best,
        candidates: candidates.len(),
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;
    use crate::error::WordleError;
    use crate::solver::SilentObserver;
    use crate::wordlists::loader::word_set_from_slice;

    #[test]
    fn finds_tied_perfect_splitters() {
        let codec = WordCodec::default();
        let guesses = word_set_from_slice(&["zzzzz", "abide", "roate"], codec);
        let candidates = word_set_from_slice(&["roate", "abase", "abide", "snbue"], codec);

        let report = find_best(
            &guesses,
            &candidates,
            &ScoringContext::sequential(),
            &mut SilentObserver,
        )
        .unwrap();

        assert_eq!(report.candidates, 4);
        // ABIDE and ROATE both give every candidate its own clue
        assert_eq!(report.best.score, 4);
        let words: Vec<String> = report.best.words.iter().map(ToString::to_string).collect();
        assert_eq!(words, vec!["abide", "roate"]);
    }

    #[test]
    fn empty_solutions_is_an_error() {
        let codec = WordCodec::default();
        let guesses = word_set_from_slice(&["roate"], codec);

        let err = find_best(
            &guesses,
            &WordSet::empty(5),
            &ScoringContext::sequential(),
            &mut SilentObserver,
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WordleError>(),
            Some(WordleError::EmptyCandidateSet)
        ));
    }
}
