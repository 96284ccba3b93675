//! Power report command
//!
//! Scores one word against the candidate vocabulary.

use crate::core::{WordCodec, WordSet};
use crate::solver::PowerSummary;
use anyhow::{Context, Result};

/// Result of scoring a single word
#[derive(Debug, Clone, PartialEq)]
pub struct PowerReport {
    pub word: String,
    pub summary: PowerSummary,
}

impl PowerReport {
    /// `"{power} {avg:.1} {pct:.1}%"`
    #[must_use]
    pub fn line(&self) -> String {
        format!(
            "{} {:.1} {:.1}%",
            self.summary.power,
            self.summary.average_remaining(),
            self.summary.eliminated_fraction() * 100.0
        )
    }
}

/// Compute the power of `word` against `candidates`
///
/// The word does not have to be in either vocabulary.
///
/// # Errors
///
/// Returns an error if `word` is not a valid word for `codec`.
pub fn report_power(word: &str, codec: WordCodec, candidates: &WordSet) -> Result<PowerReport> {
    let guess = codec
        .encode(word)
        .with_context(|| format!("Invalid word {word:?}"))?;

    Ok(PowerReport {
        word: guess.to_string(),
        summary: PowerSummary::evaluate(&guess, candidates),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::word_set_from_slice;

    #[test]
    fn report_for_perfect_split() {
        let codec = WordCodec::default();
        let candidates = word_set_from_slice(&["roate", "abase", "abide"], codec);

        let report = report_power("ROATE", codec, &candidates).unwrap();

        assert_eq!(report.word, "roate");
        assert_eq!(report.summary.power, 3);
        assert_eq!(report.line(), "3 1.0 66.7%");
    }

    #[test]
    fn report_for_useless_guess() {
        let codec = WordCodec::default();
        let candidates = word_set_from_slice(&["aaaaa", "bbbbb", "ccccc", "ddddd"], codec);

        let report = report_power("zzzzz", codec, &candidates).unwrap();

        assert_eq!(report.line(), "16 4.0 0.0%");
    }

    #[test]
    fn invalid_word_is_rejected() {
        let codec = WordCodec::default();
        let candidates = word_set_from_slice(&["roate"], codec);

        assert!(report_power("toolong", codec, &candidates).is_err());
        assert!(report_power("r0ate", codec, &candidates).is_err());
    }
}
