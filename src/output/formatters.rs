//! Formatting utilities for terminal output

use crate::core::{Clue, Mark, Word, WordSet};

/// Format a clue as a row of coloured squares
#[must_use]
pub fn clue_to_emoji(clue: &Clue) -> String {
    clue.marks()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Upper-cased words joined by spaces, truncated after `limit` with a count
#[must_use]
pub fn word_list(words: &[Word], limit: usize) -> String {
    let mut shown: Vec<String> = words
        .iter()
        .take(limit)
        .map(|w| w.to_string().to_uppercase())
        .collect();
    if words.len() > limit {
        shown.push(format!("(+{} more)", words.len() - limit));
    }
    shown.join(" ")
}

/// Guess words at `indices`, joined by spaces
#[must_use]
pub fn indexed_words(guesses: &WordSet, indices: &[usize]) -> String {
    let words: Vec<Word> = indices.iter().map(|&i| guesses.word(i)).collect();
    word_list(&words, 8)
}

/// Average candidates left for a power of `score` over `candidates`
#[must_use]
pub fn average(score: u64, candidates: usize) -> f64 {
    if candidates == 0 {
        0.0
    } else {
        score as f64 / candidates as f64
    }
}
