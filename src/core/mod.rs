//! Core domain types for Wordle
//!
//! Encoded words, immutable word sets and feedback clues. Everything here is
//! pure and side-effect free.

mod clue;
mod word;
mod word_set;

pub use clue::{Clue, Mark, generate_clue};
pub use word::{
    ALPHABET_SIZE, DEFAULT_WORD_LENGTH, LetterCounts, Word, WordCodec, char_to_rank,
    letter_counts, rank_to_char,
};
pub use word_set::WordSet;
