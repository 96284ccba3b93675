//! Word list loading utilities
//!
//! Lines are trimmed and lower-cased; blank lines, lines of the wrong length
//! and lines with characters outside `a`..=`z` are skipped silently.

use crate::core::{Word, WordCodec, WordSet};
use std::fs;
use std::io;
use std::path::Path;

/// Encode every acceptable line of `content`, keeping file order
#[must_use]
pub fn parse_words(content: &str, codec: WordCodec) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                codec.encode(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_power::core::WordCodec;
/// use wordle_power::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordle_solutions.txt", WordCodec::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, codec: WordCodec) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, codec))
}

/// Load a file straight into a [`WordSet`]
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened, or
/// `InvalidInput` if the codec's word length is zero.
pub fn load_word_set<P: AsRef<Path>>(path: P, codec: WordCodec) -> io::Result<WordSet> {
    if codec.length() == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "word length must be at least 1",
        ));
    }
    let words = load_from_file(path, codec)?;
    Ok(WordSet::collect_rows(
        codec.length(),
        words.iter().map(Word::ranks),
    ))
}

/// Convert an in-memory list, skipping anything the codec rejects
///
/// # Examples
/// ```
/// use wordle_power::core::WordCodec;
/// use wordle_power::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "toolong", "SLATE"], WordCodec::default());
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], codec: WordCodec) -> Vec<Word> {
    slice.iter().filter_map(|&s| codec.encode(s).ok()).collect()
}

/// [`words_from_slice`] collected into a [`WordSet`]
///
/// # Panics
/// Panics if the codec's word length is zero
#[must_use]
pub fn word_set_from_slice(slice: &[&str], codec: WordCodec) -> WordSet {
    let words = words_from_slice(slice, codec);
    WordSet::collect_rows(codec.length(), words.iter().map(Word::ranks))
}
