//! Word codec
//!
//! Words are stored as fixed-length sequences of letter ranks (`a` = 0 .. `z` = 25)
//! so the filter and scorer can compare small integers instead of characters.

use crate::error::WordleError;
use std::fmt;

/// Number of letters in the recognised alphabet (`a`..=`z`)
pub const ALPHABET_SIZE: usize = 26;

/// Word length used when nothing else is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Per-letter occurrence counts, indexed by rank
pub type LetterCounts = [usize; ALPHABET_SIZE];

/// Map a letter to its rank, case-insensitively
#[inline]
#[must_use]
pub fn char_to_rank(c: char) -> Option<u8> {
    let lower = c.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| lower as u8 - b'a')
}

/// Map a rank back to its lowercase letter
///
/// # Panics
/// Panics in debug mode if `rank` is outside the alphabet
#[inline]
#[must_use]
pub fn rank_to_char(rank: u8) -> char {
    debug_assert!((rank as usize) < ALPHABET_SIZE, "rank out of range");
    char::from(b'a' + rank)
}

/// An encoded word: one letter rank per position
///
/// Ordering is lexicographic, which matches alphabetical order of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    ranks: Box<[u8]>,
}

impl Word {
    /// Build a word from ranks that are already known to be in range
    pub(crate) fn from_ranks(ranks: &[u8]) -> Self {
        debug_assert!(ranks.iter().all(|&r| (r as usize) < ALPHABET_SIZE));
        Self {
            ranks: ranks.into(),
        }
    }

    /// The letter ranks, one per position
    #[inline]
    #[must_use]
    pub fn ranks(&self) -> &[u8] {
        &self.ranks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Count of each letter in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        letter_counts(&self.ranks)
    }
}

/// Count of each letter in a row of ranks
#[inline]
#[must_use]
pub fn letter_counts(ranks: &[u8]) -> LetterCounts {
    let mut counts = [0; ALPHABET_SIZE];
    for &rank in ranks {
        counts[rank as usize] += 1;
    }
    counts
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.ranks
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &rank in self.ranks.iter() {
            write!(f, "{}", rank_to_char(rank))?;
        }
        Ok(())
    }
}

/// Converts between text and [`Word`] for one fixed word length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordCodec {
    length: usize,
}

impl Default for WordCodec {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LENGTH)
    }
}

impl WordCodec {
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self { length }
    }

    /// The fixed word length this codec accepts
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Encode a word, case-insensitively
    ///
    /// # Errors
    /// Returns `InvalidLength` if the text is not exactly `length` characters,
    /// and `InvalidCharacter` for anything outside `a`..=`z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_power::core::WordCodec;
    ///
    /// let codec = WordCodec::default();
    /// let word = codec.encode("Crane").unwrap();
    /// assert_eq!(word.ranks(), &[2, 17, 0, 13, 4]);
    /// assert_eq!(codec.decode(&word), "crane");
    ///
    /// assert!(codec.encode("cran3").is_err());
    /// assert!(codec.encode("cranes").is_err());
    /// ```
    pub fn encode(&self, text: &str) -> Result<Word, WordleError> {
        let found = text.chars().count();
        if found != self.length {
            return Err(WordleError::InvalidLength {
                expected: self.length,
                found,
            });
        }

        let ranks = text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                char_to_rank(character).ok_or(WordleError::InvalidCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Word {
            ranks: ranks.into_boxed_slice(),
        })
    }

    /// Decode a word back to lowercase text
    #[must_use]
    pub fn decode(&self, word: &Word) -> String {
        debug_assert_eq!(word.len(), self.length);
        word.to_string()
    }

    /// Encode a list of words, preserving order
    ///
    /// # Errors
    /// Fails on the first malformed word.
    pub fn encode_all<I, S>(&self, words: I) -> Result<Vec<Word>, WordleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.encode(word.as_ref()))
            .collect()
    }

    /// Decode a list of words, preserving order
    #[must_use]
    pub fn decode_all(&self, words: &[Word]) -> Vec<String> {
        words.iter().map(|word| self.decode(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_valid() {
        let codec = WordCodec::default();
        let word = codec.encode("roate").unwrap();
        assert_eq!(word.ranks(), &[17, 14, 0, 19, 4]);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn encode_uppercase_normalized() {
        let codec = WordCodec::default();
        assert_eq!(codec.encode("CRANE").unwrap(), codec.encode("crane").unwrap());
        assert_eq!(codec.encode("CrAnE").unwrap(), codec.encode("crane").unwrap());
    }

    #[test]
    fn encode_invalid_length() {
        let codec = WordCodec::default();
        assert_eq!(
            codec.encode("too long"),
            Err(WordleError::InvalidLength {
                expected: 5,
                found: 8
            })
        );
        assert_eq!(
            codec.encode(""),
            Err(WordleError::InvalidLength {
                expected: 5,
                found: 0
            })
        );
    }

    #[test]
    fn encode_invalid_characters() {
        let codec = WordCodec::default();
        assert_eq!(
            codec.encode("cran3"),
            Err(WordleError::InvalidCharacter {
                character: '3',
                position: 4
            })
        );
        assert!(codec.encode("cr ne").is_err());
        assert!(codec.encode("crän!").is_err());
    }

    #[test]
    fn non_ascii_length_counts_chars() {
        // "éclat" is five characters but six bytes
        let codec = WordCodec::default();
        assert!(matches!(
            codec.encode("éclat"),
            Err(WordleError::InvalidCharacter { position: 0, .. })
        ));
    }

    #[test]
    fn other_lengths() {
        let codec = WordCodec::new(3);
        assert_eq!(codec.decode(&codec.encode("abz").unwrap()), "abz");
        assert!(codec.encode("abcde").is_err());
    }

    #[test]
    fn batch_preserves_order() {
        let codec = WordCodec::default();
        let words = codec.encode_all(["slate", "abase", "crane"]).unwrap();
        assert_eq!(codec.decode_all(&words), vec!["slate", "abase", "crane"]);

        assert!(codec.encode_all(["slate", "nope"]).is_err());
    }

    #[test]
    fn ordering_is_alphabetical() {
        let codec = WordCodec::default();
        let a = codec.encode("abase").unwrap();
        let b = codec.encode("abide").unwrap();
        assert!(a < b);
    }

    #[test]
    fn counts_duplicates() {
        let codec = WordCodec::default();
        let counts = codec.encode("speed").unwrap().letter_counts();
        assert_eq!(counts[(b'e' - b'a') as usize], 2);
        assert_eq!(counts[(b's' - b'a') as usize], 1);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }
}
