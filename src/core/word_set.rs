//! Immutable two-dimensional word array
//!
//! Rows are words, columns are letter positions. The backing buffer is shared,
//! so a `WordSet` is a cheap snapshot that can be handed to scoring workers.

use super::word::Word;
use crate::error::WordleError;
use rustc_hash::FxHashSet;
use std::slice::ChunksExact;
use std::sync::Arc;

/// A set of equal-length words stored row-major in one buffer
///
/// Every "modifying" operation returns a new `WordSet`; an existing snapshot
/// never changes.
#[derive(Debug, Clone)]
pub struct WordSet {
    width: usize,
    cells: Arc<[u8]>,
}

impl PartialEq for WordSet {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.cells == other.cells
    }
}

impl Eq for WordSet {}

impl WordSet {
    /// An empty set of words of the given width
    ///
    /// # Panics
    /// Panics if `width` is zero
    #[must_use]
    pub fn empty(width: usize) -> Self {
        assert!(width > 0, "word width must be positive");
        Self {
            width,
            cells: Arc::from(Vec::new()),
        }
    }

    /// Build a set from encoded words
    ///
    /// # Errors
    /// Returns `InvalidLength` if any word is not `width` letters long.
    pub fn from_words(width: usize, words: &[Word]) -> Result<Self, WordleError> {
        if let Some(bad) = words.iter().find(|w| w.len() != width) {
            return Err(WordleError::InvalidLength {
                expected: width,
                found: bad.len(),
            });
        }
        Ok(Self::collect_rows(
            width,
            words.iter().map(Word::ranks),
        ))
    }

    /// Build a set from rows that are already `width` long
    pub(crate) fn collect_rows<'a, I>(width: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        assert!(width > 0, "word width must be positive");
        let mut cells = Vec::new();
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend_from_slice(row);
        }
        Self {
            width,
            cells: Arc::from(cells),
        }
    }

    /// Word length (number of columns)
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of words (rows)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len() / self.width
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Letter ranks of row `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows in order
    #[inline]
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.cells.chunks_exact(self.width)
    }

    /// Owned copy of row `index`
    #[must_use]
    pub fn word(&self, index: usize) -> Word {
        Word::from_ranks(self.row(index))
    }

    /// All rows as owned words
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        self.rows().map(Word::from_ranks).collect()
    }

    /// Rows decoded to text
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.rows().map(|row| Word::from_ranks(row).to_string()).collect()
    }

    /// Index of the first row equal to `ranks`
    #[must_use]
    pub fn position(&self, ranks: &[u8]) -> Option<usize> {
        self.rows().position(|row| row == ranks)
    }

    #[must_use]
    pub fn contains(&self, ranks: &[u8]) -> bool {
        self.position(ranks).is_some()
    }

    /// New set holding the rows for which `keep` returns true
    #[must_use]
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&[u8]) -> bool,
    {
        Self::collect_rows(self.width, self.rows().filter(|row| keep(*row)))
    }

    /// New set without repeated rows; first occurrences keep their order
    #[must_use]
    pub fn dedup(&self) -> Self {
        let mut seen: FxHashSet<&[u8]> = FxHashSet::default();
        Self::collect_rows(self.width, self.rows().filter(|row| seen.insert(*row)))
    }

    /// New set holding the rows at `indices`, in the given order
    #[must_use]
    pub fn select(&self, indices: &[usize]) -> Self {
        Self::collect_rows(self.width, indices.iter().map(|&i| self.row(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;

    fn set(words: &[&str]) -> WordSet {
        let codec = WordCodec::default();
        WordSet::from_words(5, &codec.encode_all(words).unwrap()).unwrap()
    }

    #[test]
    fn rows_and_len() {
        let words = set(&["roate", "abase", "abide"]);
        assert_eq!(words.len(), 3);
        assert_eq!(words.width(), 5);
        assert_eq!(words.row(1), &[0, 1, 0, 18, 4]);
        assert_eq!(words.rows().count(), 3);
        assert_eq!(words.to_strings(), vec!["roate", "abase", "abide"]);
    }

    #[test]
    fn empty_set() {
        let words = WordSet::empty(5);
        assert!(words.is_empty());
        assert_eq!(words.len(), 0);
        assert_eq!(words.rows().count(), 0);
    }

    #[test]
    fn rejects_mismatched_width() {
        let codec = WordCodec::new(4);
        let words = codec.encode_all(["abcd"]).unwrap();
        assert_eq!(
            WordSet::from_words(5, &words),
            Err(WordleError::InvalidLength {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn retain_returns_new_snapshot() {
        let words = set(&["roate", "abase", "abide"]);
        let a_first = words.retain(|row| row[0] == 0);
        assert_eq!(a_first.to_strings(), vec!["abase", "abide"]);
        // original untouched
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn dedup_keeps_first_order() {
        let words = set(&["abide", "roate", "abide", "abase", "roate"]);
        assert_eq!(words.dedup().to_strings(), vec!["abide", "roate", "abase"]);
    }

    #[test]
    fn contains_and_position() {
        let codec = WordCodec::default();
        let words = set(&["roate", "abase"]);
        let abase = codec.encode("abase").unwrap();
        let crane = codec.encode("crane").unwrap();
        assert_eq!(words.position(abase.ranks()), Some(1));
        assert!(!words.contains(crane.ranks()));
    }

    #[test]
    fn select_by_index() {
        let words = set(&["roate", "abase", "abide"]);
        assert_eq!(words.select(&[2, 0]).to_strings(), vec!["abide", "roate"]);
        assert_eq!(words.word(0).to_string(), "roate");
    }
}
