//! Candidate filtering
//!
//! Narrows a [`WordSet`] to the words that would have produced an observed
//! clue. A candidate survives exactly when `generate_clue(candidate, guess)`
//! equals the observed clue, so the true solution is never eliminated.

use crate::core::{ALPHABET_SIZE, Clue, Mark, WordSet};

/// Occurrence bound for one guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterBound {
    letter: u8,
    /// Greens plus yellows for this letter
    min: usize,
    /// An `Absent` mark pins the count to `min`
    exact: bool,
}

/// Column predicates implied by one (guess, clue) observation
///
/// Positions are grouped by mark: `Correct` columns must equal the guess
/// letter, every other column must differ from it, and each guess letter gets
/// a lower (or exact) bound on how often it appears in the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueConstraint {
    fixed: Vec<(usize, u8)>,
    excluded: Vec<(usize, u8)>,
    bounds: Vec<LetterBound>,
    satisfiable: bool,
}

impl ClueConstraint {
    /// Compile the predicates for `guess` and `clue`
    ///
    /// A clue the generator can never emit (an `Absent` ahead of a `Present`
    /// for the same letter, or a length mismatch) matches nothing.
    #[must_use]
    pub fn new(guess: impl AsRef<[u8]>, clue: &Clue) -> Self {
        let guess = guess.as_ref();
        debug_assert_eq!(guess.len(), clue.len(), "clue length differs from guess");

        let mut fixed = Vec::new();
        let mut excluded = Vec::new();
        let mut min = [0usize; ALPHABET_SIZE];
        let mut absent_seen = [false; ALPHABET_SIZE];
        let mut in_guess = [false; ALPHABET_SIZE];
        let mut satisfiable = guess.len() == clue.len();

        for (position, (&letter, &mark)) in guess.iter().zip(clue.marks()).enumerate() {
            let idx = letter as usize;
            in_guess[idx] = true;
            match mark {
                Mark::Correct => {
                    fixed.push((position, letter));
                    min[idx] += 1;
                }
                Mark::Present => {
                    excluded.push((position, letter));
                    min[idx] += 1;
                    // yellows are handed out left to right, so none can follow a black
                    if absent_seen[idx] {
                        satisfiable = false;
                    }
                }
                Mark::Absent => {
                    excluded.push((position, letter));
                    absent_seen[idx] = true;
                }
            }
        }

        let bounds = (0..ALPHABET_SIZE)
            .filter(|&idx| in_guess[idx])
            .map(|idx| LetterBound {
                letter: idx as u8,
                min: min[idx],
                exact: absent_seen[idx],
            })
            .collect();

        Self {
            fixed,
            excluded,
            bounds,
            satisfiable,
        }
    }

    /// False when no word at all can produce the clue
    #[must_use]
    pub const fn is_satisfiable(&self) -> bool {
        self.satisfiable
    }

    /// Whether a single row is consistent with the observation
    #[cfg(test)]
    fn matches(&self, row: &[u8]) -> bool {
        self.satisfiable
            && self.fixed.iter().all(|&(pos, letter)| row[pos] == letter)
            && self.excluded.iter().all(|&(pos, letter)| row[pos] != letter)
            && self.bounds.iter().all(|bound| {
                let count = row.iter().filter(|&&r| r == bound.letter).count();
                if bound.exact {
                    count == bound.min
                } else {
                    count >= bound.min
                }
            })
    }

    /// Indices of surviving rows, narrowed one column group at a time
    fn survivors(&self, candidates: &WordSet) -> Vec<usize> {
        if !self.satisfiable {
            return Vec::new();
        }

        let mut alive: Vec<usize> = (0..candidates.len()).collect();

        for &(pos, letter) in &self.fixed {
            alive.retain(|&i| candidates.row(i)[pos] == letter);
            if alive.is_empty() {
                return alive;
            }
        }

        for &(pos, letter) in &self.excluded {
            alive.retain(|&i| candidates.row(i)[pos] != letter);
            if alive.is_empty() {
                return alive;
            }
        }

        for bound in &self.bounds {
            alive.retain(|&i| {
                let count = candidates
                    .row(i)
                    .iter()
                    .filter(|&&r| r == bound.letter)
                    .count();
                if bound.exact {
                    count == bound.min
                } else {
                    count >= bound.min
                }
            });
            if alive.is_empty() {
                break;
            }
        }

        alive
    }

    /// New word set holding the consistent candidates, in their original order
    #[must_use]
    pub fn apply(&self, candidates: &WordSet) -> WordSet {
        candidates.select(&self.survivors(candidates))
    }

    /// Number of consistent candidates, without building a new set
    #[must_use]
    pub fn count(&self, candidates: &WordSet) -> usize {
        self.survivors(candidates).len()
    }
}

/// Candidates still possible after `guess` received `clue`
///
/// Returns an empty set (not an error) when nothing survives, which usually
/// means the clue was entered wrongly.
///
/// # Examples
/// ```
/// use wordle_power::core::{Clue, WordCodec, WordSet};
/// use wordle_power::solver::filter;
///
/// let codec = WordCodec::default();
/// let words = codec.encode_all(["roate", "abase", "abide", "snbue"]).unwrap();
/// let candidates = WordSet::from_words(5, &words).unwrap();
///
/// let guess = codec.encode("roate").unwrap();
/// let clue = Clue::parse("bbbbg", 5).unwrap();
///
/// assert_eq!(filter(&candidates, &guess, &clue).to_strings(), vec!["snbue"]);
/// ```
#[must_use]
pub fn filter(candidates: &WordSet, guess: impl AsRef<[u8]>, clue: &Clue) -> WordSet {
    ClueConstraint::new(guess, clue).apply(candidates)
}

/// Size of `filter(candidates, guess, clue)`
#[must_use]
pub fn count_consistent(candidates: &WordSet, guess: impl AsRef<[u8]>, clue: &Clue) -> usize {
    ClueConstraint::new(guess, clue).count(candidates)
}
