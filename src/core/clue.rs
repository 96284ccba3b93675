//! Wordle feedback clues
//!
//! A clue holds one [`Mark`] per position. Clues are produced by
//! [`generate_clue`] and consumed by the candidate filter; both sides share the
//! same duplicate-letter rules.

use super::word::ALPHABET_SIZE;
use crate::error::WordleError;
use std::fmt;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Letter is in this position (green)
    Correct,
    /// Letter is elsewhere in the solution (yellow)
    Present,
    /// No unclaimed occurrence of the letter remains (black)
    Absent,
}

impl Mark {
    /// Parse a `g`/`y`/`b` symbol, case-insensitively
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            'g' => Some(Self::Correct),
            'y' => Some(Self::Present),
            'b' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }
}

/// Per-position feedback for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clue {
    marks: Box<[Mark]>,
}

impl Clue {
    #[must_use]
    pub fn new(marks: Vec<Mark>) -> Self {
        Self {
            marks: marks.into_boxed_slice(),
        }
    }

    /// The all-`Correct` clue of the given length
    #[must_use]
    pub fn solved(length: usize) -> Self {
        Self::new(vec![Mark::Correct; length])
    }

    /// Parse a clue such as `"bbygb"` for a word of `length` letters
    ///
    /// # Errors
    /// Returns `InvalidClue` if the clue has the wrong length or contains a
    /// symbol other than `g`, `y` or `b`.
    ///
    /// # Examples
    /// ```
    /// use wordle_power::core::{Clue, Mark};
    ///
    /// let clue = Clue::parse("BbYgb", 5).unwrap();
    /// assert_eq!(clue.marks()[2], Mark::Present);
    /// assert_eq!(clue.to_string(), "bbygb");
    ///
    /// assert!(Clue::parse("bbyg", 5).is_err());
    /// assert!(Clue::parse("bbygx", 5).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, WordleError> {
        let trimmed = input.trim();
        let found = trimmed.chars().count();
        if found != length {
            return Err(WordleError::InvalidClue {
                input: input.to_string(),
                reason: format!("expected {length} symbols, got {found}"),
            });
        }

        let marks = trimmed
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                Mark::from_symbol(symbol).ok_or_else(|| WordleError::InvalidClue {
                    input: input.to_string(),
                    reason: format!("symbol {symbol:?} at position {position} is not g, y or b"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(marks))
    }

    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks.iter() {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

/// The clue `guess` receives when the answer is `solution`
///
/// Exact matches are claimed first; every other guess letter is `Present` only
/// while an unclaimed occurrence of it is left in the solution, scanning left
/// to right.
///
/// # Panics
/// Panics in debug mode if the two words differ in length
///
/// # Examples
/// ```
/// use wordle_power::core::{WordCodec, generate_clue};
///
/// let codec = WordCodec::default();
/// let solution = codec.encode("abxyz").unwrap();
/// let guess = codec.encode("aabbc").unwrap();
///
/// // one 'a' is claimed by the green, the second is not in the word
/// assert_eq!(generate_clue(&solution, &guess).to_string(), "gbybb");
/// ```
#[must_use]
pub fn generate_clue(solution: impl AsRef<[u8]>, guess: impl AsRef<[u8]>) -> Clue {
    let solution = solution.as_ref();
    let guess = guess.as_ref();
    debug_assert_eq!(solution.len(), guess.len(), "word lengths differ");

    let mut marks = vec![Mark::Absent; guess.len()];
    let mut unclaimed = [0usize; ALPHABET_SIZE];

    // First pass: greens, and tally the solution letters they leave unclaimed
    for (i, (&s, &g)) in solution.iter().zip(guess).enumerate() {
        if s == g {
            marks[i] = Mark::Correct;
        } else {
            unclaimed[s as usize] += 1;
        }
    }

    // Second pass: yellows from what is left
    for (mark, &g) in marks.iter_mut().zip(guess) {
        if *mark != Mark::Correct && unclaimed[g as usize] > 0 {
            *mark = Mark::Present;
            unclaimed[g as usize] -= 1;
        }
    }

    Clue::new(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;

    fn clue_for(solution: &str, guess: &str) -> String {
        let codec = WordCodec::default();
        generate_clue(
            codec.encode(solution).unwrap(),
            codec.encode(guess).unwrap(),
        )
        .to_string()
    }

    #[test]
    fn all_correct() {
        assert_eq!(clue_for("crane", "crane"), "ggggg");
        assert!(Clue::parse("ggggg", 5).unwrap().is_solved());
    }

    #[test]
    fn all_absent() {
        assert_eq!(clue_for("dream", "quick"), "bbbbb");
    }

    #[test]
    fn mixed() {
        // C(green) R(yellow) A(green) N(gray) E(gray)
        assert_eq!(clue_for("charm", "crane"), "gygbb");
        assert_eq!(clue_for("snbue", "roate"), "bbbbg");
    }

    #[test]
    fn repeated_guess_letter_single_in_solution() {
        // at most one mark for the single 'a' in the solution
        assert_eq!(clue_for("abxyz", "aabbc"), "gbybb");
        assert_eq!(clue_for("xyzab", "aabbc"), "ybybb");
    }

    #[test]
    fn green_claims_before_yellow() {
        // both E's land on greens, so only P is left to be yellow
        assert_eq!(clue_for("creep", "speed"), "byggb");
    }

    #[test]
    fn duplicate_letters_in_solution() {
        assert_eq!(clue_for("creep", "arose"), "bgbby");
        assert_eq!(clue_for("creep", "geese"), "bygbb");
        assert_eq!(clue_for("floor", "robot"), "yybgb");
    }

    #[test]
    fn trailing_letter_present_elsewhere() {
        assert_eq!(clue_for("caaaa", "aaaac"), "ygggy");
        assert_eq!(clue_for("aaaaa", "aaaac"), "ggggb");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            Clue::parse("GyB", 3).unwrap(),
            Clue::new(vec![Mark::Correct, Mark::Present, Mark::Absent])
        );
        assert_eq!(Clue::parse("  bbbbg\n", 5).unwrap().to_string(), "bbbbg");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            Clue::parse("gyb", 5),
            Err(WordleError::InvalidClue { .. })
        ));
        assert!(matches!(
            Clue::parse("gyb-g", 5),
            Err(WordleError::InvalidClue { .. })
        ));
        assert!(Clue::parse("", 5).is_err());
    }

    #[test]
    fn counts() {
        let clue = Clue::parse("gyybb", 5).unwrap();
        assert_eq!(clue.count(Mark::Correct), 1);
        assert_eq!(clue.count(Mark::Present), 2);
        assert_eq!(clue.count(Mark::Absent), 2);
        assert_eq!(Clue::solved(4).to_string(), "gggg");
    }
}
