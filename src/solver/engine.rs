//! Session state for one game
//!
//! A session holds the chain of candidate-set snapshots, the guess pool (which
//! shrinks too in hard mode) and the turn history. Each observed clue replaces
//! the snapshots; nothing is mutated in place.

use super::context::{ScoringContext, default_worker_count};
use super::filter::ClueConstraint;
use super::selector::{BestGuesses, ScoreObserver, best_guess};
use crate::core::{Clue, DEFAULT_WORD_LENGTH, Word, WordCodec, WordSet};
use crate::error::WordleError;

/// Opening guess used unless the first scan is requested explicitly
pub const DEFAULT_OPENER: &str = "roate";

/// Settings for a solving session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_length: usize,
    /// Scoring threads; `1` scores sequentially
    pub workers: usize,
    /// Guesses must also be consistent with every clue seen so far
    pub hard_mode: bool,
    /// Forced first guess, skipping the most expensive scan
    pub opener: Option<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            workers: default_worker_count(),
            hard_mode: false,
            opener: Some(DEFAULT_OPENER.to_string()),
        }
    }
}

impl SolverConfig {
    #[must_use]
    pub const fn codec(&self) -> WordCodec {
        WordCodec::new(self.word_length)
    }

    /// Build the scoring context for `workers`
    ///
    /// # Errors
    /// Returns `WorkerPool` if the threads cannot be started.
    pub fn scoring_context(&self) -> Result<ScoringContext, WordleError> {
        ScoringContext::new(self.workers)
    }
}

/// One observed guess and its effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// What the session proposes to play next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    /// The configured opening guess
    Opener(Word),
    /// Only one candidate is left
    OnlyCandidate(Word),
    /// Result of a full scoring round
    Computed(BestGuesses),
}

impl Suggestion {
    /// The word to play
    #[must_use]
    pub fn guess(&self) -> &Word {
        match self {
            Self::Opener(word) | Self::OnlyCandidate(word) => word,
            Self::Computed(best) => best.first(),
        }
    }
}

#[derive(Debug, Clone)]
struct Snapshot {
    guesses: WordSet,
    candidates: WordSet,
}

/// An in-progress game
#[derive(Debug, Clone)]
pub struct Session {
    codec: WordCodec,
    hard_mode: bool,
    opener: Option<Word>,
    snapshots: Vec<Snapshot>,
    history: Vec<Turn>,
}

impl Session {
    /// Start a game over the given vocabularies
    ///
    /// Repeated words are dropped from both lists.
    ///
    /// # Errors
    /// - `EmptyVocabulary` / `EmptyCandidateSet` for an empty list
    /// - `InvalidLength` if a list or the opener does not match `word_length`
    /// - `InvalidCharacter` for a malformed opener
    pub fn new(
        config: &SolverConfig,
        guesses: &WordSet,
        solutions: &WordSet,
    ) -> Result<Self, WordleError> {
        let codec = config.codec();
        if guesses.is_empty() {
            return Err(WordleError::EmptyVocabulary);
        }
        if solutions.is_empty() {
            return Err(WordleError::EmptyCandidateSet);
        }
        for width in [guesses.width(), solutions.width()] {
            if width != codec.length() {
                return Err(WordleError::InvalidLength {
                    expected: codec.length(),
                    found: width,
                });
            }
        }

        let opener = config
            .opener
            .as_deref()
            .map(|text| codec.encode(text))
            .transpose()?;

        Ok(Self {
            codec,
            hard_mode: config.hard_mode,
            opener,
            snapshots: vec![Snapshot {
                guesses: guesses.dedup(),
                candidates: solutions.dedup(),
            }],
            history: Vec::new(),
        })
    }

    #[must_use]
    pub const fn codec(&self) -> WordCodec {
        self.codec
    }

    fn current(&self) -> &Snapshot {
        // the first snapshot is never popped
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Words still consistent with every clue
    #[must_use]
    pub fn candidates(&self) -> &WordSet {
        &self.current().candidates
    }

    /// Words that may be guessed next
    #[must_use]
    pub fn guess_pool(&self) -> &WordSet {
        &self.current().guesses
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len() + 1
    }

    /// The answer, once a single candidate remains
    #[must_use]
    pub fn solution(&self) -> Option<Word> {
        (self.candidates().len() == 1).then(|| self.candidates().word(0))
    }

    /// Propose the next guess
    ///
    /// # Errors
    /// Returns `EmptyCandidateSet` once the clues have ruled out every word,
    /// plus anything [`best_guess`] reports.
    pub fn next_guess(
        &self,
        ctx: &ScoringContext,
        observer: &mut dyn ScoreObserver,
    ) -> Result<Suggestion, WordleError> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(WordleError::EmptyCandidateSet);
        }
        if let (true, Some(opener)) = (self.history.is_empty(), &self.opener) {
            return Ok(Suggestion::Opener(opener.clone()));
        }
        if candidates.len() == 1 {
            return Ok(Suggestion::OnlyCandidate(candidates.word(0)));
        }

        best_guess(self.guess_pool(), candidates, ctx, observer).map(Suggestion::Computed)
    }

    /// Record the clue `guess` received and narrow the snapshots
    ///
    /// Returns how many candidates remain; zero means the clues contradict
    /// each other (usually a typo) and can be taken back with [`Session::undo`].
    ///
    /// # Errors
    /// Returns `InvalidLength` or `InvalidClue` if `guess` or `clue` does not
    /// match the session's word length.
    pub fn observe(&mut self, guess: &Word, clue: &Clue) -> Result<usize, WordleError> {
        let length = self.codec.length();
        if guess.len() != length {
            return Err(WordleError::InvalidLength {
                expected: length,
                found: guess.len(),
            });
        }
        if clue.len() != length {
            return Err(WordleError::InvalidClue {
                input: clue.to_string(),
                reason: format!("expected {length} symbols, got {}", clue.len()),
            });
        }

        let constraint = ClueConstraint::new(guess, clue);
        let current = self.current();
        let candidates = constraint.apply(&current.candidates);
        let guesses = if self.hard_mode {
            let narrowed = constraint.apply(&current.guesses);
            // every remaining candidate is itself a legal hard-mode guess
            if narrowed.is_empty() {
                candidates.clone()
            } else {
                narrowed
            }
        } else {
            current.guesses.clone()
        };

        let turn = Turn {
            guess: guess.clone(),
            clue: clue.clone(),
            candidates_before: current.candidates.len(),
            candidates_after: candidates.len(),
        };
        let remaining = candidates.len();

        self.snapshots.push(Snapshot {
            guesses,
            candidates,
        });
        self.history.push(turn);
        Ok(remaining)
    }

    /// Parse `guess` and `clue` text, then [`Session::observe`] them
    ///
    /// # Errors
    /// Returns the codec or clue parsing error for malformed text.
    pub fn observe_text(&mut self, guess: &str, clue: &str) -> Result<usize, WordleError> {
        let guess = self.codec.encode(guess)?;
        let clue = Clue::parse(clue, self.codec.length())?;
        self.observe(&guess, &clue)
    }

    /// Take back the last observed clue
    pub fn undo(&mut self) -> Option<Turn> {
        let turn = self.history.pop()?;
        self.snapshots.pop();
        Some(turn)
    }

    /// Return to the opening position
    pub fn reset(&mut self) {
        self.snapshots.truncate(1);
        self.history.clear();
    }
}
