//! Best-guess selection
//!
//! Scores the whole guess vocabulary, keeps every guess tied at the lowest
//! power, then prefers the tied guesses that could themselves be the answer.

use super::context::ScoringContext;
use super::power::power;
use crate::core::{Word, WordSet};
use crate::error::WordleError;
use rustc_hash::FxHashSet;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

/// Power of the guess at `index` in the vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub index: usize,
    pub score: u64,
}

/// How a new entry compared with the running minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinUpdate {
    NewMinimum,
    Tied,
    Worse,
}

/// The lowest score seen so far and every index that reached it
///
/// [`MinSet::merge`] is commutative and associative, so partial results can
/// be combined in whatever order workers finish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinSet {
    score: Option<u64>,
    indices: Vec<usize>,
}

impl MinSet {
    #[must_use]
    pub const fn score(&self) -> Option<u64> {
        self.score
    }

    /// Indices tied at the minimum, ascending
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        let mut indices = self.indices.clone();
        indices.sort_unstable();
        indices
    }

    pub fn observe(&mut self, entry: ScoreEntry) -> MinUpdate {
        match self.score {
            Some(best) if entry.score > best => MinUpdate::Worse,
            Some(best) if entry.score == best => {
                self.indices.push(entry.index);
                MinUpdate::Tied
            }
            _ => {
                self.score = Some(entry.score);
                self.indices.clear();
                self.indices.push(entry.index);
                MinUpdate::NewMinimum
            }
        }
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        match (self.score, other.score) {
            (_, None) => self,
            (None, Some(_)) => other,
            (Some(a), Some(b)) if a < b => self,
            (Some(a), Some(b)) if b < a => other,
            _ => {
                self.indices.extend(other.indices);
                self
            }
        }
    }
}

impl FromIterator<ScoreEntry> for MinSet {
    fn from_iter<I: IntoIterator<Item = ScoreEntry>>(iter: I) -> Self {
        let mut set = Self::default();
        for entry in iter {
            set.observe(entry);
        }
        set
    }
}

/// Receives scoring events on the coordinating thread
///
/// Sequential scoring reports entries in vocabulary order; parallel scoring
/// reports them in the order chunks complete.
pub trait ScoreObserver {
    fn on_round_start(&mut self, _guesses: &WordSet, _candidates: &WordSet) {}

    fn on_scored(&mut self, _entry: ScoreEntry) {}

    /// `best` already includes `entry`
    fn on_new_minimum(&mut self, _best: &MinSet, _entry: ScoreEntry) {}

    fn on_round_end(&mut self) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ScoreObserver for SilentObserver {}

/// Outcome of a best-guess round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestGuesses {
    /// Preferred guesses, alphabetical and without repeats
    pub words: Vec<Word>,
    /// Power shared by every guess in `words`
    pub score: u64,
    /// True when `words` were narrowed to guesses that are still candidates
    pub possible_solutions: bool,
    /// How many vocabulary entries tied at `score` before the preference
    pub tied: usize,
}

impl BestGuesses {
    /// The first preferred guess
    ///
    /// # Panics
    /// Never for a value returned by [`best_guess`], which always holds at least one word
    #[must_use]
    pub fn first(&self) -> &Word {
        &self.words[0]
    }
}

/// Find the guesses with the lowest power against `candidates`
///
/// # Errors
/// - `EmptyVocabulary` if `guesses` is empty
/// - `EmptyCandidateSet` if `candidates` is empty
/// - `InvalidLength` if the two sets hold words of different lengths
/// - `WorkerFailed` if any scoring chunk panics; nothing from that round is kept
///
/// # Examples
/// ```
/// use wordle_power::core::{WordCodec, WordSet};
/// use wordle_power::solver::{ScoringContext, SilentObserver, best_guess};
///
/// let codec = WordCodec::default();
/// let guesses = codec.encode_all(["zzzzz", "roate", "abide"]).unwrap();
/// let guesses = WordSet::from_words(5, &guesses).unwrap();
/// let candidates = codec.encode_all(["roate", "abase", "abide"]).unwrap();
/// let candidates = WordSet::from_words(5, &candidates).unwrap();
///
/// let ctx = ScoringContext::sequential();
/// let best = best_guess(&guesses, &candidates, &ctx, &mut SilentObserver).unwrap();
/// assert_eq!(best.score, 3);
/// assert!(best.possible_solutions);
/// ```
pub fn best_guess(
    guesses: &WordSet,
    candidates: &WordSet,
    ctx: &ScoringContext,
    observer: &mut dyn ScoreObserver,
) -> Result<BestGuesses, WordleError> {
    if guesses.is_empty() {
        return Err(WordleError::EmptyVocabulary);
    }
    if candidates.is_empty() {
        return Err(WordleError::EmptyCandidateSet);
    }
    if guesses.width() != candidates.width() {
        return Err(WordleError::InvalidLength {
            expected: candidates.width(),
            found: guesses.width(),
        });
    }

    observer.on_round_start(guesses, candidates);
    let best = match ctx.pool() {
        Some(pool) => score_parallel(guesses, candidates, ctx, pool, observer, power_of_row),
        None => Ok(score_sequential(guesses, candidates, observer)),
    };
    observer.on_round_end();
    let best = best?;

    Ok(prefer_candidates(guesses, candidates, &best))
}

fn record(best: &mut MinSet, entry: ScoreEntry, observer: &mut dyn ScoreObserver) {
    observer.on_scored(entry);
    if best.observe(entry) == MinUpdate::NewMinimum {
        observer.on_new_minimum(best, entry);
    }
}

fn score_sequential(
    guesses: &WordSet,
    candidates: &WordSet,
    observer: &mut dyn ScoreObserver,
) -> MinSet {
    let mut best = MinSet::default();
    for (index, guess) in guesses.rows().enumerate() {
        let entry = ScoreEntry {
            index,
            score: power(guess, candidates),
        };
        record(&mut best, entry, observer);
    }
    best
}

/// Scores one guess row against the candidates
type ScoreFn = fn(&[u8], &WordSet) -> u64;

fn power_of_row(guess: &[u8], candidates: &WordSet) -> u64 {
    power(guess, candidates)
}

fn score_range(
    guesses: &WordSet,
    candidates: &WordSet,
    range: Range<usize>,
    score: ScoreFn,
) -> Vec<ScoreEntry> {
    range
        .map(|index| ScoreEntry {
            index,
            score: score(guesses.row(index), candidates),
        })
        .collect()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "worker panicked".to_string())
}

/// A finished chunk: every entry it scored plus its local minimum set
type ChunkResult = (usize, Result<(Vec<ScoreEntry>, MinSet), String>);

fn score_parallel(
    guesses: &WordSet,
    candidates: &WordSet,
    ctx: &ScoringContext,
    pool: &rayon::ThreadPool,
    observer: &mut dyn ScoreObserver,
    score: ScoreFn,
) -> Result<MinSet, WordleError> {
    let ranges = ctx.chunk_ranges(guesses.len());
    let chunk_count = ranges.len();
    let (tx, rx) = mpsc::channel::<ChunkResult>();

    for (chunk, range) in ranges.into_iter().enumerate() {
        // snapshots share their buffers, so these clones are cheap
        let guesses = guesses.clone();
        let candidates = candidates.clone();
        let tx = tx.clone();
        pool.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                let entries = score_range(&guesses, &candidates, range, score);
                let local: MinSet = entries.iter().copied().collect();
                (entries, local)
            }))
            .map_err(|payload| panic_message(payload.as_ref()));
            // the coordinator may have given up on this round already
            let _ = tx.send((chunk, outcome));
        });
    }
    drop(tx);

    let mut best = MinSet::default();
    for _ in 0..chunk_count {
        match rx.recv() {
            Ok((_, Ok((entries, local)))) => {
                for &entry in &entries {
                    observer.on_scored(entry);
                }
                let improved = match (best.score(), local.score()) {
                    (None, Some(_)) => true,
                    (Some(current), Some(candidate)) => candidate < current,
                    (_, None) => false,
                };
                best = best.merge(local);
                if improved {
                    if let Some(&entry) = entries.iter().find(|e| Some(e.score) == best.score()) {
                        observer.on_new_minimum(&best, entry);
                    }
                }
            }
            Ok((chunk, Err(message))) => return Err(WordleError::WorkerFailed { chunk, message }),
            Err(_) => {
                return Err(WordleError::WorkerFailed {
                    chunk: chunk_count,
                    message: "worker exited without reporting".to_string(),
                });
            }
        }
    }
    Ok(best)
}

/// Apply the tie-break: tied guesses that are still candidates win
fn prefer_candidates(guesses: &WordSet, candidates: &WordSet, best: &MinSet) -> BestGuesses {
    let tied = best.indices();
    let possible: FxHashSet<&[u8]> = candidates.rows().collect();

    let mut words: Vec<Word> = tied
        .iter()
        .filter(|&&i| possible.contains(guesses.row(i)))
        .map(|&i| guesses.word(i))
        .collect();
    let possible_solutions = !words.is_empty();
    if !possible_solutions {
        words = tied.iter().map(|&i| guesses.word(i)).collect();
    }
    words.sort_unstable();
    words.dedup();

    BestGuesses {
        words,
        score: best.score().unwrap_or_default(),
        possible_solutions,
        tied: tied.len(),
    }
}
