//! Benchmark command
//!
//! Plays a batch of randomly drawn targets and collects guess counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::{ScoreObserver, ScoringContext, Session};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Which targets to play and how many guesses each may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    pub max_guesses: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 0,
            max_guesses: 6,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count to number of solved targets
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Draw up to `count` distinct solutions, reproducibly for a given `seed`
#[must_use]
pub fn pick_targets(solutions: &[Word], count: usize, seed: u64) -> Vec<Word> {
    let mut rng = StdRng::seed_from_u64(seed);
    solutions.choose_multiple(&mut rng, count).cloned().collect()
}

/// Run the benchmark from the session's opening position
///
/// # Errors
///
/// Returns an error if a scoring round fails.
pub fn run_benchmark(
    session: &mut Session,
    ctx: &ScoringContext,
    config: BenchmarkConfig,
    observer: &mut dyn ScoreObserver,
) -> Result<BenchmarkResult> {
    session.reset();
    let targets = pick_targets(&session.candidates().words(), config.count, config.seed);

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for target in &targets {
        let solve_config = SolveConfig {
            target: target.to_string(),
            max_guesses: config.max_guesses,
        };
        let result = solve_word(&solve_config, session, ctx, observer)?;
        if !result.success {
            failures.push(result.target);
            continue;
        }

        let guesses = result.guesses.len();
        solved += 1;
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: if duration.is_zero() {
            0.0
        } else {
            total_words as f64 / duration.as_secs_f64()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;
    use crate::solver::{SilentObserver, SolverConfig};
    use crate::wordlists::loader::{word_set_from_slice, words_from_slice};

    const SOLUTIONS: &[&str] = &[
        "roate", "abase", "abide", "snbue", "crane", "slate", "irate", "crate", "grate",
        "trace", "speed", "creep", "erase", "geese",
    ];

    fn session() -> Session {
        let solutions = word_set_from_slice(SOLUTIONS, WordCodec::default());
        let config = SolverConfig {
            workers: 1,
            ..SolverConfig::default()
        };
        Session::new(&config, &solutions, &solutions).unwrap()
    }

    fn run(count: usize, seed: u64) -> BenchmarkResult {
        let config = BenchmarkConfig {
            count,
            seed,
            ..BenchmarkConfig::default()
        };
        run_benchmark(
            &mut session(),
            &ScoringContext::sequential(),
            config,
            &mut SilentObserver,
        )
        .unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = run(10, 7);

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let result = run(8, 3);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        let weighted: usize = result.distribution.iter().map(|(g, n)| g * n).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn count_is_capped_by_solutions() {
        let result = run(100, 1);
        assert_eq!(result.total_words, SOLUTIONS.len());
    }

    #[test]
    fn zero_targets() {
        let result = run(0, 1);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn targets_are_reproducible() {
        let words = words_from_slice(SOLUTIONS, WordCodec::default());

        let a = pick_targets(&words, 5, 42);
        let b = pick_targets(&words, 5, 42);
        assert_eq!(a, b);

        let mut unique = a.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 5);
    }
}
