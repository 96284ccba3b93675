//! Word solving command
//!
//! Plays a session against a known target and returns the solution path.

use crate::core::{Clue, generate_clue};
use crate::solver::{ScoreObserver, ScoringContext, Session, Suggestion};
use anyhow::{Context, Result, bail};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub clue: Clue,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Power of the guess, when it came from a scoring round
    pub power: Option<u64>,
}

/// Solve `config.target`, starting the session from its opening position
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid for the session's word length
/// - The target is not one of the session's solutions
/// - A scoring round fails
pub fn solve_word(
    config: &SolveConfig,
    session: &mut Session,
    ctx: &ScoringContext,
    observer: &mut dyn ScoreObserver,
) -> Result<SolveResult> {
    let target = session
        .codec()
        .encode(&config.target)
        .with_context(|| format!("Invalid target word {:?}", config.target))?;

    session.reset();
    if !session.candidates().contains(target.ranks()) {
        bail!("{target} is not in the solution list");
    }

    let mut guesses = Vec::new();
    for _ in 0..config.max_guesses {
        let candidates_before = session.candidates().len();
        let suggestion = session.next_guess(ctx, observer)?;
        let power = match &suggestion {
            Suggestion::Computed(best) => Some(best.score),
            Suggestion::Opener(_) | Suggestion::OnlyCandidate(_) => None,
        };
        let guess = suggestion.guess().clone();

        let clue = generate_clue(&target, &guess);
        let candidates_after = session.observe(&guess, &clue)?;
        let solved = clue.is_solved();

        guesses.push(GuessStep {
            word: guess.to_string(),
            clue,
            candidates_before,
            candidates_after,
            power,
        });

        if solved {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;
    use crate::solver::{SilentObserver, SolverConfig};
    use crate::wordlists::loader::word_set_from_slice;

    const SOLUTIONS: &[&str] = &[
        "roate", "abase", "abide", "snbue", "crane", "slate", "irate", "crate", "grate",
        "trace", "speed", "creep", "erase", "geese",
    ];

    fn session(opener: Option<&str>) -> Session {
        let codec = WordCodec::default();
        let solutions = word_set_from_slice(SOLUTIONS, codec);
        let config = SolverConfig {
            word_length: 5,
            workers: 1,
            hard_mode: false,
            opener: opener.map(str::to_string),
        };
        Session::new(&config, &solutions, &solutions).unwrap()
    }

    fn solve(target: &str, session: &mut Session) -> Result<SolveResult> {
        solve_word(
            &SolveConfig::new(target.to_string()),
            session,
            &ScoringContext::sequential(),
            &mut SilentObserver,
        )
    }

    #[test]
    fn solves_every_solution() {
        let mut session = session(Some("roate"));
        for &target in SOLUTIONS {
            let result = solve(target, &mut session).unwrap();
            assert!(result.success, "failed on {target}");
            assert_eq!(result.guesses.last().map(|s| s.word.as_str()), Some(target));
        }
    }

    #[test]
    fn opener_is_played_first() {
        let mut session = session(Some("roate"));
        let result = solve("snbue", &mut session).unwrap();

        let first = &result.guesses[0];
        assert_eq!(first.word, "roate");
        assert_eq!(first.clue.to_string(), "bbbbg");
        assert_eq!(first.power, None);
        // GEESE gets the same clue
        assert_eq!(first.candidates_after, 2);
        assert!(result.success);
        assert!(result.guesses.len() <= 3);
    }

    #[test]
    fn solve_records_history() {
        let mut session = session(None);
        let result = solve("creep", &mut session).unwrap();

        assert!(!result.guesses.is_empty());
        assert!(result.guesses[0].power.is_some());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn unknown_target_returns_error() {
        let mut session = session(None);
        assert!(solve("zzzzz", &mut session).is_err());
        assert!(solve("toolong", &mut session).is_err());
    }

    #[test]
    fn respects_max_guesses() {
        let mut session = session(Some("zzzzz"));
        let mut config = SolveConfig::new("geese".to_string());
        config.max_guesses = 1;

        let result = solve_word(
            &config,
            &mut session,
            &ScoringContext::sequential(),
            &mut SilentObserver,
        )
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }
}
