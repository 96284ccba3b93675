//! Interactive advisor mode
//!
//! Suggests a guess, reads the clue the game gave for it and narrows the
//! candidates until a single word is left.

use crate::core::{Clue, Word};
use crate::error::WordleError;
use crate::output::ConsoleObserver;
use crate::output::formatters::{clue_to_emoji, word_list};
use crate::solver::{ScoringContext, Session, Suggestion};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Candidates are listed once there are at most this many
const SHOW_CANDIDATES: usize = 20;

/// How an interactive session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The answer is known; `turns` counts the guesses it took to pin down
    Solved { answer: Word, turns: usize },
    /// The user quit or input ran out
    Quit,
}

/// Run the interactive loop over `input` and `out`
///
/// Clues are typed as `g`/`y`/`b` strings. `undo` takes back the last clue
/// and `quit` leaves.
///
/// # Errors
///
/// Returns an error on I/O failure, if a scoring round fails, or with
/// `EmptyCandidateSet` when the clues rule out every word.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session,
    ctx: &ScoringContext,
    input: &mut R,
    out: &mut W,
    show_progress: bool,
) -> Result<PlayOutcome> {
    let length = session.codec().length();
    writeln!(
        out,
        "Enter the clue for each guess: g = right place, y = wrong place, b = not in word"
    )?;
    writeln!(out, "Commands: 'undo' to take back a clue, 'quit' to exit\n")?;

    'turns: loop {
        if let Some(answer) = session.solution() {
            let turns = if session.history().last().is_some_and(|t| t.clue.is_solved()) {
                session.history().len()
            } else {
                session.history().len() + 1
            };
            writeln!(
                out,
                "{} {}",
                "Solution:".bright_green().bold(),
                answer.to_string().to_uppercase().bright_white().bold()
            )?;
            return Ok(PlayOutcome::Solved { answer, turns });
        }

        let candidates = session.candidates().len();
        writeln!(out, "Turn {}: {candidates} candidates remaining", session.turn())?;

        let mut observer = ConsoleObserver::new(show_progress);
        let suggestion = session.next_guess(ctx, &mut observer)?;
        if let Suggestion::Computed(best) = &suggestion {
            writeln!(
                out,
                "{} {:.2} ({} tied)",
                word_list(&best.words, 10),
                best.score as f64 / candidates as f64,
                best.tied
            )?;
            writeln!(out, "{:.2} seconds", observer.elapsed().as_secs_f64())?;
        }
        let guess = suggestion.guess().clone();
        writeln!(
            out,
            "Guess: {}",
            guess.to_string().to_uppercase().bright_yellow().bold()
        )?;

        let clue = loop {
            let Some(line) = prompt(input, out, "Clue")? else {
                return Ok(PlayOutcome::Quit);
            };
            match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(PlayOutcome::Quit),
                "undo" | "u" => {
                    if let Some(turn) = session.undo() {
                        writeln!(out, "Took back {}", turn.guess.to_string().to_uppercase())?;
                        continue 'turns;
                    }
                    writeln!(out, "Nothing to undo")?;
                }
                text => match Clue::parse(text, length) {
                    Ok(clue) => break clue,
                    Err(e) => writeln!(out, "{e}")?,
                },
            }
        };

        let remaining = session.observe(&guess, &clue)?;
        writeln!(out, "{} {}", guess.to_string().to_uppercase(), clue_to_emoji(&clue))?;

        if clue.is_solved() {
            writeln!(out, "{}", "Solved!".bright_green().bold())?;
            return Ok(PlayOutcome::Solved {
                answer: guess,
                turns: session.history().len(),
            });
        }
        if remaining == 0 {
            writeln!(
                out,
                "{}",
                "No candidates remain; the clues are inconsistent".red().bold()
            )?;
            return Err(WordleError::EmptyCandidateSet.into());
        }
        if remaining <= SHOW_CANDIDATES {
            writeln!(out, "{}", word_list(&session.candidates().words(), SHOW_CANDIDATES))?;
        }
        writeln!(out)?;
    }
}

/// Read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
