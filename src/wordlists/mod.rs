//! Vocabulary loading
//!
//! Word lists are plain text, one word per line.

pub mod loader;

/// Guess vocabulary read when no path is given
pub const DEFAULT_GUESSES_PATH: &str = "wordle_guesses.txt";

/// Solution vocabulary read when no path is given
pub const DEFAULT_SOLUTIONS_PATH: &str = "wordle_solutions.txt";
