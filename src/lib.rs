//! Wordle Power
//!
//! A Wordle guess advisor. Every guess is scored by its *power*: the number of
//! candidates left after it, summed over every candidate taken as the answer.
//! The guess with the lowest power is suggested, preferring guesses that could
//! themselves be the answer.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_power::core::{Clue, WordCodec, WordSet};
//! use wordle_power::solver::{filter, power};
//!
//! let codec = WordCodec::default();
//! let words = codec.encode_all(["roate", "abase", "abide", "snbue"]).unwrap();
//! let candidates = WordSet::from_words(5, &words).unwrap();
//!
//! let guess = codec.encode("roate").unwrap();
//! assert_eq!(power(&guess, &candidates), 4);
//!
//! let clue = Clue::parse("bbbbg", 5).unwrap();
//! assert_eq!(filter(&candidates, &guess, &clue).to_strings(), vec!["snbue"]);
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Filtering, scoring and guess selection
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::WordleError;
