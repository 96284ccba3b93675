//! Guess evaluation and candidate narrowing
//!
//! Filtering, power scoring, parallel best-guess selection and the session
//! state built on top of them.

mod context;
mod engine;
mod filter;
mod power;
mod selector;

pub use context::{
    CHUNKS_PER_WORKER, MAX_WINDOWS_WORKERS, ScoringContext, default_worker_count,
};
pub use engine::{DEFAULT_OPENER, Session, SolverConfig, Suggestion, Turn};
pub use filter::{ClueConstraint, count_consistent, filter};
pub use power::{PowerSummary, power};
pub use selector::{
    BestGuesses, MinSet, MinUpdate, ScoreEntry, ScoreObserver, SilentObserver, best_guess,
};
