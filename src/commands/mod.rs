//! Command implementations

pub mod benchmark;
pub mod best;
pub mod play;
pub mod power;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use best::{BestReport, find_best};
pub use play::{PlayOutcome, run_play};
pub use power::{PowerReport, report_power};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
