//! Terminal output formatting
//!
//! Display utilities for CLI results and the console scoring observer.

pub mod display;
pub mod formatters;
pub mod progress;

pub use display::{
    print_benchmark_result, print_best_guesses, print_power_report, print_solve_result,
};
pub use progress::ConsoleObserver;
