//! Display functions for command results

use super::formatters::{average, clue_to_emoji, create_progress_bar, word_list};
use crate::commands::{BenchmarkResult, BestReport, PowerReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!(
        "\n{} {}",
        "Target:".cyan(),
        result.target.to_uppercase().bright_yellow().bold()
    );

    for (turn, step) in (1..).zip(&result.guesses) {
        println!(
            "  {turn}. {} {} {}",
            step.word.to_uppercase().bright_white().bold(),
            clue_to_emoji(&step.clue),
            step.clue
        );

        if verbose {
            println!(
                "     candidates {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(power) = step.power {
                println!(
                    "     power {power} ({:.2} expected remaining)",
                    average(power, step.candidates_before)
                );
            }
        }
    }

    let summary = format!("{} guesses", result.guesses.len());
    if result.success {
        println!("{} {}", "Solved in".green().bold(), summary.green().bold());
    } else {
        println!("{} {}", "Not solved after".red().bold(), summary.red().bold());
    }
}

/// Print the power of a single word
pub fn print_power_report(report: &PowerReport) {
    let pct = report.summary.eliminated_fraction() * 100.0;
    let bar = create_progress_bar(pct, 100.0, 30);

    println!(
        "{} against {} candidates",
        report.word.to_uppercase().bright_yellow().bold(),
        report.summary.candidates
    );
    println!("   Eliminated:  [{}] {:.1}%", bar.green(), pct);
    println!("{}", report.line());
}

/// Print every tied best guess
pub fn print_best_guesses(report: &BestReport) {
    let best = &report.best;
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BEST GUESSES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   {}",
        word_list(&best.words, best.words.len()).bright_green().bold()
    );
    println!(
        "   Power:       {} ({:.2} expected remaining of {})",
        best.score,
        average(best.score, report.candidates),
        report.candidates
    );
    if best.possible_solutions {
        println!("   Tied:        {} (showing possible answers)", best.tied);
    } else {
        println!("   Tied:        {}", best.tied);
    }
    println!("{:.2} seconds", report.duration.as_secs_f64());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} targets ",
        "BENCHMARK".bright_cyan().bold(),
        result.total_words
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Solved {}/{} in {:.2}s ({:.1} targets/s)",
        result.solved,
        result.total_words,
        result.duration.as_secs_f64(),
        result.words_per_second
    );
    println!(
        "   Guesses per solve: {} avg, {} best, {} worst",
        format!("{:.2}", result.average_guesses).bright_yellow().bold(),
        result.min_guesses.to_string().green(),
        result.max_guesses.to_string().yellow()
    );

    let mut rows: Vec<(usize, usize)> = result.distribution.iter().map(|(&g, &n)| (g, n)).collect();
    rows.sort_unstable();
    if !rows.is_empty() {
        println!();
    }
    let total = result.total_words.max(1) as f64;
    for (guesses, solved) in rows {
        let share = solved as f64 / total;
        println!(
            "   {guesses:>2} | {} {solved:>5} {:>5.1}%",
            create_progress_bar(share, 1.0, 40).green(),
            share * 100.0
        );
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "Unsolved:".red().bold(),
            result.failures.join(" ").to_uppercase()
        );
    }
}
