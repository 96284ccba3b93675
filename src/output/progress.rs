//! Console reporting for best-guess rounds
//!
//! Every time a new lowest power appears the previous leaders and the
//! challenger are printed as `<tied words> <avg> < <word> <avg>`; a progress
//! bar tracks the scan of the guess vocabulary.

use super::formatters::{average, indexed_words};
use crate::core::WordSet;
use crate::solver::{MinSet, ScoreEntry, ScoreObserver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// [`ScoreObserver`] that draws to the terminal
pub struct ConsoleObserver {
    enabled: bool,
    guesses: Option<WordSet>,
    candidates: usize,
    progress: Option<ProgressBar>,
    started: Option<Instant>,
    elapsed: Duration,
    leaders: Vec<usize>,
    leader_score: Option<u64>,
    lines: Vec<String>,
}

impl ConsoleObserver {
    /// Observer that draws nothing unless `enabled`
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            guesses: None,
            candidates: 0,
            progress: None,
            started: None,
            elapsed: Duration::ZERO,
            leaders: Vec::new(),
            leader_score: None,
            lines: Vec::new(),
        }
    }

    /// Wall time of the last finished round
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Every "new minimum" line produced so far, without colour
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn emit(&self, line: &str) {
        if !self.enabled {
            return;
        }
        match &self.progress {
            Some(pb) => pb.println(line),
            None => println!("{line}"),
        }
    }
}

impl ScoreObserver for ConsoleObserver {
    fn on_round_start(&mut self, guesses: &WordSet, candidates: &WordSet) {
        let candidates = candidates.len();
        self.guesses = Some(guesses.clone());
        self.candidates = candidates;
        self.leaders.clear();
        self.leader_score = None;
        self.started = Some(Instant::now());

        if self.enabled {
            let pb = ProgressBar::new(guesses.len() as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            {
                pb.set_style(style.progress_chars("█▓▒░"));
            }
            pb.set_message(format!("{candidates} candidates"));
            self.progress = Some(pb);
        }
    }

    fn on_scored(&mut self, entry: ScoreEntry) {
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        if self.leader_score == Some(entry.score) {
            self.leaders.push(entry.index);
        }
    }

    fn on_new_minimum(&mut self, _best: &MinSet, entry: ScoreEntry) {
        let Some(guesses) = &self.guesses else {
            return;
        };
        let word = guesses.word(entry.index).to_string().to_uppercase();
        let avg = average(entry.score, self.candidates);

        let (plain, shown) = match self.leader_score {
            Some(previous) => {
                let tied = indexed_words(guesses, &self.leaders);
                let old_avg = average(previous, self.candidates);
                (
                    format!("{tied} {old_avg:.2} < {word} {avg:.2}"),
                    format!(
                        "{} {old_avg:.2} < {} {}",
                        tied.yellow(),
                        word.bright_green().bold(),
                        format!("{avg:.2}").bright_yellow()
                    ),
                )
            }
            None => (
                format!("{word} {avg:.2}"),
                format!(
                    "{} {}",
                    word.bright_green().bold(),
                    format!("{avg:.2}").bright_yellow()
                ),
            ),
        };

        self.emit(&shown);
        self.lines.push(plain);
        self.leaders.clear();
        self.leaders.push(entry.index);
        self.leader_score = Some(entry.score);
    }

    fn on_round_end(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordCodec;
    use crate::solver::{ScoringContext, best_guess};

    fn set(words: &[&str]) -> WordSet {
        WordSet::from_words(5, &WordCodec::default().encode_all(words).unwrap()).unwrap()
    }

    #[test]
    fn reports_improvements_with_previous_leaders() {
        // powers: zzzzz 9, yyyyy 9, aaaaa 5, bbbbb 5 (ties are not new minimums)
        let guesses = set(&["zzzzz", "yyyyy", "aaaaa", "bbbbb"]);
        let candidates = set(&["aaaaa", "bbbbb", "ccccc"]);
        let mut observer = ConsoleObserver::new(false);

        let best = best_guess(
            &guesses,
            &candidates,
            &ScoringContext::sequential(),
            &mut observer,
        )
        .unwrap();

        assert_eq!(best.score, 5);
        assert_eq!(
            observer.lines(),
            &["ZZZZZ 3.00".to_string(), "ZZZZZ YYYYY 3.00 < AAAAA 1.67".to_string()]
        );
    }

    #[test]
    fn round_end_records_elapsed_time() {
        let words = set(&["crane"]);
        let mut observer = ConsoleObserver::new(false);
        observer.on_round_start(&words, &words);
        observer.on_round_end();
        assert!(observer.elapsed() < Duration::from_secs(60));
        assert!(observer.progress.is_none());
    }
}
