//! Wordle Power - CLI
//!
//! Suggests Wordle guesses by minimising the summed remaining-candidate count.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::Path;
use wordle_power::{
    commands::{
        BenchmarkConfig, PlayOutcome, SolveConfig, find_best, report_power, run_benchmark,
        run_play, solve_word,
    },
    core::{WordCodec, WordSet},
    output::{
        ConsoleObserver, print_benchmark_result, print_best_guesses, print_power_report,
        print_solve_result,
    },
    solver::{
        DEFAULT_OPENER, ScoringContext, Session, SilentObserver, SolverConfig,
        default_worker_count,
    },
    wordlists::{DEFAULT_GUESSES_PATH, DEFAULT_SOLUTIONS_PATH, loader::load_word_set},
};

#[derive(Parser)]
#[command(
    name = "wordle_power",
    about = "Wordle guess advisor that minimises the expected remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess vocabulary, one word per line
    #[arg(long, global = true, default_value = DEFAULT_GUESSES_PATH)]
    guesses: String,

    /// Solution vocabulary, one word per line
    #[arg(long, global = true, default_value = DEFAULT_SOLUTIONS_PATH)]
    solutions: String,

    /// Word length
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 5,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    length: usize,

    /// Scoring threads (1 scores sequentially)
    #[arg(short, long, global = true, default_value_t = default_worker_count())]
    threads: usize,

    /// Only suggest guesses consistent with every clue so far
    #[arg(long, global = true)]
    hard: bool,

    /// Compute the first guess instead of using the opener
    #[arg(long, global = true)]
    first_principles: bool,

    /// Forced opening guess
    #[arg(long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive advisor (default): suggests a guess, reads back the clue
    Play,

    /// Power of one word against the solution vocabulary
    Power {
        /// Word to score
        word: String,
    },

    /// Best opening guesses, computed from scratch
    Best,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for choosing the targets
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            word_length: self.length,
            workers: self.threads,
            hard_mode: self.hard,
            opener: (!self.first_principles).then(|| self.opener.clone()),
        }
    }
}

fn load(path: &str, codec: WordCodec, what: &str) -> Result<WordSet> {
    let words = load_word_set(Path::new(path), codec)
        .with_context(|| format!("Failed to read {what} from {path}"))?;
    if words.is_empty() {
        bail!("No {}-letter words in {path}", codec.length());
    }
    println!("Loaded {} {what} from {path}", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.solver_config();
    let codec = config.codec();

    let guesses = load(&cli.guesses, codec, "guesses")?;
    let solutions = load(&cli.solutions, codec, "solutions")?;
    let ctx = config.scoring_context()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &guesses, &solutions, &ctx),
        Commands::Power { word } => {
            let report = report_power(&word, codec, &solutions.dedup())?;
            print_power_report(&report);
            Ok(())
        }
        Commands::Best => {
            let mut observer = ConsoleObserver::new(true);
            let report = find_best(&guesses, &solutions, &ctx, &mut observer)?;
            print_best_guesses(&report);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let mut session = Session::new(&config, &guesses, &solutions)?;
            let mut observer = ConsoleObserver::new(verbose);
            let result = solve_word(
                &SolveConfig::new(word),
                &mut session,
                &ctx,
                &mut observer,
            )?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words (seed {seed})...");
            let mut session = Session::new(&config, &guesses, &solutions)?;
            let bench = BenchmarkConfig {
                count,
                seed,
                ..BenchmarkConfig::default()
            };
            let result = run_benchmark(&mut session, &ctx, bench, &mut SilentObserver)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(
    config: &SolverConfig,
    guesses: &WordSet,
    solutions: &WordSet,
    ctx: &ScoringContext,
) -> Result<()> {
    let mut session = Session::new(config, guesses, solutions)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match run_play(&mut session, ctx, &mut input, &mut out, true)? {
        PlayOutcome::Solved { turns, .. } => println!("Found in {turns} guesses"),
        PlayOutcome::Quit => println!("Bye"),
    }
    Ok(())
}
