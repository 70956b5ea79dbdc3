//! Wordle Search - CLI
//!
//! Solve, compare and evaluate the search strategies from the command line.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;
use wordle_search::{
    commands::{
        SolveConfig, analyze_word, compare_strategies, pick_secret, run_test_all, solve_word,
    },
    core::{Feedback, Word},
    output::{
        print_analysis_result, print_comparison, print_feedback, print_solution,
        print_test_all_statistics,
    },
    solver::StrategyType,
    wordlists::{
        VOCABULARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_search",
    about = "Wordle solver comparing best-first, A*, depth-first and AO* search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Strategy: best-first (default), astar, dfs, aostar
    #[arg(short, long, global = true, default_value = "best-first")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a secret with the selected strategy
    Solve {
        /// The secret word; a random vocabulary word when omitted
        secret: Option<String>,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        candidates: bool,
    },

    /// Run every strategy on the same secret
    Compare {
        /// The secret word
        secret: String,

        /// Show candidate counts after each guess
        #[arg(short, long)]
        candidates: bool,
    },

    /// Show the feedback a guess receives against a secret
    Feedback {
        /// The secret word
        secret: String,
        /// The guessed word
        guess: String,
    },

    /// Analyze how informative a word is
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve for every vocabulary word as the secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the vocabulary selected by the -w flag
fn load_vocabulary(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(VOCABULARY),
        path => load_from_file(path).with_context(|| format!("could not read {path}"))?,
    };

    if words.is_empty() {
        bail!("no valid 5-letter words found in {wordlist}");
    }
    Ok(words)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let strategy: StrategyType = cli.strategy.parse()?;

    match cli.command {
        Commands::Feedback { secret, guess } => run_feedback_command(&secret, &guess),
        command => {
            let vocabulary = load_vocabulary(&cli.wordlist)?;
            log::info!("vocabulary: {} words", vocabulary.len());
            run_command(command, strategy, &vocabulary)
        }
    }
}

fn run_command(command: Commands, strategy: StrategyType, vocabulary: &[Word]) -> Result<()> {
    match command {
        Commands::Solve { secret, candidates } => {
            run_solve_command(secret, candidates, strategy, vocabulary)
        }
        Commands::Compare { secret, candidates } => {
            let comparison = compare_strategies(&secret, vocabulary)?;
            print_comparison(&comparison, candidates);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, vocabulary).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(strategy, vocabulary, limit, true);
            print_test_all_statistics(&stats);
            Ok(())
        }
        Commands::Feedback { secret, guess } => run_feedback_command(&secret, &guess),
    }
}

fn run_solve_command(
    secret: Option<String>,
    candidates: bool,
    strategy: StrategyType,
    vocabulary: &[Word],
) -> Result<()> {
    let secret = match secret {
        Some(secret) => secret,
        None => pick_secret(vocabulary, &mut rand::rng())
            .context("vocabulary is empty")?
            .text()
            .to_string(),
    };

    let config = SolveConfig::new(secret, strategy);
    let solution = solve_word(&config, vocabulary)?;
    print_solution(&solution, &config.secret, candidates);
    Ok(())
}

fn run_feedback_command(secret: &str, guess: &str) -> Result<()> {
    let secret = Word::new(secret).context("invalid secret")?;
    let guess = Word::new(guess).context("invalid guess")?;
    print_feedback(&secret, &guess, Feedback::evaluate(&secret, &guess));
    Ok(())
}
