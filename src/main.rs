//! Word Search - CLI
//!
//! Generate word search puzzles and play them in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_search::{
    commands::{generate_puzzle, run_benchmark, run_play},
    game::{DEFAULT_GRID_SIZE, GameConfig, GameSession},
    generator::DEFAULT_MAX_ATTEMPTS,
    output::{print_benchmark_result, print_generate_result, print_play_outcome},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "word_search",
    about = "Word search puzzle generator and terminal game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Grid side length
    #[arg(short, long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Random seed for a reproducible puzzle
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'default' (built-in) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Random placements tried per word before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Print a puzzle without playing it
    Generate {
        /// Also print where every word is hidden
        #[arg(short, long)]
        reveal: bool,
    },

    /// Generate many puzzles and report placement statistics
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig {
        grid_size: cli.size,
        max_attempts: cli.max_attempts,
        seed: cli.seed,
    };
    config.validate()?;

    let words = WordSource::from_arg(&cli.wordlist).load()?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let mut session = GameSession::new(words, &config)?;
            let outcome = run_play(&mut session, io::stdin().lock(), io::stdout().lock())?;
            print_play_outcome(outcome);
        }
        Commands::Generate { reveal } => {
            let result = generate_puzzle(words, &config)?;
            print_generate_result(&result, reveal);
        }
        Commands::Benchmark { count } => {
            println!(
                "Generating {count} puzzles ({0}x{0}, {1} words)...",
                config.grid_size,
                words.len()
            );
            let pb = ProgressBar::new(count as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")?
                    .progress_chars("█▓▒░"),
            );
            let result = run_benchmark(&words, &config, count, Some(&pb));
            pb.finish_and_clear();
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
