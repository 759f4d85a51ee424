//! Terminal Wordle - CLI
//!
//! Plays the daily (or a random) puzzle in a ratatui interface or a plain
//! terminal loop.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_tui::{
    commands::run_console,
    daily,
    interactive::{App, run_tui},
    stats::GameStats,
    wordbank::WordBank,
};

#[derive(Parser)]
#[command(
    name = "wordle_tui",
    about = "Terminal Wordle with daily puzzles, shareable results, and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play today's daily puzzle instead of a random word
    #[arg(short, long, global = true)]
    daily: bool,

    /// Seed for deterministic secret selection (ignored with --daily)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Path to a custom word list file (one 5-letter word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain terminal mode without the TUI
    Console,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let bank = match &cli.wordlist {
        Some(path) => {
            WordBank::from_file(path).with_context(|| format!("loading word list from {path}"))?
        }
        None => WordBank::embedded(),
    };
    log::info!(
        "word bank ready: {} answers, {} guessable words",
        bank.answer_count(),
        bank.dictionary_count()
    );

    let puzzle = cli.daily.then(daily::todays_puzzle);
    let seed = if cli.daily { None } else { cli.seed };

    let stats_path = GameStats::default_path();
    let stats = match &stats_path {
        Some(path) => GameStats::load(path),
        None => GameStats::default(),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let app = App::new(&bank, puzzle, seed, stats, stats_path)
                .context("starting a game session")?;
            run_tui(app)
        }
        Commands::Console => {
            let mut stats = stats;
            let stdin = io::stdin();
            run_console(&bank, puzzle, seed, &mut stats, stdin.lock())
                .map_err(|e| anyhow::anyhow!(e))?;

            if let Some(path) = &stats_path {
                stats
                    .save(path)
                    .with_context(|| format!("saving stats to {}", path.display()))?;
            }
            Ok(())
        }
    }
}
