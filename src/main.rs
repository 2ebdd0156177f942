//! Wordle Game - CLI
//!
//! Terminal Wordle with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::run_simple,
    game::{DEFAULT_REVEAL_DELAY, GameConfig, Session},
    interactive::{App, run_tui},
    wordlists::{PickerType, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden 5-letter word in 6 tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pick a random target word on every new game instead of the first list entry
    #[arg(short, long, global = true)]
    random: bool,

    /// Delay between revealed letters, in milliseconds
    #[arg(short = 'd', long, global = true, default_value_t = DEFAULT_REVEAL_DELAY.as_millis() as u64)]
    reveal_delay: u64,

    /// Log file (filter with RUST_LOG)
    #[arg(short, long, global = true, default_value = "wordle_game.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,
}

/// Send tracing output to a file so it does not interfere with the terminal
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = GameConfig::new().with_reveal_delay(Duration::from_millis(cli.reveal_delay));
    let picker = if cli.random {
        PickerType::Random
    } else {
        PickerType::First
    };
    let mut session = Session::new(config, words_from_slice(WORDS), picker)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    info!(?picker, reveal_delay_ms = cli.reveal_delay, "Starting game");

    match command {
        Commands::Play => run_tui(App::new(session)),
        Commands::Simple => run_simple(&mut session),
    }
}
