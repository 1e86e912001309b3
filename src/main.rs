//! Strands - CLI
//!
//! Word-path puzzle with TUI and CLI modes, plus puzzle-authoring helpers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use strands::{
    commands::{check_puzzle, find_words, run_simple},
    game::{FileStore, SessionController},
    output::{print_check_report, print_word_search},
    puzzle::{self, Puzzle},
    wordlists::{Dictionary, DictionaryHandle, loader},
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "strands",
    about = "Trace words through a letter grid to find the theme words and the spangram",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle file (JSON); defaults to the built-in puzzle
    #[arg(short, long, global = true)]
    puzzle: Option<PathBuf>,

    /// Dictionary word list, one word per line
    #[arg(short, long, global = true, default_value = "/usr/share/dict/words")]
    dictionary: PathBuf,

    /// Where progress is saved between sessions
    #[arg(short, long, global = true, default_value = "strands-state.json")]
    state: PathBuf,

    /// Write logs to this file (TUI mode discards logs otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG applies otherwise
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - drag across letters with the mouse)
    Play,

    /// Simple CLI mode (type cell coordinates instead of dragging)
    Simple,

    /// List every dictionary word traceable in the grid
    Words {
        /// Show at most this many words, longest first
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Validate the puzzle and show its solutions
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(
        cli.verbose,
        cli.log_file.as_deref(),
        matches!(command, Commands::Play),
    )?;

    let puzzle = load_puzzle(cli.puzzle.as_deref())?;

    match command {
        Commands::Play => run_play_command(puzzle, &cli.dictionary, &cli.state),
        Commands::Simple => run_simple_command(puzzle, &cli.dictionary, &cli.state),
        Commands::Words { limit } => {
            run_words_command(&puzzle, &cli.dictionary, limit);
            Ok(())
        }
        Commands::Check => {
            run_check_command(&puzzle);
            Ok(())
        }
    }
}

/// Set up `tracing` output
///
/// The TUI owns the terminal, so without a log file its logs are discarded.
fn init_logging(verbose: u8, log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // Don't fail if already initialized
    let _ = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Cannot create log file {}", path.display()))?;
            builder.with_writer(Arc::new(file)).with_ansi(false).try_init()
        }
        None if tui => builder.with_writer(io::sink).try_init(),
        None => builder.with_writer(io::stderr).try_init(),
    };

    Ok(())
}

fn load_puzzle(path: Option<&Path>) -> Result<Puzzle> {
    let puzzle = match path {
        Some(path) => puzzle::load_from_file(path)
            .with_context(|| format!("Failed to load puzzle {}", path.display()))?,
        None => puzzle::builtin().context("Built-in puzzle is invalid")?,
    };
    info!(
        rows = puzzle.grid().rows(),
        cols = puzzle.grid().cols(),
        words = puzzle.total_words(),
        "Puzzle loaded"
    );
    Ok(puzzle)
}

/// Read the dictionary up front, falling back to the embedded list
fn load_dictionary(path: &Path, puzzle: &Puzzle) -> Dictionary {
    match loader::load_from_file(path) {
        Ok(words) => Dictionary::from_words(words).with_solutions(puzzle),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load dictionary, using fallback");
            eprintln!(
                "{} cannot read {} ({e}); using the built-in word list",
                "⚠️".yellow(),
                path.display()
            );
            Dictionary::fallback().with_solutions(puzzle)
        }
    }
}

fn run_play_command(puzzle: Puzzle, dictionary: &Path, state: &Path) -> Result<()> {
    use strands::interactive::{App, run_tui};

    let oracle = DictionaryHandle::spawn_load(dictionary.to_path_buf(), &puzzle);
    let session = SessionController::new(puzzle, oracle, FileStore::new(state));
    run_tui(App::new(session))
}

fn run_simple_command(puzzle: Puzzle, dictionary: &Path, state: &Path) -> Result<()> {
    let oracle = DictionaryHandle::spawn_load(dictionary.to_path_buf(), &puzzle);
    let mut session = SessionController::new(puzzle, oracle, FileStore::new(state));
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_words_command(puzzle: &Puzzle, dictionary: &Path, limit: Option<usize>) {
    let dictionary = load_dictionary(dictionary, puzzle);
    println!(
        "Searching {}×{} grid against {} words...",
        puzzle.grid().rows(),
        puzzle.grid().cols(),
        dictionary.len()
    );
    let result = find_words(puzzle, &dictionary, limit, true);
    print_word_search(&result);
}

fn run_check_command(puzzle: &Puzzle) {
    let report = check_puzzle(puzzle);
    print_check_report(puzzle, &report);
}
