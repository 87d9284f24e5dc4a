//! # Treasure Crawl Main Entry Point
//!
//! Parses the command line, sets up logging and settings, and plays one
//! session on stdin/stdout.

use clap::Parser;
use log::{error, info};
use std::io;
use std::process::ExitCode;
use treasure_crawl::{
    exit_status, generation::utils, parse_difficulty, ConsoleGame, CrawlResult,
    GameCompletionState, GameSettings, SettingsOverrides,
};

/// Command line arguments for Treasure Crawl.
#[derive(Parser, Debug)]
#[command(name = "treasure-crawl")]
#[command(about = "Find the treasure on a grid full of hidden enemies and traps")]
#[command(version)]
struct Args {
    /// Random seed for entity placement (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Difficulty choice (1 = easy, 2 = medium, 3 = hard); skips the menu
    #[arg(short, long, allow_negative_numbers = true)]
    difficulty: Option<String>,

    /// JSON settings file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of lives to start with
    #[arg(long)]
    lives: Option<u32>,

    /// Keep the treasure, enemies and traps on distinct cells
    #[arg(long)]
    exclusive_placement: bool,

    /// Let an unrecognised move key still use up the turn
    #[arg(long)]
    invalid_move_consumes_turn: bool,

    /// Exit with 1 on a loss and 2 when input closes early
    #[arg(long)]
    distinct_exit_codes: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Treasure Crawl v{}", treasure_crawl::VERSION);

    match run(&args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e}");
            eprintln!("treasure-crawl: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .init();
}

/// Merges the settings file with command-line overrides.
fn load_settings(args: &Args) -> CrawlResult<GameSettings> {
    let settings = match &args.config {
        Some(path) => GameSettings::from_file(path)?,
        None => GameSettings::default(),
    };

    settings.with_overrides(&SettingsOverrides {
        starting_lives: args.lives,
        exclusive_placement: args.exclusive_placement,
        invalid_move_consumes_turn: args.invalid_move_consumes_turn,
        distinct_exit_codes: args.distinct_exit_codes,
    })
}

/// Plays one session and returns the process exit status.
fn run(args: &Args) -> CrawlResult<u8> {
    let settings = load_settings(args)?;
    let seed = args.seed.unwrap_or_else(utils::clock_seed);
    info!("Using seed {seed}");

    let stdin = io::stdin();
    let mut game = ConsoleGame::new(stdin.lock(), io::stdout(), settings.clone(), seed);
    if let Some(choice) = &args.difficulty {
        game = game.with_difficulty(parse_difficulty(choice));
    }

    let completion = game
        .run()?
        .map(|state| state.completion_state())
        .unwrap_or(GameCompletionState::Abandoned);

    Ok(exit_status(completion, settings.distinct_exit_codes))
}
