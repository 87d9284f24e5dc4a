//! # Treasure Crawl
//!
//! A single-player, turn-based treasure hunt played over a text console.
//!
//! ## Architecture Overview
//!
//! The player starts in the top-left corner of a square grid and moves one
//! step per turn looking for the treasure. Enemies and traps are hidden on
//! the map; stepping on one costs a life. The game ends when the treasure is
//! found or the last life is lost.
//!
//! - **Game**: positions, directions, the difficulty table, movement,
//!   encounter resolution and the session state machine
//! - **Generation**: random entity placement and the true-grid builder
//! - **Input**: parsing difficulty choices and move symbols from a reader
//! - **Rendering**: the concealing map renderer and the terminal display
//! - **Console**: the driver that wires all of the above to stdin/stdout

pub mod console;
pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod settings;

pub use console::*;
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use settings::*;

/// Core error type for the Treasure Crawl engine.
#[derive(thiserror::Error, Debug)]
pub enum CrawlError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Settings could not be applied
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type used throughout the Treasure Crawl codebase.
pub type CrawlResult<T> = Result<T, CrawlError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    use crate::game::Position;

    /// Lives the player starts with
    pub const DEFAULT_STARTING_LIVES: u32 = 4;

    /// Where every session places the player
    pub const PLAYER_START: Position = Position::new(0, 0);

    /// Symbol for an empty (or concealed) cell
    pub const EMPTY_SYMBOL: char = '.';

    /// Symbol for the player
    pub const PLAYER_SYMBOL: char = 'P';

    /// Symbol for the treasure
    pub const TREASURE_SYMBOL: char = 'T';

    /// Symbol for an enemy, only ever shown in the debug view
    pub const ENEMY_SYMBOL: char = 'E';

    /// Symbol for a trap, only ever shown in the debug view
    pub const TRAP_SYMBOL: char = 'X';
}
