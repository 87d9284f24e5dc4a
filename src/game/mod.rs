//! # Game Module
//!
//! Core game rules and session state.
//!
//! This module contains the fundamental building blocks of a treasure hunt:
//! - Grid coordinates and movement directions
//! - The difficulty table
//! - The movement engine and encounter resolver
//! - Session state and its turn-by-turn state machine

pub mod difficulty;
pub mod encounters;
pub mod movement;
pub mod state;

pub use difficulty::*;
pub use encounters::*;
pub use movement::*;
pub use state::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a cell coordinate on the square grid.
///
/// Rows grow downwards and columns grow to the right, so `(0, 0)` is the
/// top-left corner.
///
/// # Examples
///
/// ```
/// use treasure_crawl::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 3);
/// assert!(pos.is_within(5));
/// assert!(!pos.is_within(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the origin position (0, 0).
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Checks whether this position lies on a grid of side `size`.
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Directions for movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Maps a console key to a direction.
    ///
    /// Returns None for anything other than `w`, `a`, `s` or `d`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::Direction;
    ///
    /// assert_eq!(Direction::from_symbol('w'), Some(Direction::Up));
    /// assert_eq!(Direction::from_symbol('q'), None);
    /// ```
    pub fn from_symbol(symbol: char) -> Option<Direction> {
        Direction::all()
            .into_iter()
            .find(|direction| direction.symbol() == symbol)
    }

    /// The console key bound to this direction.
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => 'w',
            Direction::Down => 's',
            Direction::Left => 'a',
            Direction::Right => 'd',
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}
