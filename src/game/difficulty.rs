//! # Difficulty Table
//!
//! Maps the difficulty chosen at startup to the grid size and the number of
//! hidden enemies and traps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels offered by the startup menu.
///
/// `Invalid` covers any menu choice other than 1, 2 or 3. It plays exactly
/// like `Easy`, but is kept distinct so the session can warn about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Invalid,
}

/// Grid size and entity counts for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Side length of the square grid
    pub size: usize,
    /// Number of hidden enemies
    pub enemy_count: usize,
    /// Number of hidden traps
    pub trap_count: usize,
}

impl Difficulty {
    /// Interprets a numeric menu choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_choice(2), Difficulty::Medium);
    /// assert_eq!(Difficulty::from_choice(9), Difficulty::Invalid);
    /// ```
    pub fn from_choice(choice: i64) -> Self {
        match choice {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            3 => Difficulty::Hard,
            _ => Difficulty::Invalid,
        }
    }

    /// Looks up grid size and entity counts for this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::Difficulty;
    ///
    /// let profile = Difficulty::Hard.profile();
    /// assert_eq!(profile.size, 15);
    /// assert_eq!(profile.enemy_count, 3);
    /// assert_eq!(profile.trap_count, 3);
    /// ```
    pub fn profile(self) -> DifficultyProfile {
        let (size, enemy_count, trap_count) = match self {
            Difficulty::Easy => (5, 1, 1),
            Difficulty::Medium => (10, 2, 2),
            Difficulty::Hard => (15, 3, 3),
            Difficulty::Invalid => (5, 1, 1),
        };

        DifficultyProfile {
            size,
            enemy_count,
            trap_count,
        }
    }

    /// Whether this came from a menu choice outside 1..=3.
    pub fn is_invalid(self) -> bool {
        self == Difficulty::Invalid
    }

    /// The menu options in display order.
    pub fn menu() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Invalid => "Invalid",
        };
        f.write_str(name)
    }
}
