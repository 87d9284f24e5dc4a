//! # Generation Module
//!
//! Procedural setup of a treasure hunt: random entity placement and the
//! true grid built from the placed entities.
//!
//! Placement runs once per session. The grid is rebuilt from the session's
//! current positions every turn, so nothing here keeps state between turns.

pub mod grid;
pub mod placement;

pub use grid::*;
pub use placement::*;

use crate::game::{Difficulty, Position};
use crate::{config, CrawlResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls the grid size, how many hazards are hidden, and whether placed
/// entities may share a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the square grid
    pub size: usize,
    /// Number of enemies to place
    pub enemy_count: usize,
    /// Number of traps to place
    pub trap_count: usize,
    /// Cell every draw must avoid
    pub player_start: Position,
    /// When set, entities also avoid every previously placed entity
    pub exclusive_placement: bool,
}

impl GenerationConfig {
    /// Creates a generation configuration from the difficulty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::{Difficulty, GenerationConfig};
    ///
    /// let config = GenerationConfig::new(12345, Difficulty::Medium);
    /// assert_eq!(config.size, 10);
    /// assert_eq!(config.enemy_count, 2);
    /// assert!(!config.exclusive_placement);
    /// ```
    pub fn new(seed: u64, difficulty: Difficulty) -> Self {
        let profile = difficulty.profile();
        Self {
            seed,
            size: profile.size,
            enemy_count: profile.enemy_count,
            trap_count: profile.trap_count,
            player_start: config::PLAYER_START,
            exclusive_placement: false,
        }
    }

    /// Creates a configuration for testing on the smallest grid.
    pub fn for_testing(seed: u64) -> Self {
        Self::new(seed, Difficulty::Easy)
    }

    /// Sets whether placed entities must occupy distinct cells.
    pub fn with_exclusive_placement(mut self, exclusive: bool) -> Self {
        self.exclusive_placement = exclusive;
        self
    }

    /// Total number of entities placed besides the player.
    pub fn entity_count(&self) -> usize {
        1 + self.enemy_count + self.trap_count
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::for_testing(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> CrawlResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> CrawlResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Derives a seed from the wall clock.
    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}
