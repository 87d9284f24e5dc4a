//! # Random Placement
//!
//! Rejection-sampled placement of the treasure, enemies and traps.

use crate::game::Position;
use crate::generation::{GenerationConfig, Generator};
use crate::{CrawlError, CrawlResult};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Draws a uniformly random cell on a `size` x `size` grid that differs
/// from `excluded`.
///
/// Fails instead of looping forever when no such cell exists.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use treasure_crawl::{draw_position, Position};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let pos = draw_position(&mut rng, 5, Position::origin()).unwrap();
/// assert_ne!(pos, Position::origin());
/// assert!(pos.is_within(5));
/// ```
pub fn draw_position<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    excluded: Position,
) -> CrawlResult<Position> {
    draw_position_excluding(rng, size, &[excluded])
}

/// Draws a uniformly random cell that is none of the `excluded` cells.
pub fn draw_position_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    excluded: &[Position],
) -> CrawlResult<Position> {
    let blocked: HashSet<Position> = excluded
        .iter()
        .copied()
        .filter(|pos| pos.is_within(size))
        .collect();

    if blocked.len() >= size * size {
        return Err(CrawlError::GenerationFailed(format!(
            "no free cell on a {size}x{size} grid with {} excluded",
            blocked.len()
        )));
    }

    loop {
        let candidate = Position::new(rng.gen_range(0..size), rng.gen_range(0..size));
        if !blocked.contains(&candidate) {
            return Ok(candidate);
        }
    }
}

/// Positions of everything hidden on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityLayout {
    pub treasure: Position,
    pub enemies: Vec<Position>,
    pub traps: Vec<Position>,
}

impl EntityLayout {
    /// Iterates over every placed entity, treasure first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.treasure)
            .chain(self.enemies.iter().copied())
            .chain(self.traps.iter().copied())
    }
}

/// Places the treasure, then each enemy, then each trap.
///
/// Every draw avoids the player's start. Unless exclusive placement is
/// enabled, entities may land on each other's cells.
#[derive(Debug, Clone, Default)]
pub struct EntityPlacer;

impl EntityPlacer {
    /// Creates a new placer.
    pub fn new() -> Self {
        Self
    }

    fn draw(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
        placed: &mut Vec<Position>,
    ) -> CrawlResult<Position> {
        let position = if config.exclusive_placement {
            draw_position_excluding(rng, config.size, placed)?
        } else {
            draw_position(rng, config.size, config.player_start)?
        };
        placed.push(position);
        Ok(position)
    }
}

impl Generator<EntityLayout> for EntityPlacer {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> CrawlResult<EntityLayout> {
        let mut placed = vec![config.player_start];

        let treasure = self.draw(config, rng, &mut placed)?;
        let enemies = (0..config.enemy_count)
            .map(|_| self.draw(config, rng, &mut placed))
            .collect::<CrawlResult<Vec<_>>>()?;
        let traps = (0..config.trap_count)
            .map(|_| self.draw(config, rng, &mut placed))
            .collect::<CrawlResult<Vec<_>>>()?;

        let layout = EntityLayout {
            treasure,
            enemies,
            traps,
        };
        debug!(
            "{} placed treasure at {}, enemies at {:?}, traps at {:?}",
            self.generator_type(),
            layout.treasure,
            layout.enemies,
            layout.traps
        );

        self.validate(&layout, config)?;
        Ok(layout)
    }

    fn validate(&self, content: &EntityLayout, config: &GenerationConfig) -> CrawlResult<()> {
        if content.enemies.len() != config.enemy_count || content.traps.len() != config.trap_count {
            return Err(CrawlError::GenerationFailed(
                "entity counts do not match the configuration".to_string(),
            ));
        }

        for pos in content.positions() {
            if !pos.is_within(config.size) {
                return Err(CrawlError::GenerationFailed(format!(
                    "{pos} lies outside the {}x{} grid",
                    config.size, config.size
                )));
            }
            if pos == config.player_start {
                return Err(CrawlError::GenerationFailed(format!(
                    "{pos} is the player's starting cell"
                )));
            }
        }

        if config.exclusive_placement {
            let distinct: HashSet<Position> = content.positions().collect();
            if distinct.len() != config.entity_count() {
                return Err(CrawlError::GenerationFailed(
                    "entities share a cell despite exclusive placement".to_string(),
                ));
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "EntityPlacer"
    }
}
