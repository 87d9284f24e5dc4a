//! # Encounter Resolution
//!
//! Decides what happens when the player lands on a cell: finding the
//! treasure ends the game, while enemies and traps each cost one life.

use crate::game::{GameCompletionState, Position};
use serde::{Deserialize, Serialize};

/// What the player ran into this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encounter {
    /// Nothing on this cell
    Nothing,
    /// The treasure
    Treasure,
    /// The enemy at this index in the session's enemy list
    Enemy { index: usize },
    /// The trap at this index in the session's trap list
    Trap { index: usize },
}

impl Encounter {
    /// Whether this encounter costs a life.
    pub fn is_harmful(self) -> bool {
        matches!(self, Encounter::Enemy { .. } | Encounter::Trap { .. })
    }
}

/// Outcome of resolving one turn's encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// What was found on the player's cell
    pub encounter: Encounter,
    /// Lives left after the encounter
    pub lives: u32,
    /// Whether the game continues, was won, or was lost
    pub completion: GameCompletionState,
}

/// Resolves the player's cell against the hidden entities.
///
/// Evaluation order is fixed: treasure first, then enemies in order, then
/// traps in order. At most one encounter happens per turn. A harmful
/// encounter takes one life (never going below zero) and ends the game
/// once no lives remain. Finding the treasure wins regardless of lives.
///
/// # Examples
///
/// ```
/// use treasure_crawl::{resolve, Encounter, GameCompletionState, Position};
///
/// let mut lives = 4;
/// let enemies = [Position::new(0, 1)];
/// let resolution = resolve(Position::new(0, 1), Position::new(4, 4), &enemies, &[], &mut lives);
/// assert_eq!(resolution.encounter, Encounter::Enemy { index: 0 });
/// assert_eq!(lives, 3);
/// assert_eq!(resolution.completion, GameCompletionState::Playing);
/// ```
pub fn resolve(
    player: Position,
    treasure: Position,
    enemies: &[Position],
    traps: &[Position],
    lives: &mut u32,
) -> Resolution {
    if player == treasure {
        return Resolution {
            encounter: Encounter::Treasure,
            lives: *lives,
            completion: GameCompletionState::Won,
        };
    }

    let encounter = if let Some(index) = enemies.iter().position(|&enemy| enemy == player) {
        Encounter::Enemy { index }
    } else if let Some(index) = traps.iter().position(|&trap| trap == player) {
        Encounter::Trap { index }
    } else {
        Encounter::Nothing
    };

    let completion = if encounter.is_harmful() {
        *lives = lives.saturating_sub(1);
        if *lives == 0 {
            GameCompletionState::Lost
        } else {
            GameCompletionState::Playing
        }
    } else {
        GameCompletionState::Playing
    };

    Resolution {
        encounter,
        lives: *lives,
        completion,
    }
}
