//! # Movement Engine
//!
//! Applies one-step moves to a position, clamped to the grid.

use crate::game::{Direction, Position};

/// Result of interpreting a move key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A recognised direction was applied. `from == to` when the move ran
    /// into the edge of the grid.
    Moved { from: Position, to: Position },
    /// The key is not a direction; the position is unchanged.
    Invalid(char),
}

impl MoveOutcome {
    /// Whether the move hit the grid edge and left the player in place.
    pub fn is_blocked(self) -> bool {
        matches!(self, MoveOutcome::Moved { from, to } if from == to)
    }
}

/// Moves one cell in `direction`, clamping each axis to `[0, size - 1]`.
///
/// Moving into a boundary is a no-op on that axis.
///
/// # Examples
///
/// ```
/// use treasure_crawl::{step, Direction, Position};
///
/// assert_eq!(step(Position::new(0, 0), Direction::Right, 5), Position::new(0, 1));
/// assert_eq!(step(Position::new(0, 0), Direction::Up, 5), Position::new(0, 0));
/// ```
pub fn step(position: Position, direction: Direction, size: usize) -> Position {
    let last = size.saturating_sub(1);
    let mut next = position;
    match direction {
        Direction::Up => next.row = position.row.saturating_sub(1),
        Direction::Down => next.row = (position.row + 1).min(last),
        Direction::Left => next.col = position.col.saturating_sub(1),
        Direction::Right => next.col = (position.col + 1).min(last),
    }
    next
}

/// Interprets a console key as a move from `position`.
///
/// Unrecognised keys leave the position untouched and report
/// [`MoveOutcome::Invalid`].
pub fn move_player(position: Position, symbol: char, size: usize) -> MoveOutcome {
    match Direction::from_symbol(symbol) {
        Some(direction) => MoveOutcome::Moved {
            from: position,
            to: step(position, direction, size),
        },
        None => MoveOutcome::Invalid(symbol),
    }
}
