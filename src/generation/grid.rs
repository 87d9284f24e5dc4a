//! # True Grid
//!
//! The full internal map, including the hidden enemies and traps.

use crate::config;
use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Marker stored in one cell of the true grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Player,
    Treasure,
    Enemy,
    Trap,
}

impl Cell {
    /// Returns the display symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => config::EMPTY_SYMBOL,
            Cell::Player => config::PLAYER_SYMBOL,
            Cell::Treasure => config::TREASURE_SYMBOL,
            Cell::Enemy => config::ENEMY_SYMBOL,
            Cell::Trap => config::TRAP_SYMBOL,
        }
    }
}

/// Square matrix of cell markers.
///
/// A grid is a snapshot: build a fresh one from the current positions
/// whenever something moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Empty; size]; size],
        }
    }

    /// Builds the true grid from entity positions.
    ///
    /// Markers are stamped in the order player, treasure, enemies, traps,
    /// so when entities share a cell the later stamp wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::{Cell, Grid, Position};
    ///
    /// let shared = Position::new(2, 2);
    /// let grid = Grid::build(5, Position::origin(), shared, &[shared], &[shared]);
    /// assert_eq!(grid.get(shared), Some(Cell::Trap));
    /// assert_eq!(grid.get(Position::origin()), Some(Cell::Player));
    /// ```
    pub fn build(
        size: usize,
        player: Position,
        treasure: Position,
        enemies: &[Position],
        traps: &[Position],
    ) -> Self {
        let mut grid = Self::empty(size);
        grid.stamp(player, Cell::Player);
        grid.stamp(treasure, Cell::Treasure);
        for &enemy in enemies {
            grid.stamp(enemy, Cell::Enemy);
        }
        for &trap in traps {
            grid.stamp(trap, Cell::Trap);
        }
        grid
    }

    fn stamp(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *slot = cell;
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the marker at a position, or None if it is off the grid.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Renders the true grid, hidden markers included.
    ///
    /// For logs and debugging only; the player-facing map goes through
    /// [`crate::render_map`].
    pub fn to_debug_string(&self) -> String {
        let mut output = String::with_capacity(self.size * self.size * 2);
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            output.push_str(&line.join(" "));
            output.push('\n');
        }
        output
    }
}
