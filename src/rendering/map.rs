//! # Map Renderer
//!
//! Produces the player-visible map. Only the player and the treasure are
//! ever drawn; enemies and traps look like empty floor until stepped on.

use crate::config;
use crate::game::Position;
use crate::generation::{Cell, Grid};

/// Symbol shown to the player for one cell of the true grid.
pub fn visible_symbol(grid: &Grid, cell: Position, player: Position) -> char {
    if cell == player {
        config::PLAYER_SYMBOL
    } else if grid.get(cell) == Some(Cell::Treasure) {
        config::TREASURE_SYMBOL
    } else {
        config::EMPTY_SYMBOL
    }
}

/// Renders the concealed map, one space-separated row per line.
///
/// # Examples
///
/// ```
/// use treasure_crawl::{render_map, Grid, Position};
///
/// let grid = Grid::build(3, Position::origin(), Position::new(2, 2), &[Position::new(0, 1)], &[]);
/// assert_eq!(render_map(&grid, Position::origin()), "P . .\n. . .\n. . T\n");
/// ```
pub fn render_map(grid: &Grid, player: Position) -> String {
    let size = grid.size();
    let mut output = String::with_capacity(size * size * 2);

    for row in 0..size {
        let line: Vec<String> = (0..size)
            .map(|col| visible_symbol(grid, Position::new(row, col), player).to_string())
            .collect();
        output.push_str(&line.join(" "));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hides_enemies_and_traps() {
        let grid = Grid::build(
            3,
            Position::origin(),
            Position::new(2, 2),
            &[Position::new(1, 1)],
            &[Position::new(0, 2)],
        );
        let map = render_map(&grid, Position::origin());
        assert!(!map.contains('E'));
        assert!(!map.contains('X'));
        assert_eq!(map, "P . .\n. . .\n. . T\n");
    }

    #[test]
    fn test_player_shown_over_treasure() {
        let spot = Position::new(1, 1);
        let grid = Grid::build(2, spot, spot, &[], &[]);
        assert_eq!(render_map(&grid, spot), ". .\n. P\n");
    }

    #[test]
    fn test_treasure_under_hazard_is_hidden() {
        let spot = Position::new(1, 0);
        let grid = Grid::build(2, Position::origin(), spot, &[spot], &[]);
        assert_eq!(visible_symbol(&grid, spot, Position::origin()), '.');
    }

    #[test]
    fn test_player_drawn_from_argument_not_grid() {
        let grid = Grid::build(2, Position::origin(), Position::new(1, 1), &[], &[]);
        assert_eq!(render_map(&grid, Position::new(0, 1)), ". P\n. T\n");
    }

    #[test]
    fn test_render_dimensions() {
        let grid = Grid::empty(15);
        let map = render_map(&grid, Position::new(7, 7));
        assert_eq!(map.lines().count(), 15);
        assert!(map.lines().all(|line| line.split(' ').count() == 15));
        assert_eq!(map.matches('P').count(), 1);
    }
}
