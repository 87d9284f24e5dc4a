//! # Console Session
//!
//! Drives one game over a text console: difficulty selection, setup, then
//! prompt, move, resolve and redraw until the game ends.

use crate::game::{Difficulty, GameCompletionState, GameState};
use crate::input::InputHandler;
use crate::rendering::TerminalDisplay;
use crate::settings::GameSettings;
use crate::CrawlResult;
use log::{info, warn};
use std::io::{BufRead, Write};

const INITIAL_MAP_HEADING: &str = "Initial Map (Player's position shown as 'P'):";
const INVALID_DIFFICULTY_WARNING: &str = "Invalid difficulty! select default to easy.";

/// A console game bound to an input reader and an output writer.
pub struct ConsoleGame<R, W> {
    input: InputHandler<R>,
    display: TerminalDisplay<W>,
    settings: GameSettings,
    seed: u64,
    difficulty: Option<Difficulty>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a console game that will ask for the difficulty.
    pub fn new(reader: R, writer: W, settings: GameSettings, seed: u64) -> Self {
        Self {
            input: InputHandler::new(reader),
            display: TerminalDisplay::new(writer),
            settings,
            seed,
            difficulty: None,
        }
    }

    /// Skips the difficulty menu and plays at the given level.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Plays the session to its end.
    ///
    /// Returns the finished session, or None if input ended before a
    /// difficulty was chosen.
    pub fn run(&mut self) -> CrawlResult<Option<GameState>> {
        let difficulty = match self.choose_difficulty()? {
            Some(difficulty) => difficulty,
            None => {
                warn!("Input ended before a difficulty was chosen");
                self.display.end_line()?;
                return Ok(None);
            }
        };

        let mut state = GameState::new(difficulty, self.seed, &self.settings)?;
        self.display
            .show_map(Some(INITIAL_MAP_HEADING), &state.grid(), state.player())?;

        while !state.is_game_ended() {
            self.display.prompt_move()?;
            let symbol = match self.input.next_symbol()? {
                Some(symbol) => symbol,
                None => {
                    warn!("Input ended after {} turns", state.turn_number());
                    self.display.end_line()?;
                    state.abandon();
                    break;
                }
            };

            for event in state.take_turn(symbol)? {
                if let Some(message) = event.message() {
                    self.display.add_message(message)?;
                }
            }
            self.display.show_map(None, &state.grid(), state.player())?;
        }

        info!(
            "Session ended {:?}: {}",
            state.completion_state(),
            state.summary()
        );
        self.display.add_message(state.summary())?;
        Ok(Some(state))
    }

    fn choose_difficulty(&mut self) -> CrawlResult<Option<Difficulty>> {
        let difficulty = match self.difficulty {
            Some(difficulty) => difficulty,
            None => {
                self.display.show_difficulty_menu()?;
                match self.input.read_difficulty()? {
                    Some(difficulty) => difficulty,
                    None => return Ok(None),
                }
            }
        };

        if difficulty.is_invalid() {
            warn!("Unrecognised difficulty choice, playing on Easy");
            self.display.add_message(INVALID_DIFFICULTY_WARNING)?;
        }
        Ok(Some(difficulty))
    }

    /// Consumes the game and returns the output writer.
    pub fn into_writer(self) -> W {
        self.display.into_inner()
    }
}

/// Process exit status for a finished session.
///
/// Always 0 unless `distinct` is set, in which case a loss is 1 and a
/// session cut short by closed input is 2.
pub fn exit_status(completion: GameCompletionState, distinct: bool) -> u8 {
    if !distinct {
        return 0;
    }
    match completion {
        GameCompletionState::Won | GameCompletionState::Playing => 0,
        GameCompletionState::Lost => 1,
        GameCompletionState::Abandoned => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (Option<GameState>, String) {
        let mut game = ConsoleGame::new(
            Cursor::new(script.to_string()),
            Vec::new(),
            GameSettings::default(),
            4242,
        );
        let state = game.run().unwrap();
        (state, String::from_utf8(game.into_writer()).unwrap())
    }

    #[test]
    fn test_menu_then_initial_map() {
        let (state, output) = play("1\n");
        assert!(output.starts_with("Choose Difficulty Level:\n"));
        assert!(output.contains(INITIAL_MAP_HEADING));
        let state = state.unwrap();
        assert_eq!(state.completion_state(), GameCompletionState::Abandoned);
    }

    #[test]
    fn test_invalid_difficulty_warns_and_continues() {
        let (state, output) = play("9\n");
        assert!(output.contains(INVALID_DIFFICULTY_WARNING));
        assert_eq!(state.unwrap().size(), 5);
    }

    #[test]
    fn test_no_input_at_all() {
        let (state, output) = play("");
        assert!(state.is_none());
        assert!(output.contains("Enter your choice: "));
    }

    #[test]
    fn test_moves_typed_right_after_choice() {
        let (state, output) = play("2dd\n");
        assert!(!output.contains(INVALID_DIFFICULTY_WARNING));
        let state = state.unwrap();
        assert_eq!(state.size(), 10);
        assert!(state.turn_number() >= 1);
    }

    #[test]
    fn test_preselected_difficulty_skips_menu() {
        let mut game = ConsoleGame::new(
            Cursor::new(String::new()),
            Vec::new(),
            GameSettings::default(),
            1,
        )
        .with_difficulty(Difficulty::Hard);
        let state = game.run().unwrap().unwrap();
        assert_eq!(state.size(), 15);
        let output = String::from_utf8(game.into_writer()).unwrap();
        assert!(!output.contains("Choose Difficulty Level:"));
    }

    #[test]
    fn test_invalid_move_message() {
        let (_, output) = play("1\nq\n");
        assert!(output.contains("Invalid move! Use 'w', 'a', 's', or 'd'."));
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(exit_status(GameCompletionState::Lost, false), 0);
        assert_eq!(exit_status(GameCompletionState::Won, true), 0);
        assert_eq!(exit_status(GameCompletionState::Lost, true), 1);
        assert_eq!(exit_status(GameCompletionState::Abandoned, true), 2);
    }
}
