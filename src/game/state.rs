//! # Game State Module
//!
//! Session state and the turn-by-turn state machine.
//!
//! A [`GameState`] is created in the setup phase (difficulty lookup and
//! random placement), then alternates between awaiting input and resolving
//! a move until the treasure is found, the lives run out, or input ends.

use crate::game::{move_player, resolve, Difficulty, Encounter, MoveOutcome, Position};
use crate::generation::{utils, EntityLayout, EntityPlacer, GenerationConfig, Generator, Grid};
use crate::settings::GameSettings;
use crate::{config, CrawlError, CrawlResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game completion state for handling endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// Player found the treasure
    Won,
    /// Player ran out of lives
    Lost,
    /// Input ended before the game did
    Abandoned,
}

impl GameCompletionState {
    /// Whether this state ends the session.
    pub fn is_terminal(self) -> bool {
        self != GameCompletionState::Playing
    }
}

/// Where the session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Setup,
    AwaitingInput,
    Resolving,
    Terminal(GameCompletionState),
}

/// Something that happened while resolving a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player stepped to a new cell
    PlayerMoved { from: Position, to: Position },
    /// The player pushed against the edge of the grid
    MoveBlocked { at: Position },
    /// The key was not a direction
    InvalidMove { symbol: char },
    /// The player reached the treasure
    TreasureFound,
    /// The player ran into a hidden enemy
    EnemyEncountered { index: usize, lives_remaining: u32 },
    /// The player stepped into a hidden trap
    TrapTriggered { index: usize, lives_remaining: u32 },
    /// No lives remain
    LivesExhausted,
}

impl GameEvent {
    /// Console message for this event, if the player should see one.
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::PlayerMoved { .. } | GameEvent::MoveBlocked { .. } => None,
            GameEvent::InvalidMove { .. } => {
                Some("Invalid move! Use 'w', 'a', 's', or 'd'.".to_string())
            }
            GameEvent::TreasureFound => Some("You found the treasure! You win!".to_string()),
            GameEvent::EnemyEncountered {
                lives_remaining, ..
            } => Some(format!(
                "You encountered an enemy! Lives remaining: {lives_remaining}"
            )),
            GameEvent::TrapTriggered {
                lives_remaining, ..
            } => Some(format!("You enter a trap! Lives remaining: {lives_remaining}")),
            GameEvent::LivesExhausted => Some("You have no lives left! Game over!".to_string()),
        }
    }
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Moves that changed the player's cell
    pub moves_made: u32,
    /// Moves that ran into the grid edge
    pub blocked_moves: u32,
    /// Keys that were not directions
    pub invalid_inputs: u32,
    /// Enemies run into
    pub enemies_encountered: u32,
    /// Traps stepped in
    pub traps_triggered: u32,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerMoved { .. } => self.moves_made += 1,
            GameEvent::MoveBlocked { .. } => self.blocked_moves += 1,
            GameEvent::InvalidMove { .. } => self.invalid_inputs += 1,
            GameEvent::EnemyEncountered { .. } => self.enemies_encountered += 1,
            GameEvent::TrapTriggered { .. } => self.traps_triggered += 1,
            GameEvent::TreasureFound | GameEvent::LivesExhausted => {}
        }
    }

    /// Lives lost to enemies and traps combined.
    pub fn lives_lost(&self) -> u32 {
        self.enemies_encountered + self.traps_triggered
    }
}

/// One treasure hunt, from setup to its ending.
///
/// Entity positions never change after setup; only the player moves. The
/// true grid is not stored but rebuilt on demand by [`GameState::grid`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    difficulty: Difficulty,
    size: usize,
    player: Position,
    treasure: Position,
    enemies: Vec<Position>,
    traps: Vec<Position>,
    lives: u32,
    starting_lives: u32,
    turn_number: u64,
    phase: SessionPhase,
    completion_state: GameCompletionState,
    statistics: GameStatistics,
    invalid_move_consumes_turn: bool,
}

impl GameState {
    /// Sets up a new session: looks up the difficulty, places the player in
    /// the top-left corner and draws the hidden entities from `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::{Difficulty, GameSettings, GameState, Position, SessionPhase};
    ///
    /// let state = GameState::new(Difficulty::Easy, 12345, &GameSettings::default()).unwrap();
    /// assert_eq!(state.size(), 5);
    /// assert_eq!(state.lives(), 4);
    /// assert_eq!(state.player(), Position::origin());
    /// assert_eq!(state.phase(), SessionPhase::AwaitingInput);
    /// ```
    pub fn new(difficulty: Difficulty, seed: u64, settings: &GameSettings) -> CrawlResult<Self> {
        settings.validate()?;

        let config = GenerationConfig::new(seed, difficulty)
            .with_exclusive_placement(settings.exclusive_placement);
        let mut rng = utils::create_rng(&config);
        let layout = EntityPlacer::new().generate(&config, &mut rng)?;

        let mut state =
            Self::assemble(config.size, config.player_start, layout, settings.starting_lives)?;
        state.difficulty = difficulty;
        state.invalid_move_consumes_turn = settings.invalid_move_consumes_turn;
        state.start();

        info!(
            "New {} session on a {}x{} grid with seed {}",
            difficulty, state.size, state.size, seed
        );
        debug!("True grid:\n{}", state.grid().to_debug_string());

        Ok(state)
    }

    /// Creates a session from a known layout, with the player at the start.
    pub fn with_layout(size: usize, layout: EntityLayout, starting_lives: u32) -> CrawlResult<Self> {
        Self::with_player(size, config::PLAYER_START, layout, starting_lives)
    }

    /// Creates a session from a known layout and player position.
    pub fn with_player(
        size: usize,
        player: Position,
        layout: EntityLayout,
        starting_lives: u32,
    ) -> CrawlResult<Self> {
        let mut state = Self::assemble(size, player, layout, starting_lives)?;
        state.start();
        Ok(state)
    }

    /// Checks the layout and builds a session still in [`SessionPhase::Setup`].
    fn assemble(
        size: usize,
        player: Position,
        layout: EntityLayout,
        starting_lives: u32,
    ) -> CrawlResult<Self> {
        if size == 0 {
            return Err(CrawlError::InvalidState("grid size must be positive".to_string()));
        }
        if starting_lives == 0 {
            return Err(CrawlError::InvalidState(
                "a session needs at least one life".to_string(),
            ));
        }
        if let Some(outside) = std::iter::once(player)
            .chain(layout.positions())
            .find(|pos| !pos.is_within(size))
        {
            return Err(CrawlError::InvalidState(format!(
                "{outside} lies outside the {size}x{size} grid"
            )));
        }

        let EntityLayout {
            treasure,
            enemies,
            traps,
        } = layout;

        Ok(Self {
            difficulty: Difficulty::Easy,
            size,
            player,
            treasure,
            enemies,
            traps,
            lives: starting_lives,
            starting_lives,
            turn_number: 0,
            phase: SessionPhase::Setup,
            completion_state: GameCompletionState::Playing,
            statistics: GameStatistics::new(),
            invalid_move_consumes_turn: false,
        })
    }

    /// Ends setup; the session waits for its first move.
    fn start(&mut self) {
        if self.phase == SessionPhase::Setup {
            self.phase = SessionPhase::AwaitingInput;
        }
    }

    /// Plays one turn from a console key.
    ///
    /// Recognised keys move the player and resolve whatever is on the new
    /// cell, including a cell the player was already standing on when the
    /// move hits the grid edge. Unrecognised keys leave the player in place
    /// and, unless configured otherwise, do not use up the turn.
    pub fn take_turn(&mut self, symbol: char) -> CrawlResult<Vec<GameEvent>> {
        if self.is_game_ended() {
            return Err(CrawlError::InvalidAction(format!(
                "the session has already ended ({:?})",
                self.completion_state
            )));
        }
        if self.phase == SessionPhase::Setup {
            return Err(CrawlError::InvalidState(
                "the session is still being set up".to_string(),
            ));
        }

        self.phase = SessionPhase::Resolving;
        let mut events = Vec::new();

        let outcome = move_player(self.player, symbol, self.size);
        match outcome {
            MoveOutcome::Invalid(symbol) => {
                events.push(GameEvent::InvalidMove { symbol });
                if !self.invalid_move_consumes_turn {
                    self.finish_turn(&events);
                    return Ok(events);
                }
            }
            MoveOutcome::Moved { from, to } => {
                self.player = to;
                if outcome.is_blocked() {
                    events.push(GameEvent::MoveBlocked { at: to });
                } else {
                    events.push(GameEvent::PlayerMoved { from, to });
                }
            }
        }

        self.turn_number += 1;
        let resolution = resolve(
            self.player,
            self.treasure,
            &self.enemies,
            &self.traps,
            &mut self.lives,
        );

        match resolution.encounter {
            Encounter::Nothing => {}
            Encounter::Treasure => events.push(GameEvent::TreasureFound),
            Encounter::Enemy { index } => events.push(GameEvent::EnemyEncountered {
                index,
                lives_remaining: resolution.lives,
            }),
            Encounter::Trap { index } => events.push(GameEvent::TrapTriggered {
                index,
                lives_remaining: resolution.lives,
            }),
        }
        if resolution.completion == GameCompletionState::Lost {
            events.push(GameEvent::LivesExhausted);
        }
        self.completion_state = resolution.completion;

        debug!(
            "Turn {}: player at {}, {:?}, {} lives",
            self.turn_number, self.player, resolution.encounter, self.lives
        );
        self.finish_turn(&events);
        Ok(events)
    }

    fn finish_turn(&mut self, events: &[GameEvent]) {
        for event in events {
            self.statistics.update_from_event(event);
        }
        self.phase = if self.completion_state.is_terminal() {
            SessionPhase::Terminal(self.completion_state)
        } else {
            SessionPhase::AwaitingInput
        };
    }

    /// Ends a session that is still in progress because input ran out.
    pub fn abandon(&mut self) {
        if !self.is_game_ended() {
            self.completion_state = GameCompletionState::Abandoned;
            self.phase = SessionPhase::Terminal(GameCompletionState::Abandoned);
        }
    }

    /// Builds the true grid from the current positions.
    pub fn grid(&self) -> Grid {
        Grid::build(
            self.size,
            self.player,
            self.treasure,
            &self.enemies,
            &self.traps,
        )
    }

    /// Checks if the game has ended.
    pub fn is_game_ended(&self) -> bool {
        self.completion_state.is_terminal()
    }

    pub fn completion_state(&self) -> GameCompletionState {
        self.completion_state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn treasure(&self) -> Position {
        self.treasure
    }

    pub fn enemies(&self) -> &[Position] {
        &self.enemies
    }

    pub fn traps(&self) -> &[Position] {
        &self.traps
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn starting_lives(&self) -> u32 {
        self.starting_lives
    }

    pub fn turn_number(&self) -> u64 {
        self.turn_number
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    /// One-line summary of how the session went.
    pub fn summary(&self) -> String {
        format!(
            "Turns: {}, moves: {}, lives left: {}/{}, lives lost: {} (enemies: {}, traps: {})",
            self.turn_number,
            self.statistics.moves_made,
            self.lives,
            self.starting_lives,
            self.statistics.lives_lost(),
            self.statistics.enemies_encountered,
            self.statistics.traps_triggered
        )
    }

    /// Serializes the full session, hidden entities included, for debugging.
    pub fn to_json(&self) -> CrawlResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(treasure: Position, enemies: Vec<Position>, traps: Vec<Position>) -> EntityLayout {
        EntityLayout {
            treasure,
            enemies,
            traps,
        }
    }

    fn open_field() -> GameState {
        GameState::with_layout(5, layout(Position::new(4, 4), vec![], vec![]), 4).unwrap()
    }

    #[test]
    fn test_game_state_creation() {
        let state = GameState::new(Difficulty::Medium, 12345, &GameSettings::default()).unwrap();
        assert_eq!(state.size(), 10);
        assert_eq!(state.enemies().len(), 2);
        assert_eq!(state.traps().len(), 2);
        assert_eq!(state.turn_number(), 0);
        assert_eq!(state.completion_state(), GameCompletionState::Playing);
        assert_ne!(state.treasure(), Position::origin());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let settings = GameSettings::default();
        let first = GameState::new(Difficulty::Hard, 99, &settings).unwrap();
        let second = GameState::new(Difficulty::Hard, 99, &settings).unwrap();
        assert_eq!(first.treasure(), second.treasure());
        assert_eq!(first.enemies(), second.enemies());
        assert_eq!(first.traps(), second.traps());
    }

    #[test]
    fn test_invalid_difficulty_plays_like_easy() {
        let state = GameState::new(Difficulty::Invalid, 5, &GameSettings::default()).unwrap();
        assert_eq!(state.size(), 5);
        assert_eq!(state.enemies().len(), 1);
        assert_eq!(state.traps().len(), 1);
        assert!(state.difficulty().is_invalid());
    }

    #[test]
    fn test_with_layout_rejects_bad_input() {
        let outside = layout(Position::new(5, 5), vec![], vec![]);
        assert!(GameState::with_layout(5, outside, 4).is_err());

        let fine = layout(Position::new(4, 4), vec![], vec![]);
        assert!(GameState::with_layout(5, fine.clone(), 0).is_err());
        assert!(GameState::with_layout(0, fine, 4).is_err());
    }

    #[test]
    fn test_setup_phase_refuses_moves() {
        let mut state =
            GameState::assemble(5, Position::origin(), layout(Position::new(4, 4), vec![], vec![]), 4)
                .unwrap();
        assert_eq!(state.phase(), SessionPhase::Setup);
        assert!(matches!(state.take_turn('d'), Err(CrawlError::InvalidState(_))));
        assert_eq!(state.player(), Position::origin());

        state.start();
        assert_eq!(state.phase(), SessionPhase::AwaitingInput);
        assert!(state.take_turn('d').is_ok());
    }

    #[test]
    fn test_constructors_finish_setup() {
        assert_eq!(open_field().phase(), SessionPhase::AwaitingInput);
        let state = GameState::new(Difficulty::Easy, 8, &GameSettings::default()).unwrap();
        assert_eq!(state.phase(), SessionPhase::AwaitingInput);
    }

    #[test]
    fn test_summary_counts_lives_lost() {
        let enemy = Position::new(0, 1);
        let mut state =
            GameState::with_layout(5, layout(Position::new(4, 4), vec![enemy], vec![]), 4).unwrap();
        state.take_turn('d').unwrap();
        assert_eq!(
            state.summary(),
            "Turns: 1, moves: 1, lives left: 3/4, lives lost: 1 (enemies: 1, traps: 0)"
        );
    }

    #[test]
    fn test_turn_advancement() {
        let mut state = open_field();
        let events = state.take_turn('s').unwrap();
        assert_eq!(
            events,
            vec![GameEvent::PlayerMoved {
                from: Position::new(0, 0),
                to: Position::new(1, 0)
            }]
        );
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.phase(), SessionPhase::AwaitingInput);
    }

    #[test]
    fn test_invalid_move_does_not_use_turn() {
        let mut state = open_field();
        let events = state.take_turn('q').unwrap();
        assert_eq!(events, vec![GameEvent::InvalidMove { symbol: 'q' }]);
        assert_eq!(state.player(), Position::origin());
        assert_eq!(state.turn_number(), 0);
        assert_eq!(state.completion_state(), GameCompletionState::Playing);
        assert_eq!(state.statistics().invalid_inputs, 1);
    }

    #[test]
    fn test_invalid_move_can_consume_turn() {
        let settings = GameSettings {
            invalid_move_consumes_turn: true,
            ..GameSettings::default()
        };
        let mut state = GameState::new(Difficulty::Easy, 3, &settings).unwrap();
        state.take_turn('x').unwrap();
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.player(), Position::origin());
    }

    #[test]
    fn test_blocked_move_resolves_current_cell_again() {
        let enemy = Position::new(0, 1);
        let mut state =
            GameState::with_layout(5, layout(Position::new(4, 4), vec![enemy], vec![]), 4).unwrap();
        state.take_turn('d').unwrap();
        assert_eq!(state.lives(), 3);

        let events = state.take_turn('w').unwrap();
        assert_eq!(events[0], GameEvent::MoveBlocked { at: enemy });
        assert_eq!(state.lives(), 2);
        assert_eq!(state.statistics().blocked_moves, 1);
    }

    #[test]
    fn test_no_turns_after_game_end() {
        let mut state =
            GameState::with_layout(5, layout(Position::new(0, 1), vec![], vec![]), 4).unwrap();
        state.take_turn('d').unwrap();
        assert_eq!(state.completion_state(), GameCompletionState::Won);
        assert_eq!(state.phase(), SessionPhase::Terminal(GameCompletionState::Won));
        assert!(matches!(state.take_turn('d'), Err(CrawlError::InvalidAction(_))));
    }

    #[test]
    fn test_abandon() {
        let mut state = open_field();
        state.abandon();
        assert_eq!(state.completion_state(), GameCompletionState::Abandoned);
        assert!(state.is_game_ended());
    }

    #[test]
    fn test_abandon_keeps_real_ending() {
        let mut state =
            GameState::with_layout(5, layout(Position::new(1, 0), vec![], vec![]), 4).unwrap();
        state.take_turn('s').unwrap();
        state.abandon();
        assert_eq!(state.completion_state(), GameCompletionState::Won);
    }

    #[test]
    fn test_grid_follows_player() {
        let mut state = open_field();
        state.take_turn('d').unwrap();
        let grid = state.grid();
        assert_eq!(grid.get(Position::new(0, 1)), Some(crate::Cell::Player));
        assert_eq!(grid.get(Position::origin()), Some(crate::Cell::Empty));
    }

    #[test]
    fn test_statistics_update() {
        let mut stats = GameStatistics::new();
        stats.update_from_event(&GameEvent::PlayerMoved {
            from: Position::new(0, 0),
            to: Position::new(0, 1),
        });
        stats.update_from_event(&GameEvent::EnemyEncountered {
            index: 0,
            lives_remaining: 3,
        });
        stats.update_from_event(&GameEvent::TrapTriggered {
            index: 0,
            lives_remaining: 2,
        });
        assert_eq!(stats.moves_made, 1);
        assert_eq!(stats.lives_lost(), 2);
    }

    #[test]
    fn test_event_messages() {
        assert_eq!(
            GameEvent::EnemyEncountered {
                index: 0,
                lives_remaining: 3
            }
            .message()
            .as_deref(),
            Some("You encountered an enemy! Lives remaining: 3")
        );
        assert_eq!(
            GameEvent::TrapTriggered {
                index: 1,
                lives_remaining: 0
            }
            .message()
            .as_deref(),
            Some("You enter a trap! Lives remaining: 0")
        );
        assert!(GameEvent::PlayerMoved {
            from: Position::origin(),
            to: Position::new(0, 1)
        }
        .message()
        .is_none());
    }

    #[test]
    fn test_game_state_serialization() {
        let state = open_field();
        let json = state.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lives"], 4);
    }
}
