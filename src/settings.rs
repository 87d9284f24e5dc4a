//! # Settings
//!
//! Runtime options for a session, loaded from an optional JSON file and
//! overridden by command-line flags.

use crate::{config, CrawlError, CrawlResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options that change how a session plays or exits.
///
/// Every field has a default, so a settings file only needs to list the
/// options it changes.
///
/// # Examples
///
/// ```
/// use treasure_crawl::GameSettings;
///
/// let settings = GameSettings::from_json(r#"{ "starting_lives": 2 }"#).unwrap();
/// assert_eq!(settings.starting_lives, 2);
/// assert!(!settings.exclusive_placement);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    /// Lives the player starts with
    pub starting_lives: u32,
    /// Keep the treasure, enemies and traps on distinct cells
    pub exclusive_placement: bool,
    /// Resolve encounters even when the move key was not recognised
    pub invalid_move_consumes_turn: bool,
    /// Exit with a different status for a win, a loss and closed input
    pub distinct_exit_codes: bool,
}

/// Options given on the command line, applied over the loaded settings.
///
/// A flag can switch an option on but never off, so an option set in the
/// settings file stays set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub starting_lives: Option<u32>,
    pub exclusive_placement: bool,
    pub invalid_move_consumes_turn: bool,
    pub distinct_exit_codes: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            starting_lives: config::DEFAULT_STARTING_LIVES,
            exclusive_placement: false,
            invalid_move_consumes_turn: false,
            distinct_exit_codes: false,
        }
    }
}

impl GameSettings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> CrawlResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> CrawlResult<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Applies command-line overrides and checks the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use treasure_crawl::{GameSettings, SettingsOverrides};
    ///
    /// let overrides = SettingsOverrides {
    ///     starting_lives: Some(2),
    ///     ..SettingsOverrides::default()
    /// };
    /// let settings = GameSettings::default().with_overrides(&overrides).unwrap();
    /// assert_eq!(settings.starting_lives, 2);
    /// ```
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> CrawlResult<Self> {
        if let Some(lives) = overrides.starting_lives {
            self.starting_lives = lives;
        }
        self.exclusive_placement |= overrides.exclusive_placement;
        self.invalid_move_consumes_turn |= overrides.invalid_move_consumes_turn;
        self.distinct_exit_codes |= overrides.distinct_exit_codes;

        self.validate()?;
        Ok(self)
    }

    /// Checks that the settings describe a playable session.
    pub fn validate(&self) -> CrawlResult<()> {
        if self.starting_lives == 0 {
            return Err(CrawlError::Config(
                "starting_lives must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
