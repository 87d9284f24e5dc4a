//! Loading settings from JSON files on disk.

use std::io::Write;
use tempfile::NamedTempFile;
use treasure_crawl::{CrawlError, Difficulty, GameSettings, GameState, SettingsOverrides};

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_settings_file() {
    let file = settings_file(
        r#"{
            "starting_lives": 6,
            "exclusive_placement": true,
            "distinct_exit_codes": true
        }"#,
    );

    let settings = GameSettings::from_file(file.path()).unwrap();
    assert_eq!(settings.starting_lives, 6);
    assert!(settings.exclusive_placement);
    assert!(settings.distinct_exit_codes);
    assert!(!settings.invalid_move_consumes_turn);

    let state = GameState::new(Difficulty::Easy, 10, &settings).unwrap();
    assert_eq!(state.lives(), 6);
    assert_ne!(state.treasure(), state.enemies()[0]);
    assert_ne!(state.enemies()[0], state.traps()[0]);
    assert_ne!(state.treasure(), state.traps()[0]);
}

#[test]
fn test_invalid_settings_file() {
    let file = settings_file(r#"{ "starting_lives": 0 }"#);
    assert!(matches!(
        GameSettings::from_file(file.path()),
        Err(CrawlError::Config(_))
    ));

    let file = settings_file("starting_lives = 3");
    assert!(matches!(
        GameSettings::from_file(file.path()),
        Err(CrawlError::Serde(_))
    ));
}

#[test]
fn test_command_line_overrides_file() {
    let file = settings_file(r#"{ "starting_lives": 6, "exclusive_placement": true }"#);

    let settings = GameSettings::from_file(file.path())
        .unwrap()
        .with_overrides(&SettingsOverrides {
            starting_lives: Some(1),
            ..SettingsOverrides::default()
        })
        .unwrap();
    assert_eq!(settings.starting_lives, 1);
    assert!(settings.exclusive_placement);
}
