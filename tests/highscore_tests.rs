//! File-level tests for the highscore list using temporary directories.

use asteroids::config::GameConfig;
use asteroids::error::GameError;
use asteroids::highscore::HighScores;
use asteroids::menu::{HighScoreScreen, Screen};
use std::fs;

#[test]
fn saved_list_loads_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscores.json");
    HighScores::new(vec![100, 50, 30]).save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[100,50,30]");
    let loaded = HighScores::load(&path).unwrap();
    assert_eq!(loaded.scores(), &[100, 50, 30]);
}

#[test]
fn missing_file_is_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = HighScores::load(dir.path().join("nope.json")).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscores.json");
    fs::write(&path, "{\"scores\": oops").unwrap();

    match HighScores::load(&path) {
        Err(GameError::HighScoreParse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn screen_records_and_persists_each_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscores.json");
    fs::write(&path, "[40]").unwrap();
    let config = GameConfig {
        highscore_path: path.clone(),
        ..Default::default()
    };

    let mut screen = HighScoreScreen::load(&config).unwrap();
    screen.record(90).unwrap();
    screen.record(10).unwrap();

    assert_eq!(HighScores::load(&path).unwrap().scores(), &[40, 90, 10]);
    assert_eq!(screen.body(), vec!["1. 90", "2. 40", "3. 10"]);
}
