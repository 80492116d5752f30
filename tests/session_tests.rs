//! Best score persistence across sessions, through the real JSON file store.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use blockfall::config::Config;
use blockfall::session::GameSession;
use blockfall::store::{JsonFileStore, ScoreStore};
use blockfall::types::{GameAction, GRAVITY_INTERVAL_MS};

fn unique_temp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir()
        .join(format!("blockfall_session_test_{nanos}"))
        .join(name)
}

#[test]
fn session_loads_best_score_written_earlier() {
    let path = unique_temp_path("best_score.json");
    JsonFileStore::new(&path).save(1300).unwrap();

    let mut session = GameSession::new(4, Box::new(JsonFileStore::new(&path)));
    assert_eq!(session.engine().best_score(), 1300);
    assert_eq!(session.saved_best(), 1300);
    assert_eq!(session.engine().score(), 0);

    // Restarting keeps the loaded best and does not rewrite the file.
    assert!(session.apply(GameAction::Restart));
    assert_eq!(session.engine().best_score(), 1300);
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 1300);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn unreadable_store_starts_at_zero() {
    let path = unique_temp_path("best_score.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ broken").unwrap();

    let mut session = GameSession::new(1, Box::new(JsonFileStore::new(&path)));
    assert_eq!(session.engine().best_score(), 0);
    assert!(session.tick(GRAVITY_INTERVAL_MS) > 0);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn config_points_store_at_configured_path() {
    let path = unique_temp_path("configured.json");
    let path_str = path.to_string_lossy().to_string();
    let config = Config::from_lookup(|key| {
        (key == "BLOCKFALL_BEST_SCORE_PATH").then(|| path_str.clone())
    });

    let mut store = config.score_store();
    store.save(250).unwrap();
    assert_eq!(JsonFileStore::new(&path).load().unwrap(), 250);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}
