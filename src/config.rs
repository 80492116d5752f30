//! Runtime configuration from environment variables.
//!
//! - `BLOCKFALL_SEED`: piece bag seed (default: derived from the system clock)
//! - `BLOCKFALL_BEST_SCORE_PATH`: best-score file (default: `<data_dir>/blockfall/best_score.json`)
//! - `BLOCKFALL_LOG_PATH`: enable file logging at this path (default: off)
//! - `BLOCKFALL_LOG_LEVEL`: `error` .. `trace` (default: `info`)
//! - `BLOCKFALL_LAYOUT`: `compact`, `regular` or `auto` (default: `auto`)
//!
//! Malformed values fall back to the default.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::store::{JsonFileStore, MemoryStore, ScoreStore};
use crate::term::{Layout, Viewport};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub seed: Option<u32>,
    pub best_score_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// `None` picks the layout from the viewport each frame.
    pub layout: Option<Layout>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            best_score_path: None,
            log_path: None,
            log_level: LevelFilter::Info,
            layout: None,
        }
    }
}

impl Config {
    /// Create from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            seed: non_empty("BLOCKFALL_SEED").and_then(|s| s.parse().ok()),
            best_score_path: non_empty("BLOCKFALL_BEST_SCORE_PATH").map(PathBuf::from),
            log_path: non_empty("BLOCKFALL_LOG_PATH").map(PathBuf::from),
            log_level: non_empty("BLOCKFALL_LOG_LEVEL")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
            layout: non_empty("BLOCKFALL_LAYOUT").and_then(|s| Layout::from_str(&s)),
        }
    }

    /// Configured seed, or one taken from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos();
            (nanos ^ (nanos >> 32)) as u32
        })
    }

    pub fn layout_for(&self, viewport: Viewport) -> Layout {
        self.layout.unwrap_or_else(|| Layout::for_viewport(viewport))
    }

    /// The configured best-score store.
    ///
    /// Falls back to an in-memory store when the platform has no data directory.
    pub fn score_store(&self) -> Box<dyn ScoreStore> {
        match self.best_score_path.clone().or_else(JsonFileStore::default_path) {
            Some(path) => Box::new(JsonFileStore::new(path)),
            None => {
                log::warn!("no data directory; best score will not persist");
                Box::new(MemoryStore::default())
            }
        }
    }
}
