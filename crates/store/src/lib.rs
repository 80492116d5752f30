//! Best-score persistence.
//!
//! The only thing that survives a session is one number. [`ScoreStore`] is the seam;
//! [`JsonFileStore`] keeps it in a small JSON document and [`MemoryStore`] keeps it
//! in memory for tests and for machines without a data directory.
//!
//! ```
//! use blockfall_store::{MemoryStore, ScoreStore};
//!
//! let mut store = MemoryStore::default();
//! assert_eq!(store.load().unwrap(), 0);
//! store.save(1200).unwrap();
//! assert_eq!(store.load().unwrap(), 1200);
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Directory name under the platform data dir.
pub const APP_DIR: &str = "blockfall";

/// File name of the best-score document.
pub const BEST_SCORE_FILE: &str = "best_score.json";

/// Somewhere to keep the best score between sessions.
pub trait ScoreStore {
    /// Read the stored best score; a store that was never written reads as 0.
    fn load(&mut self) -> Result<u32>;

    /// Replace the stored best score.
    fn save(&mut self, best_score: u32) -> Result<()>;
}

/// On-disk document: `{"best_score": 1200}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct BestScoreDoc {
    best_score: u32,
}

/// Best score kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/blockfall/best_score.json`, if the platform has a data dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::data_dir().map(|dir| dir.join(APP_DIR).join(BEST_SCORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&mut self) -> Result<u32> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no best score at {}", self.path.display());
                return Ok(0);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("read {}", self.path.display()));
            }
        };
        let doc: BestScoreDoc = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(doc.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        let json = serde_json::to_vec_pretty(&BestScoreDoc { best_score })?;
        atomic_write(&self.path, &json)
            .with_context(|| format!("write {}", self.path.display()))?;
        debug!("saved best score {} to {}", best_score, self.path.display());
        Ok(())
    }
}

/// Write to a sibling temp file, then rename over the target.
fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    match fs::rename(&tmp, path) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(&tmp, path)?;
            let _ = fs::remove_file(&tmp);
            Ok(())
        }
    }
}

/// Best score kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best_score: u32,
}

impl MemoryStore {
    pub fn new(best_score: u32) -> Self {
        Self { best_score }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.best_score)
    }

    fn save(&mut self, best_score: u32) -> Result<()> {
        self.best_score = best_score;
        Ok(())
    }
}

/// Load the best score, logging and falling back to 0 on failure.
///
/// A corrupt or unreadable file must not keep the game from starting.
pub fn load_or_default(store: &mut dyn ScoreStore) -> u32 {
    match store.load() {
        Ok(best) => best,
        Err(e) => {
            warn!("could not load best score: {:#}", e);
            0
        }
    }
}

/// Save the best score, logging failures instead of propagating them.
pub fn save_or_warn(store: &mut dyn ScoreStore, best_score: u32) -> bool {
    match store.save(best_score) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not save best score {}: {:#}", best_score, e);
            false
        }
    }
}
