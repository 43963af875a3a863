//! JSON-backed [`StreakStore`] implementation.
//!
//! Persists the streak record at `~/.config/dayflow/streak.json`. Like
//! the task store, reads treat missing or corrupt files as absent state
//! and the tracker falls back to defaults.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::stats::streak::{StreakState, StreakStore};

const STREAK_FILE: &str = "streak.json";

/// File-backed store for the streak record.
#[derive(Debug, Clone)]
pub struct JsonStreakStore {
    path: PathBuf,
}

impl JsonStreakStore {
    /// Store at the default location inside [`data_dir`].
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(STREAK_FILE),
        })
    }

    /// Store at an explicit file path. The parent directory is created
    /// on the first save.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StreakStore for JsonStreakStore {
    fn load(&self) -> Option<StreakState> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&mut self, state: &StreakState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        let content = serde_json::to_string_pretty(state).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
