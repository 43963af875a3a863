//! JSON-backed task snapshot storage.
//!
//! The whole task list is stored as one pretty-printed JSON array at
//! `~/.config/dayflow/tasks.json`. Reads are forgiving: a missing or
//! unparseable file yields an empty snapshot so analytics always have
//! something to work with. Writes report failures.

use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{Result, StorageError};
use crate::task::Task;

const TASKS_FILE: &str = "tasks.json";

/// File-backed store for the task snapshot.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Store at the default location inside [`data_dir`].
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(TASKS_FILE),
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

    /// Current snapshot. Missing or corrupt files read as empty.
    pub fn load(&self) -> Vec<Task> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    /// Replace the stored snapshot.
    ///
    /// # Errors
    /// Returns an error if the file or its parent directory cannot be
    /// written.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        }
        let content = serde_json::to_string_pretty(tasks).map_err(|e| StorageError::SaveFailed {
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
