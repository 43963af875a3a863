mod streak_store;
mod tasks;

pub use streak_store::JsonStreakStore;
pub use tasks::TaskStore;

use std::path::PathBuf;

use crate::error::{Result, StorageError};

/// Returns `~/.config/dayflow[-dev]/` based on DAYFLOW_ENV.
///
/// Set DAYFLOW_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dayflow-dev")
    } else {
        base_dir.join("dayflow")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
