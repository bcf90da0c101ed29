//! JSON helpers for files under ~/.delve/.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::DelveError;

/// Get the ~/.delve/ directory path, creating it if needed.
pub fn delve_dir() -> Result<PathBuf, DelveError> {
    let home_dir = dirs::home_dir().ok_or(DelveError::NoHomeDir)?;
    let dir = home_dir.join(".delve");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a file in ~/.delve/.
pub fn save_path(filename: &str) -> Result<PathBuf, DelveError> {
    Ok(delve_dir()?.join(filename))
}

/// Reads JSON from `path`, or `T::default()` when the file is missing or unreadable.
pub fn load_json_or_default<T: Default + DeserializeOwned>(path: &Path) -> T {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => return T::default(),
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("ignoring malformed {}: {e}", path.display());
            T::default()
        }
    }
}

/// Writes `data` as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), DelveError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
