//! Game configuration, read from ~/.delve/config.json.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_FLOOR_HEIGHT, DEFAULT_FLOOR_WIDTH, DEFAULT_MAX_FLOOR};
use crate::core::error::DelveError;
use crate::utils::persistence::{load_json_or_default, save_json, save_path};

pub const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Clearing this floor ends the run
    pub max_floor: u32,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Relative paths are resolved against ~/.delve/
    pub leaderboard_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FLOOR_WIDTH,
            height: DEFAULT_FLOOR_HEIGHT,
            max_floor: DEFAULT_MAX_FLOOR,
            seed: None,
            leaderboard_file: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
        }
    }
}

impl GameConfig {
    /// Loads ~/.delve/config.json, falling back to defaults if it is missing or malformed.
    pub fn load() -> Self {
        match save_path(CONFIG_FILE) {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                log::warn!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        load_json_or_default(path)
    }

    /// Writes the defaults to ~/.delve/config.json and returns the path.
    pub fn write_default() -> Result<PathBuf, DelveError> {
        let path = save_path(CONFIG_FILE)?;
        save_json(&path, &Self::default())?;
        Ok(path)
    }

    pub fn validate(&self) -> Result<(), DelveError> {
        if self.width < 2 || self.height < 2 {
            return Err(DelveError::InvalidConfig(format!(
                "floor must be at least 2x2, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_floor == 0 {
            return Err(DelveError::InvalidConfig(
                "max_floor must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute leaderboard location.
    pub fn leaderboard_path(&self) -> Result<PathBuf, DelveError> {
        if self.leaderboard_file.is_absolute() {
            return Ok(self.leaderboard_file.clone());
        }
        save_path(&self.leaderboard_file.to_string_lossy())
    }
}
