//! Simulation configuration.

use crate::core::config::GameConfig;
use crate::core::constants::{DEFAULT_FLOOR_HEIGHT, DEFAULT_FLOOR_WIDTH, DEFAULT_MAX_FLOOR};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub width: usize,
    pub height: usize,

    /// Deepest floor a run may reach before it counts as escaped
    pub max_floor: u32,

    /// Explore commands per run before the autopilot gives up and quits
    pub max_steps_per_run: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            width: DEFAULT_FLOOR_WIDTH,
            height: DEFAULT_FLOOR_HEIGHT,
            max_floor: DEFAULT_MAX_FLOOR,
            max_steps_per_run: 5_000,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking the first few floors.
    pub fn quick(max_floor: u32) -> Self {
        Self {
            num_runs: 100,
            max_floor,
            ..Default::default()
        }
    }

    /// The game settings each simulated session runs under.
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            width: self.width,
            height: self.height,
            max_floor: self.max_floor,
            seed: None,
            ..GameConfig::default()
        }
    }
}
