//! Headless balance simulator.
//!
//! Plays many complete games with an [`AutoPilot`] standing in for the player and
//! aggregates how far they got:
//! - escape and death rates
//! - floor, level and score reached
//! - kills, traps and potions along the way
//!
//! Runs go through the same [`GameSession`](crate::core::GameSession) as real play,
//! so the numbers track the actual rules.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::AutoPilot;
pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
