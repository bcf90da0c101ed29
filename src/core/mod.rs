//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game_state;
pub mod input;
pub mod progression;

pub use config::*;
pub use error::*;
pub use events::*;
pub use game_state::*;
pub use input::*;
pub use progression::*;
