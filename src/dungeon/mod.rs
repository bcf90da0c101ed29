//! Floors: layout, generation and what happens when you walk into a room.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::*;
pub use logic::*;
pub use types::*;
