//! Enemies, status effects and the encounter loop.

pub mod bestiary;
pub mod logic;
pub mod types;

pub use bestiary::*;
pub use logic::*;
pub use types::*;
