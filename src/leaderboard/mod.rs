//! Score log shared between games.

pub mod persistence;
pub mod types;

pub use persistence::*;
pub use types::*;
