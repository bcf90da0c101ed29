//! Items, weapons and the shop catalog.

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
