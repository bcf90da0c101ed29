//! Shop, blacksmith and enchantment.

pub mod logic;
pub mod menus;

pub use logic::*;
pub use menus::*;
