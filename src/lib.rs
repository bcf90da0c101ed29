//! Delve - a turn-based dungeon crawl engine.
//!
//! The library holds the whole game: floor generation, the room state machine,
//! combat, progression and the economy. It never touches the terminal; input comes
//! through a [`core::CommandSource`] and everything that happens is reported as a
//! [`core::GameEvent`].

pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod economy;
pub mod items;
pub mod leaderboard;
pub mod simulator;
pub mod utils;
