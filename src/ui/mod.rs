//! Terminal front end: line-based input on stdin, styled text on stdout.

pub mod dungeon_map;
pub mod event_view;
pub mod logger;
pub mod terminal_input;
