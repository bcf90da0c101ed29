//! Utility modules: build info and ~/.delve persistence.

pub mod build_info;
pub mod persistence;

pub use build_info::*;
