//! Utility functions/types to use across the whole crate.

mod file_system;

pub use file_system::*;
