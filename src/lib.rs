#![deny(unused_must_use)]

pub mod cli;
mod core;
pub mod utils;

mod applog {
    pub use logger::{debug, info, warn};
}

// Exports
pub use crate::core::config_mk::{self, CONFIG_MK};
pub use crate::core::prefix::{EnvPrefix, InstallPrefix, Lookup, PrefixResolver, PrefixSource};
