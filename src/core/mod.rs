//! Core functionalities of this program
//!
//! Resolving the installation prefix, and writing it out for the build.

pub mod config_mk;
pub mod prefix;
