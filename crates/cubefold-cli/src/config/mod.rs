//! Layered run configuration: built-in defaults, then an optional TOML file, then `--set`
//! overrides, then explicit command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
