//! Configuration model for agentscan.
//!
//! This module defines the Config struct that represents `agentscan.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_CONFIG_FILE, DEFAULT_MANIFEST_FILE};
