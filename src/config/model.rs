//! Config struct definition and default implementation.

use crate::scan::{ScanOptions, UnknownNamespacePolicy};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "agentscan.yaml";

/// Manifest file used when the config does not name one.
pub const DEFAULT_MANIFEST_FILE: &str = "agents.yaml";

/// Configuration for agentscan.
///
/// This struct represents the contents of `agentscan.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Class source
    // =========================================================================
    /// Path to the class manifest, relative to the working directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    // =========================================================================
    // Scan settings
    // =========================================================================
    /// Prefixes scanned when a command is given none.
    #[serde(default)]
    pub default_prefixes: Vec<String>,

    /// What to do with a prefix that names no known namespace.
    #[serde(default)]
    pub unknown_namespace: UnknownNamespacePolicy,

    // =========================================================================
    // Event log
    // =========================================================================
    /// NDJSON file receiving one event per command run (unset disables).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_log: Option<String>,
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            default_prefixes: Vec::new(),
            unknown_namespace: UnknownNamespacePolicy::default(),
            events_log: None,
        }
    }
}

impl Config {
    /// Scan options derived from this config.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            unknown_namespace: self.unknown_namespace,
        }
    }
}
