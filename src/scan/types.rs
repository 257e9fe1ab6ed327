//! Core types for namespace scans.

use crate::agent::AgentAttributes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to scan the requested namespaces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// The scan was called without any prefix.
    #[error("no namespace prefixes given")]
    NoPrefixes,

    /// A prefix is not a well-formed namespace.
    #[error("invalid namespace prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    /// A prefix names a namespace the class source does not know.
    #[error("namespace '{prefix}' cannot be resolved")]
    UnresolvedNamespace { prefix: String },
}

/// What to do with a prefix that resolves to no known namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownNamespacePolicy {
    /// Fail the scan with [`ScanError::UnresolvedNamespace`] (default).
    #[default]
    Fail,
    /// Treat the prefix as an empty namespace.
    Ignore,
}

/// Options controlling a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanOptions {
    pub unknown_namespace: UnknownNamespacePolicy,
}

/// An agent-marked class found by a scan, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentCandidate {
    /// Fully-qualified class identifier.
    pub class_id: String,
    /// Attributes of the agent marker as declared.
    pub attributes: AgentAttributes,
}
