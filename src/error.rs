//! Error types for agentscan.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Scan and validation failures keep their own typed errors; this module wraps
//! them so commands can map every failure onto an exit code.

use crate::exit_codes;
use crate::scan::ScanError;
use crate::validate::ValidationError;
use thiserror::Error;

/// Main error type for agentscan operations.
#[derive(Error, Debug)]
pub enum AgentScanError {
    /// Invalid arguments, unreadable or malformed config/manifest files.
    #[error("{0}")]
    UserError(String),

    /// A namespace prefix could not be scanned.
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    /// A candidate class was rejected.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// One or more candidates were rejected during `check`.
    #[error("Validation failed: {0}")]
    ValidationSummary(String),
}

impl AgentScanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AgentScanError::UserError(_) => exit_codes::USER_ERROR,
            AgentScanError::Scan(_) => exit_codes::SCAN_FAILURE,
            AgentScanError::Validation(_) => exit_codes::VALIDATION_FAILURE,
            AgentScanError::ValidationSummary(_) => exit_codes::VALIDATION_FAILURE,
        }
    }
}

/// Result type alias for agentscan operations.
pub type Result<T> = std::result::Result<T, AgentScanError>;
