//! Exit code constants for the agentscan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable config or manifest)
//! - 2: Validation failure (one or more agents rejected)
//! - 3: Scan failure (namespace prefix cannot be resolved)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or malformed manifest.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a candidate class is not a well-formed agent.
pub const VALIDATION_FAILURE: i32 = 2;

/// Scan failure: a namespace prefix is malformed or cannot be resolved.
pub const SCAN_FAILURE: i32 = 3;
