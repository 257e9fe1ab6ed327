//! Structural validation of agent classes.
//!
//! A class carrying the agent marker is admitted as an agent only if:
//! - it exposes a non-private zero-argument constructor
//! - exactly one of its declared methods carries the run marker
//! - that method is public and takes no parameters
//!
//! Checks run in that fixed order and the first violation is reported, so a
//! class breaking several rules always yields the same reason code.

mod types;
mod validator;

#[cfg(test)]
mod tests;

// Re-export public API
pub use types::{ReasonCode, ValidationError};
pub use validator::{Validator, validate_class};
