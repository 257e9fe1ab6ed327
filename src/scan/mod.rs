//! Namespace scanning for agentscan.
//!
//! Given one or more namespace prefixes, the scanner lists the registered
//! classes under them that directly declare a marker:
//! - Prefixes match on segment boundaries; the empty prefix is the root
//! - Only markers declared on the class itself count, never inherited ones
//! - The result is a set; overlapping prefixes do not produce duplicates
//!
//! Error handling:
//! - A prefix that resolves to an empty namespace is not an error
//! - A prefix that resolves to nothing fails the scan unless the
//!   unknown-namespace policy says to ignore it

pub mod namespace;
mod scanner;
mod types;


// Re-export public API
pub use scanner::Scanner;
pub use types::{AgentCandidate, ScanError, ScanOptions, UnknownNamespacePolicy};
