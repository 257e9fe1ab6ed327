//! Scan-then-validate cycle.
//!
//! Discovery scans the requested namespaces for agent-marked classes and
//! validates each candidate independently. A malformed agent is skipped and
//! its rejection reported; it never aborts the remaining candidates. Only a
//! scan failure aborts discovery.

use crate::agent::AgentDescriptor;
use crate::registry::ClassSource;
use crate::scan::{ScanError, ScanOptions, Scanner};
use crate::validate::{ValidationError, Validator};

/// Outcome of a discovery run.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryReport {
    /// Admitted agents, sorted by owner class.
    pub accepted: Vec<AgentDescriptor>,
    /// Rejected candidates, sorted by class.
    pub rejected: Vec<ValidationError>,
}

impl DiscoveryReport {
    /// Whether every candidate was admitted.
    pub fn passed(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Number of candidates found by the scan.
    pub fn total(&self) -> usize {
        self.accepted.len() + self.rejected.len()
    }

    /// Format the report as a user-friendly summary.
    ///
    /// ```text
    /// Accepted agents (1):
    ///   DummyAgent [TIMER, every '30 seconds'] -> a.b.DummyAgent#runTask
    ///
    /// Rejected agents (1):
    ///   x a.b.Broken: NoRunMethod (no method carries the run marker)
    /// ```
    pub fn format_summary(&self) -> String {
        let mut msg = String::new();

        if self.total() == 0 {
            msg.push_str("No agents found.\n");
            return msg;
        }

        if !self.accepted.is_empty() {
            msg.push_str(&format!("Accepted agents ({}):\n", self.accepted.len()));
            for agent in &self.accepted {
                msg.push_str(&format!("  {}\n", agent));
            }
        }

        if !self.rejected.is_empty() {
            if !self.accepted.is_empty() {
                msg.push('\n');
            }
            msg.push_str(&format!("Rejected agents ({}):\n", self.rejected.len()));
            for rejection in &self.rejected {
                let method = rejection
                    .method
                    .as_deref()
                    .map(|m| format!(" [{}]", m))
                    .unwrap_or_default();
                msg.push_str(&format!(
                    "  x {}{}: {} ({})\n",
                    rejection.class,
                    method,
                    rejection.reason,
                    rejection.reason.describe()
                ));
            }
        }

        msg
    }
}

/// Scan `prefixes` for agents and validate every candidate.
///
/// # Returns
///
/// * `Ok(DiscoveryReport)` - Accepted descriptors and per-class rejections
/// * `Err(ScanError)` - The namespaces could not be scanned
pub fn discover<S, P>(
    source: &S,
    prefixes: &[P],
    options: ScanOptions,
) -> Result<DiscoveryReport, ScanError>
where
    S: ClassSource + ?Sized,
    P: AsRef<str>,
{
    let candidates = Scanner::with_options(source, options).find_candidates(prefixes)?;
    let validator = Validator::new(source);
    let mut report = DiscoveryReport::default();

    for candidate in candidates {
        match validator.validate_candidate(candidate) {
            Ok(descriptor) => report.accepted.push(descriptor),
            Err(rejection) => report.rejected.push(rejection),
        }
    }

    Ok(report)
}
