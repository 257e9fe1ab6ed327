//! Implementation of the `agentscan check` command.

use super::{CommandContext, to_json};
use crate::cli::CheckArgs;
use crate::discovery::{DiscoveryReport, discover};
use crate::error::{AgentScanError, Result};
use crate::events::{Event, EventAction};
use serde_json::json;

/// Execute the `agentscan check` command.
///
/// Every agent under the prefixes is validated independently; a malformed
/// agent is reported and skipped rather than stopping the run.
///
/// # Exit Codes
///
/// - 0: All agents are valid
/// - 1: User error (no prefixes, unreadable manifest)
/// - 2: At least one agent was rejected
/// - 3: Scan failure
pub fn cmd_check(ctx: &CommandContext, args: CheckArgs) -> Result<()> {
    let (output, report) = execute_check(ctx, args)?;
    print!("{}", output);

    if report.passed() {
        Ok(())
    } else {
        Err(AgentScanError::ValidationSummary(format!(
            "{} of {} agents rejected",
            report.rejected.len(),
            report.total()
        )))
    }
}

/// Run discovery and render the report.
pub fn execute_check(ctx: &CommandContext, args: CheckArgs) -> Result<(String, DiscoveryReport)> {
    let prefixes = ctx.prefixes(args.prefixes)?;
    let report = discover(&ctx.registry, &prefixes, ctx.config.scan_options())?;

    let rejected: Vec<&str> = report.rejected.iter().map(|r| r.class.as_str()).collect();
    ctx.record(&Event::new(EventAction::Check).with_details(json!({
        "prefixes": prefixes,
        "accepted": report.accepted.len(),
        "rejected": rejected,
    })))?;

    let output = if ctx.json {
        to_json(&json!({
            "accepted": report.accepted,
            "rejected": report.rejected,
        }))?
    } else {
        report.format_summary()
    };

    Ok((output, report))
}
