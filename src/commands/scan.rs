//! Implementation of the `agentscan scan` command.

use super::{CommandContext, to_json};
use crate::agent::MarkerKind;
use crate::cli::ScanArgs;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::scan::Scanner;
use serde_json::json;

/// Execute the `agentscan scan` command.
///
/// # Exit Codes
///
/// - 0: Scan completed (even if nothing matched)
/// - 1: User error (no prefixes, unreadable manifest)
/// - 3: Scan failure (malformed or unresolved prefix)
pub fn cmd_scan(ctx: &CommandContext, args: ScanArgs) -> Result<()> {
    print!("{}", execute_scan(ctx, args)?);
    Ok(())
}

/// Run the scan and render its output.
pub fn execute_scan(ctx: &CommandContext, args: ScanArgs) -> Result<String> {
    let prefixes = ctx.prefixes(args.prefixes)?;
    let kind = MarkerKind::parse(&args.marker);

    let scanner = Scanner::with_options(&ctx.registry, ctx.config.scan_options());
    let mut found: Vec<String> = scanner
        .find_marked_classes(&kind, &prefixes)?
        .into_iter()
        .collect();
    found.sort();

    ctx.record(&Event::new(EventAction::Scan).with_details(json!({
        "marker": kind.to_string(),
        "prefixes": prefixes,
        "found": found.len(),
    })))?;

    if ctx.json {
        return to_json(&found);
    }

    let mut out = String::new();
    for id in &found {
        out.push_str(id);
        out.push('\n');
    }
    Ok(out)
}
