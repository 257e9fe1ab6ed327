//! Implementation of the `agentscan validate` command.

use super::{CommandContext, to_json};
use crate::agent::AgentDescriptor;
use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::events::{Event, EventAction};
use crate::validate::{ValidationError, Validator};
use serde_json::json;

/// Result of validating one class, with its rendered output.
#[derive(Debug)]
pub struct ValidateOutcome {
    /// Text or JSON to print on stdout.
    pub output: String,
    /// The validation result itself.
    pub result: std::result::Result<AgentDescriptor, ValidationError>,
}

/// Execute the `agentscan validate` command.
///
/// # Exit Codes
///
/// - 0: The class is a valid agent
/// - 1: User error (unreadable config or manifest)
/// - 2: The class was rejected
pub fn cmd_validate(ctx: &CommandContext, args: ValidateArgs) -> Result<()> {
    let outcome = execute_validate(ctx, args)?;
    print!("{}", outcome.output);
    outcome.result.map(|_| ()).map_err(Into::into)
}

/// Validate the class and render the outcome.
///
/// In text mode a rejection renders nothing here; the error is reported on
/// stderr by the caller. In JSON mode both outcomes are rendered.
pub fn execute_validate(ctx: &CommandContext, args: ValidateArgs) -> Result<ValidateOutcome> {
    let result = Validator::new(&ctx.registry).validate(&args.class);

    let details = match &result {
        Ok(descriptor) => json!({
            "accepted": true,
            "name": descriptor.name(),
        }),
        Err(rejection) => json!({
            "accepted": false,
            "reason": rejection.reason.as_str(),
        }),
    };
    ctx.record(
        &Event::new(EventAction::Validate)
            .with_class(&args.class)
            .with_details(details),
    )?;

    let output = match (&result, ctx.json) {
        (Ok(descriptor), true) => to_json(&json!({ "accepted": true, "agent": descriptor }))?,
        (Err(rejection), true) => to_json(&json!({ "accepted": false, "error": rejection }))?,
        (Ok(descriptor), false) => render_descriptor(descriptor),
        (Err(_), false) => String::new(),
    };

    Ok(ValidateOutcome { output, result })
}

fn render_descriptor(descriptor: &AgentDescriptor) -> String {
    format!(
        "Agent:       {}\n\
         Type:        {}\n\
         Frequency:   {}\n\
         Class:       {}\n\
         Entry point: {}\n",
        descriptor.name(),
        descriptor.agent_type(),
        descriptor.frequency(),
        descriptor.owner_class(),
        descriptor.entry_point().method(),
    )
}
