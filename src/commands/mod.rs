//! Command implementations for agentscan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the context every command loads first: the resolved
//! config and the class registry built from the manifest.

mod check;
mod scan;
mod validate_cmd;


use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::Config;
use crate::error::{AgentScanError, Result};
use crate::events::{Event, append_event};
use crate::registry::{ClassRegistry, Manifest};
use serde::Serialize;
use std::path::PathBuf;

pub use check::{cmd_check, execute_check};
pub use scan::{cmd_scan, execute_scan};
pub use validate_cmd::{ValidateOutcome, cmd_validate, execute_validate};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The config and
/// manifest are loaded once, then the command is routed to its handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = CommandContext::load(&cli.global)?;

    match cli.command {
        Command::Scan(args) => cmd_scan(&ctx, args),
        Command::Validate(args) => cmd_validate(&ctx, args),
        Command::Check(args) => cmd_check(&ctx, args),
    }
}

/// Everything a command needs to run.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub registry: ClassRegistry,
    pub json: bool,
}

impl CommandContext {
    /// Resolve the config and load the manifest it points to.
    ///
    /// `--manifest` takes precedence over the config's `manifest` entry.
    pub fn load(global: &GlobalArgs) -> Result<Self> {
        let config = Config::resolve(global.config.as_deref())?;

        let manifest_path = global
            .manifest
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.manifest));

        let registry = Manifest::load(&manifest_path)?.into_registry()?;

        Ok(Self {
            config,
            registry,
            json: global.json,
        })
    }

    /// The prefixes to scan: those given on the command line, or the
    /// config's `default_prefixes` when none were given.
    pub fn prefixes(&self, given: Vec<String>) -> Result<Vec<String>> {
        if !given.is_empty() {
            return Ok(given);
        }

        if self.config.default_prefixes.is_empty() {
            return Err(AgentScanError::UserError(
                "no namespace prefixes given.\n\n\
                 Pass one or more prefixes, or set default_prefixes in agentscan.yaml."
                    .to_string(),
            ));
        }

        Ok(self.config.default_prefixes.clone())
    }

    /// Append an event to the configured events log, if any.
    pub fn record(&self, event: &Event) -> Result<()> {
        match &self.config.events_log {
            Some(path) => append_event(path, event),
            None => Ok(()),
        }
    }
}

/// Serialize a value as pretty JSON followed by a newline.
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|s| s + "\n")
        .map_err(|e| AgentScanError::UserError(format!("failed to serialize output: {}", e)))
}
