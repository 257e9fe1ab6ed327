//! CLI argument parsing for agentscan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Agentscan: discover and validate scheduled agents.
///
/// Classes are read from a YAML manifest:
/// - `scan` lists classes carrying a marker under namespace prefixes
/// - `validate` checks one class and prints its agent descriptor
/// - `check` scans and validates every agent, reporting rejections
#[derive(Parser, Debug)]
#[command(name = "agentscan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: agentscan.yaml in the working directory, if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Class manifest (overrides the config's `manifest`).
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands for agentscan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List classes carrying a marker under namespace prefixes.
    ///
    /// Prints matching identifiers sorted, one per line. No structural
    /// validation is performed.
    Scan(ScanArgs),

    /// Validate a single class as an agent.
    ///
    /// Prints the agent descriptor, or the reason the class was rejected.
    Validate(ValidateArgs),

    /// Scan for agents and validate each one.
    ///
    /// Malformed agents are reported and skipped; exits with code 2 if any
    /// agent was rejected.
    Check(CheckArgs),
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Namespace prefixes to scan (default: config `default_prefixes`).
    pub prefixes: Vec<String>,

    /// Marker kind to look for (`agent`, `run`, or a custom marker name).
    #[arg(short, long, default_value = "agent")]
    pub marker: String,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Fully-qualified class identifier.
    pub class: String,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Namespace prefixes to scan (default: config `default_prefixes`).
    pub prefixes: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
