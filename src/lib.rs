//! agentscan: discovery and validation of scheduled agent classes.
//!
//! Classes are described up front, either with [`agent::ClassBuilder`] or in
//! a YAML manifest loaded through [`registry::Manifest`]. A
//! [`scan::Scanner`] finds the classes carrying a marker under a set of
//! namespace prefixes, and a [`validate::Validator`] turns each agent class
//! into an [`agent::AgentDescriptor`] or rejects it with a reason code.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discovery;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod registry;
pub mod scan;
pub mod validate;

#[cfg(test)]
mod test_support;
