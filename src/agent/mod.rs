//! Agent model.
//!
//! This module defines what a registered class looks like and what a validated
//! agent is:
//!
//! - **Markers**: the `agent` marker with its scheduling attributes, the `run`
//!   marker for entry points, and custom markers
//! - **Classes**: class descriptors with their directly declared methods and
//!   constructors
//! - **Descriptors**: the immutable result of a successful validation

mod class;
mod descriptor;
mod marker;


// Re-export public API
pub use class::{
    AgentTask, ClassBuilder, ClassDescriptor, ConstructorDecl, MethodDecl, Visibility, simple_name,
};
pub use descriptor::{AgentDescriptor, EntryPoint};
pub use marker::{AgentAttributes, AgentType, Marker, MarkerKind};
