//! Validated agent descriptors.

use super::class::AgentTask;
use super::marker::AgentType;
use serde::Serialize;

/// Reference to the validated entry-point method of an agent.
#[derive(Clone, Serialize)]
pub struct EntryPoint {
    owner: String,
    method: String,
    #[serde(skip)]
    task: Option<AgentTask>,
}

impl EntryPoint {
    pub(crate) fn new(owner: &str, method: &str, task: Option<AgentTask>) -> Self {
        Self {
            owner: owner.to_string(),
            method: method.to_string(),
            task,
        }
    }

    /// Identifier of the class declaring the method.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Method name.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Whether a callable was registered for the method.
    pub fn is_bound(&self) -> bool {
        self.task.is_some()
    }

    /// Invoke the registered callable. Returns `false` when none is bound.
    pub fn invoke(&self) -> bool {
        match &self.task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryPoint")
            .field("owner", &self.owner)
            .field("method", &self.method)
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl PartialEq for EntryPoint {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.method == other.method
    }
}

impl Eq for EntryPoint {}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.owner, self.method)
    }
}

/// A class admitted as a valid agent.
///
/// Only the validator builds descriptors; all fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentDescriptor {
    name: String,
    #[serde(rename = "type")]
    agent_type: AgentType,
    frequency: String,
    owner_class: String,
    entry_point: EntryPoint,
}

impl AgentDescriptor {
    pub(crate) fn new(
        name: String,
        agent_type: AgentType,
        frequency: String,
        owner_class: String,
        entry_point: EntryPoint,
    ) -> Self {
        Self {
            name,
            agent_type,
            frequency,
            owner_class,
            entry_point,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    /// Frequency expression exactly as declared.
    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn owner_class(&self) -> &str {
        &self.owner_class
    }

    pub fn entry_point(&self) -> &EntryPoint {
        &self.entry_point
    }
}

impl std::fmt::Display for AgentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}, every '{}'] -> {}",
            self.name, self.agent_type, self.frequency, self.entry_point
        )
    }
}
