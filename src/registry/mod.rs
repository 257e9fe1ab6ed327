//! Class registry.
//!
//! Classes are not discovered by inspecting a running program; they are
//! registered up front, either with [`ClassDescriptor::builder`] or from an
//! `agents.yaml` manifest. Scanning and validation only read from a
//! [`ClassSource`], so tests and embedders can supply their own.

mod manifest;


use crate::agent::ClassDescriptor;
use crate::error::{AgentScanError, Result};
use crate::scan::namespace;
use std::collections::{BTreeMap, BTreeSet};

pub use manifest::{ClassEntry, Manifest, MethodEntry};

/// Read-only access to registered class metadata.
pub trait ClassSource {
    /// Look up a class by fully-qualified identifier.
    fn class(&self, id: &str) -> Option<&ClassDescriptor>;

    /// All registered classes, in no particular order.
    fn classes(&self) -> Box<dyn Iterator<Item = &ClassDescriptor> + '_>;

    /// Whether `namespace` is known, even if no class lives directly in it.
    fn has_namespace(&self, namespace: &str) -> bool;
}

/// In-memory class registry.
///
/// Every ancestor namespace of a registered class is known; empty namespaces
/// can be declared explicitly with [`ClassRegistry::declare_namespace`].
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: BTreeMap<String, ClassDescriptor>,
    namespaces: BTreeSet<String>,
}

impl ClassRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The class was added
    /// * `Err(AgentScanError::UserError)` - The identifier is malformed or already registered
    pub fn register(&mut self, class: ClassDescriptor) -> Result<()> {
        let id = class.id();

        if !namespace::is_valid_identifier(id) {
            return Err(AgentScanError::UserError(format!(
                "invalid class identifier '{}'.\n\
                 Fix: use dot-separated segments such as 'com.example.agents.MyAgent'.",
                id
            )));
        }

        if self.classes.contains_key(id) {
            return Err(AgentScanError::UserError(format!(
                "class '{}' is registered more than once",
                id
            )));
        }

        for ancestor in namespace::ancestors(id) {
            self.namespaces.insert(ancestor.to_string());
        }
        self.classes.insert(id.to_string(), class);
        Ok(())
    }

    /// Register a class, consuming and returning the registry.
    pub fn with(mut self, class: ClassDescriptor) -> Result<Self> {
        self.register(class)?;
        Ok(self)
    }

    /// Declare a namespace that resolves even when it holds no classes.
    pub fn declare_namespace(&mut self, name: &str) -> Result<()> {
        if !namespace::is_valid_identifier(name) {
            return Err(AgentScanError::UserError(format!(
                "invalid namespace '{}'",
                name
            )));
        }

        self.namespaces.insert(name.to_string());
        for ancestor in namespace::ancestors(name) {
            self.namespaces.insert(ancestor.to_string());
        }
        Ok(())
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassSource for ClassRegistry {
    fn class(&self, id: &str) -> Option<&ClassDescriptor> {
        self.classes.get(id)
    }

    fn classes(&self) -> Box<dyn Iterator<Item = &ClassDescriptor> + '_> {
        Box::new(self.classes.values())
    }

    fn has_namespace(&self, namespace: &str) -> bool {
        self.namespaces.contains(namespace)
    }
}
