//! Manifest file format for registering classes.
//!
//! # File Format
//!
//! ```yaml
//! namespaces:
//!   - com.example.agents.empty
//!
//! classes:
//!   - id: com.example.agents.ReportAgent
//!     extends: com.example.BaseAgent
//!     agent:
//!       name: report
//!       type: cron
//!       frequency: "0 0 * * *"
//!     constructors:
//!       - visibility: public
//!     methods:
//!       - name: runTask
//!         run: true
//!       - name: helper
//!         visibility: private
//!         parameters: [String]
//! ```
//!
//! Omitted `constructors` means an implicit public zero-argument constructor.
//! Method visibility defaults to `public`. Unknown fields are ignored for
//! forward compatibility.

use super::ClassRegistry;
use crate::agent::{
    AgentAttributes, ClassDescriptor, ConstructorDecl, Marker, MarkerKind, MethodDecl, Visibility,
};
use crate::error::{AgentScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a manifest file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Namespaces that resolve even when empty.
    pub namespaces: Vec<String>,

    /// Registered classes.
    pub classes: Vec<ClassEntry>,
}

/// One class in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Fully-qualified identifier.
    pub id: String,

    /// Superclass identifier (informational; nothing is inherited).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// The agent marker, if the class declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentAttributes>,

    /// Additional custom markers on the class.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,

    /// Declared constructors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constructors: Vec<ConstructorDecl>,

    /// Declared methods.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MethodEntry>,
}

/// One method in the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodEntry {
    pub name: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,

    /// Whether the method carries the run marker.
    #[serde(default)]
    pub run: bool,

    /// Additional custom markers on the method.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Manifest)` - Successfully parsed manifest
    /// * `Err(AgentScanError::UserError)` - Read or parse failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AgentScanError::UserError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a manifest from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| AgentScanError::UserError(format!("failed to parse manifest: {}", e)))
    }

    /// Serialize the manifest to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AgentScanError::UserError(format!("failed to serialize manifest: {}", e)))
    }

    /// Build a registry holding every class and namespace of the manifest.
    pub fn into_registry(self) -> Result<ClassRegistry> {
        let mut registry = ClassRegistry::new();

        for ns in &self.namespaces {
            registry.declare_namespace(ns)?;
        }

        for entry in self.classes {
            registry.register(entry.into_descriptor()?)?;
        }

        Ok(registry)
    }
}

impl ClassEntry {
    /// Convert the entry into a class descriptor.
    pub fn into_descriptor(self) -> Result<ClassDescriptor> {
        let mut builder = ClassDescriptor::builder(&self.id);

        if let Some(superclass) = self.extends {
            builder = builder.extends(superclass);
        }

        if let Some(attributes) = self.agent {
            builder = builder.agent(attributes);
        }

        for name in &self.markers {
            match MarkerKind::parse(name) {
                MarkerKind::Custom(custom) => builder = builder.marker(Marker::Custom(custom)),
                MarkerKind::Run => builder = builder.marker(Marker::Run),
                MarkerKind::Agent => {
                    return Err(AgentScanError::UserError(format!(
                        "class '{}' lists 'agent' under markers.\n\
                         Fix: declare it with an `agent:` block carrying type and frequency.",
                        self.id
                    )));
                }
            }
        }

        for constructor in self.constructors {
            builder = builder.constructor(constructor);
        }

        for method in self.methods {
            builder = builder.method(method.into_decl(&self.id)?);
        }

        Ok(builder.build())
    }
}

impl MethodEntry {
    fn into_decl(self, class_id: &str) -> Result<MethodDecl> {
        let mut decl = MethodDecl::new(self.name).with_visibility(self.visibility);

        for parameter in self.parameters {
            decl = decl.with_parameter(parameter);
        }

        if self.run {
            decl = decl.run();
        }

        for name in &self.markers {
            match MarkerKind::parse(name) {
                MarkerKind::Run => decl = decl.run(),
                MarkerKind::Custom(custom) => decl = decl.with_marker(Marker::Custom(custom)),
                MarkerKind::Agent => {
                    return Err(AgentScanError::UserError(format!(
                        "method '{}' of class '{}' cannot carry the agent marker",
                        decl.name, class_id
                    )));
                }
            }
        }

        Ok(decl)
    }
}
