//! Class, method and constructor declarations.
//!
//! A `ClassDescriptor` is the registered stand-in for a class: it lists what
//! the class declares directly (markers, methods, constructors). Nothing is
//! inherited from the superclass, which is recorded only by identifier.

use super::marker::{AgentAttributes, Marker, MarkerKind};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A zero-argument callable bound to an entry-point method.
pub type AgentTask = Arc<dyn Fn() + Send + Sync>;

/// Declared visibility of a method or constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    PackagePrivate,
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::PackagePrivate => write!(f, "package-private"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// A method declared directly on a class.
#[derive(Clone)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Declared visibility.
    pub visibility: Visibility,
    /// Parameter type names, in declaration order.
    pub parameters: Vec<String>,
    /// Markers declared on the method.
    pub markers: Vec<Marker>,
    /// Optional body invoked when the method is the agent entry point.
    pub task: Option<AgentTask>,
}

impl std::fmt::Debug for MethodDecl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodDecl")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("parameters", &self.parameters)
            .field("markers", &self.markers)
            .field("task", &self.task.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl MethodDecl {
    /// Create a public, zero-argument, unmarked method.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            parameters: Vec::new(),
            markers: Vec::new(),
            task: None,
        }
    }

    /// Add the run marker.
    pub fn run(self) -> Self {
        self.with_marker(Marker::Run)
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Append a parameter type.
    pub fn with_parameter(mut self, type_name: impl Into<String>) -> Self {
        self.parameters.push(type_name.into());
        self
    }

    /// Add a marker.
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Bind the callable invoked through the entry point.
    pub fn with_task<F>(mut self, task: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.task = Some(Arc::new(task));
        self
    }

    /// Whether the method declares a marker of the given kind.
    pub fn declares(&self, kind: &MarkerKind) -> bool {
        self.markers.iter().any(|m| m.is_kind(kind))
    }
}

/// A constructor declared directly on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConstructorDecl {
    /// Declared visibility.
    #[serde(default)]
    pub visibility: Visibility,
    /// Parameter type names, in declaration order.
    #[serde(default)]
    pub parameters: Vec<String>,
}

impl ConstructorDecl {
    /// Create a zero-argument constructor with the given visibility.
    pub fn new(visibility: Visibility) -> Self {
        Self {
            visibility,
            parameters: Vec::new(),
        }
    }

    /// Append a parameter type.
    pub fn with_parameter(mut self, type_name: impl Into<String>) -> Self {
        self.parameters.push(type_name.into());
        self
    }
}

/// Registered metadata of one class.
#[derive(Debug, Clone)]
pub struct ClassDescriptor {
    id: String,
    superclass: Option<String>,
    markers: Vec<Marker>,
    methods: Vec<MethodDecl>,
    constructors: Vec<ConstructorDecl>,
}

impl ClassDescriptor {
    /// Start building a descriptor for the fully-qualified identifier `id`.
    pub fn builder(id: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            class: ClassDescriptor {
                id: id.into(),
                superclass: None,
                markers: Vec::new(),
                methods: Vec::new(),
                constructors: Vec::new(),
            },
        }
    }

    /// Fully-qualified identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier without its namespace (and without any enclosing class).
    pub fn simple_name(&self) -> &str {
        simple_name(&self.id)
    }

    /// Namespace the class lives in; empty for the root namespace.
    pub fn namespace(&self) -> &str {
        self.id.rsplit_once('.').map(|(ns, _)| ns).unwrap_or("")
    }

    /// Identifier of the superclass, if any.
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    /// Markers declared directly on the class.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Methods declared directly on the class, in declaration order.
    pub fn methods(&self) -> &[MethodDecl] {
        &self.methods
    }

    /// Constructors declared directly on the class.
    pub fn constructors(&self) -> &[ConstructorDecl] {
        &self.constructors
    }

    /// Whether the class directly declares a marker of the given kind.
    pub fn declares(&self, kind: &MarkerKind) -> bool {
        self.markers.iter().any(|m| m.is_kind(kind))
    }

    /// Attributes of the directly declared agent marker.
    pub fn agent_attributes(&self) -> Option<&AgentAttributes> {
        self.markers.iter().find_map(|m| match m {
            Marker::Agent(attrs) => Some(attrs),
            _ => None,
        })
    }

    /// Whether some non-private zero-argument constructor exists.
    ///
    /// A class that declares no constructor at all has an implicit public one.
    pub fn has_accessible_constructor(&self) -> bool {
        self.constructors.is_empty()
            || self
                .constructors
                .iter()
                .any(|c| c.parameters.is_empty() && c.visibility != Visibility::Private)
    }
}

/// Builder for [`ClassDescriptor`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    class: ClassDescriptor,
}

impl ClassBuilder {
    /// Declare the agent marker.
    pub fn agent(self, attributes: AgentAttributes) -> Self {
        self.marker(Marker::Agent(attributes))
    }

    /// Declare any marker on the class.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.class.markers.push(marker);
        self
    }

    /// Record the superclass identifier.
    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.class.superclass = Some(superclass.into());
        self
    }

    /// Declare a method.
    pub fn method(mut self, method: MethodDecl) -> Self {
        self.class.methods.push(method);
        self
    }

    /// Declare a constructor.
    pub fn constructor(mut self, constructor: ConstructorDecl) -> Self {
        self.class.constructors.push(constructor);
        self
    }

    pub fn build(self) -> ClassDescriptor {
        self.class
    }
}

/// Simple name of a fully-qualified identifier.
///
/// `a.b.Outer$Inner` yields `Inner`.
pub fn simple_name(id: &str) -> &str {
    let last = id.rsplit('.').next().unwrap_or(id);
    last.rsplit('$').next().unwrap_or(last)
}
