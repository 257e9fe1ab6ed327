//! Markers attached to classes and methods.
//!
//! The "agent" marker carries the scheduling attributes of a class; the "run"
//! marker flags the entry-point method and has no attributes. Any other tag is
//! kept as a custom marker so scans can look for arbitrary kinds.

use serde::{Deserialize, Serialize};

/// Execution strategy of an agent.
///
/// Written lowercase; read case-insensitively, so `TIMER` and `timer` both parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    /// Runs repeatedly at a fixed interval.
    Timer,
    /// Runs on a cron-like schedule.
    Cron,
}

impl AgentType {
    /// Parse an agent type from a string (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "timer" => Some(Self::Timer),
            "cron" => Some(Self::Cron),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for AgentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s)
            .ok_or_else(|| serde::de::Error::unknown_variant(&s, &["timer", "cron"]))
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentType::Timer => write!(f, "TIMER"),
            AgentType::Cron => write!(f, "CRON"),
        }
    }
}

/// Attributes of the "agent" marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAttributes {
    /// Explicit agent name. Unset or blank falls back to the class simple name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Execution strategy.
    #[serde(rename = "type")]
    pub agent_type: AgentType,

    /// Frequency expression, opaque to this crate.
    pub frequency: String,
}

impl AgentAttributes {
    /// Create attributes without an explicit name.
    pub fn new(agent_type: AgentType, frequency: impl Into<String>) -> Self {
        Self {
            name: None,
            agent_type,
            frequency: frequency.into(),
        }
    }

    /// Set the explicit agent name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The explicit name, if set and not blank.
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// A marker declared on a class or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Tags a class as a schedulable agent.
    Agent(AgentAttributes),
    /// Tags a method as the agent entry point.
    Run,
    /// Any other tag, identified by name.
    Custom(String),
}

impl Marker {
    /// Whether this marker is of the given kind.
    pub fn is_kind(&self, kind: &MarkerKind) -> bool {
        match (self, kind) {
            (Marker::Agent(_), MarkerKind::Agent) => true,
            (Marker::Run, MarkerKind::Run) => true,
            (Marker::Custom(a), MarkerKind::Custom(b)) => a == b,
            _ => false,
        }
    }
}

/// The kind of a marker, without its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Agent,
    Run,
    Custom(String),
}

impl MarkerKind {
    /// Parse a marker kind from a CLI or manifest string.
    ///
    /// `agent` and `run` map to the built-in kinds; anything else is custom.
    pub fn parse(s: &str) -> Self {
        match s {
            "agent" => Self::Agent,
            "run" => Self::Run,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerKind::Agent => write!(f, "agent"),
            MarkerKind::Run => write!(f, "run"),
            MarkerKind::Custom(name) => write!(f, "{}", name),
        }
    }
}
