//! Reason codes and errors for structural validation.

use serde::Serialize;
use thiserror::Error;

/// Why a candidate class was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReasonCode {
    /// The identifier is not present in the class source.
    UnknownClass,
    /// The class does not directly declare the agent marker.
    MissingAgentMarker,
    /// No accessible (non-private) zero-argument constructor.
    ConstructorNotAccessible,
    /// No method carries the run marker.
    NoRunMethod,
    /// More than one method carries the run marker.
    MultipleRunMethods,
    /// The run method is not public.
    RunMethodNotAccessible,
    /// The run method declares parameters.
    RunMethodHasParameters,
}

impl ReasonCode {
    /// Stable code string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::UnknownClass => "UnknownClass",
            ReasonCode::MissingAgentMarker => "MissingAgentMarker",
            ReasonCode::ConstructorNotAccessible => "ConstructorNotAccessible",
            ReasonCode::NoRunMethod => "NoRunMethod",
            ReasonCode::MultipleRunMethods => "MultipleRunMethods",
            ReasonCode::RunMethodNotAccessible => "RunMethodNotAccessible",
            ReasonCode::RunMethodHasParameters => "RunMethodHasParameters",
        }
    }

    /// Human-readable explanation with a fix hint.
    pub fn describe(&self) -> &'static str {
        match self {
            ReasonCode::UnknownClass => "class is not registered",
            ReasonCode::MissingAgentMarker => "class does not declare the agent marker",
            ReasonCode::ConstructorNotAccessible => {
                "agent needs a non-private zero-argument constructor"
            }
            ReasonCode::NoRunMethod => "no method carries the run marker",
            ReasonCode::MultipleRunMethods => {
                "more than one method carries the run marker; keep exactly one"
            }
            ReasonCode::RunMethodNotAccessible => "run method must be public",
            ReasonCode::RunMethodHasParameters => "run method must take no parameters",
        }
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A candidate class rejected by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{reason} in class '{class}'{}: {}", method_suffix(.method), .reason.describe())]
pub struct ValidationError {
    /// Why the class was rejected.
    pub reason: ReasonCode,
    /// Identifier of the offending class.
    pub class: String,
    /// Offending method, when the failure concerns one.
    ///
    /// For [`ReasonCode::MultipleRunMethods`] this lists every run method,
    /// sorted by name and separated by `", "`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ValidationError {
    pub fn new(reason: ReasonCode, class: impl Into<String>, method: Option<String>) -> Self {
        Self {
            reason,
            class: class.into(),
            method,
        }
    }
}

fn method_suffix(method: &Option<String>) -> String {
    match method {
        Some(m) => format!(", method '{}'", m),
        None => String::new(),
    }
}
