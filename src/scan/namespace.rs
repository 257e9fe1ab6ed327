//! Namespace prefix rules.
//!
//! Identifiers and namespaces are dot-separated segments. A prefix matches a
//! class when the identifier equals it or continues it at a segment boundary,
//! so `a.b.agents` covers `a.b.agents.valid.X` but not `a.b.agentsX.Y`. The
//! empty prefix is the root namespace.

use super::types::ScanError;
use regex::Regex;
use std::sync::LazyLock;

static SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier segment regex")
});

/// Whether `id` is a well-formed dot-separated identifier.
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty() && id.split('.').all(|segment| SEGMENT_REGEX.is_match(segment))
}

/// Check that a scan prefix is the root (empty) or a well-formed identifier.
pub fn validate_prefix(prefix: &str) -> Result<(), ScanError> {
    if prefix.is_empty() {
        return Ok(());
    }

    if let Some(segment) = prefix
        .split('.')
        .find(|segment| !SEGMENT_REGEX.is_match(segment))
    {
        let reason = if segment.is_empty() {
            "empty segment".to_string()
        } else {
            format!("'{}' is not a valid identifier segment", segment)
        };
        return Err(ScanError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason,
        });
    }

    Ok(())
}

/// Whether the class `id` lies under `prefix`.
pub fn contains(prefix: &str, id: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }

    match id.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}

/// Proper ancestor namespaces of `id`, outermost first.
///
/// `a.b.C` yields `a` then `a.b`.
pub fn ancestors(id: &str) -> impl Iterator<Item = &str> {
    id.match_indices('.').map(move |(idx, _)| &id[..idx])
}
