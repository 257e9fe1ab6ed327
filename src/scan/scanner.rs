//! Namespace traversal.

use super::namespace;
use super::types::{AgentCandidate, ScanError, ScanOptions, UnknownNamespacePolicy};
use crate::agent::MarkerKind;
use crate::registry::ClassSource;
use std::collections::HashSet;

/// Finds classes carrying a marker under a set of namespace prefixes.
///
/// The scanner only reads the class source. It does not judge whether a
/// marked class is well-formed; that is the validator's job.
pub struct Scanner<'a, S: ClassSource + ?Sized> {
    source: &'a S,
    options: ScanOptions,
}

impl<'a, S: ClassSource + ?Sized> Scanner<'a, S> {
    /// Create a scanner with default options.
    pub fn new(source: &'a S) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'a S, options: ScanOptions) -> Self {
        Self { source, options }
    }

    /// Identifiers of all classes under `prefixes` that directly declare a
    /// marker of `kind`.
    ///
    /// Markers on a superclass do not count. Classes covered by several
    /// prefixes appear once.
    ///
    /// # Returns
    ///
    /// * `Ok(HashSet<String>)` - Matching identifiers (possibly empty)
    /// * `Err(ScanError::NoPrefixes)` - `prefixes` is empty
    /// * `Err(ScanError::InvalidPrefix)` - A prefix is malformed
    /// * `Err(ScanError::UnresolvedNamespace)` - A prefix is unknown and the
    ///   policy is [`UnknownNamespacePolicy::Fail`]
    pub fn find_marked_classes<P: AsRef<str>>(
        &self,
        kind: &MarkerKind,
        prefixes: &[P],
    ) -> Result<HashSet<String>, ScanError> {
        let prefixes = self.resolve_prefixes(prefixes)?;
        let mut found = HashSet::new();

        for class in self.source.classes() {
            if !class.declares(kind) {
                continue;
            }
            if prefixes.iter().any(|p| namespace::contains(p, class.id())) {
                found.insert(class.id().to_string());
            }
        }

        Ok(found)
    }

    /// Agent-marked classes under `prefixes` with their raw marker
    /// attributes, sorted by identifier.
    pub fn find_candidates<P: AsRef<str>>(
        &self,
        prefixes: &[P],
    ) -> Result<Vec<AgentCandidate>, ScanError> {
        let ids = self.find_marked_classes(&MarkerKind::Agent, prefixes)?;

        let mut candidates: Vec<AgentCandidate> = ids
            .into_iter()
            .filter_map(|id| {
                let attributes = self.source.class(&id)?.agent_attributes()?.clone();
                Some(AgentCandidate {
                    class_id: id,
                    attributes,
                })
            })
            .collect();

        candidates.sort_by(|a, b| a.class_id.cmp(&b.class_id));
        Ok(candidates)
    }

    /// Validate every prefix and keep the ones that resolve.
    fn resolve_prefixes<'p, P: AsRef<str>>(
        &self,
        prefixes: &'p [P],
    ) -> Result<Vec<&'p str>, ScanError> {
        if prefixes.is_empty() {
            return Err(ScanError::NoPrefixes);
        }

        let mut resolved = Vec::with_capacity(prefixes.len());

        for prefix in prefixes {
            let prefix = prefix.as_ref();
            namespace::validate_prefix(prefix)?;

            if self.resolves(prefix) {
                resolved.push(prefix);
                continue;
            }

            match self.options.unknown_namespace {
                UnknownNamespacePolicy::Fail => {
                    return Err(ScanError::UnresolvedNamespace {
                        prefix: prefix.to_string(),
                    });
                }
                UnknownNamespacePolicy::Ignore => {}
            }
        }

        Ok(resolved)
    }

    fn resolves(&self, prefix: &str) -> bool {
        prefix.is_empty() || self.source.has_namespace(prefix) || self.source.class(prefix).is_some()
    }
}
