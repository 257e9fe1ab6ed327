//! Core validation logic for agent classes.

use super::types::{ReasonCode, ValidationError};
use crate::agent::{
    AgentAttributes, AgentDescriptor, ClassDescriptor, EntryPoint, MarkerKind, MethodDecl,
    Visibility,
};
use crate::registry::ClassSource;
use crate::scan::AgentCandidate;

/// Validates candidate classes against a class source.
pub struct Validator<'a, S: ClassSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ClassSource + ?Sized> Validator<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Validate the class registered under `class_id`.
    pub fn validate(&self, class_id: &str) -> Result<AgentDescriptor, ValidationError> {
        validate_class(self.lookup(class_id)?)
    }

    /// Validate a scanned candidate, using the attributes captured by the scan.
    pub fn validate_candidate(
        &self,
        candidate: AgentCandidate,
    ) -> Result<AgentDescriptor, ValidationError> {
        let class = self.lookup(&candidate.class_id)?;
        if !class.declares(&MarkerKind::Agent) {
            return Err(ValidationError::new(
                ReasonCode::MissingAgentMarker,
                class.id(),
                None,
            ));
        }
        let method = check_structure(class)?;
        Ok(build_descriptor(class, candidate.attributes, method))
    }

    fn lookup(&self, class_id: &str) -> Result<&'a ClassDescriptor, ValidationError> {
        self.source
            .class(class_id)
            .ok_or_else(|| ValidationError::new(ReasonCode::UnknownClass, class_id, None))
    }
}

/// Validate a single class descriptor.
///
/// Checks run in a fixed order and the first failure is reported:
/// 1. The class declares the agent marker
/// 2. A non-private zero-argument constructor exists
/// 3. Exactly one declared method carries the run marker
/// 4. That method is public
/// 5. That method takes no parameters
///
/// # Returns
///
/// * `Ok(AgentDescriptor)` - The class is a well-formed agent
/// * `Err(ValidationError)` - The first rule the class violates
pub fn validate_class(class: &ClassDescriptor) -> Result<AgentDescriptor, ValidationError> {
    let attributes = class.agent_attributes().ok_or_else(|| {
        ValidationError::new(ReasonCode::MissingAgentMarker, class.id(), None)
    })?;

    let method = check_structure(class)?;
    Ok(build_descriptor(class, attributes.clone(), method))
}

fn check_structure(class: &ClassDescriptor) -> Result<&MethodDecl, ValidationError> {
    check_constructor(class)?;
    let method = resolve_entry_point(class)?;
    check_entry_point_shape(class, method)?;
    Ok(method)
}

fn check_constructor(class: &ClassDescriptor) -> Result<(), ValidationError> {
    if class.has_accessible_constructor() {
        return Ok(());
    }
    Err(ValidationError::new(
        ReasonCode::ConstructorNotAccessible,
        class.id(),
        None,
    ))
}

fn resolve_entry_point(class: &ClassDescriptor) -> Result<&MethodDecl, ValidationError> {
    let run_methods: Vec<&MethodDecl> = class
        .methods()
        .iter()
        .filter(|m| m.declares(&MarkerKind::Run))
        .collect();

    match run_methods.as_slice() {
        [] => Err(ValidationError::new(
            ReasonCode::NoRunMethod,
            class.id(),
            None,
        )),
        [method] => Ok(*method),
        many => {
            let mut names: Vec<&str> = many.iter().map(|m| m.name.as_str()).collect();
            names.sort_unstable();
            Err(ValidationError::new(
                ReasonCode::MultipleRunMethods,
                class.id(),
                Some(names.join(", ")),
            ))
        }
    }
}

fn check_entry_point_shape(
    class: &ClassDescriptor,
    method: &MethodDecl,
) -> Result<(), ValidationError> {
    if method.visibility != Visibility::Public {
        return Err(ValidationError::new(
            ReasonCode::RunMethodNotAccessible,
            class.id(),
            Some(method.name.clone()),
        ));
    }

    if !method.parameters.is_empty() {
        return Err(ValidationError::new(
            ReasonCode::RunMethodHasParameters,
            class.id(),
            Some(method.name.clone()),
        ));
    }

    Ok(())
}

fn build_descriptor(
    class: &ClassDescriptor,
    attributes: AgentAttributes,
    method: &MethodDecl,
) -> AgentDescriptor {
    let name = attributes
        .explicit_name()
        .unwrap_or_else(|| class.simple_name())
        .to_string();

    AgentDescriptor::new(
        name,
        attributes.agent_type,
        attributes.frequency,
        class.id().to_string(),
        EntryPoint::new(class.id(), &method.name, method.task.clone()),
    )
}
