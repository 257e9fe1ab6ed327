//! Tests for structural validation.

use crate::agent::{
    AgentAttributes, AgentType, ClassDescriptor, ConstructorDecl, MethodDecl, Visibility,
};
use crate::registry::{ClassRegistry, Manifest};
use crate::scan::{AgentCandidate, Scanner};
use crate::test_support::{INVALID_AGENTS_NS, VALID_AGENTS, fixture_registry};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{ReasonCode, ValidationError, Validator, validate_class};

// =========================================================================
// Helper functions
// =========================================================================

fn timer_agent(id: &str) -> crate::agent::ClassBuilder {
    ClassDescriptor::builder(id).agent(AgentAttributes::new(AgentType::Timer, "1 minute"))
}

fn reason_of(class: &ClassDescriptor) -> ReasonCode {
    validate_class(class).unwrap_err().reason
}

// =========================================================================
// Fixture scenarios
// =========================================================================

#[test]
fn test_single_matching_method_success() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let descriptor = validator.validate("a.b.agents.valid.DummyAgent").unwrap();

    assert_eq!(descriptor.name(), "DummyAgent");
    assert_eq!(descriptor.agent_type(), AgentType::Timer);
    assert_eq!(descriptor.frequency(), "30 seconds");
    assert_eq!(descriptor.owner_class(), "a.b.agents.valid.DummyAgent");
    assert_eq!(descriptor.entry_point().method(), "runTask");
    assert_eq!(descriptor.entry_point().owner(), "a.b.agents.valid.DummyAgent");
}

#[test]
fn test_all_valid_fixture_agents_pass() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    for id in VALID_AGENTS {
        assert!(validator.validate(id).is_ok(), "{} should be valid", id);
    }
}

#[test]
fn test_explicit_name_is_used() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let descriptor = validator.validate("a.b.agents.valid.NamedTimerAgent").unwrap();

    assert_eq!(descriptor.name(), "timer1");
    assert_eq!(descriptor.frequency(), "2 hours");
    assert_eq!(descriptor.entry_point().method(), "execute");
}

#[test]
fn test_private_run_method_with_custom_params() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let err = validator
        .validate("a.b.agents.invalid.AgentWithPrivateRunMethod")
        .unwrap_err();

    assert_eq!(err.reason, ReasonCode::RunMethodNotAccessible);
    assert_eq!(err.class, "a.b.agents.invalid.AgentWithPrivateRunMethod");
    assert_eq!(err.method.as_deref(), Some("agentTask"));
}

#[test]
fn test_fixture_rejection_reasons() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let expected = [
        ("AgentWithAllCustomParams", ReasonCode::NoRunMethod),
        ("AgentWithPrivateConstructor", ReasonCode::ConstructorNotAccessible),
        ("AgentWithPrivateRunMethod", ReasonCode::RunMethodNotAccessible),
        ("AgentWithRunMethodParameters", ReasonCode::RunMethodHasParameters),
        ("AgentWithNoRunMethod", ReasonCode::NoRunMethod),
        ("AgentWithTwoRunMethods", ReasonCode::MultipleRunMethods),
        ("AgentWithProtectedRunMethod", ReasonCode::RunMethodNotAccessible),
        (
            "AgentWithPrivateConstructorAndNoRunMethod",
            ReasonCode::ConstructorNotAccessible,
        ),
    ];

    for (name, reason) in expected {
        let id = format!("{}.{}", INVALID_AGENTS_NS, name);
        let err = validator.validate(&id).unwrap_err();
        assert_eq!(err.reason, reason, "unexpected reason for {}", id);
    }
}

// =========================================================================
// Entry-point resolution
// =========================================================================

#[test]
fn test_no_run_method() {
    let class = timer_agent("x.NoRun")
        .method(MethodDecl::new("helper"))
        .build();
    assert_eq!(reason_of(&class), ReasonCode::NoRunMethod);

    let empty = timer_agent("x.Empty").build();
    assert_eq!(reason_of(&empty), ReasonCode::NoRunMethod);
}

#[test]
fn test_two_run_methods_regardless_of_order() {
    let forward = timer_agent("x.Two")
        .method(MethodDecl::new("first").run())
        .method(MethodDecl::new("second").run())
        .build();
    let backward = timer_agent("x.Two")
        .method(MethodDecl::new("second").run())
        .method(MethodDecl::new("first").run())
        .build();

    let a = validate_class(&forward).unwrap_err();
    let b = validate_class(&backward).unwrap_err();

    assert_eq!(a.reason, ReasonCode::MultipleRunMethods);
    assert_eq!(a, b);
    assert_eq!(a.method.as_deref(), Some("first, second"));
}

#[test]
fn test_multiple_run_methods_is_not_resolved_by_shape() {
    // One candidate is well-formed, the other is not; there is no tie-break.
    let class = timer_agent("x.Ambiguous")
        .method(MethodDecl::new("good").run())
        .method(
            MethodDecl::new("bad")
                .run()
                .with_visibility(Visibility::Private),
        )
        .build();

    assert_eq!(reason_of(&class), ReasonCode::MultipleRunMethods);
}

#[test]
fn test_non_public_run_method() {
    for visibility in [
        Visibility::Private,
        Visibility::Protected,
        Visibility::PackagePrivate,
    ] {
        let class = timer_agent("x.Hidden")
            .method(MethodDecl::new("run").run().with_visibility(visibility))
            .build();
        assert_eq!(
            reason_of(&class),
            ReasonCode::RunMethodNotAccessible,
            "visibility {}",
            visibility
        );
    }
}

#[test]
fn test_run_method_with_parameters() {
    let class = timer_agent("x.Params")
        .method(
            MethodDecl::new("run")
                .run()
                .with_parameter("String")
                .with_parameter("int"),
        )
        .build();

    let err = validate_class(&class).unwrap_err();
    assert_eq!(err.reason, ReasonCode::RunMethodHasParameters);
    assert_eq!(err.method.as_deref(), Some("run"));
}

#[test]
fn test_visibility_checked_before_parameters() {
    let class = timer_agent("x.Both")
        .method(
            MethodDecl::new("run")
                .run()
                .with_visibility(Visibility::Private)
                .with_parameter("String"),
        )
        .build();

    assert_eq!(reason_of(&class), ReasonCode::RunMethodNotAccessible);
}

// =========================================================================
// Constructor accessibility
// =========================================================================

#[test]
fn test_private_constructor() {
    let class = timer_agent("x.Private")
        .constructor(ConstructorDecl::new(Visibility::Private))
        .method(MethodDecl::new("run").run())
        .build();

    let err = validate_class(&class).unwrap_err();
    assert_eq!(err.reason, ReasonCode::ConstructorNotAccessible);
    assert!(err.method.is_none());
}

#[test]
fn test_constructor_checked_before_entry_point() {
    let no_run = timer_agent("x.A")
        .constructor(ConstructorDecl::new(Visibility::Private))
        .build();
    let two_runs = timer_agent("x.B")
        .constructor(ConstructorDecl::new(Visibility::Private))
        .method(MethodDecl::new("a").run())
        .method(MethodDecl::new("b").run())
        .build();
    let bad_shape = timer_agent("x.C")
        .constructor(ConstructorDecl::new(Visibility::Private))
        .method(MethodDecl::new("a").run().with_parameter("int"))
        .build();

    for class in [no_run, two_runs, bad_shape] {
        assert_eq!(reason_of(&class), ReasonCode::ConstructorNotAccessible);
    }
}

#[test]
fn test_non_private_constructors_are_accessible() {
    for visibility in [
        Visibility::Public,
        Visibility::Protected,
        Visibility::PackagePrivate,
    ] {
        let class = timer_agent("x.Ctor")
            .constructor(ConstructorDecl::new(visibility))
            .method(MethodDecl::new("run").run())
            .build();
        assert!(validate_class(&class).is_ok(), "visibility {}", visibility);
    }
}

#[test]
fn test_only_parameterized_constructor() {
    let class = timer_agent("x.NeedsArgs")
        .constructor(ConstructorDecl::new(Visibility::Public).with_parameter("String"))
        .method(MethodDecl::new("run").run())
        .build();

    assert_eq!(reason_of(&class), ReasonCode::ConstructorNotAccessible);
}

#[test]
fn test_constructor_check_independent_of_declaration_order() {
    let private_first = timer_agent("x.Overloaded")
        .constructor(ConstructorDecl::new(Visibility::Private))
        .constructor(ConstructorDecl::new(Visibility::Public))
        .method(MethodDecl::new("run").run())
        .build();
    let public_first = timer_agent("x.Overloaded")
        .constructor(ConstructorDecl::new(Visibility::Public))
        .constructor(ConstructorDecl::new(Visibility::Private))
        .method(MethodDecl::new("run").run())
        .build();

    assert!(validate_class(&private_first).is_ok());
    assert_eq!(validate_class(&private_first), validate_class(&public_first));
}

#[test]
fn test_manifest_constructor_order_does_not_matter() {
    let registry = Manifest::from_yaml(
        r#"
classes:
  - id: x.ManifestOverloaded
    agent:
      type: TIMER
      frequency: 1 minute
    constructors:
      - visibility: private
      - visibility: public
    methods:
      - name: run
        run: true
"#,
    )
    .unwrap()
    .into_registry()
    .unwrap();

    let descriptor = Validator::new(&registry)
        .validate("x.ManifestOverloaded")
        .unwrap();
    assert_eq!(descriptor.agent_type(), AgentType::Timer);
    assert_eq!(descriptor.entry_point().method(), "run");
}

// =========================================================================
// Descriptor assembly
// =========================================================================

#[test]
fn test_blank_name_falls_back_to_simple_name() {
    let class = ClassDescriptor::builder("x.y.Outer$ReportAgent")
        .agent(AgentAttributes::new(AgentType::Cron, "0 0 * * *").with_name("  "))
        .method(MethodDecl::new("run").run())
        .build();

    let descriptor = validate_class(&class).unwrap();
    assert_eq!(descriptor.name(), "ReportAgent");
    assert_eq!(descriptor.agent_type(), AgentType::Cron);
}

#[test]
fn test_frequency_is_kept_verbatim() {
    let class = ClassDescriptor::builder("x.Odd")
        .agent(AgentAttributes::new(AgentType::Timer, "  every other tuesday "))
        .method(MethodDecl::new("run").run())
        .build();

    let descriptor = validate_class(&class).unwrap();
    assert_eq!(descriptor.frequency(), "  every other tuesday ");
}

#[test]
fn test_entry_point_invokes_registered_task() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let class = timer_agent("x.Counting")
        .method(MethodDecl::new("run").run().with_task(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }))
        .build();

    let descriptor = validate_class(&class).unwrap();
    assert!(descriptor.entry_point().invoke());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unmarked_class_rejected() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let err = validator.validate("a.b.agents.NotAnAgent").unwrap_err();
    assert_eq!(err.reason, ReasonCode::MissingAgentMarker);

    // The superclass marker is not inherited either.
    let err = validator
        .validate("a.b.agents.valid.SubclassOfDummyAgent")
        .unwrap_err();
    assert_eq!(err.reason, ReasonCode::MissingAgentMarker);
}

#[test]
fn test_unknown_class_rejected() {
    let registry = ClassRegistry::new();
    let validator = Validator::new(&registry);

    let err = validator.validate("a.b.Missing").unwrap_err();
    assert_eq!(
        err,
        ValidationError::new(ReasonCode::UnknownClass, "a.b.Missing", None)
    );
}

#[test]
fn test_validate_is_idempotent() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let first = validator.validate("a.b.agents.valid.NamedTimerAgent");
    let second = validator.validate("a.b.agents.valid.NamedTimerAgent");
    assert_eq!(first, second);

    let first = validator.validate("a.b.agents.invalid.AgentWithTwoRunMethods");
    let second = validator.validate("a.b.agents.invalid.AgentWithTwoRunMethods");
    assert_eq!(first, second);
}

#[test]
fn test_validate_candidate_matches_validate() {
    let registry = fixture_registry();
    let scanner = Scanner::new(&registry);
    let validator = Validator::new(&registry);

    for candidate in scanner.find_candidates(&["a.b.agents"]).unwrap() {
        let id = candidate.class_id.clone();
        assert_eq!(validator.validate_candidate(candidate), validator.validate(&id));
    }
}

#[test]
fn test_error_message_names_class_and_method() {
    let err = ValidationError::new(
        ReasonCode::RunMethodNotAccessible,
        "a.b.Agent",
        Some("agentTask".to_string()),
    );
    assert_eq!(
        err.to_string(),
        "RunMethodNotAccessible in class 'a.b.Agent', method 'agentTask': run method must be public"
    );

    let err = ValidationError::new(ReasonCode::NoRunMethod, "a.b.Agent", None);
    assert_eq!(
        err.to_string(),
        "NoRunMethod in class 'a.b.Agent': no method carries the run marker"
    );
}

#[test]
fn test_concurrent_validation() {
    let registry = fixture_registry();

    std::thread::scope(|s| {
        for id in VALID_AGENTS {
            let registry = &registry;
            s.spawn(move || {
                assert!(Validator::new(registry).validate(id).is_ok());
            });
        }
    });
}

#[test]
fn test_validate_candidate_rechecks_agent_marker() {
    let registry = fixture_registry();
    let validator = Validator::new(&registry);

    let candidate = AgentCandidate {
        class_id: "a.b.agents.NotAnAgent".to_string(),
        attributes: AgentAttributes::new(AgentType::Timer, "1 minute"),
    };

    let err = validator.validate_candidate(candidate).unwrap_err();
    assert_eq!(err.reason, ReasonCode::MissingAgentMarker);
}
