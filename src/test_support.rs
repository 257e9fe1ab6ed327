use crate::agent::{
    AgentAttributes, AgentType, ClassDescriptor, ConstructorDecl, MethodDecl, Visibility,
};
use crate::registry::ClassRegistry;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) const ALL_AGENTS_NS: &str = "a.b.agents";
pub(crate) const VALID_AGENTS_NS: &str = "a.b.agents.valid";
pub(crate) const INVALID_AGENTS_NS: &str = "a.b.agents.invalid";

pub(crate) const VALID_AGENTS: [&str; 4] = [
    "a.b.agents.valid.DummyAgent",
    "a.b.agents.valid.CronAgentWithRunMethod",
    "a.b.agents.valid.TimerAgentWithRunMethod",
    "a.b.agents.valid.NamedTimerAgent",
];

pub(crate) const INVALID_AGENTS: [&str; 8] = [
    "a.b.agents.invalid.AgentWithAllCustomParams",
    "a.b.agents.invalid.AgentWithPrivateConstructor",
    "a.b.agents.invalid.AgentWithPrivateRunMethod",
    "a.b.agents.invalid.AgentWithRunMethodParameters",
    "a.b.agents.invalid.AgentWithNoRunMethod",
    "a.b.agents.invalid.AgentWithTwoRunMethods",
    "a.b.agents.invalid.AgentWithProtectedRunMethod",
    "a.b.agents.invalid.AgentWithPrivateConstructorAndNoRunMethod",
];

/// Classes under the fixture namespaces that must never be reported as agents.
pub(crate) const UNMARKED_CLASSES: [&str; 2] = [
    "a.b.agents.NotAnAgent",
    "a.b.agents.valid.SubclassOfDummyAgent",
];

fn timer(frequency: &str) -> AgentAttributes {
    AgentAttributes::new(AgentType::Timer, frequency)
}

/// Registry with 4 valid and 8 invalid agent classes under `a.b.agents`,
/// two unmarked classes, and an empty declared namespace `a.b.empty`.
pub(crate) fn fixture_registry() -> ClassRegistry {
    let classes = vec![
        // valid
        ClassDescriptor::builder("a.b.agents.valid.DummyAgent")
            .agent(timer("30 seconds"))
            .method(MethodDecl::new("runTask").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.valid.CronAgentWithRunMethod")
            .agent(AgentAttributes::new(AgentType::Cron, "0 0/5 * * *"))
            .method(MethodDecl::new("run").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.valid.TimerAgentWithRunMethod")
            .agent(timer("1 minute"))
            .method(
                MethodDecl::new("helper")
                    .with_visibility(Visibility::Private)
                    .with_parameter("int"),
            )
            .method(MethodDecl::new("run").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.valid.NamedTimerAgent")
            .agent(timer("2 hours").with_name("timer1"))
            .constructor(ConstructorDecl::new(Visibility::Public))
            .constructor(ConstructorDecl::new(Visibility::Private).with_parameter("String"))
            .method(MethodDecl::new("execute").run())
            .build(),
        // invalid
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithAllCustomParams")
            .agent(timer("90 seconds").with_name("name1"))
            .method(MethodDecl::new("agentTask"))
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithPrivateConstructor")
            .agent(timer("90 seconds").with_name("name1"))
            .constructor(ConstructorDecl::new(Visibility::Private))
            .method(MethodDecl::new("agentTask").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithPrivateRunMethod")
            .agent(timer("90 seconds").with_name("name1"))
            .method(
                MethodDecl::new("agentTask")
                    .run()
                    .with_visibility(Visibility::Private),
            )
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithRunMethodParameters")
            .agent(AgentAttributes::new(AgentType::Cron, "0 * * * *").with_name("agent1"))
            .method(MethodDecl::new("agentTask").run().with_parameter("String"))
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithNoRunMethod")
            .agent(timer("10 seconds"))
            .method(MethodDecl::new("notAnEntryPoint"))
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithTwoRunMethods")
            .agent(timer("5 minutes"))
            .method(MethodDecl::new("runB").run())
            .method(MethodDecl::new("runA").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithProtectedRunMethod")
            .agent(timer("5 minutes"))
            .method(
                MethodDecl::new("agentTask")
                    .run()
                    .with_visibility(Visibility::Protected),
            )
            .build(),
        ClassDescriptor::builder("a.b.agents.invalid.AgentWithPrivateConstructorAndNoRunMethod")
            .agent(timer("5 minutes"))
            .constructor(ConstructorDecl::new(Visibility::Private))
            .build(),
        // unmarked
        ClassDescriptor::builder("a.b.agents.NotAnAgent")
            .method(MethodDecl::new("runTask").run())
            .build(),
        ClassDescriptor::builder("a.b.agents.valid.SubclassOfDummyAgent")
            .extends("a.b.agents.valid.DummyAgent")
            .method(MethodDecl::new("runTask").run())
            .build(),
    ];

    let mut registry = ClassRegistry::new();
    for class in classes {
        registry.register(class).unwrap();
    }
    registry.declare_namespace("a.b.empty").unwrap();
    registry
}

/// Manifest describing a subset of the fixture in YAML.
pub(crate) const FIXTURE_MANIFEST: &str = r#"
namespaces:
  - a.b.empty

classes:
  - id: a.b.agents.valid.DummyAgent
    agent:
      type: timer
      frequency: 30 seconds
    methods:
      - name: runTask
        run: true

  - id: a.b.agents.invalid.AgentWithPrivateRunMethod
    agent:
      name: name1
      type: timer
      frequency: 90 seconds
    methods:
      - name: agentTask
        visibility: private
        run: true

  - id: a.b.agents.invalid.AgentWithPrivateConstructor
    agent:
      name: name1
      type: timer
      frequency: 90 seconds
    constructors:
      - visibility: private
    methods:
      - name: agentTask
        run: true

  - id: a.b.agents.NotAnAgent
    markers: [service]
    methods:
      - name: runTask
        markers: [run]
"#;
