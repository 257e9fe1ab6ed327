//! Audit trail of command runs.
//!
//! When `events_log` is set in `agentscan.yaml`, every `scan`, `validate` and
//! `check` run appends a single JSON line to that file. The log records which
//! prefixes were scanned, how many agents were found, and which classes were
//! admitted or rejected, together with who ran the command and when.
//!
//! A line looks like:
//!
//! ```text
//! {"ts":"2026-01-05T09:30:00Z","action":"validate","actor":"dev@build-01","class":"a.b.DummyAgent","details":{"accepted":true,"name":"DummyAgent"}}
//! ```
//!
//! `class` appears only on `validate` lines. `details` differs per action.
//!
//! # Example
//!
//! ```no_run
//! use agentscan::events::{Event, EventAction, append_event};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Scan)
//!     .with_details(json!({"prefixes": ["com.example.agents"], "found": 3}));
//! append_event("agentscan-events.ndjson", &event)?;
//! # Ok::<(), agentscan::error::AgentScanError>(())
//! ```

use crate::error::{AgentScanError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Command that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Namespace scan
    Scan,
    /// Single-class validation
    Validate,
    /// Scan plus validation of every candidate
    Check,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Scan => write!(f, "scan"),
            EventAction::Validate => write!(f, "validate"),
            EventAction::Check => write!(f, "check"),
        }
    }
}

/// One line of the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the command ran (RFC3339).
    pub ts: DateTime<Utc>,

    /// Which command ran.
    pub action: EventAction,

    /// `user@host` of whoever ran the command.
    pub actor: String,

    /// Validated class, for `validate` runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    /// Per-command summary: prefixes, counts, acceptance.
    pub details: Value,
}

impl Event {
    /// Stamp an event for `action` with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: current_actor(),
            class: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Attach the validated class.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class = Some(class_id.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Render as one NDJSON line, without the trailing newline.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            AgentScanError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// `$USER@hostname`, falling back to `unknown` for either part.
fn current_actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append `event` as one line to the log at `path`, creating the file and
/// its directory on first use. I/O failures surface as user errors naming the
/// path.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let events_file = path.as_ref();

    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = events_file.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            AgentScanError::UserError(format!(
                "failed to create events directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_file)
        .map_err(|e| {
            AgentScanError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        AgentScanError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}
