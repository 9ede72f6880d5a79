//! Step and issue model definitions.

use serde::{Deserialize, Serialize};

use super::{Priority, StepState};

/// A problem note attached to a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// What went wrong
    pub description: String,

    /// How it was resolved, once it has been
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    /// Line as read from disk; cleared when the issue changes
    #[serde(skip)]
    pub(crate) raw: Option<String>,
}

impl Issue {
    /// Creates a new open issue.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resolution: None,
            raw: None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    /// Marks the issue resolved, replacing any earlier resolution note.
    pub(crate) fn resolve(&mut self, note: impl Into<String>) {
        self.resolution = Some(note.into());
        self.raw = None;
    }
}

/// A single actionable item within a task, keyed by its text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Step text; also the key used to address the step
    pub text: String,

    /// Checkbox state
    #[serde(default)]
    pub state: StepState,

    /// Optional priority glyph shown before the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// Issues noted against this step, in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,

    /// Line as read from disk; cleared when the step line changes
    #[serde(skip)]
    pub(crate) raw: Option<String>,
}

impl Step {
    /// Creates a new incomplete step.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            state: StepState::Incomplete,
            priority: None,
            issues: Vec::new(),
            raw: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == StepState::Complete
    }

    pub(crate) fn complete(&mut self) {
        self.state = StepState::Complete;
        self.raw = None;
    }

    pub(crate) fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
        self.raw = None;
    }
}
