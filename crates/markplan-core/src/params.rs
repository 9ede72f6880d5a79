//! Parameter structures for plan operations.
//!
//! These structures are shared by every interface (CLI, MCP). The core keeps
//! them free of interface frameworks; JSON schema derives are compiled in
//! only with the `schema` feature, and interface layers wrap or convert them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Field names match the MCP tool argument names. Optional task titles fall
//! back to the last task in the plan; an empty title counts as absent.
//!
//! Required text fields are checked by `validate()` before an operation
//! reaches the plan file. Text that becomes a heading, step or issue line
//! must also fit on one line.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::invalid_input(field).with_reason(format!("{field} not provided")));
    }
    Ok(())
}

/// Text written onto a single plan line must not span several.
fn single_line(field: &str, value: &str) -> Result<()> {
    require(field, value)?;
    if value.contains(['\n', '\r']) {
        return Err(PlannerError::invalid_input(field)
            .with_reason(format!("{field} must be a single line")));
    }
    Ok(())
}

/// Parameters for creating a task plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreatePlan {
    /// A description of the task to be planned; becomes the task title
    pub task_description: String,
}

impl CreatePlan {
    pub fn validate(&self) -> Result<()> {
        single_line("task_description", &self.task_description)
    }
}

/// Parameters for operations addressing a task that may be left implicit.
///
/// Used by review, completion check and resource reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct TaskRef {
    /// The task title (uses the latest task if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

/// Parameters for deleting a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteTask {
    /// The title of the task to delete
    pub task_title: String,
}

impl DeleteTask {
    pub fn validate(&self) -> Result<()> {
        require("task_title", &self.task_title)
    }
}

/// Parameters for adding a step to a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddStep {
    /// Description of the step to add
    pub step_description: String,

    /// The task title to add the step to (uses the latest task if not
    /// specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl AddStep {
    pub fn validate(&self) -> Result<()> {
        single_line("step_description", &self.step_description)
    }
}

/// Parameters for operations addressing one step.
///
/// Used by mark-complete and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepRef {
    /// Text of the step; an exact match wins, otherwise the first step
    /// starting with this text
    pub step_text: String,

    /// The task title containing the step (uses the latest task if not
    /// specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl StepRef {
    pub fn validate(&self) -> Result<()> {
        require("step_text", &self.step_text)
    }
}

/// Parameters for attaching an issue to a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddIssue {
    /// Description of the issue
    pub issue_description: String,

    /// The step text to add the issue to
    pub step_text: String,

    /// The task title (uses the latest task if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl AddIssue {
    pub fn validate(&self) -> Result<()> {
        single_line("issue_description", &self.issue_description)?;
        require("step_text", &self.step_text)
    }
}

/// Parameters for resolving the issues of a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ResolveIssue {
    /// The step text containing the issue
    pub step_text: String,

    /// Description of how the issue was resolved
    pub resolution_text: String,

    /// The task title (uses the latest task if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl ResolveIssue {
    pub fn validate(&self) -> Result<()> {
        require("step_text", &self.step_text)?;
        single_line("resolution_text", &self.resolution_text)
    }
}

/// Parameters for replacing the planning notes of a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdatePlanningNotes {
    /// The new planning notes
    pub notes: String,

    /// The task title (uses the latest task if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl UpdatePlanningNotes {
    pub fn validate(&self) -> Result<()> {
        require("notes", &self.notes)
    }
}

/// Parameters for tagging a task or a step with a priority.
///
/// The priority string itself is checked by the operation, which reports an
/// invalid value as an outcome rather than an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetPriority {
    /// Priority level (high, medium, low)
    pub priority: String,

    /// Text of the step to prioritize (if absent, sets priority for the
    /// task)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_text: Option<String>,

    /// The task title (uses the latest task if not specified)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl SetPriority {
    pub fn validate(&self) -> Result<()> {
        require("priority", &self.priority)
    }
}

/// Parameters for recording one thought in the journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordThought {
    /// The current thought: analysis, hypothesis, insight or reflection
    pub thought: String,

    /// The plan for the current task, broken into numbered steps
    pub plan: String,

    /// The next concrete, verifiable action to take
    pub action: String,

    /// Number of this thought, used to trace the reasoning later
    #[serde(rename = "thoughtNumber")]
    pub thought_number: String,
}

impl RecordThought {
    pub fn validate(&self) -> Result<()> {
        require("thought", &self.thought)?;
        require("plan", &self.plan)?;
        require("action", &self.action)?;
        require("thoughtNumber", &self.thought_number)
    }
}

/// Parameters for reading back the journal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ThoughtQuery {
    /// Number of a single thought to show (shows a summary of all if not
    /// specified)
    #[serde(
        default,
        rename = "thoughtNumber",
        skip_serializing_if = "Option::is_none"
    )]
    pub thought_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_step_requires_description() {
        let params = AddStep {
            step_description: "   ".to_string(),
            task_title: None,
        };

        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "step_description");
                assert_eq!(reason, "step_description not provided");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_issue_checks_fields_in_order() {
        let params = AddIssue {
            issue_description: "flaky".to_string(),
            step_text: String::new(),
            task_title: None,
        };

        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "step_text"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_line_fields_reject_newlines() {
        let params = AddStep {
            step_description: "a\n## Evil".to_string(),
            task_title: None,
        };
        match params.validate().unwrap_err() {
            PlannerError::InvalidInput { field, reason } => {
                assert_eq!(field, "step_description");
                assert_eq!(reason, "step_description must be a single line");
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }

        let plan = CreatePlan {
            task_description: "Ship\r\n### Steps".to_string(),
        };
        assert!(plan.validate().is_err());

        let resolve = ResolveIssue {
            step_text: "s".to_string(),
            resolution_text: "done\n[ ] sneaky".to_string(),
            task_title: None,
        };
        assert!(resolve.validate().is_err());
    }

    #[test]
    fn test_notes_may_span_lines() {
        let params = UpdatePlanningNotes {
            notes: "first\nsecond".to_string(),
            task_title: None,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_set_priority_accepts_any_nonempty_value() {
        let params = SetPriority {
            priority: "urgent".to_string(),
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_record_thought_uses_camel_case_number() {
        let params: RecordThought = serde_json::from_str(
            r#"{"thought":"t","plan":"p","action":"a","thoughtNumber":"1"}"#,
        )
        .unwrap();
        assert_eq!(params.thought_number, "1");
        assert!(params.validate().is_ok());

        let missing = RecordThought {
            thought_number: String::new(),
            ..params
        };
        match missing.validate().unwrap_err() {
            PlannerError::InvalidInput { field, .. } => assert_eq!(field, "thoughtNumber"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_title_defaults_to_none() {
        let params: StepRef = serde_json::from_str(r#"{"step_text":"Build"}"#).unwrap();
        assert_eq!(params.task_title, None);
    }
}
