//! Outcome of a plan operation.
//!
//! Every store operation answers with an [`Outcome`]. Not-found conditions and
//! rejected input are outcomes, not errors: they are reported to the caller
//! as plain messages and leave the plan file untouched.

use std::{fmt, path::PathBuf};

use crate::models::{CompletionReport, Priority};

/// Result of one plan operation, rendered as the message shown to the caller.
///
/// # Examples
///
/// ```rust
/// use markplan_core::display::Outcome;
///
/// let outcome = Outcome::StepAdded {
///     step: "Write tests".to_string(),
///     title: "Parser".to_string(),
/// };
/// assert_eq!(outcome.to_string(), "Added step 'Write tests' to task 'Parser'.");
/// assert!(outcome.is_success());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    PlanCreated { title: String, path: PathBuf },
    PlanExists { title: String, path: PathBuf },
    NoTasks,
    TaskNotFound { title: String },
    StepNotFound { step: String, title: String },
    StepExists { step: String, title: String },
    StepAdded { step: String, title: String },
    StepCompleted { step: String, title: String },
    IssueAdded { issue: String, step: String, title: String },
    NoIssues { step: String, title: String },
    IssuesResolved { step: String, title: String },
    NotesUpdated { title: String },
    NoSteps { title: String },
    Completion(CompletionReport),
    StepDeleted { step: String, title: String },
    TaskDeleted { title: String },
    InvalidPriority { priority: String },
    StepPriority { priority: Priority, step: String, title: String },
    TaskPriority { priority: Priority, title: String },
    /// The whole plan document
    Plan(String),
    /// One task block, for review
    TaskReview { title: String, block: String },
    /// One task block, served as a resource
    TaskResource { title: String, block: String },
}

impl Outcome {
    /// Whether the operation did what was asked.
    ///
    /// `PlanExists` counts as success: creation is idempotent.
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Outcome::NoTasks
                | Outcome::TaskNotFound { .. }
                | Outcome::StepNotFound { .. }
                | Outcome::StepExists { .. }
                | Outcome::NoIssues { .. }
                | Outcome::NoSteps { .. }
                | Outcome::InvalidPriority { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlanCreated { title, path } => write!(
                f,
                "Created new plan for '{title}' in '{}'. Review and customize the steps as needed.",
                path.display()
            ),
            Outcome::PlanExists { title, path } => write!(
                f,
                "A plan for '{title}' already exists in '{}'.",
                path.display()
            ),
            Outcome::NoTasks => write!(
                f,
                "No tasks found in the plan. Create a task first using think_and_plan."
            ),
            Outcome::TaskNotFound { title } => write!(f, "Task '{title}' not found in the plan."),
            Outcome::StepNotFound { step, title } => {
                write!(f, "Step '{step}' not found in task '{title}'.")
            }
            Outcome::StepExists { step, title } => {
                write!(f, "Step '{step}' already exists in task '{title}'.")
            }
            Outcome::StepAdded { step, title } => {
                write!(f, "Added step '{step}' to task '{title}'.")
            }
            Outcome::StepCompleted { step, title } => {
                write!(f, "Marked step '{step}' as complete in task '{title}'.")
            }
            Outcome::IssueAdded { issue, step, title } => write!(
                f,
                "Added issue '{issue}' to step '{step}' in task '{title}'."
            ),
            Outcome::NoIssues { step, title } => {
                write!(f, "No issues found for step '{step}' in task '{title}'.")
            }
            Outcome::IssuesResolved { step, title } => write!(
                f,
                "Marked issues as resolved in step '{step}' for task '{title}'."
            ),
            Outcome::NotesUpdated { title } => {
                write!(f, "Updated planning notes for task '{title}'.")
            }
            Outcome::NoSteps { title } => write!(f, "No steps found for task '{title}'."),
            Outcome::Completion(report) => write!(f, "{report}"),
            Outcome::StepDeleted { step, title } => {
                write!(f, "Deleted step '{step}' from task '{title}'.")
            }
            Outcome::TaskDeleted { title } => write!(f, "Deleted task '{title}' from the plan."),
            Outcome::InvalidPriority { priority } => write!(
                f,
                "Invalid priority '{priority}'. Please use one of: high,medium,low."
            ),
            Outcome::StepPriority {
                priority,
                step,
                title,
            } => write!(
                f,
                "Set priority '{priority}' for step '{step}' in task '{title}'."
            ),
            Outcome::TaskPriority { priority, title } => {
                write!(f, "Set priority '{priority}' for task '{title}'.")
            }
            Outcome::Plan(text) => f.write_str(text),
            Outcome::TaskReview { title, block } => {
                write!(f, "# Review of task: '{title}'\n\n{block}")
            }
            Outcome::TaskResource { title, block } => write!(f, "# Task: {title}\n\n{block}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_and_exists_messages() {
        let path = PathBuf::from("output/plan.md");
        let created = Outcome::PlanCreated {
            title: "Build".to_string(),
            path: path.clone(),
        };
        assert_eq!(
            created.to_string(),
            "Created new plan for 'Build' in 'output/plan.md'. Review and customize the steps as needed."
        );

        let exists = Outcome::PlanExists {
            title: "Build".to_string(),
            path,
        };
        assert_eq!(
            exists.to_string(),
            "A plan for 'Build' already exists in 'output/plan.md'."
        );
        assert!(exists.is_success());
    }

    #[test]
    fn test_failure_outcomes() {
        let invalid = Outcome::InvalidPriority {
            priority: "urgent".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Invalid priority 'urgent'. Please use one of: high,medium,low."
        );
        assert!(!invalid.is_success());
        assert!(!Outcome::NoTasks.is_success());
    }

    #[test]
    fn test_priority_messages_use_lowercase_names() {
        let outcome = Outcome::TaskPriority {
            priority: Priority::High,
            title: "Build".to_string(),
        };
        assert_eq!(outcome.to_string(), "Set priority 'high' for task 'Build'.");
    }

    #[test]
    fn test_review_and_resource_headers() {
        let review = Outcome::TaskReview {
            title: "Build".to_string(),
            block: "## Build\n".to_string(),
        };
        assert_eq!(review.to_string(), "# Review of task: 'Build'\n\n## Build\n");

        let resource = Outcome::TaskResource {
            title: "Build".to_string(),
            block: "## Build\n".to_string(),
        };
        assert_eq!(resource.to_string(), "# Task: Build\n\n## Build\n");
    }
}
