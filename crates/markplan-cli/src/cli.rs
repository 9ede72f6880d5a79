//! Command-line argument definitions and command handling
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner → Outcome → Renderer
//! ```
//!
//! Every task-scoped command takes an optional `--task`; without it the
//! last task in the plan is used.

use std::fmt;

use anyhow::{bail, Result};
use clap::{Args, Subcommand, ValueEnum};
use log::debug;
use markplan_core::{params::*, Outcome, Planner};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Task commands
// ============================================================================

/// Create a new task in the plan
///
/// Creating a task that already exists leaves the plan untouched.
#[derive(Args)]
pub struct CreateTaskArgs {
    #[arg(help = "Description of the task to plan; becomes the task title")]
    pub description: String,
}

impl From<CreateTaskArgs> for CreatePlan {
    fn from(val: CreateTaskArgs) -> Self {
        CreatePlan {
            task_description: val.description,
        }
    }
}

/// Selects a task by title, or the last task when omitted
#[derive(Args)]
pub struct TaskSelectArgs {
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<TaskSelectArgs> for TaskRef {
    fn from(val: TaskSelectArgs) -> Self {
        TaskRef {
            task_title: val.task,
        }
    }
}

/// Replace the planning notes of a task
#[derive(Args)]
pub struct NotesArgs {
    #[arg(help = "New planning notes text")]
    pub notes: String,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<NotesArgs> for UpdatePlanningNotes {
    fn from(val: NotesArgs) -> Self {
        UpdatePlanningNotes {
            notes: val.notes,
            task_title: val.task,
        }
    }
}

/// Delete a task and all of its content
#[derive(Args)]
pub struct DeleteTaskArgs {
    #[arg(help = "Title of the task to delete")]
    pub title: String,
}

impl From<DeleteTaskArgs> for DeleteTask {
    fn from(val: DeleteTaskArgs) -> Self {
        DeleteTask {
            task_title: val.title,
        }
    }
}

#[derive(Args)]
pub struct TaskPriorityArgs {
    pub priority: PriorityArg,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<TaskPriorityArgs> for SetPriority {
    fn from(val: TaskPriorityArgs) -> Self {
        SetPriority {
            priority: val.priority.to_string(),
            step_text: None,
            task_title: val.task,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a new task in the plan
    #[command(alias = "c")]
    Create(CreateTaskArgs),
    /// Show a single task
    #[command(alias = "r")]
    Review(TaskSelectArgs),
    /// Replace a task's planning notes
    #[command(alias = "n")]
    Notes(NotesArgs),
    /// Report how many steps of a task are complete
    #[command(alias = "s")]
    Status(TaskSelectArgs),
    /// Delete a task from the plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTaskArgs),
    /// Set the priority of a task
    #[command(alias = "p")]
    Priority(TaskPriorityArgs),
}

// ============================================================================
// Step commands
// ============================================================================

#[derive(Args)]
pub struct AddStepArgs {
    #[arg(help = "Description of the step to add")]
    pub description: String,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<AddStepArgs> for AddStep {
    fn from(val: AddStepArgs) -> Self {
        AddStep {
            step_description: val.description,
            task_title: val.task,
        }
    }
}

/// Names a step by its text or a prefix of it
#[derive(Args)]
pub struct StepSelectArgs {
    #[arg(help = "Step text, or a prefix of it")]
    pub step: String,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<StepSelectArgs> for StepRef {
    fn from(val: StepSelectArgs) -> Self {
        StepRef {
            step_text: val.step,
            task_title: val.task,
        }
    }
}

#[derive(Args)]
pub struct StepPriorityArgs {
    #[arg(help = "Step text, or a prefix of it")]
    pub step: String,
    pub priority: PriorityArg,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<StepPriorityArgs> for SetPriority {
    fn from(val: StepPriorityArgs) -> Self {
        SetPriority {
            priority: val.priority.to_string(),
            step_text: Some(val.step),
            task_title: val.task,
        }
    }
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Append a step to a task
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Mark a step as complete
    #[command(aliases = ["d", "complete"])]
    Done(StepSelectArgs),
    /// Delete a step and its issues
    #[command(alias = "rm")]
    Delete(StepSelectArgs),
    /// Set the priority of a step
    #[command(alias = "p")]
    Priority(StepPriorityArgs),
}

// ============================================================================
// Issue commands
// ============================================================================

#[derive(Args)]
pub struct AddIssueArgs {
    #[arg(help = "Step text, or a prefix of it")]
    pub step: String,
    #[arg(help = "Description of the issue")]
    pub description: String,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<AddIssueArgs> for AddIssue {
    fn from(val: AddIssueArgs) -> Self {
        AddIssue {
            issue_description: val.description,
            step_text: val.step,
            task_title: val.task,
        }
    }
}

/// Resolve every issue recorded on a step
#[derive(Args)]
pub struct ResolveIssueArgs {
    #[arg(help = "Step text, or a prefix of it")]
    pub step: String,
    #[arg(help = "How the issues were resolved")]
    pub resolution: String,
    #[arg(short, long, help = "Task title (defaults to the last task in the plan)")]
    pub task: Option<String>,
}

impl From<ResolveIssueArgs> for ResolveIssue {
    fn from(val: ResolveIssueArgs) -> Self {
        ResolveIssue {
            step_text: val.step,
            resolution_text: val.resolution,
            task_title: val.task,
        }
    }
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// Record an issue on a step
    #[command(alias = "a")]
    Add(AddIssueArgs),
    /// Mark a step's issues as resolved
    #[command(alias = "r")]
    Resolve(ResolveIssueArgs),
}

/// Priority levels accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::Low => write!(f, "low"),
        }
    }
}

// ============================================================================
// Command handling
// ============================================================================

/// Runs parsed commands against the planner and renders the outcome.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let outcome = match command {
            TaskCommands::Create(args) => self.planner.create_plan(&args.into()).await?,
            TaskCommands::Review(args) => self.planner.review_plan(&args.into()).await?,
            TaskCommands::Notes(args) => self.planner.update_planning_notes(&args.into()).await?,
            TaskCommands::Status(args) => self.planner.check_task_completion(&args.into()).await?,
            TaskCommands::Delete(args) => self.planner.delete_task(&args.into()).await?,
            TaskCommands::Priority(args) => self.planner.set_priority(&args.into()).await?,
        };
        self.show(&outcome)
    }

    pub async fn handle_step_command(&self, command: StepCommands) -> Result<()> {
        let outcome = match command {
            StepCommands::Add(args) => self.planner.add_step(&args.into()).await?,
            StepCommands::Done(args) => self.planner.mark_step_complete(&args.into()).await?,
            StepCommands::Delete(args) => self.planner.delete_step(&args.into()).await?,
            StepCommands::Priority(args) => self.planner.set_priority(&args.into()).await?,
        };
        self.show(&outcome)
    }

    pub async fn handle_issue_command(&self, command: IssueCommands) -> Result<()> {
        let outcome = match command {
            IssueCommands::Add(args) => self.planner.add_issue(&args.into()).await?,
            IssueCommands::Resolve(args) => self.planner.resolve_issue(&args.into()).await?,
        };
        self.show(&outcome)
    }

    /// Print the whole plan file.
    pub async fn show_plan(&self) -> Result<()> {
        let outcome = self.planner.review_plan(&TaskRef::default()).await?;
        self.show(&outcome)
    }

    /// Render a successful outcome; a refused one becomes the process error.
    fn show(&self, outcome: &Outcome) -> Result<()> {
        debug!("outcome: {outcome:?}");
        if !outcome.is_success() {
            bail!("{outcome}");
        }
        self.renderer.render(&outcome.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_arg_display_matches_core_names() {
        assert_eq!(PriorityArg::High.to_string(), "high");
        assert_eq!(PriorityArg::Medium.to_string(), "medium");
        assert_eq!(PriorityArg::Low.to_string(), "low");
    }

    #[test]
    fn test_step_priority_args_target_the_step() {
        let params: SetPriority = StepPriorityArgs {
            step: "deploy".to_string(),
            priority: PriorityArg::Low,
            task: None,
        }
        .into();

        assert_eq!(params.priority, "low");
        assert_eq!(params.step_text.as_deref(), Some("deploy"));
        assert!(params.task_title.is_none());
    }

    #[test]
    fn test_issue_args_keep_field_order_straight() {
        let params: AddIssue = AddIssueArgs {
            step: "build".to_string(),
            description: "linker fails".to_string(),
            task: Some("Release".to_string()),
        }
        .into();

        assert_eq!(params.step_text, "build");
        assert_eq!(params.issue_description, "linker fails");
        assert_eq!(params.task_title.as_deref(), Some("Release"));
    }
}
