use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{IssueCommands, StepCommands, TaskCommands};

/// Command-line interface for the markplan task planner
///
/// Markplan keeps task plans in a single markdown file: tasks with planning
/// notes and a checklist of steps that can carry issues and priorities. The
/// same file can be edited from the command line, by hand, or by an AI
/// assistant through the MCP server mode.
#[derive(Parser)]
#[command(version, about, name = "mp")]
pub struct Args {
    /// Path to the plan file. Defaults to output/plan.md in the working
    /// directory
    #[arg(long, global = true)]
    pub plan_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the markplan CLI
///
/// Without a command the whole plan file is printed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks in the plan
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage steps within a task
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
    /// Record and resolve issues on steps
    #[command(alias = "i")]
    Issue {
        #[command(subcommand)]
        command: IssueCommands,
    },
    /// Start the MCP server on stdio
    Serve,
}
