//! Core library for the markplan task planner.
//!
//! Plans live in a single human-readable markdown file: a preamble followed by
//! task sections, each with planning notes and a checklist of steps that can
//! carry issues and priority glyphs. This crate parses that file, applies
//! edits in memory and writes it back, serializing concurrent callers.
//!
//! - [`markdown`]: text format, parser and renderer
//! - [`models`]: document, task, step and issue types
//! - [`edits`]: the plan operations on a parsed document
//! - [`store`]: the plan file on disk
//! - [`planner`]: async, locked facade used by the CLI and MCP server
//! - [`journal`]: in-memory thought journal
//! - [`display`]: operation outcomes and other output formatting
//!
//! Lookups that find nothing are ordinary [`Outcome`]s; only file system,
//! input validation and runtime failures surface as [`PlannerError`].
//!
//! # Quick Start
//!
//! ```rust
//! use markplan_core::{params::{CreatePlan, TaskRef}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_plan_path(Some("plan.md"))
//!     .build()
//!     .await?;
//!
//! planner
//!     .create_plan(&CreatePlan {
//!         task_description: "My Project".to_string(),
//!     })
//!     .await?;
//!
//! let plan = planner.review_plan(&TaskRef::default()).await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod edits;
pub mod error;
pub mod journal;
pub mod markdown;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use display::{LocalDateTime, Outcome, Thoughts};
pub use error::{PlannerError, Result};
pub use journal::{ThoughtEntry, ThoughtJournal, ThoughtReceipt};
pub use models::{CompletionReport, Issue, PlanDocument, Priority, Step, StepState, Task};
pub use params::{
    AddIssue, AddStep, CreatePlan, DeleteTask, RecordThought, ResolveIssue, SetPriority, StepRef,
    TaskRef, ThoughtQuery, UpdatePlanningNotes,
};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
