//! Plan edits applied to a parsed [`PlanDocument`].
//!
//! Each operation takes the document by mutable reference, applies one
//! logical edit and answers with an [`Outcome`]. Nothing here touches the
//! file system; the [`Planner`](crate::Planner) loads the document, calls one
//! of these methods and writes the result back when the text changed.
//!
//! - [`task_edits`]: create, review, notes, completion, priority, delete
//! - [`step_edits`]: add, complete, issues, delete

pub mod step_edits;
pub mod task_edits;


use crate::{display::Outcome, models::PlanDocument};

/// An empty title or step text counts as not given.
pub(crate) fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl PlanDocument {
    /// Resolves the addressed task to its index.
    ///
    /// Without a title the last task in the document is used.
    pub(crate) fn resolve_task(&self, title: Option<&str>) -> Result<usize, Outcome> {
        match given(title) {
            Some(title) => self.find_task(title).ok_or_else(|| Outcome::TaskNotFound {
                title: title.to_string(),
            }),
            None => self.last_task().ok_or(Outcome::NoTasks),
        }
    }

    /// Resolves a step of task `task` to its line index.
    pub(crate) fn resolve_step(&self, task: usize, step: &str) -> Result<usize, Outcome> {
        let task = &self.tasks[task];
        task.find_step(step).ok_or_else(|| Outcome::StepNotFound {
            step: step.to_string(),
            title: task.title.clone(),
        })
    }

    /// Whether task `index` has another task below it.
    pub(crate) fn is_followed(&self, index: usize) -> bool {
        index + 1 < self.tasks.len()
    }
}
