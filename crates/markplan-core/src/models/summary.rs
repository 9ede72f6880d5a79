//! Task completion summary.

use serde::{Deserialize, Serialize};

use super::Task;

/// Completion statistics for one task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionReport {
    /// Title of the task
    pub title: String,
    /// Number of completed steps
    pub completed: usize,
    /// Total number of steps
    pub total: usize,
    /// Texts of the steps still open, in document order
    pub remaining: Vec<String>,
}

impl CompletionReport {
    /// Share of completed steps in percent; zero for an empty task.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

impl From<&Task> for CompletionReport {
    fn from(task: &Task) -> Self {
        let mut completed = 0;
        let mut remaining = Vec::new();
        for step in task.steps() {
            if step.is_complete() {
                completed += 1;
            } else {
                remaining.push(step.text.clone());
            }
        }

        Self {
            title: task.title.clone(),
            completed,
            total: completed + remaining.len(),
            remaining,
        }
    }
}
