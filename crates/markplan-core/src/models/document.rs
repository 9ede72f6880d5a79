//! The plan document: preamble plus an ordered list of tasks.

use super::{Priority, Task};
use crate::markdown::{is_blank, CREATED_ON_PREFIX, DOCUMENT_TITLE, PREAMBLE_MARKER};

/// The whole persisted plan.
///
/// Titles are unique when created through the planner, but a hand-edited
/// file may repeat one; lookups then resolve to the bottom-most task.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDocument {
    /// Lines before the first task heading
    pub preamble: Vec<String>,

    /// Tasks in document order
    pub tasks: Vec<Task>,

    /// Whether the rendered text ends with a newline
    pub(crate) trailing_newline: bool,
}

impl PlanDocument {
    /// Creates an empty plan with the standard preamble.
    pub fn new(created: &str) -> Self {
        Self {
            preamble: vec![
                DOCUMENT_TITLE.to_string(),
                String::new(),
                format!("{CREATED_ON_PREFIX}{created}"),
                String::new(),
                PREAMBLE_MARKER.to_string(),
                String::new(),
            ],
            tasks: Vec::new(),
            trailing_newline: true,
        }
    }

    /// Index of the bottom-most task titled `title`.
    ///
    /// A trailing ` [<glyph>]` on `title` is stripped when the title as
    /// written matches nothing.
    pub fn find_task(&self, title: &str) -> Option<usize> {
        let (bare, _) = Priority::split_heading_tag(title);
        self.tasks
            .iter()
            .rposition(|task| task.title == title)
            .or_else(|| self.tasks.iter().rposition(|task| task.title == bare))
    }

    /// Index of the last task section in the document.
    pub fn last_task(&self) -> Option<usize> {
        self.tasks.len().checked_sub(1)
    }

    pub fn task(&self, title: &str) -> Option<&Task> {
        self.find_task(title).map(|index| &self.tasks[index])
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|task| task.title.as_str())
    }

    /// Whether the block preceding a newly appended task already ends with a
    /// blank line.
    pub(crate) fn ends_with_blank(&self) -> bool {
        match self.tasks.last() {
            Some(task) => task.ends_with_blank(),
            None => self.preamble.last().is_some_and(|line| is_blank(line)),
        }
    }

    /// Collapses trailing blank lines of the block before task `index`.
    pub(crate) fn collapse_before(&mut self, index: usize) {
        match index.checked_sub(1) {
            Some(prev) => self.tasks[prev].collapse_trailing_blanks(),
            None => {
                while self.preamble.len() >= 2
                    && is_blank(&self.preamble[self.preamble.len() - 1])
                    && is_blank(&self.preamble[self.preamble.len() - 2])
                {
                    self.preamble.pop();
                }
            }
        }
    }
}
