//! Task model definition and related functionality.

use super::{Priority, Step};
use crate::markdown::{is_blank, CREATED_PREFIX, NOTES_PLACEHOLDER, NOTES_SECTION, STEPS_SECTION};

/// One line of a task body.
///
/// Lines the parser does not recognize are kept as [`TaskLine::Text`] so that
/// hand-written content survives every edit.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskLine {
    /// Verbatim text line (blank lines, notes, `Created:` stamp)
    Text(String),
    /// `### <name>` sub-heading
    Section(String),
    /// A step together with its issue lines
    Step(Step),
}

impl TaskLine {
    pub fn as_step(&self) -> Option<&Step> {
        match self {
            TaskLine::Step(step) => Some(step),
            _ => None,
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, TaskLine::Text(text) if is_blank(text))
    }
}

/// A named unit of planning work, keyed by its title.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Title of the task, without any priority tag
    pub title: String,

    /// Priority tag shown after the title
    pub priority: Option<Priority>,

    /// Body lines following the `## <title>` heading
    pub lines: Vec<TaskLine>,

    /// Heading line as read from disk; cleared when the heading changes
    pub(crate) heading_raw: Option<String>,
}

impl Task {
    /// Creates a fresh task block with a creation stamp, a placeholder for
    /// planning notes and an empty steps section.
    pub fn new(title: impl Into<String>, created: &str) -> Self {
        let text = |s: &str| TaskLine::Text(s.to_string());
        Self {
            title: title.into(),
            priority: None,
            lines: vec![
                text(""),
                TaskLine::Text(format!("{CREATED_PREFIX}{created}")),
                text(""),
                TaskLine::Section(NOTES_SECTION.to_string()),
                text(""),
                text(NOTES_PLACEHOLDER),
                text(""),
                TaskLine::Section(STEPS_SECTION.to_string()),
                text(""),
            ],
            heading_raw: None,
        }
    }

    /// Creation stamp, if the block carries one.
    pub fn created(&self) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            TaskLine::Text(text) => text.strip_prefix(CREATED_PREFIX),
            _ => None,
        })
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.lines.iter().filter_map(TaskLine::as_step)
    }

    /// Locates a step and returns its line index.
    ///
    /// An exact text match wins; otherwise the first step (top-down) whose
    /// text starts with `text` is returned. A priority glyph on `text` is
    /// tried as written first, then stripped, since stored step text never
    /// carries one.
    pub fn find_step(&self, text: &str) -> Option<usize> {
        let (bare, _) = Priority::split_step_tag(text);
        let indexed = || {
            self.lines
                .iter()
                .enumerate()
                .filter_map(|(i, line)| line.as_step().map(|step| (i, step)))
        };
        indexed()
            .find(|(_, step)| step.text == text)
            .or_else(|| indexed().find(|(_, step)| step.text == bare))
            .or_else(|| indexed().find(|(_, step)| step.text.starts_with(text)))
            .or_else(|| indexed().find(|(_, step)| step.text.starts_with(bare)))
            .map(|(i, _)| i)
    }

    /// Mutable access to the step at line `index`.
    pub(crate) fn step_at_mut(&mut self, index: usize) -> Option<&mut Step> {
        match self.lines.get_mut(index) {
            Some(TaskLine::Step(step)) => Some(step),
            _ => None,
        }
    }

    /// Line index of the `### <name>` heading.
    pub fn section(&self, name: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| matches!(line, TaskLine::Section(s) if s == name))
    }

    /// Index one past the last line belonging to the section at `heading`.
    pub(crate) fn section_end(&self, heading: usize) -> usize {
        self.lines
            .iter()
            .skip(heading + 1)
            .position(|line| matches!(line, TaskLine::Section(_)))
            .map_or(self.lines.len(), |offset| heading + 1 + offset)
    }

    /// Planning notes text with surrounding blank lines removed.
    pub fn planning_notes(&self) -> Option<String> {
        let start = self.section(NOTES_SECTION)?;
        let end = self.section_end(start);
        let notes: Vec<&str> = self.lines[start + 1..end]
            .iter()
            .filter_map(|line| match line {
                TaskLine::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        Some(notes.join("\n").trim_matches('\n').to_string())
    }

    pub(crate) fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
        self.heading_raw = None;
    }

    pub(crate) fn ends_with_blank(&self) -> bool {
        self.lines.last().is_some_and(TaskLine::is_blank)
    }

    /// Ensures the block ends with a blank line separating it from whatever
    /// follows.
    pub(crate) fn ensure_trailing_blank(&mut self) {
        if !self.ends_with_blank() {
            self.lines.push(TaskLine::Text(String::new()));
        }
    }

    /// Collapses a run of trailing blank lines down to one.
    pub(crate) fn collapse_trailing_blanks(&mut self) {
        while self.lines.len() >= 2
            && self.lines[self.lines.len() - 1].is_blank()
            && self.lines[self.lines.len() - 2].is_blank()
        {
            self.lines.pop();
        }
    }
}
