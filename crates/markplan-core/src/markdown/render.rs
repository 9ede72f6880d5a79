//! [`PlanDocument`] back to text.

use std::{borrow::Cow, fmt};

use super::{ISSUE_PREFIX, RESOLVED_CLOSE, RESOLVED_OPEN, SECTION_PREFIX, TASK_PREFIX};
use crate::models::{Issue, PlanDocument, Step, Task, TaskLine};

/// Renders the document to the text written to disk.
pub fn render(doc: &PlanDocument) -> String {
    doc.to_string()
}

fn heading_line(task: &Task) -> Cow<'_, str> {
    if let Some(raw) = &task.heading_raw {
        return Cow::Borrowed(raw);
    }
    match task.priority {
        Some(priority) => Cow::Owned(format!(
            "{TASK_PREFIX}{} [{}]",
            task.title,
            priority.glyph()
        )),
        None => Cow::Owned(format!("{TASK_PREFIX}{}", task.title)),
    }
}

fn step_line(step: &Step) -> Cow<'_, str> {
    if let Some(raw) = &step.raw {
        return Cow::Borrowed(raw);
    }
    match step.priority {
        Some(priority) => Cow::Owned(format!(
            "{} {} {}",
            step.state.marker(),
            priority.glyph(),
            step.text
        )),
        None => Cow::Owned(format!("{} {}", step.state.marker(), step.text)),
    }
}

fn issue_line(issue: &Issue) -> Cow<'_, str> {
    if let Some(raw) = &issue.raw {
        return Cow::Borrowed(raw);
    }
    match &issue.resolution {
        Some(note) => Cow::Owned(format!(
            "{ISSUE_PREFIX}{}{RESOLVED_OPEN}{note}{RESOLVED_CLOSE}",
            issue.description
        )),
        None => Cow::Owned(format!("{ISSUE_PREFIX}{}", issue.description)),
    }
}

fn task_lines<'a>(task: &'a Task, out: &mut Vec<Cow<'a, str>>) {
    out.push(heading_line(task));
    for line in &task.lines {
        match line {
            TaskLine::Text(text) => out.push(Cow::Borrowed(text)),
            TaskLine::Section(name) => out.push(Cow::Owned(format!("{SECTION_PREFIX}{name}"))),
            TaskLine::Step(step) => {
                out.push(step_line(step));
                out.extend(step.issues.iter().map(issue_line));
            }
        }
    }
}

/// A task renders as its block, one newline-terminated line each.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::new();
        task_lines(self, &mut lines);
        for line in lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<Cow<'_, str>> = self
            .preamble
            .iter()
            .map(|line| Cow::Borrowed(line.as_str()))
            .collect();
        for task in &self.tasks {
            task_lines(task, &mut lines);
        }

        f.write_str(&lines.join("\n"))?;
        if self.trailing_newline {
            f.write_str("\n")?;
        }
        Ok(())
    }
}
