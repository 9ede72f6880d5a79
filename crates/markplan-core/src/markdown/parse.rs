//! Text to [`PlanDocument`].

use super::{
    ISSUE_PREFIX, PREAMBLE_MARKER, RESOLVED_CLOSE, RESOLVED_OPEN, SECTION_PREFIX, TASK_PREFIX,
};
use crate::models::{Issue, PlanDocument, Priority, Step, StepState, Task, TaskLine};

/// Parses plan text into a document.
///
/// # Examples
///
/// ```rust
/// use markplan_core::markdown::{parse, render};
///
/// let text = "# Task Plan\n\n## Steps\n\n## Release\n\n### Steps\n\n[ ] Tag\n";
/// let doc = parse(text);
/// assert_eq!(doc.tasks.len(), 1);
/// assert_eq!(doc.tasks[0].title, "Release");
/// assert_eq!(render(&doc), text);
/// ```
pub fn parse(text: &str) -> PlanDocument {
    let trailing_newline = text.ends_with('\n');
    let mut doc = PlanDocument {
        preamble: Vec::new(),
        tasks: Vec::new(),
        trailing_newline,
    };
    if text.is_empty() {
        return doc;
    }

    let body = text.strip_suffix('\n').unwrap_or(text);
    let mut marker_seen = false;

    for line in body.split('\n') {
        if let Some(rest) = line.strip_prefix(TASK_PREFIX) {
            if doc.tasks.is_empty() && !marker_seen && line == PREAMBLE_MARKER {
                marker_seen = true;
                doc.preamble.push(line.to_string());
            } else {
                doc.tasks.push(parse_heading(line, rest));
            }
            continue;
        }

        match doc.tasks.last_mut() {
            Some(task) => push_body_line(task, line),
            None => doc.preamble.push(line.to_string()),
        }
    }

    doc
}

fn parse_heading(line: &str, rest: &str) -> Task {
    let (title, priority) = Priority::split_heading_tag(rest);

    Task {
        title: title.to_string(),
        priority,
        lines: Vec::new(),
        heading_raw: Some(line.to_string()),
    }
}

fn push_body_line(task: &mut Task, line: &str) {
    if let Some(rest) = line.strip_prefix(ISSUE_PREFIX) {
        // Issue lines only attach to the step directly above them.
        if let Some(TaskLine::Step(step)) = task.lines.last_mut() {
            step.issues.push(parse_issue(line, rest));
            return;
        }
    }

    let parsed = if let Some(name) = line.strip_prefix(SECTION_PREFIX) {
        TaskLine::Section(name.to_string())
    } else if let Some(step) = parse_step(line) {
        TaskLine::Step(step)
    } else {
        TaskLine::Text(line.to_string())
    };
    task.lines.push(parsed);
}

fn parse_step(line: &str) -> Option<Step> {
    if !line.starts_with('[') {
        return None;
    }
    let close = line.find("] ")?;
    let state = StepState::from_marker(&line[..=close])?;
    let rest = &line[close + 2..];

    let (text, priority) = Priority::split_step_tag(rest);
    if text.is_empty() {
        return None;
    }

    Some(Step {
        text: text.to_string(),
        state,
        priority,
        issues: Vec::new(),
        raw: Some(line.to_string()),
    })
}

fn parse_issue(line: &str, rest: &str) -> Issue {
    let (description, resolution) = match rest.find(RESOLVED_OPEN) {
        Some(at) if rest.ends_with(RESOLVED_CLOSE) => (
            &rest[..at],
            Some(rest[at + RESOLVED_OPEN.len()..rest.len() - RESOLVED_CLOSE.len()].to_string()),
        ),
        _ => (rest, None),
    };

    Issue {
        description: description.to_string(),
        resolution,
        raw: Some(line.to_string()),
    }
}
