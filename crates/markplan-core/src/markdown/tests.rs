use super::*;
use crate::models::{Priority, StepState, TaskLine};

const SAMPLE: &str = "# Task Plan

Created on: 2025-01-01 09:00:00

## Steps

## Ship release [🔴]

Created: 2025-01-01 09:05:00

### Planning Notes

Cut from main after the freeze.

### Steps

[✅] Tag the commit
[ ] 🟠 Publish crates
    - ⚠️ ISSUE: registry timeout (✓ RESOLVED: retried)
    - ⚠️ ISSUE: docs build failed
[x] Announce

## Cleanup

Created: 2025-01-02 10:00:00

### Steps

[ ] Remove branches 🟢
";

#[test]
fn test_parse_render_is_byte_identical() {
    assert_eq!(render(&parse(SAMPLE)), SAMPLE);
}

#[test]
fn test_round_trip_without_trailing_newline() {
    let text = SAMPLE.trim_end_matches('\n');
    assert_eq!(render(&parse(text)), text);
}

#[test]
fn test_round_trip_degenerate_inputs() {
    for text in ["", "\n", "\n\n", "hello", "## Steps\n", "## Steps\n## Steps\n"] {
        assert_eq!(render(&parse(text)), text, "input {text:?}");
    }
}

#[test]
fn test_round_trip_crlf_and_odd_lines() {
    let text = "# Task Plan\r\n\r\n## A\r\n[ ] one\r\n    - ⚠️ ISSUE: dangling\r\n[?] odd\n";
    assert_eq!(render(&parse(text)), text);
}

#[test]
fn test_preamble_marker_is_not_a_task() {
    let doc = parse(SAMPLE);
    assert_eq!(doc.tasks.len(), 2);
    assert_eq!(doc.preamble.last().map(String::as_str), Some(""));
    assert!(doc.preamble.iter().any(|line| line == PREAMBLE_MARKER));
}

#[test]
fn test_second_steps_heading_is_a_task() {
    let doc = parse("## Steps\n\n## Steps\n");
    assert_eq!(doc.tasks.len(), 1);
    assert_eq!(doc.tasks[0].title, "Steps");
}

#[test]
fn test_task_heading_priority_tag() {
    let doc = parse(SAMPLE);
    assert_eq!(doc.tasks[0].title, "Ship release");
    assert_eq!(doc.tasks[0].priority, Some(Priority::High));
    assert_eq!(doc.tasks[1].title, "Cleanup");
    assert_eq!(doc.tasks[1].priority, None);
}

#[test]
fn test_sub_headings_are_sections() {
    let doc = parse(SAMPLE);
    let task = &doc.tasks[0];
    assert!(task.section(NOTES_SECTION).is_some());
    assert!(task.section(STEPS_SECTION).is_some());
    assert_eq!(
        task.planning_notes().as_deref(),
        Some("Cut from main after the freeze.")
    );
    assert_eq!(task.created(), Some("2025-01-01 09:05:00"));
}

#[test]
fn test_steps_and_issues() {
    let doc = parse(SAMPLE);
    let steps: Vec<_> = doc.tasks[0].steps().collect();
    assert_eq!(steps.len(), 3);

    assert_eq!(steps[0].text, "Tag the commit");
    assert_eq!(steps[0].state, StepState::Complete);

    assert_eq!(steps[1].text, "Publish crates");
    assert_eq!(steps[1].priority, Some(Priority::Medium));
    assert_eq!(steps[1].issues.len(), 2);
    assert_eq!(steps[1].issues[0].description, "registry timeout");
    assert_eq!(steps[1].issues[0].resolution.as_deref(), Some("retried"));
    assert!(!steps[1].issues[1].is_resolved());

    assert_eq!(steps[2].state, StepState::Complete);

    let trailing = doc.tasks[1].steps().next().expect("step");
    assert_eq!(trailing.text, "Remove branches");
    assert_eq!(trailing.priority, Some(Priority::Low));
}

#[test]
fn test_issue_without_step_is_text() {
    let doc = parse("## A\n\n    - ⚠️ ISSUE: orphan\n");
    assert!(matches!(&doc.tasks[0].lines[1], TaskLine::Text(t) if t.contains("orphan")));
}

#[test]
fn test_edited_lines_are_normalized() {
    let mut doc = parse(SAMPLE);
    let index = doc.tasks[1].find_step("Remove").expect("step");
    let step = doc.tasks[1].step_at_mut(index).expect("step");
    step.complete();

    let text = render(&doc);
    assert!(text.contains("[✅] 🟢 Remove branches\n"));
    // untouched lines keep their original spelling
    assert!(text.contains("[x] Announce\n"));
}

#[test]
fn test_task_display_is_its_block() {
    let doc = parse(SAMPLE);
    let block = doc.tasks[1].to_string();
    assert!(block.starts_with("## Cleanup\n"));
    assert!(block.ends_with("[ ] Remove branches 🟢\n"));
}

#[test]
fn test_new_document_preamble() {
    let doc = crate::models::PlanDocument::new("2025-01-01 09:00:00");
    assert_eq!(
        render(&doc),
        "# Task Plan\n\nCreated on: 2025-01-01 09:00:00\n\n## Steps\n\n"
    );
}
