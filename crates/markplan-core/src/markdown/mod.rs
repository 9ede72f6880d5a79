//! Plan file text format.
//!
//! The plan is a line-oriented markdown document:
//!
//! ```text
//! # Task Plan
//!
//! Created on: 2025-01-01 09:00:00
//!
//! ## Steps
//!
//! ## Ship release [🔴]
//!
//! Created: 2025-01-01 09:05:00
//!
//! ### Planning Notes
//!
//! Cut from main after the freeze.
//!
//! ### Steps
//!
//! [✅] Tag the commit
//! [ ] 🟠 Publish crates
//!     - ⚠️ ISSUE: registry timeout (✓ RESOLVED: retried)
//! ```
//!
//! The first `## Steps` line before any task belongs to the preamble. Every
//! other `## ` line opens a task; `### ` lines open sections inside it.
//!
//! [`parse`] never fails: anything it does not recognize is kept as text and
//! written back verbatim by [`render`].

mod parse;
mod render;

#[cfg(test)]
mod tests;

pub use parse::parse;
pub use render::render;

/// First line of a new plan file.
pub const DOCUMENT_TITLE: &str = "# Task Plan";
/// Prefix of the preamble creation stamp.
pub const CREATED_ON_PREFIX: &str = "Created on: ";
/// Legacy section marker closing the preamble.
pub const PREAMBLE_MARKER: &str = "## Steps";
/// Prefix of a task heading.
pub const TASK_PREFIX: &str = "## ";
/// Prefix of a section heading inside a task.
pub const SECTION_PREFIX: &str = "### ";
/// Prefix of a task creation stamp.
pub const CREATED_PREFIX: &str = "Created: ";
/// Name of the planning notes section.
pub const NOTES_SECTION: &str = "Planning Notes";
/// Name of the steps section.
pub const STEPS_SECTION: &str = "Steps";
/// Notes written into a freshly created task.
pub const NOTES_PLACEHOLDER: &str = "This is a preliminary analysis of the task.";
/// Prefix of an issue line, indented under its step.
pub const ISSUE_PREFIX: &str = "    - ⚠️ ISSUE: ";
/// Opens the resolution suffix of an issue line.
pub const RESOLVED_OPEN: &str = " (✓ RESOLVED: ";
/// Closes the resolution suffix of an issue line.
pub const RESOLVED_CLOSE: &str = ")";

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Escapes a notes line that would otherwise open a task, a section or a
/// step when the plan is read back.
pub(crate) fn escape_note_line(line: &str) -> String {
    if line.starts_with('#') || line.starts_with('[') {
        format!("\\{line}")
    } else {
        line.to_string()
    }
}
