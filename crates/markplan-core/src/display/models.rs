//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; the text here is what callers of
//! the CLI and the MCP tools read.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    journal::{ThoughtEntry, ThoughtReceipt},
    models::{CompletionReport, Priority, StepState},
};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CompletionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task '{}' completion status: \n- {} of {} steps completed ({:.1}%)\n",
            self.title,
            self.completed,
            self.total,
            self.percent()
        )?;

        if !self.remaining.is_empty() {
            write!(f, "\nRemaining steps:\n")?;
            for step in &self.remaining {
                writeln!(f, "- {step}")?;
            }
        }

        if self.is_finished() {
            write!(f, "\n🎉 All steps completed!")?;
        }

        Ok(())
    }
}

impl fmt::Display for ThoughtEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Thought [{}]", self.thought_number)?;
        writeln!(f)?;
        writeln!(f, "🤔 Thought:\n{}", self.thought)?;
        writeln!(f)?;
        writeln!(f, "📋 Plan:\n{}", self.plan)?;
        writeln!(f)?;
        writeln!(f, "🎯 Next action:\n{}", self.action)?;
        writeln!(f)?;
        write!(f, "⏰ Recorded at: {}", LocalDateTime(&self.timestamp))
    }
}

impl fmt::Display for ThoughtReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.entry)?;
        writeln!(f)?;
        write!(f, "📊 Thoughts recorded: {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(completed: usize, remaining: &[&str]) -> CompletionReport {
        CompletionReport {
            title: "Build".to_string(),
            completed,
            total: completed + remaining.len(),
            remaining: remaining.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_partial_completion() {
        assert_eq!(
            report(1, &["b"]).to_string(),
            "Task 'Build' completion status: \n- 1 of 2 steps completed (50.0%)\n\nRemaining steps:\n- b\n"
        );
    }

    #[test]
    fn test_full_completion() {
        assert_eq!(
            report(3, &[]).to_string(),
            "Task 'Build' completion status: \n- 3 of 3 steps completed (100.0%)\n\n🎉 All steps completed!"
        );
    }

    #[test]
    fn test_percent_has_one_decimal() {
        assert!(report(1, &["b", "c"])
            .to_string()
            .contains("1 of 3 steps completed (33.3%)"));
    }

    #[test]
    fn test_priority_and_state_names() {
        assert_eq!(Priority::Medium.to_string(), "medium");
        assert_eq!(StepState::Complete.to_string(), "complete");
    }
}
