//! Status enumerations for steps and priorities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Completion state of a step, rendered as a checkbox marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Step is still open (`[ ]`)
    #[default]
    Incomplete,

    /// Step has been completed (`[✅]`)
    Complete,
}

impl StepState {
    /// Checkbox marker written in front of the step text.
    pub fn marker(&self) -> &'static str {
        match self {
            StepState::Incomplete => "[ ]",
            StepState::Complete => "[✅]",
        }
    }

    /// Parse a checkbox marker. `[x]` and `[X]` are accepted as complete for
    /// hand-edited plans.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "[ ]" => Some(StepState::Incomplete),
            "[✅]" | "[x]" | "[X]" => Some(StepState::Complete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepState::Incomplete => "incomplete",
            StepState::Complete => "complete",
        }
    }
}

/// Priority tag for a task or a step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// All priorities, highest first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Glyph used in the plan file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use markplan_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.glyph(), "🔴");
    /// assert_eq!(Priority::Medium.glyph(), "🟠");
    /// assert_eq!(Priority::Low.glyph(), "🟢");
    /// ```
    pub fn glyph(&self) -> &'static str {
        match self {
            Priority::High => "🔴",
            Priority::Medium => "🟠",
            Priority::Low => "🟢",
        }
    }

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.glyph() == glyph)
    }

    /// Splits a `"<glyph> "` prefix or `" <glyph>"` suffix off step text.
    ///
    /// Text that would be left empty keeps its glyph.
    pub fn split_step_tag(text: &str) -> (&str, Option<Self>) {
        Self::ALL
            .into_iter()
            .find_map(|p| {
                let glyph = p.glyph();
                text.strip_prefix(glyph)
                    .and_then(|rest| rest.strip_prefix(' '))
                    .or_else(|| text.strip_suffix(glyph).and_then(|rest| rest.strip_suffix(' ')))
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest, Some(p)))
            })
            .unwrap_or((text, None))
    }

    /// Splits a `" [<glyph>]"` suffix off a task title.
    pub fn split_heading_tag(title: &str) -> (&str, Option<Self>) {
        Self::ALL
            .into_iter()
            .find_map(|p| {
                title
                    .strip_suffix(&format!(" [{}]", p.glyph()))
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (rest, Some(p)))
            })
            .unwrap_or((title, None))
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}
