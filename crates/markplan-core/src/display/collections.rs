//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::journal::ThoughtEntry;

/// Newtype wrapper for displaying the thought journal as a numbered summary.
///
/// # Examples
///
/// ```rust
/// use markplan_core::display::Thoughts;
///
/// assert_eq!(Thoughts(vec![]).to_string(), "No thoughts recorded yet.");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Thoughts(pub Vec<ThoughtEntry>);

impl Thoughts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThoughtEntry> {
        self.0.iter()
    }
}

impl fmt::Display for Thoughts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No thoughts recorded yet.");
        }

        writeln!(f, "Thought summary ({} recorded):", self.0.len())?;
        for (i, entry) in self.0.iter().enumerate() {
            write!(f, "\n{}. [{}] {}\n", i + 1, entry.thought_number, entry.thought)?;
        }
        Ok(())
    }
}
