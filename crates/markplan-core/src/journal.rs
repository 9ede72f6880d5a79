//! In-memory thought journal.
//!
//! A process-lifetime, append-only log of thought / plan / action records.
//! Numbers are chosen by the caller and are not required to be unique;
//! lookups return the first entry with a given number.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use jiff::Timestamp;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{display::Thoughts, error::Result, params::RecordThought};

/// One recorded thought.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtEntry {
    pub thought_number: String,
    pub thought: String,
    pub plan: String,
    pub action: String,
    pub timestamp: Timestamp,
}

/// Answer to a successful [`ThoughtJournal::record`].
#[derive(Debug, Clone, PartialEq)]
pub struct ThoughtReceipt {
    /// The stored entry
    pub entry: ThoughtEntry,
    /// Number of entries in the journal after this one was added
    pub count: usize,
}

/// Thread-safe journal of thoughts, shared by reference.
#[derive(Debug, Default)]
pub struct ThoughtJournal {
    entries: RwLock<Vec<ThoughtEntry>>,
}

impl ThoughtJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a thought stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if any field is empty.
    pub fn record(&self, params: &RecordThought) -> Result<ThoughtReceipt> {
        params.validate()?;

        let entry = ThoughtEntry {
            thought_number: params.thought_number.clone(),
            thought: params.thought.clone(),
            plan: params.plan.clone(),
            action: params.action.clone(),
            timestamp: Timestamp::now(),
        };

        let count = {
            let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
            entries.push(entry.clone());
            entries.len()
        };

        debug!(
            "Thought [{}]: thought={}, plan={}, action={}",
            entry.thought_number, entry.thought, entry.plan, entry.action
        );

        Ok(ThoughtReceipt { entry, count })
    }

    /// Snapshot of all entries in recording order.
    pub fn entries(&self) -> Thoughts {
        Thoughts(self.read().clone())
    }

    /// First entry recorded under `thought_number`.
    pub fn get(&self, thought_number: &str) -> Option<ThoughtEntry> {
        self.read()
            .iter()
            .find(|entry| entry.thought_number == thought_number)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        info!("Thought journal cleared");
    }

    /// Numbered summary of every thought.
    pub fn summary(&self) -> String {
        self.entries().to_string()
    }

    /// All entries as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.read())?)
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<ThoughtEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }
}
