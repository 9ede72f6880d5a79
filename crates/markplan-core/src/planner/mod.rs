//! High-level planner API over the plan file.
//!
//! The [`Planner`] is the entry point used by the CLI and the MCP server.
//! Every operation runs one read-modify-write cycle of the plan file on the
//! blocking thread pool while holding the planner's lock:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │     Edits       │    │     Store       │
//! │ (plan_ops,      │───▶│ (PlanDocument   │───▶│  (plan file)    │
//! │  step_ops)      │    │  methods)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!    async + locking       pure, in memory        read / write
//! ```
//!
//! The file is written only when the rendered document differs from what was
//! read, so lookups and rejected edits leave it byte-for-byte unchanged.
//!
//! # Usage
//!
//! ```rust
//! use markplan_core::{params::{AddStep, CreatePlan}, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_plan_path(Some("output/plan.md"))
//!     .build()
//!     .await?;
//!
//! let created = planner
//!     .create_plan(&CreatePlan {
//!         task_description: "Release 1.0".to_string(),
//!     })
//!     .await?;
//! println!("{created}");
//!
//! let added = planner
//!     .add_step(&AddStep {
//!         step_description: "Tag the commit".to_string(),
//!         task_title: None,
//!     })
//!     .await?;
//! println!("{added}");
//! # Ok(())
//! # }
//! ```

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use log::debug;
use tokio::task;

use crate::{
    error::{PlannerError, Result},
    markdown::{parse, render},
    models::PlanDocument,
    store::PlanStore,
};

pub mod builder;
pub mod plan_ops;
pub mod step_ops;


pub use builder::PlannerBuilder;

/// Main planner interface; cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct Planner {
    pub(crate) plan_path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl Planner {
    pub(crate) fn new(plan_path: PathBuf) -> Self {
        Self {
            plan_path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing plan file.
    pub fn plan_path(&self) -> &Path {
        &self.plan_path
    }

    /// Runs `edit` against the current document under the lock and persists
    /// the result when it changed the text.
    pub(crate) async fn with_document<F, R>(&self, operation: &'static str, edit: F) -> Result<R>
    where
        F: FnOnce(&mut PlanDocument, &Path) -> R + Send + 'static,
        R: Send + 'static,
    {
        let path = self.plan_path.clone();
        let lock = Arc::clone(&self.lock);

        task::spawn_blocking(move || -> Result<R> {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

            let store = PlanStore::open(&path)?;
            let text = store.read()?;
            let mut doc = parse(&text);
            let answer = edit(&mut doc, &path);

            let rendered = render(&doc);
            if rendered != text {
                store.write(&rendered)?;
                debug!("{operation}: wrote {}", path.display());
            } else {
                debug!("{operation}: plan unchanged");
            }
            Ok(answer)
        })
        .await
        .map_err(|e| PlannerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
