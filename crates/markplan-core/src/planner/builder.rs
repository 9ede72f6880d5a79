//! Builder for creating and configuring Planner instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Planner;
use crate::error::{FileSystemResultExt, Result};

/// Plan file used when no path is configured, relative to the working
/// directory.
pub const DEFAULT_PLAN_PATH: &str = "output/plan.md";

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone, Default)]
pub struct PlannerBuilder {
    plan_path: Option<PathBuf>,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom plan file path.
    ///
    /// If not specified, uses [`DEFAULT_PLAN_PATH`].
    pub fn with_plan_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plan_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured planner instance.
    ///
    /// The plan file itself is created lazily by the first operation.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the parent directory cannot be
    /// created.
    pub async fn build(self) -> Result<Planner> {
        let plan_path = self
            .plan_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAN_PATH));

        if let Some(parent) = plan_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        info!("Using plan file {}", plan_path.display());
        Ok(Planner::new(plan_path))
    }
}
