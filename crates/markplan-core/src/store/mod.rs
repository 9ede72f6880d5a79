//! File-backed plan storage.
//!
//! The plan lives in a single markdown file. Reads return the raw text;
//! writes go to a sibling temp file that is renamed over the plan, so a
//! reader never sees a half-written document.
//!
//! The store does no locking of its own. Callers serialize access; the
//! [`Planner`](crate::Planner) holds its lock around every
//! read-modify-write cycle.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    display::LocalDateTime,
    error::{FileSystemResultExt, Result},
    markdown::{parse, render},
    models::PlanDocument,
};

/// Handle on the plan file.
#[derive(Debug, Clone)]
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    /// Opens the plan file, creating it (and its parent directory) with a
    /// fresh preamble when it does not exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).fs_context(parent)?;
            }
            let doc = PlanDocument::new(&LocalDateTime::now());
            store.write(&render(&doc))?;
            debug!("Initialized plan file at {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).fs_context(&self.path)
    }

    pub fn write(&self, text: &str) -> Result<()> {
        let tmp = self.temp_path();
        fs::write(&tmp, text).fs_context(&tmp)?;
        fs::rename(&tmp, &self.path).fs_context(&self.path)
    }

    pub fn load(&self) -> Result<PlanDocument> {
        Ok(parse(&self.read()?))
    }

    pub fn save(&self, doc: &PlanDocument) -> Result<()> {
        self.write(&render(doc))
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "plan.md".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}
