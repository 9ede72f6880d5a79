//! Data models for the plan document.
//!
//! The plan file is parsed into these types by [`crate::markdown`], edited in
//! memory, and rendered back. Presentation of results lives in
//! [`crate::display`].
//!
//! # Structure
//!
//! ```text
//! PlanDocument
//! ├── preamble (title, creation stamp)
//! └── Task*            keyed by title, optional priority tag
//!     └── TaskLine*
//!         ├── Text     verbatim lines (notes, stamps, blanks)
//!         ├── Section  `### Planning Notes`, `### Steps`, ...
//!         └── Step     keyed by text, checkbox state, optional priority
//!             └── Issue*  open or resolved with a note
//! ```
//!
//! Every parsed step, issue and task heading remembers the line it was read
//! from. Lines that an edit does not touch are written back unchanged.
//!
//! # Examples
//!
//! ```rust
//! use markplan_core::models::{Priority, Step, Task};
//!
//! let task = Task::new("Ship release", "2025-01-01 09:00:00");
//! assert_eq!(task.created(), Some("2025-01-01 09:00:00"));
//! assert_eq!(task.steps().count(), 0);
//!
//! let step = Step::new("Tag the commit");
//! assert!(!step.is_complete());
//! assert_eq!(Priority::Low.glyph(), "🟢");
//! ```

pub mod document;
pub mod status;
pub mod step;
pub mod summary;
pub mod task;


pub use document::PlanDocument;
pub use status::{Priority, StepState};
pub use step::{Issue, Step};
pub use summary::CompletionReport;
pub use task::{Task, TaskLine};
