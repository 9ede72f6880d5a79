//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! operation results and collections get wrapper types here. All output is
//! plain markdown, rendered by the CLI's terminal renderer or returned as-is
//! over MCP.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Outcome & Wrap- │    │   Formatted     │
//! │  (Task, Step)   │───▶│  per Types      │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`results`]: [`Outcome`], the answer of every plan operation
//! - [`collections`]: [`Thoughts`], the journal summary
//! - [`datetime`]: timestamp formatting used in plan files
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::Thoughts;
pub use datetime::LocalDateTime;
pub use results::Outcome;
