//! In-memory task list and per-item edit sessions for tasklist.

/// Per-item inline edit state machine.
pub mod edit;
/// Error types.
pub mod error;
/// View selector over the task collection.
pub mod filter;
/// Identifier types.
pub mod id;
/// Ordered task collection and derived views.
pub mod store;
/// Task entries.
pub mod task;

pub use crate::edit::{EditState, ItemEditor, SaveOutcome};
pub use crate::error::TaskListError;
pub use crate::filter::Filter;
pub use crate::id::TaskId;
pub use crate::store::{Counts, TaskList};
pub use crate::task::Task;
