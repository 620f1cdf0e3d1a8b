//! Error types for tasklist core values.

use thiserror::Error;

/// Errors raised while parsing core values from text.
///
/// List operations themselves never fail; these only surface at the edges
/// where filters arrive as strings.
#[derive(Error, Debug)]
pub enum TaskListError {
    /// Filter name is not one of `all`, `active`, `completed`.
    #[error("Unknown filter: {0} (expected all, active or completed)")]
    UnknownFilter(String),
}
