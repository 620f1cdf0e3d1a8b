use serde::Serialize;
use time::OffsetDateTime;

use crate::id::TaskId;

/// A single todo entry.
///
/// Fields are read-only outside the crate: the text and completion flag
/// change only through [`TaskList`](crate::TaskList), and `id` and
/// `created_at` never change at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl Task {
    pub(crate) fn new(text: String, created_at: OffsetDateTime) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            created_at,
        }
    }

    /// Identifier assigned at creation.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Committed text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task is done.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Creation timestamp in UTC.
    #[must_use]
    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub(crate) const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new("Buy milk".into(), datetime!(2024-05-01 12:00 UTC));
        assert_eq!(task.text(), "Buy milk");
        assert!(!task.is_completed());
        assert_eq!(task.created_at(), datetime!(2024-05-01 12:00 UTC));
    }

    #[test]
    fn serializes_timestamp_as_rfc3339() {
        let task = Task::new("Write report".into(), datetime!(2024-05-01 12:30:15 UTC));
        let value = serde_json::to_value(&task).unwrap_or_else(|err| panic!("task must serialize: {err}"));
        assert_eq!(value["text"], "Write report");
        assert_eq!(value["completed"], false);
        assert_eq!(value["created_at"], "2024-05-01T12:30:15Z");
        assert_eq!(value["id"], task.id().to_string());
    }
}
