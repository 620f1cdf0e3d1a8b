use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::filter::Filter;
use crate::id::TaskId;
use crate::task::Task;

/// Number of active and completed tasks in the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    /// Tasks with `completed == false`.
    pub active: usize,
    /// Tasks with `completed == true`.
    pub completed: usize,
}

impl Counts {
    /// Total number of tasks.
    #[must_use]
    pub const fn total(self) -> usize {
        self.active + self.completed
    }
}

/// Ordered task collection plus the session-wide filter.
///
/// Tasks are kept newest first. Every operation is total: blank text and
/// unknown ids are ignored rather than reported as errors, and the return
/// values only tell the caller whether anything changed.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskList {
    /// Empty list with the `all` filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Trim `raw` and prepend a new task. Blank input is ignored.
    ///
    /// Returns the id of the created task, or `None` when the input was rejected.
    pub fn add(&mut self, raw: &str) -> Option<TaskId> {
        self.add_at(raw, OffsetDateTime::now_utc())
    }

    /// Same as [`add`](Self::add) with an explicit creation timestamp.
    pub fn add_at(&mut self, raw: &str, created_at: OffsetDateTime) -> Option<TaskId> {
        let text = trim_task_text(raw);
        if text.is_empty() {
            debug!("ignoring blank task text");
            return None;
        }
        let task = Task::new(text.to_owned(), created_at);
        let id = task.id();
        self.tasks.insert(0, task);
        debug!(%id, "task added");
        Some(id)
    }

    /// Flip the completion flag of `id`. Returns `false` when no such task exists.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(task) = self.get_mut(id) else {
            debug!(%id, "toggle ignored for unknown task");
            return false;
        };
        task.toggle();
        debug!(%id, completed = task.is_completed(), "task toggled");
        true
    }

    /// Remove `id` from the collection, returning the removed task.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let Some(index) = self.position(id) else {
            debug!(%id, "remove ignored for unknown task");
            return None;
        };
        debug!(%id, "task removed");
        Some(self.tasks.remove(index))
    }

    /// Replace the text of `id` verbatim.
    ///
    /// The text is neither trimmed nor validated; callers such as
    /// [`ItemEditor`](crate::ItemEditor) are expected to do that first.
    pub fn edit(&mut self, id: TaskId, text: impl Into<String>) -> bool {
        let Some(task) = self.get_mut(id) else {
            debug!(%id, "edit ignored for unknown task");
            return false;
        };
        task.set_text(text.into());
        debug!(%id, "task text replaced");
        true
    }

    /// Select the active filter.
    pub const fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Currently active filter.
    #[must_use]
    pub const fn filter(&self) -> Filter {
        self.filter
    }

    /// Tasks passing the active filter, in collection order.
    pub fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        let filter = self.filter;
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Active/completed counts over the whole collection, ignoring the filter.
    #[must_use]
    pub fn counts(&self) -> Counts {
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        Counts {
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Every task, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Whether a task with `id` exists.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Number of tasks in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }
}

/// Trim whitespace and byte order marks from both ends of task text.
pub(crate) fn trim_task_text(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}
