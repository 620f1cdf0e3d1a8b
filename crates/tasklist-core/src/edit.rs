use tracing::debug;

use crate::id::TaskId;
use crate::store::{TaskList, trim_task_text};

/// State of a single item's inline editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// Showing the committed text.
    #[default]
    Viewing,
    /// Inline editor open with an uncommitted draft.
    Editing {
        /// Text typed so far.
        draft: String,
    },
}

/// Result of [`ItemEditor::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Trimmed draft written to the list; editor is back to viewing.
    Committed,
    /// Draft was blank; nothing written and the editor stays open.
    EmptyDraft,
    /// Target task no longer exists; the session was closed without writing.
    TaskMissing,
    /// Editor was not editing.
    NotEditing,
}

/// Inline edit session for one task.
///
/// The editor never holds a reference to the list; every transition that
/// needs the committed text or writes it back takes the list explicitly.
#[derive(Debug, Clone)]
pub struct ItemEditor {
    task: TaskId,
    state: EditState,
}

impl ItemEditor {
    /// Editor for `task` in the viewing state.
    #[must_use]
    pub const fn new(task: TaskId) -> Self {
        Self {
            task,
            state: EditState::Viewing,
        }
    }

    /// Task this editor belongs to.
    #[must_use]
    pub const fn task(&self) -> TaskId {
        self.task
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &EditState {
        &self.state
    }

    /// Whether the inline editor is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    /// Draft text while editing.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft } => Some(draft),
            EditState::Viewing => None,
        }
    }

    /// Open the editor with the task's committed text as the draft.
    ///
    /// Returns `false` when already editing or when the task is gone.
    pub fn begin(&mut self, list: &TaskList) -> bool {
        if self.is_editing() {
            return false;
        }
        let Some(task) = list.get(self.task) else {
            debug!(task = %self.task, "edit requested for unknown task");
            return false;
        };
        self.state = EditState::Editing {
            draft: task.text().to_owned(),
        };
        true
    }

    /// Replace the draft. Ignored unless editing.
    pub fn set_draft(&mut self, text: impl Into<String>) -> bool {
        match &mut self.state {
            EditState::Editing { draft } => {
                *draft = text.into();
                true
            }
            EditState::Viewing => false,
        }
    }

    /// Commit the trimmed draft into `list`.
    pub fn save(&mut self, list: &mut TaskList) -> SaveOutcome {
        let EditState::Editing { draft } = &self.state else {
            return SaveOutcome::NotEditing;
        };
        let text = trim_task_text(draft);
        if text.is_empty() {
            debug!(task = %self.task, "blank draft not committed");
            return SaveOutcome::EmptyDraft;
        }
        let outcome = if list.edit(self.task, text) {
            SaveOutcome::Committed
        } else {
            SaveOutcome::TaskMissing
        };
        self.state = EditState::Viewing;
        outcome
    }

    /// Discard the draft and return to viewing. Returns `false` if not editing.
    pub fn cancel(&mut self) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.state = EditState::Viewing;
        true
    }

    /// Flip the task's completion flag through the list.
    pub fn toggle(&self, list: &mut TaskList) -> bool {
        list.toggle(self.task)
    }
}
