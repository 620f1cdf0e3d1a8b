use tasklist_core::{Filter, ItemEditor, SaveOutcome, Task, TaskId, TaskList};

/// Application state shared between the TUI event loop and rendering.
///
/// Owns the list, the selection over its visible tasks and at most one open
/// inline editor. Selection is tracked by position but re-resolved by id after
/// every change so it follows the task across filter switches.
pub(super) struct App {
    list: TaskList,
    /// Index into the visible tasks.
    selected: usize,
    editor: Option<ItemEditor>,
}

impl App {
    pub(super) fn new(filter: Filter) -> Self {
        let mut list = TaskList::new();
        list.set_filter(filter);
        Self {
            list,
            selected: 0,
            editor: None,
        }
    }

    pub(super) const fn list(&self) -> &TaskList {
        &self.list
    }

    pub(super) const fn filter(&self) -> Filter {
        self.list.filter()
    }

    pub(super) fn visible_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.list.visible_tasks()
    }

    pub(super) fn visible_len(&self) -> usize {
        self.list.visible_tasks().count()
    }

    pub(super) fn has_visible_tasks(&self) -> bool {
        self.list.visible_tasks().next().is_some()
    }

    pub(super) const fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selected task (if any).
    pub(super) fn selected_task(&self) -> Option<&Task> {
        self.list.visible_tasks().nth(self.selected)
    }

    /// Identifier of the selected task (if any).
    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(Task::id)
    }

    /// Move selection to the next task.
    pub(super) fn select_next(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    /// Move selection to the previous task.
    pub(super) const fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn set_filter(&mut self, filter: Filter) {
        if self.list.filter() == filter {
            return;
        }
        let keep_id = self.selected_task_id();
        self.list.set_filter(filter);
        self.reselect(keep_id);
    }

    /// Add a task and select it when it is visible under the current filter.
    pub(super) fn add_task(&mut self, raw: &str) -> Option<TaskId> {
        let keep_id = self.selected_task_id();
        let id = self.list.add(raw)?;
        let filter = self.list.filter();
        let preferred = if self.list.get(id).is_some_and(|task| filter.matches(task)) {
            Some(id)
        } else {
            keep_id
        };
        self.reselect(preferred);
        Some(id)
    }

    /// Toggle the selected task. Returns its new completion state.
    pub(super) fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_task_id()?;
        self.list.toggle(id);
        let completed = self.list.get(id).map(Task::is_completed);
        self.reselect(Some(id));
        completed
    }

    /// Delete the selected task, closing its editor if one is open.
    pub(super) fn delete_selected(&mut self) -> Option<Task> {
        let id = self.selected_task_id()?;
        let removed = self.list.remove(id)?;
        if self.editor.as_ref().is_some_and(|editor| editor.task() == id) {
            self.editor = None;
        }
        self.reselect(None);
        Some(removed)
    }

    /// Open the inline editor on the selected task and return the initial draft.
    pub(super) fn begin_edit(&mut self) -> Option<String> {
        let id = self.selected_task_id()?;
        let mut editor = ItemEditor::new(id);
        if !editor.begin(&self.list) {
            return None;
        }
        let draft = editor.draft().map(str::to_owned);
        self.editor = Some(editor);
        draft
    }

    pub(super) fn editing_task(&self) -> Option<TaskId> {
        self.editor
            .as_ref()
            .filter(|editor| editor.is_editing())
            .map(ItemEditor::task)
    }

    pub(super) fn update_draft(&mut self, text: &str) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_draft(text);
        }
    }

    /// Commit the open draft. The editor stays open only for a blank draft.
    pub(super) fn save_edit(&mut self) -> SaveOutcome {
        let Some(editor) = self.editor.as_mut() else {
            return SaveOutcome::NotEditing;
        };
        let id = editor.task();
        let outcome = editor.save(&mut self.list);
        if outcome != SaveOutcome::EmptyDraft {
            self.editor = None;
        }
        self.reselect(Some(id));
        outcome
    }

    pub(super) fn cancel_edit(&mut self) {
        if let Some(mut editor) = self.editor.take() {
            editor.cancel();
        }
    }

    fn reselect(&mut self, preferred: Option<TaskId>) {
        let visible: Vec<TaskId> = self.list.visible_tasks().map(Task::id).collect();
        if visible.is_empty() {
            self.selected = 0;
            return;
        }
        if let Some(id) = preferred
            && let Some(index) = visible.iter().position(|candidate| *candidate == id)
        {
            self.selected = index;
            return;
        }
        self.selected = self.selected.min(visible.len() - 1);
    }
}
