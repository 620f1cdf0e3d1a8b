use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tasklist_core::SaveOutcome;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn open_add_input(&mut self) {
        self.input.clear();
        self.focus = Focus::Adding;
    }

    pub(in crate::tui) fn open_editor(&mut self) {
        match self.app.begin_edit() {
            Some(draft) => {
                self.input.set(draft);
                self.focus = Focus::Editing;
            }
            None => self.error("No task selected"),
        }
    }

    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) {
        match self.keybindings.action_for(ViewType::Input, &key) {
            Some(Action::Submit) => {
                self.submit_input();
                return;
            }
            Some(Action::Cancel) => {
                self.close_input();
                return;
            }
            _ => {}
        }

        if !self.edit_line(key) {
            return;
        }
        if self.focus == Focus::Editing {
            self.app.update_draft(self.input.value());
        }
    }

    /// Apply a line-editing key. Returns whether the buffer may have changed.
    fn edit_line(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.insert_char(ch);
                true
            }
            KeyCode::Backspace => {
                self.input.backspace();
                true
            }
            KeyCode::Delete => {
                self.input.delete();
                true
            }
            KeyCode::Left => {
                self.input.move_left();
                false
            }
            KeyCode::Right => {
                self.input.move_right();
                false
            }
            KeyCode::Home => {
                self.input.move_home();
                false
            }
            KeyCode::End => {
                self.input.move_end();
                false
            }
            _ => false,
        }
    }

    fn submit_input(&mut self) {
        match self.focus {
            Focus::Adding => self.submit_new_task(),
            Focus::Editing => self.submit_edit(),
            Focus::List => {}
        }
    }

    fn submit_new_task(&mut self) {
        if self.app.add_task(self.input.value()).is_some() {
            self.info("Task added");
            self.input.clear();
        }
    }

    fn submit_edit(&mut self) {
        self.app.update_draft(self.input.value());
        match self.app.save_edit() {
            SaveOutcome::Committed => {
                self.info("Task updated");
                self.finish_input();
            }
            SaveOutcome::EmptyDraft => self.error("Task text cannot be empty"),
            SaveOutcome::TaskMissing => {
                self.error("Task no longer exists");
                self.finish_input();
            }
            SaveOutcome::NotEditing => self.finish_input(),
        }
    }

    fn close_input(&mut self) {
        if self.focus == Focus::Editing {
            self.app.cancel_edit();
        }
        self.finish_input();
    }

    fn finish_input(&mut self) {
        self.input.clear();
        self.focus = Focus::List;
    }
}
