use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tasklist_core::Filter;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::List => self.handle_task_list_key(key),
            Focus::Adding | Focus::Editing => self.handle_input_key(key),
        }
    }

    fn handle_task_list_key(&mut self, key: KeyEvent) {
        let Some(action) = self.keybindings.action_for(ViewType::TaskList, &key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Down => self.app.select_next(),
            Action::Up => self.app.select_prev(),
            Action::AddTask => self.open_add_input(),
            Action::Toggle => self.toggle_selected(),
            Action::EditTask => self.open_editor(),
            Action::DeleteTask => self.delete_selected(),
            Action::FilterAll => self.app.set_filter(Filter::All),
            Action::FilterActive => self.app.set_filter(Filter::Active),
            Action::FilterCompleted => self.app.set_filter(Filter::Completed),
            Action::NextFilter => self.app.set_filter(self.app.filter().next()),
            Action::Submit | Action::Cancel => {}
        }
    }

    fn toggle_selected(&mut self) {
        match self.app.toggle_selected() {
            Some(true) => self.info("Marked as done"),
            Some(false) => self.info("Marked as active"),
            None => self.error("No task selected"),
        }
    }

    fn delete_selected(&mut self) {
        match self.app.delete_selected() {
            Some(task) => self.info(format!("Deleted \"{}\"", task.text())),
            None => self.error("No task selected"),
        }
    }
}
