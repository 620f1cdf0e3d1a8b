use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tasklist_core::Task;

use super::super::constants::{ACTIVE_MARKER, COMPLETED_MARKER, TASK_LIST_HIGHLIGHT_SYMBOL};
use super::super::view::{Focus, Ui};
use super::util::{cursor_in_block, display_width, truncate_with_ellipsis};
use crate::format::created_date;

/// Columns taken by the date suffix, including its leading gap.
const DATE_COLUMNS: usize = 12;

impl Ui {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        let editing = if self.focus == Focus::Editing {
            self.app.editing_task()
        } else {
            None
        };
        let text_width = usize::from(area.width)
            .saturating_sub(2 + usize::from(display_width(TASK_LIST_HIGHLIGHT_SYMBOL)))
            .saturating_sub(usize::from(display_width(COMPLETED_MARKER)) + 1)
            .saturating_sub(DATE_COLUMNS);

        let items: Vec<ListItem<'_>> = if self.app.has_visible_tasks() {
            self.app
                .visible_tasks()
                .map(|task| {
                    if editing == Some(task.id()) {
                        self.editing_row(task)
                    } else {
                        task_row(task, text_width)
                    }
                })
                .collect()
        } else {
            let message = self.app.filter().empty_message();
            vec![ListItem::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )))]
        };

        let title = format!("Tasks ({})", self.app.filter().label());
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if self.app.has_visible_tasks() {
            state.select(Some(self.app.selected_index()));
        }
        f.render_stateful_widget(list, area, &mut state);

        if let Some(id) = editing
            && let Some((index, task)) = self
                .app
                .visible_tasks()
                .enumerate()
                .find(|(_, task)| task.id() == id)
        {
            let row = u16::try_from(index.saturating_sub(state.offset())).unwrap_or(u16::MAX);
            let column = display_width(TASK_LIST_HIGHLIGHT_SYMBOL)
                .saturating_add(display_width(marker(task.is_completed())))
                .saturating_add(1)
                .saturating_add(display_width(self.input.before_cursor()));
            f.set_cursor_position(cursor_in_block(area, column, row));
        }
    }

    fn editing_row(&self, task: &Task) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::raw(format!("{} ", marker(task.is_completed()))),
            Span::styled(
                self.input.value().to_owned(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
            ),
        ]))
    }
}

fn task_row(task: &Task, text_width: usize) -> ListItem<'static> {
    let text_style = if task.is_completed() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    let text = truncate_with_ellipsis(task.text(), text_width).into_owned();
    ListItem::new(Line::from(vec![
        Span::raw(format!("{} ", marker(task.is_completed()))),
        Span::styled(text, text_style),
        Span::styled(
            format!("  {}", created_date(task.created_at())),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

const fn marker(completed: bool) -> &'static str {
    if completed { COMPLETED_MARKER } else { ACTIVE_MARKER }
}
