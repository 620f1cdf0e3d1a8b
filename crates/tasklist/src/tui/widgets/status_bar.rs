use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use tasklist_core::Filter;

use super::super::view::{Message, Ui};
use crate::format::{completion_message, counts_summary};

impl Ui {
    pub(in crate::tui) fn draw_status(&self, f: &mut Frame<'_>, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::status_layout_constraints())
            .split(area);

        self.draw_summary(f, rows[0]);

        let instructions = Paragraph::new(self.instructions())
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, rows[1]);

        let message = Paragraph::new(self.status_text())
            .block(Block::default().title("Status").borders(Borders::ALL))
            .style(self.status_style());
        f.render_widget(message, rows[2]);
    }

    pub(in crate::tui) const fn status_layout_constraints() -> [Constraint; 3] {
        [
            Constraint::Length(Self::SUMMARY_HEIGHT),
            Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
            Constraint::Length(Self::STATUS_MESSAGE_HEIGHT),
        ]
    }

    fn draw_summary(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(Self::filter_tabs_width())])
            .split(inner);

        f.render_widget(Paragraph::new(self.summary_line()), columns[0]);

        let selected = Filter::ALL
            .iter()
            .position(|filter| *filter == self.app.filter())
            .unwrap_or_default();
        let tabs = Tabs::new(Filter::ALL.iter().map(|filter| filter.label()))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, columns[1]);
    }

    /// Counts plus the completion note when any task is done.
    pub(in crate::tui) fn summary_line(&self) -> Line<'static> {
        let counts = self.app.list().counts();
        let mut spans = vec![Span::raw(counts_summary(counts))];
        if !self.app.list().is_empty()
            && let Some(note) = completion_message(counts)
        {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(note, Style::default().fg(Color::Green)));
        }
        Line::from(spans)
    }

    fn filter_tabs_width() -> u16 {
        // " label " per tab plus one divider between tabs.
        let labels: usize = Filter::ALL.iter().map(|filter| filter.label().len() + 2).sum();
        u16::try_from(labels + Filter::ALL.len() - 1).unwrap_or(u16::MAX)
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        self.keybindings.generate_help_text(self.view_type())
    }

    fn status_text(&self) -> Cow<'_, str> {
        self.message
            .as_ref()
            .map_or(Cow::Borrowed(""), |msg| Cow::Borrowed(msg.text.as_str()))
    }

    fn status_style(&self) -> Style {
        self.message.as_ref().map_or_else(Style::default, Message::style)
    }
}
