use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::constants::{ADD_PLACEHOLDER, APP_TAGLINE, APP_TITLE};
use super::super::view::{Focus, Ui};
use super::util::{cursor_in_block, display_width};

impl Ui {
    pub(in crate::tui) fn draw_header(f: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                APP_TITLE,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(APP_TAGLINE, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    pub(in crate::tui) fn draw_add_input(&self, f: &mut Frame<'_>, area: Rect) {
        let adding = self.focus == Focus::Adding;
        let content = if adding && !self.input.value().is_empty() {
            Span::raw(self.input.value())
        } else {
            Span::styled(ADD_PLACEHOLDER, Style::default().fg(Color::DarkGray))
        };
        let border_style = if adding {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(Line::from(content)).block(
            Block::default()
                .title("New task")
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, area);

        if adding {
            let column = display_width(self.input.before_cursor());
            f.set_cursor_position(cursor_in_block(area, column, 0));
        }
    }
}
