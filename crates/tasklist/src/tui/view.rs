use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
};

use super::app::App;
use super::constants::UI_MESSAGE_TTL_SECS;
use super::input::TextInput;
use crate::config::{KeyBindingsConfig, ViewType};

/// Which part of the screen receives key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task list.
    List,
    /// Typing a new task into the add input.
    Adding,
    /// Editing the selected task inline.
    Editing,
}

pub(super) struct Ui {
    pub(super) app: App,
    /// Line buffer shared by the add input and the inline editor.
    pub(super) input: TextInput,
    pub(super) focus: Focus,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    /// Keybindings configuration.
    pub(super) keybindings: KeyBindingsConfig,
}

impl Ui {
    pub(super) const HEADER_HEIGHT: u16 = 2;
    pub(super) const ADD_INPUT_HEIGHT: u16 = 3;
    pub(super) const LIST_MIN_HEIGHT: u16 = 5;
    pub(super) const SUMMARY_HEIGHT: u16 = 3;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;
    pub(super) const STATUS_MESSAGE_HEIGHT: u16 = 3;
    pub(super) const STATUS_FOOTER_HEIGHT: u16 =
        Self::SUMMARY_HEIGHT + Self::INSTRUCTIONS_HEIGHT + Self::STATUS_MESSAGE_HEIGHT;

    pub(super) fn new(app: App, keybindings: KeyBindingsConfig) -> Self {
        Self {
            app,
            input: TextInput::default(),
            focus: Focus::List,
            message: None,
            should_quit: false,
            keybindings,
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::HEADER_HEIGHT),
                Constraint::Length(Self::ADD_INPUT_HEIGHT),
                Constraint::Min(Self::LIST_MIN_HEIGHT),
                Constraint::Length(Self::STATUS_FOOTER_HEIGHT),
            ])
            .split(f.area());

        Self::draw_header(f, chunks[0]);
        self.draw_add_input(f, chunks[1]);
        self.draw_task_list(f, chunks[2]);
        self.draw_status(f, chunks[3]);
    }

    /// Keybinding view that currently receives key events.
    pub(super) const fn view_type(&self) -> ViewType {
        match self.focus {
            Focus::List => ViewType::TaskList,
            Focus::Adding | Focus::Editing => ViewType::Input,
        }
    }

    pub(super) fn info(&mut self, message: impl Into<String>) {
        self.message = Some(Message::info(message));
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
}

impl Message {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Info,
            created_at: Instant::now(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
            created_at: Instant::now(),
        }
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() >= ttl
    }
}
