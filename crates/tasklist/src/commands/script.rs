//! Line-oriented command scripts replayed against an in-memory list.

use std::num::NonZeroUsize;

use tasklist_core::{Filter, ItemEditor, SaveOutcome, TaskId, TaskList};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while parsing a script line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// First word is not a known command.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand {
        /// 1-based line number.
        line: usize,
        /// Offending command word.
        command: String,
    },

    /// Command is missing a required argument.
    #[error("line {line}: '{command}' requires {expected}")]
    MissingArgument {
        /// 1-based line number.
        line: usize,
        /// Command word.
        command: &'static str,
        /// Description of the missing argument.
        expected: &'static str,
    },

    /// Position is not a positive integer.
    #[error("line {line}: invalid position '{value}' (expected a number starting at 1)")]
    InvalidPosition {
        /// 1-based line number.
        line: usize,
        /// Offending value.
        value: String,
    },

    /// Filter name is not recognised.
    #[error("line {line}: unknown filter '{value}' (expected all, active or completed)")]
    InvalidFilter {
        /// 1-based line number.
        line: usize,
        /// Offending value.
        value: String,
    },
}

/// One parsed script command. Positions are 1-based into the visible list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// `add <text>`
    Add(String),
    /// `toggle <n>`
    Toggle(NonZeroUsize),
    /// `remove <n>` / `delete <n>`
    Remove(NonZeroUsize),
    /// `edit <n> <text>`
    Edit {
        /// Target position.
        position: NonZeroUsize,
        /// Replacement text, trimmed on save.
        text: String,
    },
    /// `filter <name>`
    Filter(Filter),
}

/// Parse a single line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<ScriptCommand>, ScriptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = trimmed
        .split_once(char::is_whitespace)
        .map_or((trimmed, ""), |(word, rest)| (word, rest.trim_start()));

    let command = match word.to_ascii_lowercase().as_str() {
        "add" => ScriptCommand::Add(rest.to_owned()),
        "toggle" => ScriptCommand::Toggle(parse_position(line, "toggle", rest)?),
        "remove" | "delete" => ScriptCommand::Remove(parse_position(line, "remove", rest)?),
        "edit" => {
            let (position, text) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(position, text)| (position, text));
            ScriptCommand::Edit {
                position: parse_position(line, "edit", position)?,
                text: text.to_owned(),
            }
        }
        "filter" => {
            if rest.is_empty() {
                return Err(ScriptError::MissingArgument {
                    line,
                    command: "filter",
                    expected: "a filter name",
                });
            }
            let filter = rest.parse::<Filter>().map_err(|_| ScriptError::InvalidFilter {
                line,
                value: rest.to_owned(),
            })?;
            ScriptCommand::Filter(filter)
        }
        _ => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: word.to_owned(),
            });
        }
    };
    Ok(Some(command))
}

fn parse_position(line: usize, command: &'static str, raw: &str) -> Result<NonZeroUsize, ScriptError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            expected: "a task position",
        });
    }
    value
        .parse::<NonZeroUsize>()
        .map_err(|_| ScriptError::InvalidPosition {
            line,
            value: value.to_owned(),
        })
}

/// Parse a whole script, returning each command with its 1-based line number.
pub fn parse_script(source: &str) -> Result<Vec<(usize, ScriptCommand)>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        if let Some(command) = parse_line(line, raw)? {
            commands.push((line, command));
        }
    }
    Ok(commands)
}

/// Applies parsed commands to a fresh list.
#[derive(Debug, Default)]
pub struct ScriptRunner {
    list: TaskList,
}

impl ScriptRunner {
    /// Runner over an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the runner and return the list.
    pub fn into_list(self) -> TaskList {
        self.list
    }

    /// Apply every command in order.
    pub fn run_all(&mut self, commands: impl IntoIterator<Item = (usize, ScriptCommand)>) {
        for (line, command) in commands {
            self.apply(line, command);
        }
    }

    /// Apply one command. Positions outside the visible list are skipped with a warning.
    pub fn apply(&mut self, line: usize, command: ScriptCommand) {
        match command {
            ScriptCommand::Add(text) => match self.list.add(&text) {
                Some(id) => info!(line, %id, "added task"),
                None => warn!(line, "skipping add with blank text"),
            },
            ScriptCommand::Toggle(position) => {
                if let Some(id) = self.resolve(line, position) {
                    self.list.toggle(id);
                }
            }
            ScriptCommand::Remove(position) => {
                if let Some(id) = self.resolve(line, position) {
                    self.list.remove(id);
                }
            }
            ScriptCommand::Edit { position, text } => {
                if let Some(id) = self.resolve(line, position) {
                    self.edit(line, id, text);
                }
            }
            ScriptCommand::Filter(filter) => self.list.set_filter(filter),
        }
    }

    fn edit(&mut self, line: usize, id: TaskId, text: String) {
        let mut editor = ItemEditor::new(id);
        if !editor.begin(&self.list) {
            return;
        }
        editor.set_draft(text);
        match editor.save(&mut self.list) {
            SaveOutcome::Committed => info!(line, %id, "edited task"),
            SaveOutcome::EmptyDraft => {
                warn!(line, %id, "skipping edit with blank text");
                editor.cancel();
            }
            SaveOutcome::TaskMissing | SaveOutcome::NotEditing => {}
        }
    }

    fn resolve(&self, line: usize, position: NonZeroUsize) -> Option<TaskId> {
        let found = self
            .list
            .visible_tasks()
            .nth(position.get() - 1)
            .map(tasklist_core::Task::id);
        if found.is_none() {
            warn!(
                line,
                position = position.get(),
                filter = %self.list.filter(),
                "no visible task at position; skipping"
            );
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::Task;

    fn pos(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap_or_else(|| panic!("position must be non-zero"))
    }

    fn run(source: &str) -> TaskList {
        let commands = parse_script(source).unwrap_or_else(|err| panic!("script must parse: {err}"));
        let mut runner = ScriptRunner::new();
        runner.run_all(commands);
        runner.into_list()
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.visible_tasks().map(Task::text).collect()
    }

    #[test]
    fn parses_each_command() {
        assert_eq!(
            parse_line(1, "add   Buy milk "),
            Ok(Some(ScriptCommand::Add("Buy milk".into())))
        );
        assert_eq!(parse_line(1, "toggle 2"), Ok(Some(ScriptCommand::Toggle(pos(2)))));
        assert_eq!(parse_line(1, "delete 1"), Ok(Some(ScriptCommand::Remove(pos(1)))));
        assert_eq!(
            parse_line(1, "edit 3 New  text"),
            Ok(Some(ScriptCommand::Edit {
                position: pos(3),
                text: "New  text".into()
            }))
        );
        assert_eq!(
            parse_line(1, "FILTER done"),
            Ok(Some(ScriptCommand::Filter(Filter::Completed)))
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(2, "   "), Ok(None));
        assert_eq!(parse_line(3, "# add nothing"), Ok(None));
    }

    #[test]
    fn reports_errors_with_line_numbers() {
        assert_eq!(
            parse_script("add a\nfrobnicate 1"),
            Err(ScriptError::UnknownCommand {
                line: 2,
                command: "frobnicate".into()
            })
        );
        assert_eq!(
            parse_line(4, "toggle"),
            Err(ScriptError::MissingArgument {
                line: 4,
                command: "toggle",
                expected: "a task position"
            })
        );
        assert_eq!(
            parse_line(5, "remove 0"),
            Err(ScriptError::InvalidPosition {
                line: 5,
                value: "0".into()
            })
        );
        assert_eq!(
            parse_line(6, "filter pending"),
            Err(ScriptError::InvalidFilter {
                line: 6,
                value: "pending".into()
            })
        );
    }

    #[test]
    fn error_messages_name_the_line() {
        let err = ScriptError::InvalidPosition {
            line: 7,
            value: "x".into(),
        };
        assert!(err.to_string().starts_with("line 7:"));
    }

    #[test]
    fn runs_add_toggle_remove() {
        let list = run("add A\nadd B\nadd C\ntoggle 1\nremove 3\n");
        assert_eq!(texts(&list), vec!["C", "B"]);
        assert!(list.tasks()[0].is_completed());
        assert!(!list.tasks()[1].is_completed());
    }

    #[test]
    fn blank_add_is_ignored() {
        let list = run("add\nadd    \nadd real");
        assert_eq!(texts(&list), vec!["real"]);
    }

    #[test]
    fn positions_follow_the_active_filter() {
        let list = run("add A\nadd B\nadd C\ntoggle 2\nfilter active\ntoggle 2\nfilter all");
        // B toggled first; under `active` the visible list is [C, A], so position 2 is A.
        let completed: Vec<&str> = list
            .tasks()
            .iter()
            .filter(|task| task.is_completed())
            .map(Task::text)
            .collect();
        assert_eq!(completed, vec!["B", "A"]);
    }

    #[test]
    fn out_of_range_positions_are_skipped() {
        let list = run("add A\ntoggle 5\nremove 2\nedit 9 nope");
        assert_eq!(texts(&list), vec!["A"]);
        assert!(!list.tasks()[0].is_completed());
    }

    #[test]
    fn edit_trims_and_ignores_blank_drafts() {
        let list = run("add X\nedit 1   Y  \n");
        assert_eq!(texts(&list), vec!["Y"]);

        let list = run("add X\nedit 1\nedit 1    ");
        assert_eq!(texts(&list), vec!["X"]);
    }
}
