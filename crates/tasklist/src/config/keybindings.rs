//! Keybindings configuration for the TUI.

#![allow(clippy::enum_glob_use)]

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tasklist_core::Filter;

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Top-level configuration for tasklist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TUI configuration.
    #[serde(default)]
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Filter selected when the TUI starts.
    #[serde(default)]
    pub default_filter: Filter,
    /// Keybindings configuration.
    #[serde(default)]
    pub keybindings: KeyBindingsConfig,
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task list view.
    #[serde(default)]
    pub task_list: TaskListKeyBindings,
    /// Keybindings for the add/edit input line.
    #[serde(default)]
    pub input: InputKeyBindings,
}

/// Keybindings for the task list view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Open the input line for a new task.
    pub add_task: Vec<String>,
    /// Toggle completion of the selected task.
    pub toggle: Vec<String>,
    /// Edit the selected task inline.
    pub edit_task: Vec<String>,
    /// Delete the selected task.
    pub delete_task: Vec<String>,
    /// Show all tasks.
    pub filter_all: Vec<String>,
    /// Show active tasks only.
    pub filter_active: Vec<String>,
    /// Show completed tasks only.
    pub filter_completed: Vec<String>,
    /// Cycle to the next filter.
    pub next_filter: Vec<String>,
}

/// Keybindings for the input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputKeyBindings {
    /// Submit the typed text.
    pub submit: Vec<String>,
    /// Close the input without submitting.
    pub cancel: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Esc"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            add_task: vec_of_strings!["a", "n", "i"],
            toggle: vec_of_strings!["Space", "x", "Enter"],
            edit_task: vec_of_strings!["e"],
            delete_task: vec_of_strings!["d", "Delete"],
            filter_all: vec_of_strings!["1"],
            filter_active: vec_of_strings!["2"],
            filter_completed: vec_of_strings!["3"],
            next_filter: vec_of_strings!["Tab", "f"],
        }
    }
}

impl Default for InputKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
        }
    }
}

/// Returns the default configuration file path.
///
/// On Linux: `~/.config/tasklist/config.toml`
/// On macOS: `~/Library/Application Support/tasklist/config.toml`
/// On Windows: `%APPDATA%\tasklist\config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklist").join("config.toml"))
}

/// Generate default configuration as TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize default configuration")?;

    let header = r#"# tasklist configuration
#
# [tui]
# default_filter: filter selected at startup ("all", "active" or "completed").
#
# [tui.keybindings.*]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "a", "1"
# - Special keys: "Enter", "Esc", "Tab", "Space", "Backspace", "Delete", "Insert"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Note: once a [tui.keybindings.<view>] table is present, every action of
# that view must be listed.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Load configuration from a TOML file.
///
/// # Arguments
/// - `path`: Optional path to the config file. If `None`, uses the default path.
///
/// # Returns
/// - `Ok(Some(config))` if the file exists and was successfully parsed
/// - `Ok(None)` if the file does not exist
/// - `Err(_)` if there was an error reading or parsing the file
pub fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(None),
        },
    };

    if !config_path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Space" -> `KeyCode::Char(' ')`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    if s.is_empty() {
        bail!("Empty key string");
    }
    // "+" alone (or a trailing "++") names the plus key itself.
    let (modifier_part, key_part) = match s.strip_suffix("++") {
        Some(prefix) => (Some(prefix), "+"),
        None if s == "+" => (None, "+"),
        None => match s.rsplit_once('+') {
            Some((prefix, key)) => (Some(prefix), key),
            None => (None, s),
        },
    };

    let mut modifiers = KeyModifiers::NONE;
    if let Some(prefix) = modifier_part {
        for modifier in prefix.split('+') {
            match modifier {
                "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
                "Alt" => modifiers |= KeyModifiers::ALT,
                "Shift" => modifiers |= KeyModifiers::SHIFT,
                other => bail!("Unknown modifier: {other}"),
            }
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        "Space" => Ok(KeyCode::Char(' ')),
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().ok_or_else(|| anyhow!("Empty char"))?;
            Ok(KeyCode::Char(ch))
        }
        other => bail!("Unknown key: {other}"),
    }
}

/// Validate the TUI configuration.
pub fn validate_tui_config(config: &TuiConfig) -> Result<()> {
    validate_keybindings_config(&config.keybindings)
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for view in ViewType::ALL {
        let bindings = config.bindings(view);
        validate_non_empty_bindings(view, &bindings)?;
        validate_key_expressions(view, &bindings)?;
        validate_view_keybindings(view, &bindings)?;
    }
    Ok(())
}

fn validate_non_empty_bindings(view: ViewType, bindings: &[(Action, &[String])]) -> Result<()> {
    for (action, keys) in bindings {
        if keys.is_empty() {
            bail!(
                "{}.{} must have at least one key binding",
                view.as_str(),
                action.as_str()
            );
        }
    }
    Ok(())
}

fn validate_key_expressions(view: ViewType, bindings: &[(Action, &[String])]) -> Result<()> {
    for (action, keys) in bindings {
        for key in *keys {
            parse_key(key)
                .with_context(|| format!("Invalid key '{key}' in {}.{}", view.as_str(), action.as_str()))?;
        }
    }
    Ok(())
}

fn validate_view_keybindings(view: ViewType, bindings: &[(Action, &[String])]) -> Result<()> {
    let mut key_to_actions: HashMap<(KeyCode, KeyModifiers), Vec<&'static str>> = HashMap::new();

    for (action, keys) in bindings {
        for key in *keys {
            let event = parse_key(key)?;
            let actions = key_to_actions.entry(normalize(&event)).or_default();
            if !actions.contains(&action.as_str()) {
                actions.push(action.as_str());
            }
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_values()
        .filter(|actions| actions.len() > 1)
        .collect();
    conflicts.sort();
    if let Some(actions) = conflicts.first() {
        bail!(
            "A key is bound to multiple actions in {}: {:?}",
            view.as_str(),
            actions
        );
    }

    Ok(())
}

/// Terminals report uppercase letters with or without SHIFT; compare characters
/// without it so that "Q" matches both.
fn normalize(event: &KeyEvent) -> (KeyCode, KeyModifiers) {
    match event.code {
        KeyCode::Char(_) => (event.code, event.modifiers.difference(KeyModifiers::SHIFT)),
        _ => (event.code, event.modifiers),
    }
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task list view.
    TaskList,
    /// Add/edit input line.
    Input,
}

impl ViewType {
    const ALL: [Self; 2] = [Self::TaskList, Self::Input];

    const fn as_str(self) -> &'static str {
        match self {
            Self::TaskList => "task_list",
            Self::Input => "input",
        }
    }
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Open the add input.
    AddTask,
    /// Toggle completion.
    Toggle,
    /// Edit inline.
    EditTask,
    /// Delete task.
    DeleteTask,
    /// Show all tasks.
    FilterAll,
    /// Show active tasks.
    FilterActive,
    /// Show completed tasks.
    FilterCompleted,
    /// Cycle filters.
    NextFilter,
    /// Submit input.
    Submit,
    /// Cancel input.
    Cancel,
}

impl Action {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::Down => "down",
            Self::Up => "up",
            Self::AddTask => "add_task",
            Self::Toggle => "toggle",
            Self::EditTask => "edit_task",
            Self::DeleteTask => "delete_task",
            Self::FilterAll => "filter_all",
            Self::FilterActive => "filter_active",
            Self::FilterCompleted => "filter_completed",
            Self::NextFilter => "next_filter",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
        }
    }
}

impl KeyBindingsConfig {
    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => self.generate_task_list_help(),
            ViewType::Input => self.generate_input_help(),
        }
    }

    fn generate_task_list_help(&self) -> String {
        let list = &self.task_list;
        format!(
            "{}:move {}:add {}:toggle {}:edit {}:delete {}/{}/{}:all/active/done {}:next filter {}:quit",
            format_key_pair(&list.down, &list.up),
            format_first_key(&list.add_task),
            format_first_key(&list.toggle),
            format_first_key(&list.edit_task),
            format_first_key(&list.delete_task),
            format_first_key(&list.filter_all),
            format_first_key(&list.filter_active),
            format_first_key(&list.filter_completed),
            format_first_key(&list.next_filter),
            format_first_key(&list.quit),
        )
    }

    fn generate_input_help(&self) -> String {
        format!(
            "{}:save {}:cancel",
            format_first_key(&self.input.submit),
            format_first_key(&self.input.cancel),
        )
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        let actual = normalize(key);
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| normalize(&expected) == actual)
    }

    /// First action in `view` bound to `key`, if any.
    pub fn action_for(&self, view: ViewType, key: &KeyEvent) -> Option<Action> {
        self.bindings(view)
            .into_iter()
            .map(|(action, _)| action)
            .find(|&action| self.matches(view, action, key))
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        use Action::*;
        use ViewType::*;

        match (view, action) {
            (TaskList, Quit) => &self.task_list.quit,
            (TaskList, Down) => &self.task_list.down,
            (TaskList, Up) => &self.task_list.up,
            (TaskList, AddTask) => &self.task_list.add_task,
            (TaskList, Toggle) => &self.task_list.toggle,
            (TaskList, EditTask) => &self.task_list.edit_task,
            (TaskList, DeleteTask) => &self.task_list.delete_task,
            (TaskList, FilterAll) => &self.task_list.filter_all,
            (TaskList, FilterActive) => &self.task_list.filter_active,
            (TaskList, FilterCompleted) => &self.task_list.filter_completed,
            (TaskList, NextFilter) => &self.task_list.next_filter,

            (Input, Submit) => &self.input.submit,
            (Input, Cancel) => &self.input.cancel,

            _ => &[],
        }
    }

    fn bindings(&self, view: ViewType) -> Vec<(Action, &[String])> {
        let actions: &[Action] = match view {
            ViewType::TaskList => &[
                Action::Quit,
                Action::Down,
                Action::Up,
                Action::AddTask,
                Action::Toggle,
                Action::EditTask,
                Action::DeleteTask,
                Action::FilterAll,
                Action::FilterActive,
                Action::FilterCompleted,
                Action::NextFilter,
            ],
            ViewType::Input => &[Action::Submit, Action::Cancel],
        };
        actions
            .iter()
            .map(|&action| (action, self.get_keys(view, action)))
            .collect()
    }
}

/// Format the first key of a key binding list for display.
fn format_first_key(keys: &[String]) -> String {
    keys.first()
        .map_or_else(|| "?".to_string(), |k| format_key_display(k))
}

/// Format two keys as a pair (e.g., "j/k" for down/up).
fn format_key_pair(down: &[String], up: &[String]) -> String {
    format!("{}/{}", format_first_key(down), format_first_key(up))
}

/// Format a key for display, converting special keys to readable symbols.
fn format_key_display(key: &str) -> String {
    match key {
        "Enter" => "↵".to_string(),
        "Backspace" => "BS".to_string(),
        "Delete" => "Del".to_string(),
        "Space" => "␣".to_string(),
        "Up" => "↑".to_string(),
        "Down" => "↓".to_string(),
        "Left" => "←".to_string(),
        "Right" => "→".to_string(),
        "PageUp" => "PgUp".to_string(),
        "PageDown" => "PgDn".to_string(),
        other if other.starts_with("Ctrl+") || other.starts_with("Alt+") => other.replace('+', "-"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn default_keybindings_are_valid() {
        assert!(validate_keybindings_config(&KeyBindingsConfig::default()).is_ok());
    }

    #[test]
    fn default_config_path_points_at_tasklist() {
        if let Some(path) = default_config_path() {
            assert!(path.to_string_lossy().contains("tasklist"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }

    #[test]
    fn parse_simple_and_special_keys() {
        assert_eq!(parse_key("j").unwrap().code, KeyCode::Char('j'));
        assert_eq!(parse_key("Space").unwrap().code, KeyCode::Char(' '));
        assert_eq!(parse_key("+").unwrap().code, KeyCode::Char('+'));

        let test_cases = vec![
            ("Enter", KeyCode::Enter),
            ("Esc", KeyCode::Esc),
            ("Tab", KeyCode::Tab),
            ("Backspace", KeyCode::Backspace),
            ("Delete", KeyCode::Delete),
            ("Insert", KeyCode::Insert),
            ("Home", KeyCode::Home),
            ("End", KeyCode::End),
            ("PageUp", KeyCode::PageUp),
            ("PageDown", KeyCode::PageDown),
            ("Left", KeyCode::Left),
            ("Right", KeyCode::Right),
        ];
        for (key_str, expected_code) in test_cases {
            let parsed = parse_key(key_str).unwrap();
            assert_eq!(parsed.code, expected_code);
            assert_eq!(parsed.modifiers, KeyModifiers::NONE);
        }
    }

    #[test]
    fn parse_modified_keys() {
        let ctrl_d = parse_key("Ctrl+d").unwrap();
        assert_eq!(ctrl_d.code, KeyCode::Char('d'));
        assert_eq!(ctrl_d.modifiers, KeyModifiers::CONTROL);

        let combo = parse_key("Ctrl+Alt+x").unwrap();
        assert_eq!(combo.modifiers, KeyModifiers::CONTROL | KeyModifiers::ALT);

        let ctrl_plus = parse_key("Ctrl++").unwrap();
        assert_eq!(ctrl_plus.code, KeyCode::Char('+'));
        assert_eq!(ctrl_plus.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn parse_rejects_invalid_keys() {
        assert!(parse_key("").is_err());
        assert!(parse_key("Hyper+x").is_err());
        assert!(parse_key("NotAKey").is_err());
    }

    #[test]
    fn matches_configured_keys() {
        let config = KeyBindingsConfig::default();
        assert!(config.matches(ViewType::TaskList, Action::Quit, &key(KeyCode::Char('q'))));
        assert!(config.matches(ViewType::TaskList, Action::Quit, &key(KeyCode::Esc)));
        assert!(config.matches(ViewType::TaskList, Action::Toggle, &key(KeyCode::Char(' '))));
        assert!(!config.matches(ViewType::TaskList, Action::Quit, &key(KeyCode::Char('x'))));
    }

    #[test]
    fn matches_ignores_shift_on_characters() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec!["Q".to_string()];
        let shifted = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert!(config.matches(ViewType::TaskList, Action::Quit, &shifted));
    }

    #[test]
    fn matches_respects_modifiers() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.quit = vec!["Ctrl+c".to_string()];
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(config.matches(ViewType::TaskList, Action::Quit, &ctrl_c));
        assert!(!config.matches(ViewType::TaskList, Action::Quit, &key(KeyCode::Char('c'))));
    }

    #[test]
    fn action_for_resolves_bound_keys() {
        let config = KeyBindingsConfig::default();
        assert_eq!(
            config.action_for(ViewType::TaskList, &key(KeyCode::Char('d'))),
            Some(Action::DeleteTask)
        );
        assert_eq!(
            config.action_for(ViewType::TaskList, &key(KeyCode::Tab)),
            Some(Action::NextFilter)
        );
        assert_eq!(config.action_for(ViewType::Input, &key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(config.action_for(ViewType::Input, &key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn same_key_in_different_views_is_not_a_conflict() {
        let config = KeyBindingsConfig::default();
        assert!(config.matches(ViewType::TaskList, Action::Quit, &key(KeyCode::Esc)));
        assert!(config.matches(ViewType::Input, Action::Cancel, &key(KeyCode::Esc)));
        assert!(validate_keybindings_config(&config).is_ok());
    }

    #[test]
    fn detects_conflict_within_view() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.edit_task = vec!["j".to_string()];
        let err = validate_keybindings_config(&config).unwrap_err().to_string();
        assert!(err.contains("multiple actions"), "unexpected error: {err}");
        assert!(err.contains("task_list"));
    }

    #[test]
    fn rejects_empty_binding() {
        let mut config = KeyBindingsConfig::default();
        config.input.submit.clear();
        let err = validate_keybindings_config(&config).unwrap_err().to_string();
        assert!(err.contains("input.submit"), "unexpected error: {err}");
    }

    #[test]
    fn rejects_unparseable_key() {
        let mut config = KeyBindingsConfig::default();
        config.task_list.delete_task = vec!["Meta+d".to_string()];
        let err = validate_keybindings_config(&config).unwrap_err();
        assert!(format!("{err:#}").contains("task_list.delete_task"));
    }

    #[test]
    fn help_text_uses_first_keys() {
        let help = KeyBindingsConfig::default().generate_help_text(ViewType::TaskList);
        assert!(help.starts_with("j/k:move"));
        assert!(help.contains("a:add"));
        assert!(help.contains("␣:toggle"));
        assert!(help.contains("1/2/3:all/active/done"));

        let input_help = KeyBindingsConfig::default().generate_help_text(ViewType::Input);
        assert_eq!(input_help, "↵:save Esc:cancel");
    }

    #[test]
    fn load_nonexistent_config_returns_none() {
        let result = load_config(Some(Path::new("/nonexistent/path/config.toml"))).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_config_with_only_default_filter() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[tui]\ndefault_filter = \"active\"\n")
            .unwrap();
        temp_file.flush().unwrap();

        let config = load_config(Some(temp_file.path())).unwrap().unwrap();
        assert_eq!(config.tui.default_filter, Filter::Active);
        assert_eq!(config.tui.keybindings.task_list.quit, vec!["q", "Esc"]);
    }

    #[test]
    fn load_custom_keybindings() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let custom = r#"
[tui.keybindings.task_list]
quit = ["Q"]
down = ["n"]
up = ["p"]
add_task = ["o"]
toggle = ["Space"]
edit_task = ["r"]
delete_task = ["x"]
filter_all = ["1"]
filter_active = ["2"]
filter_completed = ["3"]
next_filter = ["Tab"]

[tui.keybindings.input]
submit = ["Enter"]
cancel = ["Ctrl+g"]
"#;
        temp_file.write_all(custom.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(Some(temp_file.path())).unwrap().unwrap();
        assert_eq!(config.tui.default_filter, Filter::All);
        assert_eq!(config.tui.keybindings.task_list.down, vec!["n"]);
        assert_eq!(config.tui.keybindings.input.cancel, vec!["Ctrl+g"]);
        assert!(validate_tui_config(&config.tui).is_ok());
    }

    #[test]
    fn partial_view_table_fails_to_parse() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[tui.keybindings.input]\nsubmit = [\"Enter\"]\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(Some(temp_file.path())).is_err());
    }

    #[test]
    fn invalid_toml_fails_to_parse() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[tui\ndefault_filter = 1").unwrap();
        temp_file.flush().unwrap();

        let err = load_config(Some(temp_file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn generated_default_toml_round_trips() {
        let content = generate_default_config_toml().unwrap();
        assert!(content.starts_with("# tasklist configuration"));

        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.tui.default_filter, Filter::All);
        assert_eq!(
            config.tui.keybindings.task_list.toggle,
            KeyBindingsConfig::default().task_list.toggle
        );
        assert!(validate_tui_config(&config.tui).is_ok());
    }
}
