use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tasklist_core::{Counts, Filter, Task, TaskList};

use crate::OutputFormat;
use crate::format::{completion_marker, counts_summary, created_date};

pub mod script;

use self::script::{ScriptRunner, parse_script};

/// Replay a command script (file, or stdin when `path` is `None`) and print the result.
pub fn run_script(path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let source = read_source(path)?;
    let commands = parse_script(&source)?;
    let mut runner = ScriptRunner::new();
    runner.run_all(commands);
    let list = runner.into_list();
    print!("{}", render(&list, format)?);
    Ok(())
}

fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display())),
        _ => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

/// Render the visible tasks and counts in the requested format.
pub fn render(list: &TaskList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(list)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&ListOutput::from(list))?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(list: &TaskList) -> String {
    let mut out = String::new();
    let mut any = false;
    for task in list.visible_tasks() {
        any = true;
        let _ = writeln!(
            out,
            "{} {}  ({})",
            completion_marker(task),
            task.text(),
            created_date(task.created_at())
        );
    }
    if !any {
        let _ = writeln!(out, "{}", list.filter().empty_message());
    }
    let _ = writeln!(out, "{}", counts_summary(list.counts()));
    out
}

#[derive(Serialize)]
struct ListOutput<'a> {
    filter: Filter,
    tasks: Vec<&'a Task>,
    counts: Counts,
}

impl<'a> From<&'a TaskList> for ListOutput<'a> {
    fn from(list: &'a TaskList) -> Self {
        Self {
            filter: list.filter(),
            tasks: list.visible_tasks().collect(),
            counts: list.counts(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add_at("Buy milk", datetime!(2024-05-01 09:00 UTC));
        let walk = list.add_at("Walk dog", datetime!(2024-05-02 18:30 UTC));
        if let Some(id) = walk {
            list.toggle(id);
        }
        list
    }

    #[test]
    fn text_output_lists_visible_tasks_and_counts() -> Result<()> {
        let out = render(&sample(), OutputFormat::Text)?;
        assert_eq!(
            out,
            "[x] Walk dog  (2024-05-02)\n[ ] Buy milk  (2024-05-01)\n1 active, 1 completed\n"
        );
        Ok(())
    }

    #[test]
    fn text_output_shows_empty_message_for_filter() -> Result<()> {
        let mut list = sample();
        list.set_filter(Filter::Active);
        list.toggle(list.tasks()[1].id());
        let out = render(&list, OutputFormat::Text)?;
        assert_eq!(out, "No active todos. Great job!\n0 active, 2 completed\n");
        Ok(())
    }

    #[test]
    fn json_output_includes_filter_tasks_and_counts() -> Result<()> {
        let mut list = sample();
        list.set_filter(Filter::Completed);
        let out = render(&list, OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&out)?;

        assert_eq!(value["filter"], "completed");
        assert_eq!(value["counts"]["active"], 1);
        assert_eq!(value["counts"]["completed"], 1);
        let tasks = value["tasks"].as_array().map_or(0, Vec::len);
        assert_eq!(tasks, 1);
        assert_eq!(value["tasks"][0]["text"], "Walk dog");
        assert_eq!(value["tasks"][0]["completed"], true);
        assert_eq!(value["tasks"][0]["created_at"], "2024-05-02T18:30:00Z");
        Ok(())
    }

    #[test]
    fn reads_script_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("todo.txt");
        std::fs::write(&path, "add A\n")?;
        assert_eq!(read_source(Some(&path))?, "add A\n");
        Ok(())
    }
}
