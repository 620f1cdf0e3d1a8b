//! Text formatting shared by the script runner and the TUI.

use tasklist_core::{Counts, Task};
use time::OffsetDateTime;
use time::macros::format_description;

/// Creation date shown next to a task, `YYYY-MM-DD`.
pub fn created_date(ts: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day]");
    ts.format(&format).unwrap_or_else(|_| ts.date().to_string())
}

/// Checkbox marker for a task.
pub const fn completion_marker(task: &Task) -> &'static str {
    if task.is_completed() { "[x]" } else { "[ ]" }
}

/// "N active, M completed" summary line.
pub fn counts_summary(counts: Counts) -> String {
    format!("{} active, {} completed", counts.active, counts.completed)
}

/// Congratulation line shown once something is done, `None` otherwise.
pub fn completion_message(counts: Counts) -> Option<String> {
    match counts.completed {
        0 => None,
        1 => Some("You've completed 1 task!".to_owned()),
        n => Some(format!("You've completed {n} tasks!")),
    }
}
