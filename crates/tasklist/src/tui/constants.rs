//! Shared constants for the TUI to keep layout and timing in sync.

/// Interval in milliseconds between UI ticks/redraws.
pub const TUI_TICK_RATE_MS: u64 = 200;
/// Time-to-live in seconds for transient status messages.
pub const UI_MESSAGE_TTL_SECS: u64 = 5;
/// Highlight symbol shown beside selected list entries.
pub const TASK_LIST_HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Marker shown for completed tasks.
pub const COMPLETED_MARKER: &str = "✓";
/// Marker shown for active tasks.
pub const ACTIVE_MARKER: &str = "○";
/// Title rendered in the header.
pub const APP_TITLE: &str = "Todo App";
/// Tagline rendered under the title.
pub const APP_TAGLINE: &str = "Stay organized and get things done";
/// Placeholder shown in the empty add input.
pub const ADD_PLACEHOLDER: &str = "Add a new todo...";
