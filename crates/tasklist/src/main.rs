//! CLI entry point for tasklist.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tasklist_core::Filter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod commands;
mod config;
mod format;
mod tui;

/// A todo list that lives for one session.
#[derive(Parser, Debug)]
#[command(
    name = "tasklist",
    version,
    about = "tasklist: an in-memory todo list for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch interactive terminal UI (default).
    Tui {
        /// Filter selected at startup; overrides the config file.
        #[arg(long)]
        filter: Option<Filter>,
        /// Path to the config file (defaults to the user config directory).
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replay a command script against a fresh list and print the result.
    Run {
        /// Script file; reads stdin when omitted or "-".
        script: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write the default configuration file.
    InitConfig {
        /// Destination path (defaults to the user config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },
}

/// Output format for `run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

fn main() -> Result<()> {
    let Cli { cmd } = Cli::parse();
    let cmd = cmd.unwrap_or(Command::Tui {
        filter: None,
        config: None,
    });

    if should_install_tracing(&cmd) {
        install_tracing();
    }

    execute_command(cmd)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Tui { filter, config } => {
            let tui_config = config::load_tui_config(config.as_deref())?;
            tui::run(tui_config, filter)
        }
        Command::Run { script, format } => commands::run_script(script.as_deref(), format),
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
    }
}

const fn should_install_tracing(cmd: &Command) -> bool {
    !matches!(cmd, Command::Tui { .. })
}

fn install_tracing() {
    // RUST_LOG overrides the default INFO level. Logs go to stderr so `run` output stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
