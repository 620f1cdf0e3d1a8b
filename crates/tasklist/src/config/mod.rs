//! Configuration module for tasklist.

use anyhow::{Context, Result, anyhow};
use std::io::{self, Write};
use std::path::Path;

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, TuiConfig, ViewType};

/// Load and validate the TUI configuration, falling back to defaults when no file exists.
pub fn load_tui_config(path: Option<&Path>) -> Result<TuiConfig> {
    let Some(config) = keybindings::load_config(path)? else {
        return Ok(TuiConfig::default());
    };
    keybindings::validate_tui_config(&config.tui)?;
    Ok(config.tui)
}

/// Write the default configuration file.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?,
    };

    if output_path.exists() && !force && !confirm_overwrite(&output_path)? {
        println!("Aborted.");
        return Ok(());
    }

    write_default_config(&output_path)?;

    println!("✓ Created configuration file: {}", output_path.display());
    println!();
    println!("Edit this file to customize the default filter and keybindings.");
    println!("Restart tasklist to apply changes.");

    Ok(())
}

fn write_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("File already exists: {}\nOverwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
