//! `leadboard config show|init`

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::{config_path, Config};

/// Print the effective configuration and where it came from.
pub fn show(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit);
    let config = Config::load_or_default(path.as_deref())?;

    match &path {
        Some(p) if p.exists() => println!("{} {}", "# Loaded from".dimmed(), p.display()),
        Some(p) => println!("{} {}", "# Defaults (no file at".dimmed(), format!("{})", p.display()).dimmed()),
        None => println!("{}", "# Defaults".dimmed()),
    }

    let mut shown = config.clone();
    if shown.insight.api_key.is_some() {
        shown.insight.api_key = Some("********".to_string());
    }
    print!("{}", shown.to_toml()?);

    let key_state = if config.insight.resolve_api_key().is_some() {
        "set".green()
    } else {
        "not set".yellow()
    };
    println!("{} API key: {}", "#".dimmed(), key_state);
    Ok(())
}

/// Write a default config file.
pub fn init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(explicit).context("Could not determine a config directory; pass --config")?;
    Config::write_default(&path, force)?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}
