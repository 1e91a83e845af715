//! `poldeck config` subcommands.

use anyhow::Result;
use poldeck_core::config::{paths, Config};

/// Prints the config file path.
pub fn path() -> Result<()> {
    println!("{}", paths::config_path().display());
    Ok(())
}

/// Writes the default config template.
pub fn init() -> Result<()> {
    let path = paths::config_path();
    Config::init(&path)?;
    println!("Created config at {}", path.display());
    Ok(())
}
