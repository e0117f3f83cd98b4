//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::Path;

use ansihtml::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Write a default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    if path.exists() && !force {
        bail!(
            "Config file already exists: {}\nHint: use --force to overwrite it.",
            path.display()
        );
    }
    Config::default().save_to(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Print the config file path in use.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", Config::config_path()?.display()),
    }
    Ok(())
}
