//! Command handlers for the ansihtml CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod build_log;
pub mod completions;
pub mod config;
pub mod convert;
pub mod palette;

use anyhow::{bail, Context, Result};
use humansize::{format_size, BINARY};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use ansihtml::cli::StyleArgs;
use ansihtml::config::validate_color;
use ansihtml::{Config, FilterOptions};

/// Merge command-line style flags over the configured filter options.
///
/// Flags only ever switch options on (`--newline`, `--no-escape`) or replace
/// colors, so a flag that is absent leaves the config value in place.
pub fn resolve_filter_options(config: &Config, style: &StyleArgs) -> Result<FilterOptions> {
    let mut options = config.filter_options();
    if let Some(fg) = &style.fg {
        validate_color("--fg", fg).map_err(anyhow::Error::msg)?;
        options.foreground = fg.clone();
    }
    if let Some(bg) = &style.bg {
        validate_color("--bg", bg).map_err(anyhow::Error::msg)?;
        options.background = bg.clone();
    }
    if style.newline {
        options.newline = true;
    }
    if style.no_escape {
        options.escape_xml = false;
    }
    Ok(options)
}

/// Write `content` to `path`, or to stdout when no path is given.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            eprintln!(
                "Wrote {} to {}",
                format_size(content.len() as u64, BINARY),
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Refuse to block on a terminal when no input file was given.
pub fn ensure_stdin_is_piped() -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        bail!("No input files given and stdin is a terminal.\nHint: pipe output into ansihtml or pass a file name.");
    }
    Ok(())
}
