//! Configuration management for ansihtml

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::filter::FilterOptions;
use crate::html::PageOptions;

/// Longest color value accepted from config.
const MAX_COLOR_LEN: usize = 64;

impl Config {
    /// Get the config file path (~/.config/ansihtml/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansihtml)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path (must exist)
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Load from `path` when given, else from the default location
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values that would produce broken markup.
    pub fn validate(&self) -> Result<(), String> {
        validate_color("filter.foreground", &self.filter.foreground)?;
        validate_color("filter.background", &self.filter.background)?;
        self.palette_overrides()?;
        if self.render.font_family.contains(&['{', '}', '<', '>'][..]) {
            return Err("render.font_family contains forbidden characters".to_string());
        }
        Ok(())
    }

    /// Parse `[filter.colors]` into index overrides, failing on the first bad entry.
    pub fn palette_overrides(&self) -> Result<BTreeMap<u8, String>, String> {
        self.filter
            .colors
            .iter()
            .map(|(key, color)| parse_override(key, color))
            .collect()
    }

    /// Filter options described by this config.
    ///
    /// Palette entries that fail validation are skipped; call
    /// [`validate`](Self::validate) first to surface them.
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            foreground: self.filter.foreground.clone(),
            background: self.filter.background.clone(),
            newline: self.filter.newline,
            escape_xml: self.filter.escape_xml,
            colors: self
                .filter
                .colors
                .iter()
                .filter_map(|(key, color)| match parse_override(key, color) {
                    Ok(entry) => Some(entry),
                    Err(e) => {
                        warn!("Ignoring palette override: {}", e);
                        None
                    }
                })
                .collect(),
        }
    }

    /// Page options described by this config.
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.render.title.clone(),
            foreground: self.filter.foreground.clone(),
            background: self.filter.background.clone(),
            font_family: self.render.font_family.clone(),
        }
    }
}

fn parse_override(key: &str, color: &str) -> Result<(u8, String), String> {
    let index: u8 = key
        .trim()
        .parse()
        .map_err(|_| format!("filter.colors key '{}' is not a color index (0-255)", key))?;
    validate_color(&format!("filter.colors.{}", key), color)?;
    Ok((index, color.to_string()))
}

/// Accept values that are safe inside an inline `style` attribute.
pub fn validate_color(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} must not be empty", field));
    }
    if value.len() > MAX_COLOR_LEN {
        return Err(format!("{} is longer than {} characters", field, MAX_COLOR_LEN));
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || "#(),.% -".contains(c);
    if let Some(bad) = value.chars().find(|&c| !allowed(c)) {
        return Err(format!("{} contains forbidden character {:?}", field, bad));
    }
    Ok(())
}
