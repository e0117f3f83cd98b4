//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filter::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// ANSI conversion settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Color restored by SGR 39
    #[serde(default = "default_foreground")]
    pub foreground: String,
    /// Color restored by SGR 49
    #[serde(default = "default_background")]
    pub background: String,
    /// Turn newline runs into `<br/>`
    #[serde(default)]
    pub newline: bool,
    /// HTML-escape literal text
    #[serde(default = "default_escape_xml")]
    pub escape_xml: bool,
    /// Palette overrides keyed by color index ("0" to "255")
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

pub fn default_foreground() -> String {
    DEFAULT_FOREGROUND.to_string()
}

pub fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

pub fn default_escape_xml() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            foreground: default_foreground(),
            background: default_background(),
            newline: false,
            escape_xml: default_escape_xml(),
            colors: BTreeMap::new(),
        }
    }
}

/// Standalone page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title when none is given on the command line
    #[serde(default = "default_title")]
    pub title: String,
    /// CSS font-family for the `<pre>` block
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

pub fn default_title() -> String {
    "ansihtml".to_string()
}

pub fn default_font_family() -> String {
    "monospace".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            font_family: default_font_family(),
        }
    }
}
