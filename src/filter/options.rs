//! Filter configuration.

use std::collections::BTreeMap;

use super::palette::{style_table, StyleKey};

/// Default foreground used by SGR 39.
pub const DEFAULT_FOREGROUND: &str = "#FFF";
/// Default background used by SGR 49.
pub const DEFAULT_BACKGROUND: &str = "#000";

/// Options fixed for the lifetime of a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Color restored by SGR 39
    pub foreground: String,
    /// Color restored by SGR 49
    pub background: String,
    /// Emit `<br/>` for each run of newlines instead of passing them through
    pub newline: bool,
    /// HTML-escape literal text
    pub escape_xml: bool,
    /// Palette overrides by color index, consulted before the style table
    pub colors: BTreeMap<u8, String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            newline: false,
            escape_xml: true,
            colors: BTreeMap::new(),
        }
    }
}

impl FilterOptions {
    pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
        self.foreground = color.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = color.into();
        self
    }

    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    pub fn with_escape_xml(mut self, escape_xml: bool) -> Self {
        self.escape_xml = escape_xml;
        self
    }

    /// Override one palette entry for both foreground and background use.
    pub fn with_color(mut self, index: u8, color: impl Into<String>) -> Self {
        self.colors.insert(index, color.into());
        self
    }

    /// Resolve a style key to a CSS declaration, honoring overrides.
    pub fn declaration(&self, key: StyleKey) -> Option<String> {
        match self.colors.get(&key.index()) {
            Some(color) => Some(key.declaration(color)),
            None => style_table().get(key).map(str::to_string),
        }
    }
}
