//! Style table for ANSI color indices.
//!
//! Maps the 256 xterm color indices to CSS declarations, once for foreground
//! (`ef<n>`) and once for background (`eb<n>`):
//! - 0-15: the named ANSI colors
//! - 16-231: a 6x6x6 color cube
//! - 232-255: a 24-step grayscale ramp
//!
//! The table is built on first use and never mutated afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// The 16 named ANSI colors (normal then bright).
pub const NAMED_COLORS: [&str; 16] = [
    "#000", "#A00", "#0A0", "#A50", "#00A", "#A0A", "#0AA", "#AAA", "#555", "#F55", "#5F5", "#FF5",
    "#55F", "#F5F", "#5FF", "#FFF",
];

/// Channel intensities used by the color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Key into the style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// `ef<n>`: foreground color index
    Foreground(u8),
    /// `eb<n>`: background color index
    Background(u8),
}

impl StyleKey {
    /// The color index this key addresses.
    pub fn index(self) -> u8 {
        match self {
            StyleKey::Foreground(n) | StyleKey::Background(n) => n,
        }
    }

    /// The CSS property this key sets.
    pub fn property(self) -> &'static str {
        match self {
            StyleKey::Foreground(_) => "color",
            StyleKey::Background(_) => "background-color",
        }
    }

    /// Render a CSS declaration for this key with an arbitrary color value.
    pub fn declaration(self, color: &str) -> String {
        format!("{}:{}", self.property(), color)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleKey::Foreground(n) => write!(f, "ef{}", n),
            StyleKey::Background(n) => write!(f, "eb{}", n),
        }
    }
}

/// Error returned when a string is not a valid `ef<n>`/`eb<n>` key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid style key: {0:?}")]
pub struct InvalidStyleKey(pub String);

impl FromStr for StyleKey {
    type Err = InvalidStyleKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidStyleKey(s.to_string());
        let (ctor, digits): (fn(u8) -> StyleKey, &str) = if let Some(d) = s.strip_prefix("ef") {
            (StyleKey::Foreground, d)
        } else if let Some(d) = s.strip_prefix("eb") {
            (StyleKey::Background, d)
        } else {
            return Err(invalid());
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse::<u8>().map(ctor).map_err(|_| invalid())
    }
}

/// Immutable table of CSS declarations for every color index.
#[derive(Debug)]
pub struct StyleTable {
    colors: Vec<String>,
    foreground: Vec<String>,
    background: Vec<String>,
}

impl StyleTable {
    fn build() -> Self {
        let mut colors: Vec<String> = NAMED_COLORS.iter().map(|c| c.to_string()).collect();

        for r in 0..6 {
            for g in 0..6 {
                for b in 0..6 {
                    colors.push(hex_rgb(CUBE_LEVELS[r], CUBE_LEVELS[g], CUBE_LEVELS[b]));
                }
            }
        }

        for step in 0..24u8 {
            let level = 8 + step * 10;
            colors.push(hex_rgb(level, level, level));
        }

        debug_assert_eq!(colors.len(), 256);

        let foreground = colors.iter().map(|c| format!("color:{}", c)).collect();
        let background = colors
            .iter()
            .map(|c| format!("background-color:{}", c))
            .collect();

        Self {
            colors,
            foreground,
            background,
        }
    }

    /// CSS declaration for a key, e.g. `color:#A00` for `ef1`.
    pub fn get(&self, key: StyleKey) -> Option<&str> {
        let table = match key {
            StyleKey::Foreground(_) => &self.foreground,
            StyleKey::Background(_) => &self.background,
        };
        table.get(key.index() as usize).map(String::as_str)
    }

    /// Bare color value for an index, e.g. `#A00` for 1.
    pub fn color(&self, index: u8) -> &str {
        &self.colors[index as usize]
    }

    /// Iterate over every `(key, declaration)` pair, foreground first.
    pub fn entries(&self) -> impl Iterator<Item = (StyleKey, &str)> + '_ {
        let fg = (0..=255u8).map(|n| (StyleKey::Foreground(n), self.foreground[n as usize].as_str()));
        let bg = (0..=255u8).map(|n| (StyleKey::Background(n), self.background[n as usize].as_str()));
        fg.chain(bg)
    }
}

/// The shared style table.
pub fn style_table() -> &'static StyleTable {
    static TABLE: OnceLock<StyleTable> = OnceLock::new();
    TABLE.get_or_init(StyleTable::build)
}

fn hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
