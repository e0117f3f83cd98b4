//! Palette command handler

use anyhow::Result;
use std::fmt::Write;

use ansihtml::filter::style_table;

use super::write_output;

/// Print the style table, either as `key  declaration` rows or as CSS classes.
#[cfg(not(tarpaulin_include))]
pub fn handle(css: bool) -> Result<()> {
    write_output(None, &render(css))
}

pub fn render(css: bool) -> String {
    let mut out = String::new();
    for (key, declaration) in style_table().entries() {
        if css {
            let _ = writeln!(out, ".{} {{ {}; }}", key, declaration);
        } else {
            let _ = writeln!(out, "{:<6} {}", key.to_string(), declaration);
        }
    }
    out
}
