//! HTML helpers: text escaping and standalone page rendering.

use std::borrow::Cow;
use std::fmt::Write;

use crate::filter::{DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};

/// Escape `&`, `<`, `>`, `"` and `'` for inclusion in HTML text or attributes.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Settings for a standalone HTML page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub title: String,
    pub foreground: String,
    pub background: String,
    pub font_family: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "ansihtml".to_string(),
            foreground: DEFAULT_FOREGROUND.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            font_family: "monospace".to_string(),
        }
    }
}

/// Stylesheet used by build-log pages.
const LOG_CSS: &str = "\
.log-section { margin: 0 0 1em 0; }
.log-header { font-weight: bold; }
.log-header .log-time { opacity: 0.6; margin-right: 1ch; }
.log-phase .log-header { text-transform: uppercase; }
.log-error .log-header { color: #F55; }
.log-line { white-space: pre-wrap; }
.log-index { display: inline-block; min-width: 5ch; opacity: 0.5; user-select: none; }
";

/// Wrap an HTML fragment in a complete document.
///
/// `body` is inserted verbatim inside a `<pre>`; it must already be HTML.
pub fn render_page(options: &PageOptions, body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&options.title));
    out.push_str("<style>\n");
    let _ = writeln!(
        out,
        "body {{ margin: 0; color: {}; background-color: {}; }}",
        options.foreground, options.background
    );
    let _ = writeln!(
        out,
        "pre {{ margin: 0; padding: 1em; font-family: {}; }}",
        options.font_family
    );
    out.push_str(LOG_CSS);
    out.push_str("</style>\n</head>\n<body>\n<pre>");
    out.push_str(body);
    out.push_str("</pre>\n</body>\n</html>\n");
    out
}
