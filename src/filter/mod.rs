//! Streaming ANSI to HTML filter.
//!
//! Converts text containing ANSI SGR escape sequences into HTML. The filter
//! keeps a stack of the tags it has opened, so output can be produced
//! incrementally: after any call, [`AnsiFilter::teardown_html`] returns the
//! closing tags that make the output so far well-formed, and
//! [`AnsiFilter::setup_html`] returns the opening tags needed to resume
//! rendering in a fresh container.
//!
//! One filter serves one text stream. Chunks must be fed in arrival order.

mod options;
mod palette;
mod token;

pub use options::{FilterOptions, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND};
pub use palette::{style_table, InvalidStyleKey, StyleKey, StyleTable, NAMED_COLORS};
pub use token::{matching_rule, tokenize, Token, LINE_BREAK};

use crate::html::escape_html;

/// Element kinds the filter opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Span,
    Bold,
    Underline,
    Blink,
    Strike,
}

impl TagKind {
    /// HTML element name.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Span => "span",
            TagKind::Bold => "b",
            TagKind::Underline => "u",
            TagKind::Blink => "blink",
            TagKind::Strike => "strike",
        }
    }

    /// Closing tag, e.g. `</b>`.
    pub fn closing_tag(self) -> String {
        format!("</{}>", self.name())
    }
}

/// A tag that has been opened and not yet closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag {
    /// Rendered opening tag, e.g. `<span style="color:#A00">`
    pub html: String,
    pub kind: TagKind,
}

/// Stateful ANSI to HTML converter.
#[derive(Debug, Clone, Default)]
pub struct AnsiFilter {
    options: FilterOptions,
    stack: Vec<OpenTag>,
}

impl AnsiFilter {
    /// Create a filter with an empty tag stack.
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            stack: Vec::new(),
        }
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Tags currently open, oldest first.
    pub fn open_tags(&self) -> &[OpenTag] {
        &self.stack
    }

    /// Number of tags currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Forget all open tags without emitting anything.
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Convert one chunk of input.
    ///
    /// Returns opening tags, escaped text and any closing tags triggered by
    /// the input itself. Tags still open afterwards stay on the stack for the
    /// next call (or [`teardown_html`](Self::teardown_html)).
    pub fn add_input(&mut self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.process_chunk(input, &mut out);
        out
    }

    /// Convert a sequence of chunks, in order.
    ///
    /// Each chunk is tokenized on its own; an escape sequence split across
    /// two chunks is not reassembled.
    pub fn add_chunks<I, S>(&mut self, chunks: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for chunk in chunks {
            self.process_chunk(chunk.as_ref(), &mut out);
        }
        out
    }

    /// Opening tags of every open frame, oldest first.
    pub fn setup_html(&self) -> String {
        self.stack.iter().map(|tag| tag.html.as_str()).collect()
    }

    /// Closing tags of every open frame, newest first.
    pub fn teardown_html(&self) -> String {
        self.stack
            .iter()
            .rev()
            .map(|tag| tag.kind.closing_tag())
            .collect()
    }

    /// One-shot conversion: returns balanced HTML and leaves the stack empty.
    pub fn to_html(&mut self, input: &str) -> String {
        self.reset();
        let mut out = self.add_input(input);
        out.push_str(&self.teardown_html());
        self.reset();
        out
    }

    fn process_chunk(&mut self, chunk: &str, out: &mut String) {
        for token in tokenize(chunk, self.options.newline) {
            match token {
                Token::Text(text) => {
                    if self.options.escape_xml {
                        out.push_str(&escape_html(text));
                    } else {
                        out.push_str(text);
                    }
                }
                Token::Display(code) => self.handle_display(code, out),
                Token::Xterm256(code) => {
                    if let Ok(index) = u8::try_from(code) {
                        self.push_color(StyleKey::Foreground(index), out);
                    }
                }
            }
        }
    }

    /// Apply one SGR parameter.
    fn handle_display(&mut self, code: i32, out: &mut String) {
        match code {
            LINE_BREAK => out.push_str("<br/>"),
            0 => {
                out.push_str(&self.teardown_html());
                self.stack.clear();
            }
            1 => self.push_tag(TagKind::Bold, out),
            3 | 4 => self.push_tag(TagKind::Underline, out),
            5 | 6 => self.push_tag(TagKind::Blink, out),
            8 => self.push_style("display:none", out),
            9 => self.push_tag(TagKind::Strike, out),
            24 => self.close_tag(TagKind::Underline, out),
            30..=37 => self.push_color(StyleKey::Foreground((code - 30) as u8), out),
            39 => {
                let decl = format!("color:{}", self.options.foreground);
                self.push_style(&decl, out);
            }
            40..=47 => self.push_color(StyleKey::Background((code - 40) as u8), out),
            49 => {
                let decl = format!("background-color:{}", self.options.background);
                self.push_style(&decl, out);
            }
            90..=97 => self.push_color(StyleKey::Foreground((8 + code - 90) as u8), out),
            100..=107 => self.push_color(StyleKey::Background((8 + code - 100) as u8), out),
            _ => {}
        }
    }

    fn push_tag(&mut self, kind: TagKind, out: &mut String) {
        let html = format!("<{}>", kind.name());
        self.push(OpenTag { html, kind }, out);
    }

    fn push_style(&mut self, declaration: &str, out: &mut String) {
        let html = format!("<span style=\"{}\">", declaration);
        self.push(
            OpenTag {
                html,
                kind: TagKind::Span,
            },
            out,
        );
    }

    fn push_color(&mut self, key: StyleKey, out: &mut String) {
        if let Some(decl) = self.options.declaration(key) {
            self.push_style(&decl, out);
        }
    }

    fn push(&mut self, tag: OpenTag, out: &mut String) {
        out.push_str(&tag.html);
        self.stack.push(tag);
    }

    /// Close the innermost tag if, and only if, it is of `kind`.
    fn close_tag(&mut self, kind: TagKind, out: &mut String) {
        if self.stack.last().map(|tag| tag.kind) == Some(kind) {
            self.stack.pop();
            out.push_str(&kind.closing_tag());
        }
    }
}

#[cfg(test)]
mod tests;
