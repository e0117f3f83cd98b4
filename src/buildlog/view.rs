//! Incremental build log viewer.
//!
//! Pages are applied in poll order. Every section owns its own filter so a
//! color left open at the end of one command never bleeds into the next,
//! while styles carry over between lines of the same command.

use std::fmt::Write;

use tracing::debug;

use super::{BuildLogError, EntryKind, LogEntry, LogPage};
use crate::filter::{AnsiFilter, FilterOptions};

/// A rendered output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Index of the entry in the whole log
    pub index: usize,
    /// Balanced HTML for this line
    pub html: String,
}

/// A header entry and the output lines that follow it.
#[derive(Debug, Clone)]
pub struct LogSection {
    index: Option<usize>,
    header: Option<LogEntry>,
    lines: Vec<LogLine>,
    filter: AnsiFilter,
}

impl LogSection {
    fn new(options: &FilterOptions, index: Option<usize>, header: Option<LogEntry>) -> Self {
        Self {
            index,
            header,
            lines: Vec::new(),
            filter: AnsiFilter::new(options.clone()),
        }
    }

    /// Index of the header entry; `None` for output that preceded any header.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn header(&self) -> Option<&LogEntry> {
        self.header.as_ref()
    }

    pub fn kind(&self) -> EntryKind {
        self.header
            .as_ref()
            .map(|h| h.kind)
            .unwrap_or(EntryKind::Entry)
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Tags still open in this section's filter.
    pub fn open_depth(&self) -> usize {
        self.filter.depth()
    }

    fn push_line(&mut self, index: usize, entry: &LogEntry) {
        // Order matters: setup reflects state before this line's input.
        let setup = self.filter.setup_html();
        let body = self.filter.add_input(entry.text());
        let teardown = self.filter.teardown_html();
        self.lines.push(LogLine {
            index,
            html: format!("{}{}{}", setup, body, teardown),
        });
    }

    /// Header markup, empty for a header-less section.
    pub fn header_html(&self) -> String {
        let Some(header) = &self.header else {
            return String::new();
        };
        let mut out = String::from("<div class=\"log-header\">");
        if let Some(ts) = header.timestamp() {
            let _ = write!(out, "<span class=\"log-time\">{}</span>", ts.format("%H:%M:%S"));
        }
        let mut filter = AnsiFilter::new(self.filter.options().clone());
        out.push_str(&filter.to_html(header.text()));
        out.push_str("</div>");
        out
    }

    pub fn render_html(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, "<div class=\"log-section log-{}\"", self.kind().as_str());
        if let Some(index) = self.index {
            let _ = write!(out, " data-index=\"{}\"", index);
        }
        out.push('>');
        out.push_str(&self.header_html());
        for line in &self.lines {
            let _ = write!(
                out,
                "<div class=\"log-line\"><span class=\"log-index\">{}</span>{}</div>",
                line.index, line.html
            );
        }
        out.push_str("</div>");
        out
    }
}

/// Accumulates polled log pages into rendered sections.
#[derive(Debug, Clone, Default)]
pub struct BuildLogView {
    options: FilterOptions,
    sections: Vec<LogSection>,
    next_index: usize,
}

impl BuildLogView {
    pub fn new(options: FilterOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
            next_index: 0,
        }
    }

    /// Index of the next entry expected; use it as the next poll's start.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    pub fn sections(&self) -> &[LogSection] {
        &self.sections
    }

    /// Number of entries applied so far.
    pub fn len(&self) -> usize {
        self.next_index
    }

    pub fn is_empty(&self) -> bool {
        self.next_index == 0
    }

    /// Apply one page, returning how many new entries it contributed.
    ///
    /// Entries already applied by an earlier, overlapping page are skipped.
    /// A page that starts beyond [`next_index`](Self::next_index) would leave
    /// a hole and is rejected.
    pub fn ingest(&mut self, page: LogPage) -> Result<usize, BuildLogError> {
        if page.start > self.next_index {
            return Err(BuildLogError::Gap {
                expected: self.next_index,
                start: page.start,
            });
        }

        let seen = self.next_index - page.start;
        if seen > 0 {
            debug!(start = page.start, seen, "Skipping entries already applied");
        }

        let before = self.next_index;
        for entry in page.logs.into_iter().skip(seen) {
            self.push_entry(entry);
        }

        if let Some(total) = page.total {
            if total > self.next_index {
                debug!(
                    total,
                    received = self.next_index,
                    "Page reports more entries than it carried"
                );
            }
        }

        Ok(self.next_index - before)
    }

    /// Append one entry at [`next_index`](Self::next_index).
    pub fn push_entry(&mut self, entry: LogEntry) {
        let index = self.next_index;
        self.next_index += 1;

        if entry.kind.opens_section() {
            self.sections
                .push(LogSection::new(&self.options, Some(index), Some(entry)));
            return;
        }

        if self.sections.is_empty() {
            self.sections.push(LogSection::new(&self.options, None, None));
        }
        if let Some(section) = self.sections.last_mut() {
            section.push_line(index, &entry);
        }
    }

    /// Markup for every section, in order.
    pub fn render_html(&self) -> String {
        self.sections.iter().map(LogSection::render_html).collect()
    }

    /// Plain text title for the log: the first phase or command message.
    pub fn title(&self) -> Option<String> {
        self.sections
            .iter()
            .filter_map(|s| s.header())
            .find(|h| h.kind != EntryKind::Error)
            .map(|h| h.text().to_string())
    }
}
