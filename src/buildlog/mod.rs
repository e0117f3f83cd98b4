//! Build log model and viewer.
//!
//! A build log arrives as a series of pages, each holding the entries from
//! some start index onwards. Entries are either headers (`command`, `phase`,
//! `error`) that open a new section, or plain output lines (`entry`) that
//! belong to the most recent section.
//!
//! # Wire format
//!
//! ```json
//! {"start": 0, "total": 2, "logs": [
//!   {"type": "phase", "message": "building"},
//!   {"message": "\u001b[32mStep 1/3\u001b[0m"}
//! ]}
//! ```

mod error;
mod view;

pub use error::BuildLogError;
pub use view::{BuildLogView, LogLine, LogSection};

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Kind of a log entry, from its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Command,
    Phase,
    Error,
    /// Plain output line. Also used for unknown types.
    #[default]
    #[serde(other)]
    Entry,
}

impl EntryKind {
    /// Whether entries of this kind start a new section.
    pub fn opens_section(self) -> bool {
        !matches!(self, EntryKind::Entry)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Entry => "entry",
            EntryKind::Command => "command",
            EntryKind::Phase => "phase",
            EntryKind::Error => "error",
        }
    }
}

/// One record of a build log.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn new(kind: EntryKind, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            kind,
            ..Self::default()
        }
    }

    /// Message text, empty when absent.
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    /// Parse `datetime` as RFC 2822 or RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        let raw = self.datetime.as_deref()?.trim();
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_rfc3339(raw))
            .ok()
    }
}

/// One poll response: entries from `start` onwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogPage {
    #[serde(default)]
    pub start: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    pub logs: Vec<LogEntry>,
}

impl LogPage {
    /// Index to request on the next poll.
    pub fn next_index(&self) -> usize {
        self.total.unwrap_or(self.start + self.logs.len())
    }
}

/// Accepted shapes of a build log dump on disk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LogDump {
    /// A single poll response
    Page(LogPage),
    /// Successive poll responses
    Pages(Vec<LogPage>),
    /// Bare entries starting at index 0
    Entries(Vec<LogEntry>),
}

impl LogDump {
    /// Parse a dump from JSON text.
    pub fn from_json(json: &str) -> Result<Self, BuildLogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a dump file.
    pub fn load(path: &Path) -> Result<Self, BuildLogError> {
        let json = fs::read_to_string(path).map_err(|source| BuildLogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Normalize into pages, in arrival order.
    pub fn into_pages(self) -> Vec<LogPage> {
        match self {
            LogDump::Page(page) => vec![page],
            LogDump::Pages(pages) => pages,
            LogDump::Entries(logs) => vec![LogPage {
                start: 0,
                total: None,
                logs,
            }],
        }
    }
}
