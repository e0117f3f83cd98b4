//! ansihtml library
//!
//! Streaming conversion of ANSI-colored terminal output to HTML, and a
//! build-log viewer that renders polled log pages section by section.

pub mod buildlog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod html;

pub use buildlog::{BuildLogView, EntryKind, LogEntry, LogPage};
pub use config::Config;
pub use filter::{AnsiFilter, FilterOptions};
