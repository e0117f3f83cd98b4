//! Build log errors.

use std::path::PathBuf;

/// Errors raised while loading or applying build log pages.
#[derive(Debug, thiserror::Error)]
pub enum BuildLogError {
    #[error("Log page starts at index {start} but index {expected} was expected next")]
    Gap { expected: usize, start: usize },

    #[error("Failed to read build log {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid build log JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
