//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The ansihtml binary with an isolated, empty config file.
pub fn ansihtml(temp_dir: &TempDir) -> Command {
    let config = temp_dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "").expect("Failed to write test config");
    }
    let mut cmd = Command::cargo_bin("ansihtml").expect("Failed to find ansihtml binary");
    cmd.arg("--config").arg(config).env("NO_COLOR", "1");
    cmd
}

/// Check that every tag in `html` is closed in the right order.
pub fn assert_balanced(html: &str) {
    let mut open: Vec<String> = Vec::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let end = rest[start..].find('>').expect("unterminated tag") + start;
        let tag = &rest[start + 1..end];
        rest = &rest[end + 1..];
        if tag == "br/" || tag.starts_with('!') || tag == "meta charset=\"utf-8\"" {
            continue;
        }
        if let Some(name) = tag.strip_prefix('/') {
            assert_eq!(
                open.pop().as_deref(),
                Some(name),
                "mismatched close in {:?}",
                html
            );
        } else {
            open.push(tag.split(' ').next().unwrap_or_default().to_string());
        }
    }
    assert!(open.is_empty(), "unclosed tags {:?} in {:?}", open, html);
}
