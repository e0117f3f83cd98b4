//! CLI output tests
//!
//! Runs the actual binary with an isolated config file.

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{ansihtml, fixture_path};

#[test]
fn convert_stdin_to_fragment() {
    let temp_dir = TempDir::new().unwrap();
    let output = ansihtml(&temp_dir)
        .arg("convert")
        .write_stdin("\x1b[31mred\x1b[0m <tag>")
        .output()
        .unwrap();
    assert!(output.status.success());
    insta::assert_snapshot!(
        String::from_utf8_lossy(&output.stdout),
        @r#"<span style="color:#A00">red</span> &lt;tag&gt;"#
    );
}

#[test]
fn convert_with_newline_flag() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["convert", "--newline"])
        .write_stdin("a\nb")
        .assert()
        .success()
        .stdout("a<br/>b");
}

#[test]
fn convert_stream_closes_open_tags() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["convert", "--stream"])
        .write_stdin("\x1b[1mone\ntwo")
        .assert()
        .success()
        .stdout("<b>one\ntwo</b>");
}

#[test]
fn convert_stream_writes_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("stream.html");
    ansihtml(&temp_dir)
        .args(["convert", "--stream", "-o"])
        .arg(&out)
        .write_stdin("\x1b[1mhi")
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&out).unwrap(), "<b>hi</b>");
}

#[test]
fn convert_stream_rejects_title() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["convert", "--stream", "--title", "live"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--title"));
}

#[test]
fn convert_uses_config_colors() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.toml"),
        "[filter]\nforeground = \"#EEE\"\n\n[filter.colors]\n1 = \"#F44\"\n",
    )
    .unwrap();
    ansihtml(&temp_dir)
        .arg("convert")
        .write_stdin("\x1b[31ma\x1b[39mb")
        .assert()
        .success()
        .stdout("<span style=\"color:#F44\">a<span style=\"color:#EEE\">b</span></span>");
}

#[test]
fn convert_file_to_page() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out.html");
    ansihtml(&temp_dir)
        .arg("convert")
        .arg(fixture_path("colored.log"))
        .arg("-o")
        .arg(&out)
        .args(["--page", "--title", "CI run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"));
    let html = fs::read_to_string(out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>CI run</title>"));
    assert!(html.contains("<b>Building</b>"));
}

#[test]
fn convert_batch_into_directory() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("html");
    let second = temp_dir.path().join("second.log");
    fs::write(&second, "\x1b[4munderlined").unwrap();
    ansihtml(&temp_dir)
        .arg("convert")
        .arg(fixture_path("colored.log"))
        .arg(&second)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();
    assert!(out_dir.join("colored.html").exists());
    assert_eq!(
        fs::read_to_string(out_dir.join("second.html")).unwrap(),
        "<u>underlined</u>"
    );
}

#[test]
fn convert_rejects_unsafe_color_flag() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["convert", "--fg", "red;x"])
        .write_stdin("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--fg"));
}

#[test]
fn build_log_fragment() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .arg("build-log")
        .arg(fixture_path("build_log.json"))
        .arg("--fragment")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "<div class=\"log-section log-phase\" data-index=\"0\">",
        ))
        .stdout(predicate::str::contains("<!DOCTYPE").not());
}

#[test]
fn build_log_page_title_defaults_to_first_phase() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .arg("build-log")
        .arg(fixture_path("build_log.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>building</title>"));
}

#[test]
fn build_log_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["build-log", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read build log"));
}

#[test]
fn palette_css_lists_all_classes() {
    let temp_dir = TempDir::new().unwrap();
    let output = ansihtml(&temp_dir)
        .args(["palette", "--css"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 512);
    insta::assert_snapshot!(stdout.lines().nth(1).unwrap(), @".ef1 { color:#A00; }");
}

#[test]
fn config_show_prints_toml() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[filter]"))
        .stdout(predicate::str::contains("foreground = \"#FFF\""));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    // The helper already created an (empty) config file
    ansihtml(&temp_dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    ansihtml(&temp_dir)
        .args(["config", "init", "--force"])
        .assert()
        .success();
    let written = fs::read_to_string(temp_dir.path().join("config.toml")).unwrap();
    assert!(written.contains("escape_xml = true"));
}

#[test]
fn version_flag() {
    let temp_dir = TempDir::new().unwrap();
    ansihtml(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ansihtml "));
}
