//! Unit tests for config module

use ansihtml::Config;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.filter.foreground, "#FFF");
    assert_eq!(config.filter.background, "#000");
    assert!(!config.filter.newline);
    assert!(config.filter.escape_xml);
    assert!(config.filter.colors.is_empty());
    assert_eq!(config.render.title, "ansihtml");
    assert_eq!(config.render.font_family, "monospace");
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.filter.newline = true;
    config
        .filter
        .colors
        .insert("1".to_string(), "#F44".to_string());
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn filter_section_defaults_when_missing() {
    let toml_str = r#"
[render]
title = "CI logs"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.render.title, "CI logs");
    assert_eq!(config.filter.foreground, "#FFF");
    assert!(config.filter.escape_xml);
}

#[test]
fn palette_overrides_parse_into_filter_options() {
    let toml_str = r##"
[filter]
foreground = "#EEE"
newline = true

[filter.colors]
1 = "#F44"
232 = "rgb(1, 2, 3)"
"##;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.validate().is_ok());
    let options = config.filter_options();
    assert_eq!(options.foreground, "#EEE");
    assert!(options.newline);
    assert_eq!(options.colors.get(&1).map(String::as_str), Some("#F44"));
    assert_eq!(
        options.colors.get(&232).map(String::as_str),
        Some("rgb(1, 2, 3)")
    );
}

#[test]
fn validate_rejects_bad_palette_index() {
    let toml_str = r##"
[filter.colors]
300 = "#FFF"
"##;
    let config: Config = toml::from_str(toml_str).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.contains("300"));
}

#[test]
fn validate_rejects_unsafe_color() {
    let mut config = Config::default();
    config.filter.background = "#000\" onmouseover=\"alert(1)".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn load_from_reports_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[filter]\nforeground = \"\"\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config"));
}

#[test]
fn save_then_load_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.toml");
    let mut config = Config::default();
    config.render.title = "Nightly".to_string();
    config.save_to(&path).unwrap();
    let loaded = Config::load_or_default(Some(path.as_path())).unwrap();
    assert_eq!(loaded.render.title, "Nightly");
}

#[test]
fn page_options_follow_filter_colors() {
    let mut config = Config::default();
    config.filter.background = "#111".to_string();
    let page = config.page_options();
    assert_eq!(page.background, "#111");
    assert_eq!(page.title, "ansihtml");
}
