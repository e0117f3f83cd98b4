//! Unit tests for the style table

use ansihtml::filter::{style_table, StyleKey, NAMED_COLORS};

#[test]
fn named_colors_match_table() {
    let table = style_table();
    for (index, color) in NAMED_COLORS.iter().enumerate() {
        assert_eq!(table.color(index as u8), *color);
    }
}

#[test]
fn cube_spans_black_to_white() {
    let table = style_table();
    assert_eq!(table.color(16), "#000000");
    assert_eq!(table.color(231), "#ffffff");
}

#[test]
fn grayscale_start_and_end_differ() {
    let table = style_table();
    assert_ne!(table.color(232), table.color(255));
}

#[test]
fn every_index_has_both_declarations() {
    let table = style_table();
    for n in 0..=255u8 {
        let fg = table.get(StyleKey::Foreground(n)).unwrap();
        let bg = table.get(StyleKey::Background(n)).unwrap();
        assert_eq!(fg, format!("color:{}", table.color(n)));
        assert_eq!(bg, format!("background-color:{}", table.color(n)));
    }
}

#[test]
fn keys_render_like_css_class_names() {
    let key: StyleKey = "eb42".parse().unwrap();
    assert_eq!(key, StyleKey::Background(42));
    assert_eq!(key.to_string(), "eb42");
}

#[test]
fn table_is_shared() {
    assert!(std::ptr::eq(style_table(), style_table()));
}
