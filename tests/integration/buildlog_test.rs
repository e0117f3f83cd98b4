//! Build log viewer tests against a recorded poll sequence.

use ansihtml::buildlog::{BuildLogView, LogDump};
use ansihtml::{EntryKind, FilterOptions};

use crate::helpers::{assert_balanced, fixture_path};

fn fixture_view() -> BuildLogView {
    let dump = LogDump::load(&fixture_path("build_log.json")).unwrap();
    let mut view = BuildLogView::new(FilterOptions::default());
    for page in dump.into_pages() {
        view.ingest(page).unwrap();
    }
    view
}

#[test]
fn overlapping_polls_are_deduplicated() {
    let view = fixture_view();
    assert_eq!(view.next_index(), 6);
    let kinds: Vec<_> = view.sections().iter().map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![EntryKind::Phase, EntryKind::Command, EntryKind::Error]
    );
    let indices: Vec<_> = view.sections()[1]
        .lines()
        .iter()
        .map(|l| l.index)
        .collect();
    assert_eq!(indices, vec![2, 3, 4]);
}

#[test]
fn each_line_is_balanced_and_carries_color() {
    let view = fixture_view();
    let lines = view.sections()[1].lines();
    assert_eq!(lines[0].html, "<b>compiling</b> main.c");
    assert_eq!(
        lines[1].html,
        "<span style=\"color:#A00\">error: &lt;stdio.h&gt; missing</span>"
    );
    assert_eq!(
        lines[2].html,
        "<span style=\"color:#A00\">make: *** [all] Error 1</span>"
    );
    for line in lines {
        assert_balanced(&line.html);
    }
}

#[test]
fn rendered_markup_is_balanced() {
    let view = fixture_view();
    let html = view.render_html();
    assert_balanced(&html);
    assert!(html.contains("<span class=\"log-time\">18:22:12</span>building"));
    assert!(html.contains("<div class=\"log-section log-error\" data-index=\"5\">"));
    assert_eq!(view.title().as_deref(), Some("building"));
}

#[test]
fn error_entry_keeps_its_data() {
    let view = fixture_view();
    let header = view.sections()[2].header().unwrap();
    assert_eq!(header.text(), "build failed");
    assert_eq!(
        header.data.as_ref().and_then(|d| d["base_error"].as_str()),
        Some("exit 2")
    );
}
