use super::{AppState, FileMode, Focus, View};
use crate::config::Config;
use crate::tracker::TriggerBand;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Headings on lines 0, 10, 20 and 30 of a 40-line document.
fn write_doc(dir: &TempDir, name: &str) -> PathBuf {
    let mut lines = vec!["text".to_string(); 40];
    lines[0] = "# Title".to_string();
    lines[10] = "## Alpha".to_string();
    lines[20] = "## Beta".to_string();
    lines[30] = "### Gamma".to_string();
    for i in [1, 9, 11, 19, 21, 29, 31] {
        lines[i] = String::new();
    }
    let path = dir.path().join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

fn open_single() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let path = write_doc(&dir, "post.md");
    let mut app = AppState::new(vec![path], &Config::default(), TriggerBand::default());
    app.open_current();
    (dir, app)
}

#[test]
fn test_open_single_file() {
    let (_dir, app) = open_single();
    assert_eq!(app.file_mode, FileMode::Single);
    assert_eq!(app.current_view, View::Reader);
    let reader = app.reader.as_ref().unwrap();
    assert_eq!(reader.entries().len(), 4);
    assert_eq!(reader.active(), None, "nothing active before the first layout");
    assert_eq!(reader.tracker.observed(), vec!["title", "alpha", "beta", "gamma"]);
}

#[test]
fn test_scrolling_updates_active_and_contents() {
    let (_dir, mut app) = open_single();
    let reader = app.reader.as_mut().unwrap();
    reader.resize(10);
    assert_eq!(reader.active(), Some("title"));

    reader.scroll_to(10);
    assert_eq!(reader.active(), Some("alpha"));
    assert_eq!(reader.selected, 1);
    let active: Vec<&str> = reader
        .entries()
        .into_iter()
        .filter(|item| item.active)
        .map(|item| item.slug.as_str())
        .collect();
    assert_eq!(active, vec!["alpha"]);

    reader.scroll_by(3);
    assert_eq!(reader.active(), Some("alpha"));
}

#[test]
fn test_navigate_selected_scrolls_to_heading() {
    let (_dir, mut app) = open_single();
    app.toggle_focus();
    assert_eq!(app.focus, Focus::Contents);
    {
        let reader = app.reader.as_mut().unwrap();
        reader.resize(10);
        reader.move_selection(3);
        assert_eq!(reader.selected, 3);
        reader.move_selection(10);
        assert_eq!(reader.selected, 3, "selection clamps to the last entry");
    }
    app.navigate_selected();
    assert_eq!(app.message.as_deref(), Some("#gamma"));
    let reader = app.reader.as_mut().unwrap();
    assert_eq!(reader.active(), Some("gamma"));
    assert_eq!(reader.tracker.surface().offset(), 30);

    // Not sticky: scrolling back up hands control to visibility events again.
    reader.scroll_to(20);
    assert_eq!(reader.active(), Some("beta"));
}

#[test]
fn test_back_and_reopen_in_multi_mode() {
    let dir = TempDir::new().unwrap();
    let first = write_doc(&dir, "a.md");
    let second = write_doc(&dir, "b.md");
    let mut app = AppState::new(vec![first, second], &Config::default(), TriggerBand::default());
    assert_eq!(app.file_mode, FileMode::Multi);
    assert_eq!(app.current_view, View::FileList);

    app.move_file_selection(1);
    app.open_current();
    assert_eq!(app.current_view, View::Reader);
    assert!(!app.back(), "multi mode returns to the file list");
    assert_eq!(app.current_view, View::FileList);
    assert!(app.reader.is_none());
    app.move_file_selection(-5);
    assert_eq!(app.current_file_index, 0);
}

#[test]
fn test_back_quits_single_mode() {
    let (_dir, mut app) = open_single();
    assert!(app.back());
}

#[test]
fn test_unreadable_document_reports_message() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.md");
    fs::write(&bad, "---\n- not\n- a mapping\n---\n# Heading\n").unwrap();
    let good = write_doc(&dir, "good.md");
    let mut app = AppState::new(vec![bad, good], &Config::default(), TriggerBand::default());
    app.open_current();
    assert_eq!(app.current_view, View::FileList);
    assert!(app.reader.is_none());
    assert!(app.message.as_deref().unwrap_or_default().starts_with("Cannot open"));
}

#[test]
fn test_switching_documents_unmounts_previous() {
    let dir = TempDir::new().unwrap();
    let first = write_doc(&dir, "a.md");
    let second = write_doc(&dir, "b.md");
    let mut app = AppState::new(vec![first, second], &Config::default(), TriggerBand::default());
    app.open_current();
    app.reader.as_mut().unwrap().resize(10);
    app.current_file_index = 1;
    app.open_current();
    let reader = app.reader.as_ref().unwrap();
    assert!(reader.tracker.is_mounted());
    assert_eq!(reader.active(), None, "fresh tracker for the new document");
}
