//! Config and keymap files

mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use common::{test_shortcuts, unpadded_style, Harness, EDIT_REGION};
use plotwidgets::clipboard::MemoryClipboard;
use plotwidgets::config::WidgetConfig;
use plotwidgets::keymap::{
    embedded_bindings, merge_user_keymap, EditCommand, KeyCode, Keymap, Keystroke, Modifiers,
};
use plotwidgets::host::{InputEvent, KeyEvent};
use plotwidgets::style::{Align, Color};
use plotwidgets::widget::{EditState, LineEdit};

#[test]
fn test_config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = WidgetConfig::default();
    config.font_size = 18.0;
    config.caret_blink_ms = 0;
    config.label_align = Align::Right;
    config.colors.highlight = Color::rgb(0x12, 0x34, 0x56);
    config.save_to(&path).unwrap();

    let loaded = WidgetConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.caret_blink(), None);
    assert_eq!(loaded.label_style().align, Align::Right);
    assert_eq!(loaded.line_edit_style().highlight, Color::rgb(0x12, 0x34, 0x56));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "font_size: 20.0\n").unwrap();

    let loaded = WidgetConfig::load_or_default(&path);
    assert_eq!(loaded.font_size, 20.0);
    assert_eq!(loaded.colors, WidgetConfig::default().colors);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "font_size: [not, a, number").unwrap();

    assert!(WidgetConfig::load_from(&path).is_err());
    assert_eq!(WidgetConfig::load_or_default(&path), WidgetConfig::default());
    assert_eq!(
        WidgetConfig::load_or_default(&dir.path().join("missing.yaml")),
        WidgetConfig::default()
    );
}

#[test]
fn test_user_keymap_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(
        &path,
        r#"
bindings:
  - key: "ctrl+e"
    command: MoveEnd
  - key: "escape"
    command: Unbound
"#,
    )
    .unwrap();

    let keymap = Keymap::with_bindings(merge_user_keymap(embedded_bindings(), &path));
    let ctrl_e = Keystroke::char_with_mods('e', Modifiers::CTRL);
    assert_eq!(keymap.lookup(&ctrl_e), Some(EditCommand::MoveEnd));
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Escape)), None);
    assert_eq!(keymap.lookup(&Keystroke::key(KeyCode::Enter)), Some(EditCommand::Commit));

    // The merged keymap drives a line edit
    let table = test_shortcuts();
    let edit = LineEdit::with_style(EDIT_REGION, "hello", unpadded_style())
        .unwrap()
        .with_clipboard(MemoryClipboard::new())
        .with_shortcuts(Arc::clone(&table))
        .with_keymap(Rc::new(keymap));
    let mut h = Harness::from_edit(edit, MemoryClipboard::new(), table, Rc::new(RefCell::new(Vec::new())));

    h.click_at(1);
    h.send(InputEvent::KeyDown(KeyEvent::char('e').with_mods(Modifiers::CTRL)));
    assert_eq!(h.caret(), 5);

    h.key(KeyCode::Escape);
    assert_eq!(h.state(), EditState::Typing);
}

#[test]
fn test_broken_user_keymap_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keymap.yaml");
    std::fs::write(&path, "bindings:\n  - key: \"ctrl+e\"\n    command: Teleport\n").unwrap();

    let merged = merge_user_keymap(embedded_bindings(), &path);
    assert_eq!(merged.len(), embedded_bindings().len());
}
