//! Default keybindings for line edits
//!
//! The embedded keymap.yaml is the source of truth; the hardcoded list is
//! only used if it fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::EditCommand;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Get the embedded default keymap YAML
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Bindings from the embedded YAML, or the hardcoded defaults if it fails to parse
pub fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Load and merge keymaps: defaults + user overrides
///
/// User bindings with `command: Unbound` remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = embedded_bindings();

    match crate::config_paths::keymap_file() {
        Some(path) if path.exists() => merge_user_keymap(bindings, &path),
        _ => bindings,
    }
}

/// Merge the keymap file at `path` over `bindings`, keeping `bindings` on error
pub fn merge_user_keymap(bindings: Vec<Keybinding>, path: &Path) -> Vec<Keybinding> {
    match load_keymap_file(path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                path.display(),
                user_bindings.len()
            );
            merge_bindings(bindings, user_bindings)
        }
        Err(e) => {
            tracing::warn!("Failed to load user keymap from {}: {}", path.display(), e);
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// - Same keystroke → user binding replaces the base one
/// - `Unbound` → removes the base binding for that keystroke
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == EditCommand::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded defaults for the current platform
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let bind = |key: KeyCode, mods: Modifiers, command: EditCommand| {
        Keybinding::new(Keystroke::new(key, mods), command)
    };
    let none = Modifiers::NONE;

    vec![
        bind(KeyCode::Left, none, EditCommand::MoveLeft),
        bind(KeyCode::Right, none, EditCommand::MoveRight),
        bind(KeyCode::Home, none, EditCommand::MoveHome),
        bind(KeyCode::End, none, EditCommand::MoveEnd),
        bind(KeyCode::Backspace, none, EditCommand::DeleteBackward),
        bind(KeyCode::Delete, none, EditCommand::DeleteForward),
        bind(KeyCode::Enter, none, EditCommand::Commit),
        bind(KeyCode::Escape, none, EditCommand::Revert),
        bind(KeyCode::Char('a'), cmd, EditCommand::SelectAll),
        bind(KeyCode::Char('c'), cmd, EditCommand::Copy),
        bind(KeyCode::Char('x'), cmd, EditCommand::Cut),
        bind(KeyCode::Char('v'), cmd, EditCommand::Paste),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_replaces_same_keystroke() {
        let enter = Keystroke::key(KeyCode::Enter);
        let merged = merge_bindings(
            default_bindings(),
            vec![Keybinding::new(enter, EditCommand::Revert)],
        );
        let found: Vec<_> = merged.iter().filter(|b| b.keystroke == enter).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].command, EditCommand::Revert);
    }

    #[test]
    fn test_merge_unbound_removes() {
        let escape = Keystroke::key(KeyCode::Escape);
        let merged = merge_bindings(
            default_bindings(),
            vec![Keybinding::new(escape, EditCommand::Unbound)],
        );
        assert!(merged.iter().all(|b| b.keystroke != escape));
    }

    #[test]
    fn test_merge_user_keymap_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keymap.yaml");
        std::fs::write(&path, "bindings:\n  - key: \"tab\"\n    command: Commit\n").unwrap();
        let merged = merge_user_keymap(default_bindings(), &path);
        assert!(merged
            .iter()
            .any(|b| b.keystroke == Keystroke::key(KeyCode::Tab) && b.command == EditCommand::Commit));
    }

    #[test]
    fn test_merge_user_keymap_invalid_keeps_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keymap.yaml");
        std::fs::write(&path, "not: [valid").unwrap();
        let merged = merge_user_keymap(default_bindings(), &path);
        assert_eq!(merged, default_bindings());
    }
}
