//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::EditCommand;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Keystroke to index into bindings; later bindings win
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// The embedded defaults merged with the user's keymap.yaml
    pub fn load_default() -> Self {
        Self::with_bindings(super::defaults::load_default_keymap())
    }

    /// The embedded defaults only, ignoring user overrides
    pub fn embedded() -> Self {
        Self::with_bindings(super::defaults::embedded_bindings())
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == EditCommand::Unbound {
            self.lookup.remove(&binding.keystroke);
            return;
        }
        self.lookup.insert(binding.keystroke, self.bindings.len());
        self.bindings.push(binding);
    }

    /// Resolve a keystroke to a command.
    ///
    /// An exact match wins; otherwise the keystroke is retried without Shift
    /// so that Shift+navigation resolves to the plain movement command.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<EditCommand> {
        self.lookup
            .get(keystroke)
            .or_else(|| {
                if keystroke.mods.shift() {
                    self.lookup.get(&keystroke.without_shift())
                } else {
                    None
                }
            })
            .map(|&idx| self.bindings[idx].command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::{KeyCode, Modifiers};

    fn ctrl_a() -> Keystroke {
        Keystroke::new(KeyCode::Char('a'), Modifiers::CTRL)
    }

    #[test]
    fn test_single_binding_lookup() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(ctrl_a(), EditCommand::SelectAll)]);
        assert_eq!(keymap.lookup(&ctrl_a()), Some(EditCommand::SelectAll));
        assert_eq!(keymap.lookup(&Keystroke::char('a')), None);
    }

    #[test]
    fn test_shift_falls_back_to_plain_binding() {
        let keymap = Keymap::with_bindings(vec![Keybinding::new(
            Keystroke::key(KeyCode::Left),
            EditCommand::MoveLeft,
        )]);
        let shifted = Keystroke::new(KeyCode::Left, Modifiers::SHIFT);
        assert_eq!(keymap.lookup(&shifted), Some(EditCommand::MoveLeft));
    }

    #[test]
    fn test_exact_shift_binding_wins() {
        let shifted = Keystroke::new(KeyCode::Delete, Modifiers::SHIFT);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(Keystroke::key(KeyCode::Delete), EditCommand::DeleteForward),
            Keybinding::new(shifted, EditCommand::Cut),
        ]);
        assert_eq!(keymap.lookup(&shifted), Some(EditCommand::Cut));
    }

    #[test]
    fn test_later_binding_overrides() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_a(), EditCommand::SelectAll),
            Keybinding::new(ctrl_a(), EditCommand::MoveHome),
        ]);
        assert_eq!(keymap.lookup(&ctrl_a()), Some(EditCommand::MoveHome));
    }

    #[test]
    fn test_unbound_removes_binding() {
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(ctrl_a(), EditCommand::SelectAll),
            Keybinding::new(ctrl_a(), EditCommand::Unbound),
        ]);
        assert_eq!(keymap.lookup(&ctrl_a()), None);
    }
}
