//! Keybinding struct representing a mapping from a keystroke to a command

use super::command::EditCommand;
use super::types::Keystroke;

/// A single keybinding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keybinding {
    pub keystroke: Keystroke,
    pub command: EditCommand,
}

impl Keybinding {
    pub fn new(keystroke: Keystroke, command: EditCommand) -> Self {
        Self { keystroke, command }
    }

    pub fn matches(&self, keystroke: &Keystroke) -> bool {
        self.keystroke == *keystroke
    }
}
