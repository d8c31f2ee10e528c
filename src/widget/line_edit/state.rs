//! The four edit states of a line edit.

use std::fmt;

/// Edit state of a line edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditState {
    /// Not editing; caret and selection hidden
    #[default]
    Idle,
    /// A selection is being made with the pointer or Shift
    Selecting,
    /// A finished selection is shown
    Selected,
    /// Caret only
    Typing,
}

impl EditState {
    /// True in every state but Idle
    pub fn is_editing(self) -> bool {
        self != EditState::Idle
    }

    pub fn name(self) -> &'static str {
        match self {
            EditState::Idle => "Idle",
            EditState::Selecting => "Selecting",
            EditState::Selected => "Selected",
            EditState::Typing => "Typing",
        }
    }
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
