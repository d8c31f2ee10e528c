//! Edit commands that key bindings resolve to

use std::fmt;
use std::str::FromStr;

use crate::editable::MoveTarget;

/// All line-edit commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditCommand {
    // ========================================================================
    // Caret movement (Shift extends the selection)
    // ========================================================================
    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,

    // ========================================================================
    // Text editing
    // ========================================================================
    /// Delete the selection or the character before the caret
    DeleteBackward,
    /// Delete the selection or the character after the caret
    DeleteForward,

    // ========================================================================
    // Edit lifecycle
    // ========================================================================
    /// Accept the text and notify
    Commit,
    /// Restore the text from before editing began
    Revert,

    // ========================================================================
    // Selection and clipboard
    // ========================================================================
    SelectAll,
    Copy,
    Cut,
    Paste,

    /// Explicitly unbound - disables a default binding
    Unbound,
}

impl EditCommand {
    /// Caret target for movement commands
    pub fn move_target(self) -> Option<MoveTarget> {
        match self {
            EditCommand::MoveLeft => Some(MoveTarget::Left),
            EditCommand::MoveRight => Some(MoveTarget::Right),
            EditCommand::MoveHome => Some(MoveTarget::Home),
            EditCommand::MoveEnd => Some(MoveTarget::End),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn display_name(self) -> &'static str {
        match self {
            EditCommand::MoveLeft => "Move Left",
            EditCommand::MoveRight => "Move Right",
            EditCommand::MoveHome => "Move to Start",
            EditCommand::MoveEnd => "Move to End",
            EditCommand::DeleteBackward => "Delete Backward",
            EditCommand::DeleteForward => "Delete Forward",
            EditCommand::Commit => "Commit",
            EditCommand::Revert => "Revert",
            EditCommand::SelectAll => "Select All",
            EditCommand::Copy => "Copy",
            EditCommand::Cut => "Cut",
            EditCommand::Paste => "Paste",
            EditCommand::Unbound => "Unbound",
        }
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EditCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MoveLeft" => Ok(EditCommand::MoveLeft),
            "MoveRight" => Ok(EditCommand::MoveRight),
            "MoveHome" => Ok(EditCommand::MoveHome),
            "MoveEnd" => Ok(EditCommand::MoveEnd),
            "DeleteBackward" => Ok(EditCommand::DeleteBackward),
            "DeleteForward" => Ok(EditCommand::DeleteForward),
            "Commit" => Ok(EditCommand::Commit),
            "Revert" => Ok(EditCommand::Revert),
            "SelectAll" => Ok(EditCommand::SelectAll),
            "Copy" => Ok(EditCommand::Copy),
            "Cut" => Ok(EditCommand::Cut),
            "Paste" => Ok(EditCommand::Paste),
            "Unbound" => Ok(EditCommand::Unbound),
            _ => Err(()),
        }
    }
}
