//! Configurable keyboard mapping
//!
//! - Maps keystrokes to line-edit commands
//! - Handles the platform command modifier (Cmd on macOS, Ctrl elsewhere)
//! - Loads user overrides from YAML
//! - Owns the host's shortcut table that editing widgets capture
//!
//! # Architecture
//!
//! ```text
//! winit::KeyEvent → Keystroke → Keymap::lookup() → EditCommand → LineEdit
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Embedded defaults merged with ~/.config/plotwidgets/keymap.yaml
//! let keymap = Keymap::load_default();
//!
//! // Or from a YAML file
//! let keymap = Keymap::with_bindings(load_keymap_file(path)?);
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
pub mod shortcuts;
mod types;
mod winit_adapter;

pub use binding::Keybinding;
pub use command::EditCommand;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, embedded_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
    merge_user_keymap,
};
pub use keymap::Keymap;
pub use shortcuts::{HostAction, SharedShortcuts, ShortcutCapture, ShortcutTable};
pub use types::{KeyCode, Keystroke, Modifiers};
pub use winit_adapter::keystroke_from_winit;
