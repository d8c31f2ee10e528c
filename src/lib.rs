//! plotwidgets - labels, line edits and combo boxes on an abstract canvas
//!
//! Widgets are driven Elm-style: the host delivers input events, widgets
//! update their own state and answer with a `Cmd` telling the host whether
//! to redraw. The line edit's state machine (idle, selecting, selected,
//! typing) implements caret placement, selection, clipboard and keyboard
//! editing on top of a canvas that has no text input of its own.

pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod error;
pub mod host;
pub mod keymap;
pub mod metrics;
pub mod style;
pub mod tracing;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetConfig;
pub use error::WidgetError;
pub use host::{Canvas, HeadlessCanvas, InputEvent, Rect, Widget, WidgetHost};
pub use widget::{ComboBox, EditState, Label, LineEdit};
