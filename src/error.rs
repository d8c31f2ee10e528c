//! Error types shared by the widgets.

use crate::widget::EditState;

/// Errors raised by widget construction and input handling.
///
/// Only `InvalidArgument` ever reaches callers of the input handlers'
/// constructors. Everything produced while handling input is logged and
/// absorbed so the host's event loop keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// A constructor argument was rejected
    InvalidArgument(String),
    /// Metrics or canvas access before the widget was attached
    NotRendered,
    /// The clipboard could not be read or written
    ClipboardUnavailable(String),
    /// The current state has no transition for this input
    UnhandledTransition { state: EditState, input: String },
}

impl WidgetError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        WidgetError::InvalidArgument(msg.into())
    }

    pub fn unhandled(state: EditState, input: impl Into<String>) -> Self {
        WidgetError::UnhandledTransition {
            state,
            input: input.into(),
        }
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            WidgetError::NotRendered => write!(f, "Widget has not been attached to a canvas"),
            WidgetError::ClipboardUnavailable(e) => write!(f, "Clipboard unavailable: {}", e),
            WidgetError::UnhandledTransition { state, input } => {
                write!(f, "Unhandled input in state {:?}: {}", state, input)
            }
        }
    }
}

impl std::error::Error for WidgetError {}
