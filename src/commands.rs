//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after a widget
//! has handled an event.

/// Side-effect commands returned from widget event handlers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the canvas
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Combine two optional commands, keeping both side effects
    pub fn merge(a: Option<Cmd>, b: Option<Cmd>) -> Option<Cmd> {
        match (a, b) {
            (None, b) => b,
            (a, None) => a,
            (Some(Cmd::None), b) => b,
            (a, Some(Cmd::None)) => a,
            (Some(Cmd::Redraw), Some(Cmd::Redraw)) => Some(Cmd::Redraw),
            (Some(a), Some(b)) => Some(Cmd::Batch(vec![a, b])),
        }
    }
}
