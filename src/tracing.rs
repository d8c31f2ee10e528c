//! Tracing setup and state snapshots for diagnosing edit transitions
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=plotwidgets::widget=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/plotwidgets/logs/plotwidgets.log` with daily
//! rotation. File logging uses debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::widget::EditState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`).
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "plotwidgets.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of a line edit's state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub state: EditState,
    pub caret: usize,
    pub selection: Option<(usize, usize)>,
    pub len: usize,
}

impl StateSnapshot {
    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.caret != other.caret {
            changes.push(format!("caret: {} → {}", self.caret, other.caret));
        }
        if self.selection != other.selection {
            let describe = |sel: Option<(usize, usize)>| match sel {
                Some((start, end)) => format!("{}..{}", start, end),
                None => "none".to_string(),
            };
            changes.push(format!(
                "selection: {} → {}",
                describe(self.selection),
                describe(other.selection)
            ));
        }
        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(state: EditState, caret: usize, selection: Option<(usize, usize)>) -> StateSnapshot {
        StateSnapshot {
            state,
            caret,
            selection,
            len: 5,
        }
    }

    #[test]
    fn test_diff_identical_is_none() {
        let a = snapshot(EditState::Typing, 2, None);
        assert_eq!(a.diff(&a.clone()), None);
    }

    #[test]
    fn test_diff_lists_changes() {
        let before = snapshot(EditState::Typing, 2, None);
        let after = snapshot(EditState::Selected, 5, Some((0, 5)));
        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("Typing → Selected"));
        assert!(diff.contains("caret: 2 → 5"));
        assert!(diff.contains("none → 0..5"));
    }
}
