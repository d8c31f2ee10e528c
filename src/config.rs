//! Widget configuration persistence
//!
//! Stores user preferences in `~/.config/plotwidgets/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::style::{Align, Color, LabelStyle, LineEditStyle};

/// Errors from loading or saving the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoConfigDir,
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Colors used by the widgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub text: Color,
    pub background: Color,
    pub edge: Color,
    pub highlight: Color,
    pub caret: Color,
    pub canvas: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        let style = LineEditStyle::default();
        Self {
            text: style.text,
            background: style.background,
            edge: style.edge,
            highlight: style.highlight,
            caret: style.caret,
            canvas: Color::WHITE,
        }
    }
}

/// Widget configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Font size in points (scaled by the window's scale factor)
    pub font_size: f32,
    /// TrueType/OpenType font file; a system font is searched for if unset
    pub font: Option<PathBuf>,
    /// Left text padding of line edits, in pixels
    pub pad_left: f32,
    /// Caret blink interval in milliseconds; 0 disables blinking
    pub caret_blink_ms: u64,
    /// Alignment of labels
    pub label_align: Align,
    pub colors: ColorConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            font: None,
            pad_left: LineEditStyle::default().pad_left,
            caret_blink_ms: 530,
            label_align: Align::Left,
            colors: ColorConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_or_default(&path)
    }

    /// Load config from `path`, logging and falling back to defaults on error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from `path`
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            crate::config_paths::ensure_dir(parent).map_err(ConfigError::Io)?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn caret_blink(&self) -> Option<Duration> {
        (self.caret_blink_ms > 0).then(|| Duration::from_millis(self.caret_blink_ms))
    }

    pub fn line_edit_style(&self) -> LineEditStyle {
        LineEditStyle {
            text: self.colors.text,
            background: self.colors.background,
            edge: self.colors.edge,
            highlight: self.colors.highlight,
            caret: self.colors.caret,
            pad_left: self.pad_left,
        }
    }

    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            text: self.colors.text,
            align: self.label_align,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_styles() {
        let config = WidgetConfig::default();
        assert_eq!(config.line_edit_style(), LineEditStyle::default());
        assert_eq!(config.caret_blink(), Some(Duration::from_millis(530)));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: WidgetConfig =
            serde_yaml::from_str("font_size: 20\ncolors:\n  highlight: '#FF0000'\n").unwrap();
        assert_eq!(config.font_size, 20.0);
        assert_eq!(config.colors.highlight, Color::rgb(255, 0, 0));
        assert_eq!(config.colors.text, Color::BLACK);
        assert_eq!(config.pad_left, 7.0);
    }

    #[test]
    fn test_blink_disabled() {
        let config = WidgetConfig {
            caret_blink_ms: 0,
            ..WidgetConfig::default()
        };
        assert_eq!(config.caret_blink(), None);
    }
}
