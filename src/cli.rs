//! Command-line arguments of the demo window
//!
//! Supports:
//! - Initial line-edit text and label caption
//! - Combo box items
//! - Font file and size overrides
//! - An alternate config file

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::WidgetConfig;

/// Font files tried when neither the command line nor the config names one
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// Line edit, combo box and labels on a canvas
#[derive(Parser, Debug)]
#[command(name = "plotwidgets", version, about = "Widget toolkit demo")]
pub struct CliArgs {
    /// Initial text of the line edit
    #[arg(long, default_value = "Hello!")]
    pub text: String,

    /// Caption shown above the line edit
    #[arg(long, default_value = "Title:")]
    pub label: String,

    /// Combo box item (repeatable)
    #[arg(long = "item", value_name = "TEXT")]
    pub items: Vec<String>,

    /// TrueType/OpenType font file
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font size in points
    #[arg(long, value_name = "PT")]
    pub font_size: Option<f32>,

    /// Config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Everything the demo needs, resolved from arguments and config
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub text: String,
    pub label: String,
    pub items: Vec<String>,
    pub widgets: WidgetConfig,
}

impl CliArgs {
    /// Merge the arguments over `widgets` (the loaded config)
    pub fn into_config(self, mut widgets: WidgetConfig) -> Result<StartupConfig, String> {
        if let Some(size) = self.font_size {
            if !size.is_finite() || size <= 0.0 {
                return Err(format!("Font size must be positive, got {}", size));
            }
            widgets.font_size = size;
        }
        if self.font.is_some() {
            widgets.font = self.font;
        }

        let items = if self.items.is_empty() {
            ["linear", "log", "symlog", "logit"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.items
        };

        Ok(StartupConfig {
            text: self.text,
            label: self.label,
            items,
            widgets,
        })
    }

    /// Load the config named by `--config`, or the default one
    pub fn load_widget_config(&self) -> WidgetConfig {
        match &self.config {
            Some(path) => WidgetConfig::load_or_default(path),
            None => WidgetConfig::load(),
        }
    }
}

impl StartupConfig {
    /// The configured font file, or the first system font that exists
    pub fn font_path(&self) -> Option<PathBuf> {
        resolve_font_path(self.widgets.font.as_deref(), SYSTEM_FONT_CANDIDATES)
    }
}

/// `explicit` if given, otherwise the first existing candidate
pub fn resolve_font_path(explicit: Option<&Path>, candidates: &[&str]) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    candidates
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("plotwidgets").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = args(&[]).into_config(WidgetConfig::default()).unwrap();
        assert_eq!(config.text, "Hello!");
        assert_eq!(config.label, "Title:");
        assert_eq!(config.items.len(), 4);
        assert_eq!(config.widgets.font_size, 14.0);
    }

    #[test]
    fn test_overrides() {
        let config = args(&[
            "--text",
            "abc",
            "--item",
            "one",
            "--item",
            "two",
            "--font-size",
            "20",
            "--font",
            "/tmp/font.ttf",
        ])
        .into_config(WidgetConfig::default())
        .unwrap();
        assert_eq!(config.text, "abc");
        assert_eq!(config.items, vec!["one".to_string(), "two".to_string()]);
        assert_eq!(config.widgets.font_size, 20.0);
        assert_eq!(config.font_path(), Some(PathBuf::from("/tmp/font.ttf")));
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let result = args(&["--font-size", "0"]).into_config(WidgetConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_font_path_uses_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let font = dir.path().join("font.ttf");
        std::fs::write(&font, b"not really a font").unwrap();
        let missing = dir.path().join("missing.ttf");
        let candidates = [missing.to_str().unwrap(), font.to_str().unwrap()];

        assert_eq!(resolve_font_path(None, &candidates), Some(font.clone()));
        assert_eq!(resolve_font_path(None, &candidates[..1]), None);
        assert_eq!(
            resolve_font_path(Some(Path::new("/x.ttf")), &candidates),
            Some(PathBuf::from("/x.ttf"))
        );
    }
}
