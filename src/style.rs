//! Colors and widget styles

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// RGBA color, serialized as "#RRGGBB" or "#RRGGBBAA"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to ARGB u32 for softbuffer
    pub fn to_argb_u32(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    pub const fn with_alpha(&self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Horizontal text alignment inside a region
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual style of a line edit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEditStyle {
    pub text: Color,
    pub background: Color,
    pub edge: Color,
    /// Selection highlight
    pub highlight: Color,
    pub caret: Color,
    /// Gap between the left edge and the first character, in pixels
    pub pad_left: f32,
}

impl Default for LineEditStyle {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            background: Color::rgb(0xF2, 0xF2, 0xF2),
            edge: Color::rgb(0x80, 0x80, 0x80),
            highlight: Color::rgb(0x95, 0xA3, 0xFF),
            caret: Color::BLACK,
            pad_left: 7.0,
        }
    }
}

impl LineEditStyle {
    pub fn validate(&self) -> Result<(), WidgetError> {
        if !self.pad_left.is_finite() || self.pad_left < 0.0 {
            return Err(WidgetError::invalid(format!(
                "pad_left must be a non-negative number, got {}",
                self.pad_left
            )));
        }
        Ok(())
    }
}

/// Visual style of a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub text: Color,
    pub align: Align,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text: Color::BLACK,
            align: Align::Left,
        }
    }
}
