//! Text metrics: per-character pixel boundaries and hit-testing.
//!
//! Widgets measure their content through the `TextMetrics` attached to their
//! surface. `MonospaceMetrics` is a fixed-advance provider for headless use;
//! `FontdueMetrics` measures with a real font.

use std::rc::Rc;

use fontdue::Font;

use crate::error::WidgetError;

/// Pixel offsets of the boundaries of a string.
///
/// Holds `len + 1` offsets: entry `i` is the boundary before character `i`,
/// the last entry is the right edge of the text. Offsets are relative to the
/// text origin and non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundaries(Vec<f32>);

impl Boundaries {
    pub fn new(offsets: Vec<f32>) -> Self {
        debug_assert!(!offsets.is_empty(), "boundaries need at least one offset");
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        Self(offsets)
    }

    /// Boundaries of the empty string
    pub fn empty() -> Self {
        Self(vec![0.0])
    }

    /// Number of characters measured
    pub fn char_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Offset of boundary `index`, clamped to the right edge
    pub fn x_at(&self, index: usize) -> f32 {
        self.0
            .get(index)
            .or_else(|| self.0.last())
            .copied()
            .unwrap_or(0.0)
    }

    /// Total rendered width
    pub fn width(&self) -> f32 {
        self.0.last().copied().unwrap_or(0.0)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Nearest boundary to `x`; ties go to the lower index.
    ///
    /// Points left of the text map to 0, points right of it to the last
    /// boundary.
    pub fn hit_test(&self, x: f32) -> usize {
        let offsets = &self.0;
        if offsets.len() <= 1 {
            return 0;
        }
        // First boundary at or right of x
        let upper = offsets.partition_point(|&b| b < x);
        if upper == 0 {
            return 0;
        }
        if upper == offsets.len() {
            return offsets.len() - 1;
        }
        let to_lower = x - offsets[upper - 1];
        let to_upper = offsets[upper] - x;
        if to_upper < to_lower {
            upper
        } else {
            upper - 1
        }
    }
}

/// Measures strings for layout and hit-testing.
pub trait TextMetrics {
    /// Boundaries of `text`, `len + 1` entries
    fn measure(&self, text: &str) -> Boundaries;

    /// Height of one line of text in pixels
    fn line_height(&self) -> f32;

    /// Character index nearest to `x` within `text`
    fn hit_test(&self, text: &str, x: f32) -> usize {
        self.measure(text).hit_test(x)
    }
}

/// Fixed-advance metrics; every character, whitespace included, is `char_width` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, text: &str) -> Boundaries {
        let offsets = std::iter::once(0.0)
            .chain(text.chars().enumerate().map(|(i, _)| (i + 1) as f32 * self.char_width))
            .collect();
        Boundaries::new(offsets)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Metrics backed by a fontdue font at a fixed pixel size.
#[derive(Clone)]
pub struct FontdueMetrics {
    font: Rc<Font>,
    px: f32,
    space_width: f32,
    line_height: f32,
}

impl FontdueMetrics {
    pub fn new(font: Rc<Font>, px: f32) -> Result<Self, WidgetError> {
        if !px.is_finite() || px <= 0.0 {
            return Err(WidgetError::invalid(format!(
                "font size must be positive, got {}",
                px
            )));
        }
        let line_height = font
            .horizontal_line_metrics(px)
            .map(|m| m.new_line_size)
            .unwrap_or(px * 1.2);
        let mut metrics = Self {
            font,
            px,
            space_width: 0.0,
            line_height,
        };
        // A lone trailing space has no ink, so measure it between two sentinels
        metrics.space_width = metrics.rendered_width("| |") - metrics.rendered_width("||");
        if metrics.space_width <= 0.0 {
            metrics.space_width = metrics.font.metrics(' ', px).advance_width;
        }
        tracing::debug!(px, space_width = metrics.space_width, "Measured font metrics");
        Ok(metrics)
    }

    pub fn font(&self) -> &Rc<Font> {
        &self.font
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    /// Width of one whitespace character
    pub fn space_width(&self) -> f32 {
        self.space_width
    }

    /// Distance from the leftmost to the rightmost inked pixel of `text`
    pub fn rendered_width(&self, text: &str) -> f32 {
        let mut pen = 0.0;
        let mut left = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        for ch in text.chars() {
            let m = self.font.metrics(ch, self.px);
            if m.width > 0 {
                let x0 = pen + m.xmin as f32;
                left = left.min(x0);
                right = right.max(x0 + m.width as f32);
            }
            pen += m.advance_width;
        }
        if right > left {
            right - left
        } else {
            0.0
        }
    }

    fn advance(&self, ch: char) -> f32 {
        if ch.is_whitespace() {
            self.space_width
        } else {
            self.font.metrics(ch, self.px).advance_width
        }
    }
}

impl TextMetrics for FontdueMetrics {
    fn measure(&self, text: &str) -> Boundaries {
        let mut offsets = Vec::with_capacity(text.len() + 1);
        let mut pen = 0.0;
        offsets.push(pen);
        for ch in text.chars() {
            pen += self.advance(ch);
            offsets.push(pen);
        }
        Boundaries::new(offsets)
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

impl std::fmt::Debug for FontdueMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontdueMetrics")
            .field("px", &self.px)
            .field("space_width", &self.space_width)
            .field("line_height", &self.line_height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure_has_len_plus_one_entries() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        let b = m.measure("abc");
        assert_eq!(b.as_slice(), &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(b.char_count(), 3);
        assert_eq!(b.width(), 30.0);
    }

    #[test]
    fn test_monospace_measures_whitespace() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(m.measure("a ").width(), 20.0);
        assert_eq!(m.measure(" ").width(), 10.0);
    }

    #[test]
    fn test_measure_counts_chars_not_bytes() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(m.measure("héllo").char_count(), 5);
    }

    #[test]
    fn test_hit_test_on_boundaries_is_identity() {
        let m = MonospaceMetrics::new(7.5, 20.0);
        let b = m.measure("hello world");
        for (i, &x) in b.as_slice().iter().enumerate() {
            assert_eq!(b.hit_test(x), i);
        }
    }

    #[test]
    fn test_hit_test_nearest_with_ties_to_lower() {
        let b = Boundaries::new(vec![0.0, 10.0, 20.0]);
        assert_eq!(b.hit_test(4.0), 0);
        assert_eq!(b.hit_test(6.0), 1);
        assert_eq!(b.hit_test(5.0), 0);
        assert_eq!(b.hit_test(15.0), 1);
    }

    #[test]
    fn test_hit_test_outside_text() {
        let b = Boundaries::new(vec![0.0, 10.0, 20.0]);
        assert_eq!(b.hit_test(-50.0), 0);
        assert_eq!(b.hit_test(500.0), 2);
        assert_eq!(Boundaries::empty().hit_test(12.0), 0);
    }

    #[test]
    fn test_hit_test_uneven_widths() {
        let b = Boundaries::new(vec![0.0, 3.0, 15.0, 16.0]);
        assert_eq!(b.hit_test(8.0), 1);
        assert_eq!(b.hit_test(10.0), 2);
        assert_eq!(b.hit_test(15.6), 3);
    }

    #[test]
    fn test_x_at_clamps() {
        let b = Boundaries::new(vec![0.0, 10.0]);
        assert_eq!(b.x_at(1), 10.0);
        assert_eq!(b.x_at(7), 10.0);
    }

    #[test]
    fn test_trait_hit_test_default() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(m.hit_test("abcd", 26.0), 3);
    }
}
