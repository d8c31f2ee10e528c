//! Frame abstraction for drawing primitives
//!
//! Provides a small, safe API over a softbuffer-style `u32` pixel buffer
//! (0xAARRGGBB) plus the text renderers widgets draw with.

use std::collections::HashMap;
use std::rc::Rc;

use fontdue::{Font, Metrics};

use crate::host::Rect;
use crate::metrics::Boundaries;

/// Blend a foreground color onto a background color using alpha compositing.
///
/// Returns the blended color with full opacity.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f32;
    let bg_g = ((bg >> 8) & 0xFF) as f32;
    let bg_b = (bg & 0xFF) as f32;

    let fg_r = ((fg >> 16) & 0xFF) as f32;
    let fg_g = ((fg >> 8) & 0xFF) as f32;
    let fg_b = (fg & 0xFF) as f32;

    let final_r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let final_g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let final_b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (final_r << 16) | (final_g << 8) | final_b
}

/// Clipping rectangle in pixel coordinates (inclusive start, exclusive end).
#[derive(Clone, Copy, Debug)]
struct ClipRect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// Pixel bounds of a rect, clamped to the frame
#[derive(Clone, Copy, Debug)]
struct PixelSpan {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in pixels. Out-of-bounds operations are clipped.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<ClipRect>,
}

impl<'a> Frame<'a> {
    /// Create a new frame from a mutable pixel buffer
    ///
    /// If the buffer is smaller than width*height, the height is reduced
    /// to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };

        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Constrain subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        let x0 = (rect.x.max(0.0) as usize).min(self.width);
        let y0 = (rect.y.max(0.0) as usize).min(self.height);
        let x1 = (rect.right().max(0.0) as usize).min(self.width);
        let y1 = (rect.bottom().max(0.0) as usize).min(self.height);
        self.clip = Some(ClipRect { x0, y0, x1, y1 });
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    #[inline]
    fn max_x(&self) -> usize {
        self.clip.map_or(self.width, |c| c.x1)
    }

    #[inline]
    fn max_y(&self) -> usize {
        self.clip.map_or(self.height, |c| c.y1)
    }

    #[inline]
    fn min_x(&self) -> usize {
        self.clip.map_or(0, |c| c.x0)
    }

    #[inline]
    fn min_y(&self) -> usize {
        self.clip.map_or(0, |c| c.y0)
    }

    fn span(&self, rect: Rect) -> PixelSpan {
        PixelSpan {
            x0: (rect.x.max(0.0).round() as usize).max(self.min_x()),
            y0: (rect.y.max(0.0).round() as usize).max(self.min_y()),
            x1: (rect.right().max(0.0).round() as usize).min(self.max_x()),
            y1: (rect.bottom().max(0.0).round() as usize).min(self.max_y()),
        }
    }

    /// Clear the entire buffer with a solid color
    #[inline]
    pub fn clear(&mut self, color: u32) {
        let len = self.width * self.height;
        self.buffer[..len].fill(color);
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let s = self.span(rect);
        for y in s.y0..s.y1 {
            let row_start = y * self.width;
            for x in s.x0..s.x1 {
                self.buffer[row_start + x] = color;
            }
        }
    }

    /// Fill a rectangle with alpha blending (color is ARGB format)
    pub fn fill_rect_blended(&mut self, rect: Rect, color: u32) {
        let alpha = ((color >> 24) & 0xFF) as f32 / 255.0;
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_rect(rect, color | 0xFF000000);
        }

        let s = self.span(rect);
        for y in s.y0..s.y1 {
            let row_start = y * self.width;
            for x in s.x0..s.x1 {
                let idx = row_start + x;
                self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
            }
        }
    }

    /// Set a single pixel (bounds-checked, respects clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y() {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Get a single pixel (bounds-checked, returns 0 if out of bounds)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a pixel with `alpha` coverage of `color`
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32, alpha: f32) {
        if x < self.min_x() || x >= self.max_x() || y < self.min_y() || y >= self.max_y() {
            return;
        }
        if alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        if alpha >= 1.0 {
            self.buffer[idx] = color | 0xFF000000;
            return;
        }
        self.buffer[idx] = blend_colors(self.buffer[idx], color, alpha);
    }

    /// Draw a rectangle with a 1px border
    pub fn draw_bordered_rect(&mut self, rect: Rect, fill_color: u32, border_color: u32) {
        self.fill_rect_blended(rect, fill_color);

        let opaque_border = border_color | 0xFF000000;
        let Rect {
            x,
            y,
            width,
            height,
        } = rect;
        self.fill_rect(Rect::new(x, y, width, 1.0), opaque_border);
        self.fill_rect(Rect::new(x, y + height - 1.0, width, 1.0), opaque_border);
        self.fill_rect(Rect::new(x, y, 1.0, height), opaque_border);
        self.fill_rect(Rect::new(x + width - 1.0, y, 1.0, height), opaque_border);
    }

    /// Filled downward-pointing triangle inscribed in `rect`
    pub fn fill_down_triangle(&mut self, rect: Rect, color: u32) {
        let rows = rect.height.max(0.0).round() as usize;
        let center = rect.x + rect.width / 2.0;
        for row in 0..rows {
            let half = rect.width / 2.0 * (1.0 - row as f32 / rows.max(1) as f32);
            self.fill_rect(
                Rect::new(center - half, rect.y + row as f32, half * 2.0, 1.0),
                color,
            );
        }
    }
}

/// Draws text whose character positions are given by measured boundaries.
pub trait TextRenderer {
    /// Draw `text` with character `i` starting at `origin_x + boundaries.x_at(i)`,
    /// vertically centered on `center_y`.
    fn draw(
        &mut self,
        frame: &mut Frame,
        origin_x: f32,
        center_y: f32,
        text: &str,
        boundaries: &Boundaries,
        color: u32,
    );
}

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Glyph renderer backed by fontdue with a rasterization cache.
pub struct TextPainter {
    font: Rc<Font>,
    glyph_cache: GlyphCache,
    font_size: f32,
    ascent: f32,
    descent: f32,
}

impl TextPainter {
    pub fn new(font: Rc<Font>, font_size: f32) -> Self {
        let (ascent, descent) = font
            .horizontal_line_metrics(font_size)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((font_size * 0.8, -font_size * 0.2));
        Self {
            font,
            glyph_cache: HashMap::new(),
            font_size,
            ascent,
            descent,
        }
    }

    /// Get the number of cached glyphs
    #[inline]
    pub fn glyph_cache_size(&self) -> usize {
        self.glyph_cache.len()
    }
}

impl TextRenderer for TextPainter {
    fn draw(
        &mut self,
        frame: &mut Frame,
        origin_x: f32,
        center_y: f32,
        text: &str,
        boundaries: &Boundaries,
        color: u32,
    ) {
        let top = center_y - (self.ascent - self.descent) / 2.0;
        let baseline = top + self.ascent;

        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let key = (ch, self.font_size.to_bits());
            let (metrics, bitmap) = self
                .glyph_cache
                .entry(key)
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            let pen_x = origin_x + boundaries.x_at(i);
            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;

            for bitmap_y in 0..metrics.height {
                for bitmap_x in 0..metrics.width {
                    let Some(&alpha) = bitmap.get(bitmap_y * metrics.width + bitmap_x) else {
                        continue;
                    };
                    if alpha == 0 {
                        continue;
                    }
                    let px = pen_x as isize + bitmap_x as isize + metrics.xmin as isize;
                    let py = (glyph_top + bitmap_y as f32) as isize;
                    if px >= 0 && py >= 0 {
                        frame.blend_pixel(px as usize, py as usize, color, alpha as f32 / 255.0);
                    }
                }
            }
        }
    }
}

/// Renders every visible character as a solid block.
///
/// Used where no font is available, such as headless hosts.
#[derive(Debug, Clone, Copy)]
pub struct BlockPainter {
    pub glyph_height: f32,
}

impl Default for BlockPainter {
    fn default() -> Self {
        Self { glyph_height: 10.0 }
    }
}

impl TextRenderer for BlockPainter {
    fn draw(
        &mut self,
        frame: &mut Frame,
        origin_x: f32,
        center_y: f32,
        text: &str,
        boundaries: &Boundaries,
        color: u32,
    ) {
        let top = center_y - self.glyph_height / 2.0;
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = origin_x + boundaries.x_at(i) + 1.0;
            let x1 = origin_x + boundaries.x_at(i + 1) - 1.0;
            frame.fill_rect(Rect::new(x0, top, (x1 - x0).max(1.0), self.glyph_height), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_fill_rect() {
        let mut buffer = vec![0u32; 100];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0), 0xFFFF0000);
        assert_eq!(frame.get_pixel(2, 2), 0xFFFF0000);
        assert_eq!(frame.get_pixel(4, 4), 0xFFFF0000);
        assert_eq!(frame.get_pixel(5, 5), 0);
        assert_eq!(frame.get_pixel(1, 1), 0);
    }

    #[test]
    fn test_frame_blend_pixel() {
        let mut buffer = vec![0xFF000000u32; 4];
        let mut frame = Frame::new(&mut buffer, 2, 2);
        frame.blend_pixel(0, 0, 0xFFFFFFFF, 0.5);
        let pixel = frame.get_pixel(0, 0);
        let r = (pixel >> 16) & 0xFF;
        assert!(r > 100 && r < 150);
    }

    #[test]
    fn test_frame_out_of_bounds() {
        let mut buffer = vec![0u32; 4];
        let mut frame = Frame::new(&mut buffer, 2, 2);
        frame.set_pixel(5, 5, 0xFFFFFFFF);
        frame.fill_rect(Rect::new(-5.0, -5.0, 100.0, 100.0), 0xFF00FF00);
        assert_eq!(frame.get_pixel(1, 1), 0xFF00FF00);
        assert_eq!(frame.get_pixel(9, 9), 0);
    }

    #[test]
    fn test_frame_short_buffer_shrinks_height() {
        let mut buffer = vec![0u32; 15];
        let frame = Frame::new(&mut buffer, 10, 10);
        assert_eq!(frame.height(), 1);
    }

    #[test]
    fn test_frame_clip_restricts_fill() {
        let mut buffer = vec![0u32; 100];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.set_clip(Rect::new(0.0, 0.0, 5.0, 5.0));
        frame.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(4, 4), 0xFFFFFFFF);
        assert_eq!(frame.get_pixel(5, 5), 0);
        frame.clear_clip();
        frame.set_pixel(9, 9, 1);
        assert_eq!(frame.get_pixel(9, 9), 1);
    }

    #[test]
    fn test_bordered_rect() {
        let mut buffer = vec![0u32; 100];
        let mut frame = Frame::new(&mut buffer, 10, 10);
        frame.draw_bordered_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0xFF111111, 0xFF222222);
        assert_eq!(frame.get_pixel(0, 5), 0xFF222222);
        assert_eq!(frame.get_pixel(9, 5), 0xFF222222);
        assert_eq!(frame.get_pixel(5, 5), 0xFF111111);
    }

    #[test]
    fn test_block_painter_skips_whitespace() {
        let mut buffer = vec![0u32; 40 * 20];
        let mut frame = Frame::new(&mut buffer, 40, 20);
        let boundaries = Boundaries::new(vec![0.0, 10.0, 20.0, 30.0]);
        BlockPainter::default().draw(&mut frame, 0.0, 10.0, "a b", &boundaries, 0xFF000001);
        assert_eq!(frame.get_pixel(5, 10), 0xFF000001);
        assert_eq!(frame.get_pixel(15, 10), 0);
        assert_eq!(frame.get_pixel(25, 10), 0xFF000001);
    }
}
