//! Caret position and visibility for the line edit.

use crate::metrics::Boundaries;

/// The insertion caret.
///
/// `index` is the logical insertion point. `x` is the pixel offset of that
/// boundary relative to the text origin, valid after the last `place` call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Caret {
    index: usize,
    x: f32,
    visible: bool,
}

impl Caret {
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            x: 0.0,
            visible: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Pixel offset from the text origin
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move the logical insertion point without touching the visual position.
    /// Call `place` afterwards once metrics are available.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Position the caret at `index` using the given boundaries and show it
    pub fn place(&mut self, index: usize, boundaries: &Boundaries) {
        let last = boundaries.char_count();
        debug_assert!(index <= last, "caret index {} past end {}", index, last);
        self.index = index.min(last);
        self.x = boundaries.x_at(self.index);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Flip visibility (blink); returns the new visibility
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Clamp the insertion point to a buffer of `len` characters
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len);
    }
}
