//! Text buffer traits and the single-line string implementation.
//!
//! All offsets are character offsets, never byte offsets. Out-of-range
//! offsets clamp to the end of the text.

use std::ops::Range;

/// Read-only view into a single-line text buffer.
pub trait TextBuffer {
    /// Length in characters
    fn len_chars(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Text in a character range; empty for an inverted range
    fn slice(&self, range: Range<usize>) -> String;

    fn content(&self) -> String;
}

/// Mutable buffer operations.
pub trait TextBufferMut: TextBuffer {
    fn insert(&mut self, offset: usize, text: &str);

    fn remove(&mut self, range: Range<usize>);

    /// Replace a character range with `text` in one step
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    fn set_content(&mut self, text: &str) {
        let len = self.len_chars();
        self.replace(0..len, text);
    }
}

/// The line edit's buffer: a `String` addressed by character offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_owned(),
        }
    }

    fn byte_offset(&self, chars: usize) -> usize {
        match self.text.char_indices().nth(chars) {
            Some((byte, _)) => byte,
            None => self.text.len(),
        }
    }

    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.byte_offset(range.start);
        let end = self.byte_offset(range.end).max(start);
        start..end
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn slice(&self, range: Range<usize>) -> String {
        self.text[self.byte_range(range)].to_owned()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let at = self.byte_offset(offset);
        self.text.insert_str(at, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        self.replace(range, "");
    }

    fn replace(&mut self, range: Range<usize>, text: &str) {
        let bytes = self.byte_range(range);
        self.text.replace_range(bytes, text);
    }
}
