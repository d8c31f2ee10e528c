//! Edit constraints for line edits.
//!
//! Constraints define what input a particular field accepts.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what text a line edit accepts.
#[derive(Debug, Clone, Default)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl EditConstraints {
    /// No restrictions
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Numeric input (digits, sign and decimal point)
    pub fn numeric() -> Self {
        Self {
            max_length: Some(32),
            char_filter: Some(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')),
        }
    }

    /// Limit the number of characters
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if every character of `text` passes the filter
    pub fn is_text_allowed(&self, text: &str) -> bool {
        text.chars().all(|c| self.is_char_allowed(c))
    }

    /// Check if replacing `removed` characters with `inserted` would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, removed: usize, inserted: usize) -> bool {
        match self.max_length {
            Some(max) => current_len.saturating_sub(removed) + inserted > max,
            None => false,
        }
    }
}
