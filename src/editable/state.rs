//! EditableState - buffer, caret and selection of a single-line edit.

use super::buffer::{TextBuffer, TextBufferMut};
use super::constraints::EditConstraints;
use super::cursor::Caret;
use super::selection::SelectionModel;

/// Where a navigation key moves the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Left,
    Right,
    Home,
    End,
}

/// Editable single-line text with a caret and an optional selection.
///
/// Generic over the buffer type; the widgets use `StringBuffer`.
/// The caret always follows the active end of a present selection.
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBuffer> {
    /// The text buffer
    pub buffer: B,
    /// Constraints for this editing context
    pub constraints: EditConstraints,
    caret: Caret,
    selection: SelectionModel,
}

impl<B: TextBufferMut> EditableState<B> {
    /// Create a new EditableState with the caret at the end of the text
    pub fn new(buffer: B, constraints: EditConstraints) -> Self {
        let len = buffer.len_chars();
        Self {
            buffer,
            constraints,
            caret: Caret::new(len),
            selection: SelectionModel::new(),
        }
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn caret(&self) -> &Caret {
        &self.caret
    }

    pub fn caret_mut(&mut self) -> &mut Caret {
        &mut self.caret
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    /// Get the selected text, None without a non-empty selection
    pub fn selected_text(&self) -> Option<String> {
        self.selection
            .range()
            .map(|(start, end)| self.buffer.slice(start..end))
    }

    /// Replace the whole content; caret and selection are clamped
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.clamp();
    }

    /// Clamp caret and selection to the current length
    pub fn clamp(&mut self) {
        let len = self.len();
        self.caret.clamp(len);
        self.selection.clamp(len);
    }

    fn target_index(&self, target: MoveTarget) -> usize {
        let index = self.caret.index();
        match target {
            MoveTarget::Left => index.saturating_sub(1),
            MoveTarget::Right => (index + 1).min(self.len()),
            MoveTarget::Home => 0,
            MoveTarget::End => self.len(),
        }
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.caret.index() <= self.len(),
            "caret {} past end {}",
            self.caret.index(),
            self.len()
        );
        if let Some(sel) = self.selection.selection() {
            debug_assert!(sel.anchor <= self.len() && sel.active <= self.len());
        }
    }
}

// =============================================================================
// Selection and Movement
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Start a (present but empty) selection at `index` and put the caret there
    pub fn begin_selection(&mut self, index: usize) {
        let index = index.min(self.len());
        self.caret.set_index(index);
        self.selection.begin(index);
    }

    /// Move the active end of the selection (and the caret) to `index`
    pub fn extend_selection(&mut self, index: usize) {
        let index = index.min(self.len());
        self.caret.set_index(index);
        self.selection.extend(index);
    }

    /// Select the whole buffer, caret at the end
    pub fn select_all(&mut self) {
        let len = self.len();
        self.selection.select_all(len);
        self.caret.set_index(len);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Move the caret one step.
    ///
    /// With `extend` the selection's active end follows the caret (a selection
    /// is started at the caret if none is present); otherwise any selection is
    /// dropped first.
    pub fn move_caret(&mut self, target: MoveTarget, extend: bool) {
        let next = self.target_index(target);
        if extend {
            if !self.selection.is_present() {
                self.selection.begin(self.caret.index());
            }
            self.selection.extend(next);
        } else {
            self.selection.clear();
        }
        self.caret.set_index(next);
        self.check_invariants();
    }

    /// Leave a selection by moving the caret to its boundary.
    ///
    /// Left lands on the start, Right on the end, Home and End on the buffer
    /// edges. Without a selection this is a plain move.
    pub fn collapse_selection(&mut self, target: MoveTarget) {
        let index = match (self.selection.range(), target) {
            (Some((start, _)), MoveTarget::Left) => start,
            (Some((_, end)), MoveTarget::Right) => end,
            (_, MoveTarget::Home) => 0,
            (_, MoveTarget::End) => self.len(),
            (None, _) => self.target_index(target),
        };
        self.selection.clear();
        self.caret.set_index(index);
        self.check_invariants();
    }
}

// =============================================================================
// Editing Operations
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Insert text at the caret, replacing a non-empty selection.
    ///
    /// Returns false (and leaves everything untouched) if the constraints
    /// reject the input.
    pub fn insert_text(&mut self, text: &str) -> bool {
        if !self.constraints.is_text_allowed(text) {
            return false;
        }
        let range = self.selection.range();
        let removed = range.map(|(start, end)| end - start).unwrap_or(0);
        let inserted = text.chars().count();
        if self
            .constraints
            .would_exceed_max_length(self.len(), removed, inserted)
        {
            return false;
        }

        let at = match range {
            Some((start, end)) => {
                self.buffer.replace(start..end, text);
                start
            }
            None => {
                let at = self.caret.index();
                self.buffer.insert(at, text);
                at
            }
        };
        self.selection.clear();
        self.caret.set_index(at + inserted);
        self.check_invariants();
        true
    }

    /// Insert text at the caret, dropping (not replacing) any selection.
    ///
    /// Used while a selection is still being made: typed text lands at the
    /// active end.
    pub fn insert_at_caret(&mut self, text: &str) -> bool {
        let inserted = text.chars().count();
        if !self.constraints.is_text_allowed(text)
            || self
                .constraints
                .would_exceed_max_length(self.len(), 0, inserted)
        {
            return false;
        }
        let at = self.caret.index();
        self.buffer.insert(at, text);
        self.selection.clear();
        self.caret.set_index(at + inserted);
        self.check_invariants();
        true
    }

    /// Remove the selected text, returning it
    pub fn delete_selection(&mut self) -> Option<String> {
        let (start, end) = self.selection.range()?;
        let removed = self.buffer.slice(start..end);
        self.buffer.remove(start..end);
        self.selection.clear();
        self.caret.set_index(start);
        self.check_invariants();
        Some(removed)
    }

    /// Backspace: delete the selection or the character before the caret
    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        self.selection.clear();
        let index = self.caret.index();
        if index == 0 {
            return false;
        }
        self.buffer.remove(index - 1..index);
        self.caret.set_index(index - 1);
        self.check_invariants();
        true
    }

    /// Delete: delete the selection or the character after the caret
    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection().is_some() {
            return true;
        }
        self.selection.clear();
        let index = self.caret.index();
        if index >= self.len() {
            return false;
        }
        self.buffer.remove(index..index + 1);
        self.check_invariants();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::buffer::StringBuffer;

    fn state(text: &str) -> EditableState<StringBuffer> {
        EditableState::new(StringBuffer::from_text(text), EditConstraints::default())
    }

    #[test]
    fn test_new_places_caret_at_end() {
        let s = state("hello");
        assert_eq!(s.caret().index(), 5);
        assert!(!s.selection().is_present());
    }

    #[test]
    fn test_move_left_right_clamp_at_edges() {
        let mut s = state("ab");
        s.move_caret(MoveTarget::Right, false);
        assert_eq!(s.caret().index(), 2);
        s.move_caret(MoveTarget::Home, false);
        s.move_caret(MoveTarget::Left, false);
        assert_eq!(s.caret().index(), 0);
    }

    #[test]
    fn test_move_with_extend_starts_selection_at_caret() {
        let mut s = state("hello");
        s.move_caret(MoveTarget::Left, true);
        s.move_caret(MoveTarget::Left, true);
        assert_eq!(s.selection().range(), Some((3, 5)));
        assert_eq!(s.caret().index(), 3);
    }

    #[test]
    fn test_move_without_extend_drops_selection() {
        let mut s = state("hello");
        s.select_all();
        s.move_caret(MoveTarget::Left, false);
        assert!(!s.selection().is_present());
        assert_eq!(s.caret().index(), 4);
    }

    #[test]
    fn test_collapse_selection_to_boundaries() {
        let mut s = state("hello");
        s.begin_selection(1);
        s.extend_selection(4);
        s.collapse_selection(MoveTarget::Left);
        assert_eq!(s.caret().index(), 1);

        s.begin_selection(4);
        s.extend_selection(1);
        s.collapse_selection(MoveTarget::Right);
        assert_eq!(s.caret().index(), 4);

        s.select_all();
        s.collapse_selection(MoveTarget::Home);
        assert_eq!(s.caret().index(), 0);
        assert!(!s.selection().is_present());
    }

    #[test]
    fn test_insert_then_delete_restores_buffer() {
        let mut s = state("Hello!");
        s.begin_selection(3);
        s.clear_selection();
        assert!(s.insert_text("X"));
        assert_eq!(s.text(), "HelXlo!");
        assert!(s.delete_backward());
        assert_eq!(s.text(), "Hello!");
        assert_eq!(s.caret().index(), 3);
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut s = state("hello world");
        s.begin_selection(0);
        s.extend_selection(5);
        assert!(s.insert_text("howdy"));
        assert_eq!(s.text(), "howdy world");
        assert_eq!(s.caret().index(), 5);
        assert!(!s.selection().is_present());
    }

    #[test]
    fn test_insert_at_caret_keeps_selected_text() {
        let mut s = state("hello");
        s.begin_selection(1);
        s.extend_selection(3);
        assert!(s.insert_at_caret("X"));
        assert_eq!(s.text(), "helXlo");
        assert_eq!(s.caret().index(), 4);
        assert!(!s.selection().is_present());
    }

    #[test]
    fn test_select_all_delete_empties_buffer() {
        let mut s = state("abc");
        s.select_all();
        assert_eq!(s.selection().range(), Some((0, 3)));
        assert!(s.delete_forward());
        assert_eq!(s.text(), "");
        assert_eq!(s.caret().index(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut s = state("abc");
        s.move_caret(MoveTarget::Home, false);
        assert!(!s.delete_backward());
        assert_eq!(s.text(), "abc");
        assert_eq!(s.caret().index(), 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut s = state("abc");
        assert!(!s.delete_forward());
        assert_eq!(s.text(), "abc");
    }

    #[test]
    fn test_delete_selection_returns_removed_text() {
        let mut s = state("hello world");
        s.begin_selection(11);
        s.extend_selection(6);
        assert_eq!(s.selected_text().as_deref(), Some("world"));
        assert_eq!(s.delete_selection().as_deref(), Some("world"));
        assert_eq!(s.text(), "hello ");
        assert_eq!(s.caret().index(), 6);
    }

    #[test]
    fn test_constraints_reject_input() {
        let mut s = EditableState::new(
            StringBuffer::from_text("12"),
            EditConstraints::numeric().with_max_length(3),
        );
        assert!(!s.insert_text("a"));
        assert!(s.insert_text("3"));
        assert!(!s.insert_text("4"));
        assert_eq!(s.text(), "123");
    }

    #[test]
    fn test_set_text_clamps_caret_and_selection() {
        let mut s = state("hello world");
        s.begin_selection(2);
        s.extend_selection(11);
        s.set_text("hi");
        assert_eq!(s.caret().index(), 2);
        assert_eq!(s.selection().range(), None);
    }
}
