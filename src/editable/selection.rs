//! Selection types for the line edit.

/// A text selection with anchor (start point) and active end (caret side).
/// The anchor stays fixed while the active end moves during extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub active: usize,
}

impl Selection {
    pub fn new(anchor: usize, active: usize) -> Self {
        Self { anchor, active }
    }

    /// Create a collapsed selection (anchor == active)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            anchor: offset,
            active: offset,
        }
    }

    /// Check if selection is empty (anchor == active)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Get the start offset (minimum of anchor and active)
    pub fn start(&self) -> usize {
        self.anchor.min(self.active)
    }

    /// Get the end offset (maximum of anchor and active)
    pub fn end(&self) -> usize {
        self.anchor.max(self.active)
    }

    /// Extend selection to a new active offset
    pub fn extend_to(&mut self, offset: usize) {
        self.active = offset;
    }

    /// Clamp both ends to a buffer of `len` characters
    pub fn clamp(&mut self, len: usize) {
        self.anchor = self.anchor.min(len);
        self.active = self.active.min(len);
    }
}

/// Tracks the optional selection of a line edit.
///
/// A selection exists only while the widget is selecting or has a selection;
/// otherwise it is absent. A present but collapsed selection reports no range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    current: Option<Selection>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Start a selection at `anchor`; present but empty
    pub fn begin(&mut self, anchor: usize) {
        self.current = Some(Selection::collapsed(anchor));
    }

    /// Move the active end; starts a selection there if none is present
    pub fn extend(&mut self, active: usize) {
        match self.current.as_mut() {
            Some(sel) => sel.extend_to(active),
            None => self.begin(active),
        }
    }

    /// Select the whole buffer
    pub fn select_all(&mut self, len: usize) {
        self.current = Some(Selection::new(0, len));
    }

    /// Canonical `(start, end)` of a non-empty selection
    pub fn range(&self) -> Option<(usize, usize)> {
        self.current
            .filter(|sel| !sel.is_empty())
            .map(|sel| (sel.start(), sel.end()))
    }

    /// The raw selection, including a collapsed one
    pub fn selection(&self) -> Option<Selection> {
        self.current
    }

    /// Whether a selection (possibly empty) is present
    pub fn is_present(&self) -> bool {
        self.current.is_some()
    }

    /// Whether a non-empty selection is present
    pub fn has_range(&self) -> bool {
        self.range().is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clamp a present selection after the buffer shrank
    pub fn clamp(&mut self, len: usize) {
        if let Some(sel) = self.current.as_mut() {
            sel.clamp(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor, sel.active);
    }

    #[test]
    fn test_selection_start_end() {
        let forward = Selection::new(0, 5);
        assert_eq!(forward.start(), 0);
        assert_eq!(forward.end(), 5);

        let backward = Selection::new(5, 0);
        assert_eq!(backward.start(), 0);
        assert_eq!(backward.end(), 5);
    }

    #[test]
    fn test_model_begin_is_present_but_empty() {
        let mut model = SelectionModel::new();
        model.begin(3);
        assert!(model.is_present());
        assert_eq!(model.range(), None);
        assert!(!model.has_range());
    }

    #[test]
    fn test_model_extend_keeps_anchor() {
        let mut model = SelectionModel::new();
        model.begin(3);
        model.extend(7);
        model.extend(1);
        assert_eq!(model.selection(), Some(Selection::new(3, 1)));
        assert_eq!(model.range(), Some((1, 3)));
    }

    #[test]
    fn test_model_extend_without_selection_begins() {
        let mut model = SelectionModel::new();
        model.extend(4);
        assert_eq!(model.selection(), Some(Selection::collapsed(4)));
    }

    #[test]
    fn test_model_select_all_and_clear() {
        let mut model = SelectionModel::new();
        model.select_all(3);
        assert_eq!(model.range(), Some((0, 3)));
        model.clear();
        assert!(!model.is_present());
        assert_eq!(model.range(), None);
    }

    #[test]
    fn test_model_operations_are_idempotent() {
        let mut a = SelectionModel::new();
        a.select_all(4);
        a.select_all(4);
        let mut b = SelectionModel::new();
        b.select_all(4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_model_clamp() {
        let mut model = SelectionModel::new();
        model.begin(8);
        model.extend(10);
        model.clamp(4);
        assert_eq!(model.selection(), Some(Selection::new(4, 4)));
        assert_eq!(model.range(), None);
    }
}
