//! Plain-text clipboard bridge.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::WidgetError;

/// Copy and paste plain text.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), WidgetError>;
    fn paste(&mut self) -> Result<String, WidgetError>;
}

/// The operating system clipboard, opened per operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), WidgetError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| WidgetError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| WidgetError::ClipboardUnavailable(e.to_string()))
    }

    fn paste(&mut self) -> Result<String, WidgetError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| WidgetError::ClipboardUnavailable(e.to_string()))?;
        clipboard
            .get_text()
            .map_err(|e| WidgetError::ClipboardUnavailable(e.to_string()))
    }
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::new();
        *clipboard.contents.borrow_mut() = Some(text.to_string());
        clipboard
    }

    /// Current contents, None if nothing was copied yet
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), WidgetError> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn paste(&mut self) -> Result<String, WidgetError> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| WidgetError::ClipboardUnavailable("clipboard is empty".to_string()))
    }
}

/// A clipboard that always fails, for hosts without one.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn copy(&mut self, _text: &str) -> Result<(), WidgetError> {
        Err(WidgetError::ClipboardUnavailable("no clipboard".to_string()))
    }

    fn paste(&mut self) -> Result<String, WidgetError> {
        Err(WidgetError::ClipboardUnavailable("no clipboard".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.paste().is_err());
        clipboard.copy("hello").unwrap();
        assert_eq!(clipboard.paste().unwrap(), "hello");
    }

    #[test]
    fn test_memory_clipboard_clones_share_contents() {
        let observer = MemoryClipboard::with_text("a");
        let mut writer = observer.clone();
        writer.copy("b").unwrap();
        assert_eq!(observer.contents().as_deref(), Some("b"));
    }

    #[test]
    fn test_unavailable_clipboard_errors() {
        let mut clipboard = UnavailableClipboard;
        assert!(matches!(
            clipboard.copy("x"),
            Err(WidgetError::ClipboardUnavailable(_))
        ));
        assert!(matches!(
            clipboard.paste(),
            Err(WidgetError::ClipboardUnavailable(_))
        ));
    }
}
