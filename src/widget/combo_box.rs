//! Editable combo box: a line edit with a drop-down list of items.
//!
//! The drop-down button is a square at the right end of the region. The
//! list opens below the region, one row per item, each row as tall as the
//! widget. Choosing an item replaces the text and fires the selection
//! handler; typing in the field still commits through the edit handler.

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::commands::Cmd;
use crate::error::WidgetError;
use crate::host::{Canvas, EventKind, InputEvent, Rect, Widget};
use crate::keymap::{KeyCode, Keymap, SharedShortcuts};
use crate::style::LineEditStyle;
use crate::view::frame::{Frame, TextRenderer};

use super::line_edit::{EditState, LineEdit};

/// Caller-supplied handler invoked with the index and text of a chosen item
pub type SelectHandler = Box<dyn FnMut(usize, &str)>;

pub struct ComboBox {
    region: Rect,
    edit: LineEdit,
    items: Vec<String>,
    open: bool,
    hovered: Option<usize>,
    on_select: Option<SelectHandler>,
}

impl ComboBox {
    /// A combo box showing the first item (or nothing if `items` is empty)
    pub fn new(region: Rect, items: &[&str]) -> Result<Self, WidgetError> {
        Self::with_style(region, items, LineEditStyle::default())
    }

    pub fn with_style(
        region: Rect,
        items: &[&str],
        style: LineEditStyle,
    ) -> Result<Self, WidgetError> {
        region.validate()?;
        if region.width <= region.height {
            return Err(WidgetError::invalid(format!(
                "combo box must be wider than tall to fit its button, got {}x{}",
                region.width, region.height
            )));
        }
        let edit_region = Rect::new(
            region.x,
            region.y,
            region.width - region.height,
            region.height,
        );
        let text = items.first().copied().unwrap_or("");
        Ok(Self {
            region,
            edit: LineEdit::with_style(edit_region, text, style)?,
            items: items.iter().map(|s| s.to_string()).collect(),
            open: false,
            hovered: None,
            on_select: None,
        })
    }

    /// Call `handler` with the index and text of every chosen item
    pub fn on_select(mut self, handler: impl FnMut(usize, &str) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Call `handler` with the text of every committed edit
    pub fn on_commit(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.edit = self.edit.on_commit(handler);
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.edit = self.edit.with_clipboard(clipboard);
        self
    }

    pub fn with_shortcuts(mut self, table: SharedShortcuts) -> Self {
        self.edit = self.edit.with_shortcuts(table);
        self
    }

    pub fn with_keymap(mut self, keymap: Rc<Keymap>) -> Self {
        self.edit = self.edit.with_keymap(keymap);
        self
    }

    pub fn with_caret_blink(mut self, interval: Option<Duration>) -> Self {
        self.edit = self.edit.with_caret_blink(interval);
        self
    }

    pub fn line_edit(&self) -> &LineEdit {
        &self.edit
    }

    pub fn text(&self) -> String {
        self.edit.text()
    }

    pub fn state(&self) -> EditState {
        self.edit.state()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Replace the items; closes the list
    pub fn set_items(&mut self, items: Vec<String>) {
        self.items = items;
        self.close();
    }

    /// Index of the item matching the current text
    pub fn selected_index(&self) -> Option<usize> {
        let text = self.edit.text();
        self.items.iter().position(|item| *item == text)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.hovered = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// The drop-down button, a square at the right end
    pub fn button_rect(&self) -> Rect {
        Rect::new(
            self.region.right() - self.region.height,
            self.region.y,
            self.region.height,
            self.region.height,
        )
    }

    /// The drop-down list below the widget
    pub fn list_rect(&self) -> Rect {
        Rect::new(
            self.region.x,
            self.region.bottom(),
            self.region.width,
            self.region.height * self.items.len() as f32,
        )
    }

    pub fn item_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.region.x,
            self.region.bottom() + self.region.height * index as f32,
            self.region.width,
            self.region.height,
        )
    }

    /// Item under a canvas point while the list is open
    pub fn item_at(&self, x: f32, y: f32) -> Option<usize> {
        if !self.open || !self.list_rect().contains(x, y) {
            return None;
        }
        let row = ((y - self.region.bottom()) / self.region.height) as usize;
        (row < self.items.len()).then_some(row)
    }

    /// Make item `index` the current text.
    ///
    /// An edit in progress is discarded first.
    pub fn choose(&mut self, index: usize) -> Result<(), WidgetError> {
        let item = self.items.get(index).cloned().ok_or_else(|| {
            WidgetError::invalid(format!(
                "item index {} out of range for {} items",
                index,
                self.items.len()
            ))
        })?;
        self.edit.revert();
        self.edit.set_text(&item);
        tracing::info!("ComboBox chose item {} {:?}", index, item);
        if let Some(handler) = self.on_select.as_mut() {
            handler(index, &item);
        }
        Ok(())
    }
}

impl Widget for ComboBox {
    fn region(&self) -> Rect {
        self.region
    }

    fn attach(&mut self, canvas: &mut dyn Canvas) {
        self.edit.attach(canvas);
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        self.edit.subscriptions()
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Cmd> {
        match event {
            InputEvent::PointerDown(p) if self.open => {
                if let Some(index) = self.item_at(p.x, p.y) {
                    if let Err(e) = self.choose(index) {
                        tracing::warn!("ComboBox: {}", e);
                    }
                    self.close();
                    return Some(Cmd::Redraw);
                }
                self.close();
                let forwarded = if self.button_rect().contains(p.x, p.y) {
                    None
                } else {
                    self.edit.handle_event(event)
                };
                Cmd::merge(Some(Cmd::Redraw), forwarded)
            }
            InputEvent::PointerDown(p) => {
                let forwarded = self.edit.handle_event(event);
                if self.button_rect().contains(p.x, p.y) {
                    self.open();
                    return Cmd::merge(forwarded, Some(Cmd::Redraw));
                }
                forwarded
            }
            InputEvent::PointerMove(p) if self.open => {
                let hovered = self.item_at(p.x, p.y);
                let forwarded = self.edit.handle_event(event);
                if hovered != self.hovered {
                    self.hovered = hovered;
                    return Cmd::merge(forwarded, Some(Cmd::Redraw));
                }
                forwarded
            }
            InputEvent::KeyDown(k) if self.open && k.stroke.key == KeyCode::Escape => {
                self.close();
                Some(Cmd::Redraw)
            }
            _ => self.edit.handle_event(event),
        }
    }

    fn tick(&mut self, now: Instant) -> Option<Cmd> {
        self.edit.tick(now)
    }

    fn render(&self, frame: &mut Frame, text: &mut dyn TextRenderer) {
        crate::view::text_field::draw_combo_box(frame, text, self);
    }
}

impl std::fmt::Debug for ComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComboBox")
            .field("edit", &self.edit)
            .field("items", &self.items)
            .field("open", &self.open)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        let combo = ComboBox::new(Rect::new(10.0, 10.0, 100.0, 20.0), &["a", "b"]).unwrap();
        assert_eq!(combo.button_rect(), Rect::new(90.0, 10.0, 20.0, 20.0));
        assert_eq!(combo.line_edit().region(), Rect::new(10.0, 10.0, 80.0, 20.0));
        assert_eq!(combo.list_rect(), Rect::new(10.0, 30.0, 100.0, 40.0));
        assert_eq!(combo.item_rect(1), Rect::new(10.0, 50.0, 100.0, 20.0));
    }

    #[test]
    fn test_rejects_region_without_room_for_button() {
        let result = ComboBox::new(Rect::new(0.0, 0.0, 20.0, 20.0), &["a"]);
        assert!(matches!(result, Err(WidgetError::InvalidArgument(_))));
    }

    #[test]
    fn test_first_item_is_initial_text() {
        let combo = ComboBox::new(Rect::new(0.0, 0.0, 100.0, 20.0), &["one", "two"]).unwrap();
        assert_eq!(combo.text(), "one");
        assert_eq!(combo.selected_index(), Some(0));
        let empty = ComboBox::new(Rect::new(0.0, 0.0, 100.0, 20.0), &[]).unwrap();
        assert_eq!(empty.text(), "");
        assert_eq!(empty.selected_index(), None);
    }

    #[test]
    fn test_item_at_requires_open_list() {
        let mut combo = ComboBox::new(Rect::new(0.0, 0.0, 100.0, 20.0), &["a", "b"]).unwrap();
        assert_eq!(combo.item_at(5.0, 25.0), None);
        combo.open();
        assert_eq!(combo.item_at(5.0, 25.0), Some(0));
        assert_eq!(combo.item_at(5.0, 45.0), Some(1));
        assert_eq!(combo.item_at(5.0, 65.0), None);
    }

    #[test]
    fn test_choose_out_of_range() {
        let mut combo = ComboBox::new(Rect::new(0.0, 0.0, 100.0, 20.0), &["a"]).unwrap();
        assert!(matches!(
            combo.choose(3),
            Err(WidgetError::InvalidArgument(_))
        ));
        assert_eq!(combo.text(), "a");
    }
}
