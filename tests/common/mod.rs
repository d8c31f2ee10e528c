//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use plotwidgets::clipboard::MemoryClipboard;
use plotwidgets::host::{HeadlessCanvas, InputEvent, KeyEvent, PointerEvent, Rect, WidgetHost};
use plotwidgets::keymap::{KeyCode, Modifiers, SharedShortcuts, ShortcutTable};
use plotwidgets::metrics::MonospaceMetrics;
use plotwidgets::style::LineEditStyle;
use plotwidgets::widget::{EditState, LineEdit};

/// Every character is this wide in tests
pub const CHAR_WIDTH: f32 = 10.0;

/// Region of the line edit under test; text starts at x = 0
pub const EDIT_REGION: Rect = Rect::new(0.0, 0.0, 200.0, 20.0);

/// A point outside every test widget
pub const OUTSIDE: (f32, f32) = (500.0, 500.0);

pub fn test_canvas() -> HeadlessCanvas {
    HeadlessCanvas::new(Rc::new(MonospaceMetrics::new(CHAR_WIDTH, 16.0)))
}

/// A shortcut table private to one test
pub fn test_shortcuts() -> SharedShortcuts {
    Arc::new(Mutex::new(ShortcutTable::with_defaults()))
}

pub fn unpadded_style() -> LineEditStyle {
    LineEditStyle {
        pad_left: 0.0,
        ..LineEditStyle::default()
    }
}

/// A line edit hosted on a headless canvas with an in-memory clipboard
pub struct Harness {
    pub host: WidgetHost<HeadlessCanvas>,
    pub edit: Rc<RefCell<LineEdit>>,
    pub clipboard: MemoryClipboard,
    pub shortcuts: SharedShortcuts,
    pub commits: Rc<RefCell<Vec<String>>>,
}

impl Harness {
    pub fn new(text: &str) -> Self {
        Self::with_clipboard(text, MemoryClipboard::new())
    }

    pub fn with_clipboard(text: &str, clipboard: MemoryClipboard) -> Self {
        let shortcuts = test_shortcuts();
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let edit = LineEdit::with_style(EDIT_REGION, text, unpadded_style())
            .unwrap()
            .with_clipboard(clipboard.clone())
            .with_shortcuts(Arc::clone(&shortcuts))
            .on_commit(move |text| sink.borrow_mut().push(text.to_string()));
        Self::from_edit(edit, clipboard, shortcuts, commits)
    }

    pub fn from_edit(
        edit: LineEdit,
        clipboard: MemoryClipboard,
        shortcuts: SharedShortcuts,
        commits: Rc<RefCell<Vec<String>>>,
    ) -> Self {
        let mut host = WidgetHost::new(test_canvas());
        let edit = host.add(edit);
        Self {
            host,
            edit,
            clipboard,
            shortcuts,
            commits,
        }
    }

    pub fn send(&mut self, event: InputEvent) -> bool {
        self.host.dispatch(&event)
    }

    /// Canvas x of boundary `index`
    pub fn x_of(index: usize) -> f32 {
        EDIT_REGION.x + index as f32 * CHAR_WIDTH
    }

    pub fn pointer_down(&mut self, index: usize) -> bool {
        self.send(InputEvent::PointerDown(PointerEvent::at(Self::x_of(index), 10.0)))
    }

    pub fn pointer_move(&mut self, index: usize) -> bool {
        self.send(InputEvent::PointerMove(PointerEvent::at(Self::x_of(index), 10.0)))
    }

    pub fn pointer_up(&mut self, index: usize) -> bool {
        self.send(InputEvent::PointerUp(PointerEvent::at(Self::x_of(index), 10.0)))
    }

    /// Press and release at boundary `index`, leaving the edit Typing
    pub fn click_at(&mut self, index: usize) {
        self.pointer_down(index);
        self.pointer_up(index);
    }

    /// Press, drag and release
    pub fn drag(&mut self, from: usize, to: usize) {
        self.pointer_down(from);
        self.pointer_move(to);
        self.pointer_up(to);
    }

    pub fn double_click(&mut self) -> bool {
        let down = self.send(InputEvent::PointerDown(PointerEvent::double(5.0, 10.0)));
        let up = self.send(InputEvent::PointerUp(PointerEvent::double(5.0, 10.0)));
        down || up
    }

    pub fn click_outside(&mut self) -> bool {
        self.send(InputEvent::PointerDown(PointerEvent::at(OUTSIDE.0, OUTSIDE.1)))
    }

    pub fn key(&mut self, key: KeyCode) -> bool {
        self.send(InputEvent::KeyDown(KeyEvent::named(key)))
    }

    pub fn shift_key(&mut self, key: KeyCode) -> bool {
        self.send(InputEvent::KeyDown(
            KeyEvent::named(key).with_mods(Modifiers::SHIFT),
        ))
    }

    pub fn shift_down(&mut self) -> bool {
        self.send(InputEvent::KeyDown(
            KeyEvent::named(KeyCode::Shift).with_mods(Modifiers::SHIFT),
        ))
    }

    pub fn shift_up(&mut self) -> bool {
        self.send(InputEvent::KeyUp(KeyEvent::named(KeyCode::Shift)))
    }

    /// Platform command shortcut: Cmd on macOS, Ctrl elsewhere
    pub fn cmd(&mut self, c: char) -> bool {
        self.send(InputEvent::KeyDown(
            KeyEvent::char(c).with_mods(Modifiers::cmd()),
        ))
    }

    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.send(InputEvent::KeyDown(KeyEvent::char(c)));
        }
    }

    pub fn text(&self) -> String {
        self.edit.borrow().text()
    }

    pub fn state(&self) -> EditState {
        self.edit.borrow().state()
    }

    pub fn caret(&self) -> usize {
        self.edit.borrow().caret_index()
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.edit.borrow().selection_range()
    }

    pub fn redraws(&self) -> usize {
        self.host.canvas().redraw_count()
    }

    pub fn commit_count(&self) -> usize {
        self.commits.borrow().len()
    }

    pub fn is_captured(&self) -> bool {
        plotwidgets::keymap::shortcuts::lock(&self.shortcuts).is_captured()
    }
}
