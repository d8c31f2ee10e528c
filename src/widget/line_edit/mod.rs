//! Single-line text edit widget.
//!
//! A `LineEdit` owns its text and runs the edit state machine
//! (see `EditState`) over pointer and keyboard input delivered by the host.
//! While editing it holds a capture on the host's shortcut table so plain
//! keys reach the widget instead of triggering host actions.
//!
//! Input handlers never fail: errors raised while handling an event are
//! logged and leave the widget unchanged.

mod state;
mod transitions;

use std::rc::Rc;
use std::time::{Duration, Instant};

pub use state::EditState;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::commands::Cmd;
use crate::editable::{EditConstraints, EditableState, StringBuffer};
use crate::error::WidgetError;
use crate::host::{Canvas, EventKind, InputEvent, Rect, Surface, Widget};
use crate::keymap::{Keymap, SharedShortcuts, ShortcutCapture};
use crate::metrics::Boundaries;
use crate::style::LineEditStyle;
use crate::tracing::StateSnapshot;
use crate::view::frame::{Frame, TextRenderer};

/// Caller-supplied handler invoked with the final text on commit
pub type CommitHandler = Box<dyn FnMut(&str)>;

const SUBSCRIPTIONS: &[EventKind] = &[
    EventKind::PointerDown,
    EventKind::PointerUp,
    EventKind::PointerMove,
    EventKind::KeyDown,
    EventKind::KeyUp,
];

/// An editable single line of text
pub struct LineEdit {
    region: Rect,
    style: LineEditStyle,
    edit: EditableState<StringBuffer>,
    state: EditState,
    /// Text when editing began, restored by revert
    snapshot: Option<String>,
    on_commit: Option<CommitHandler>,
    surface: Option<Surface>,
    shortcuts: ShortcutCapture,
    clipboard: Box<dyn Clipboard>,
    keymap: Rc<Keymap>,
    /// Pointer pressed inside the widget and not yet released
    pointer_held: bool,
    blink: Option<Duration>,
    last_blink: Option<Instant>,
}

impl LineEdit {
    pub fn new(region: Rect, text: &str) -> Result<Self, WidgetError> {
        Self::with_style(region, text, LineEditStyle::default())
    }

    pub fn with_style(region: Rect, text: &str, style: LineEditStyle) -> Result<Self, WidgetError> {
        region.validate()?;
        style.validate()?;
        Ok(Self {
            region,
            style,
            edit: EditableState::new(StringBuffer::from_text(text), EditConstraints::default()),
            state: EditState::Idle,
            snapshot: None,
            on_commit: None,
            surface: None,
            shortcuts: ShortcutCapture::global(),
            clipboard: Box::new(SystemClipboard),
            keymap: Rc::new(Keymap::embedded()),
            pointer_held: false,
            blink: None,
            last_blink: None,
        })
    }

    /// Call `handler` with the final text on every commit
    pub fn on_commit(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_commit = Some(Box::new(handler));
        self
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Capture `table` instead of the process-wide shortcut table while editing
    pub fn with_shortcuts(mut self, table: SharedShortcuts) -> Self {
        self.shortcuts = ShortcutCapture::new(table);
        self
    }

    pub fn with_keymap(mut self, keymap: Rc<Keymap>) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn with_constraints(mut self, constraints: EditConstraints) -> Self {
        self.edit.constraints = constraints;
        self
    }

    /// Blink the caret at `interval` while typing; None keeps it steady
    pub fn with_caret_blink(mut self, interval: Option<Duration>) -> Self {
        self.blink = interval.filter(|d| !d.is_zero());
        self
    }

    pub fn text(&self) -> String {
        self.edit.text()
    }

    /// Replace the text; caret and selection are clamped to it
    pub fn set_text(&mut self, text: &str) {
        self.edit.set_text(text);
        self.sync_caret();
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn style(&self) -> &LineEditStyle {
        &self.style
    }

    pub fn caret_index(&self) -> usize {
        self.edit.caret().index()
    }

    pub fn caret_visible(&self) -> bool {
        self.edit.caret().is_visible()
    }

    /// Canonical (start, end) of a non-empty selection
    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.edit.selection().range()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// True while the shortcut table is captured by this widget
    pub fn holds_shortcuts(&self) -> bool {
        self.shortcuts.is_held()
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            state: self.state,
            caret: self.caret_index(),
            selection: self.selection_range(),
            len: self.edit.len(),
        }
    }

    /// Canvas x of the first character
    pub fn text_origin_x(&self) -> f32 {
        self.region.x + self.style.pad_left
    }

    fn surface(&self) -> Result<&Surface, WidgetError> {
        self.surface.as_ref().ok_or(WidgetError::NotRendered)
    }

    /// Character boundaries of the current text, relative to the text origin
    pub fn boundaries(&self) -> Result<Boundaries, WidgetError> {
        self.measure(&self.edit.text())
    }

    /// Boundaries of arbitrary text with this widget's metrics
    pub fn measure(&self, text: &str) -> Result<Boundaries, WidgetError> {
        Ok(self.surface()?.metrics.measure(text))
    }

    /// Height of a line of text with this widget's metrics
    pub fn line_height(&self) -> Result<f32, WidgetError> {
        Ok(self.surface()?.metrics.line_height())
    }

    /// Canvas x of the caret
    pub fn caret_x(&self) -> Result<f32, WidgetError> {
        let boundaries = self.boundaries()?;
        Ok(self.text_origin_x() + boundaries.x_at(self.caret_index()))
    }

    /// Character index nearest to canvas x
    pub fn hit_test(&self, x: f32) -> Result<usize, WidgetError> {
        let surface = self.surface()?;
        Ok(surface
            .metrics
            .hit_test(&self.edit.text(), x - self.text_origin_x()))
    }

    /// Highlight rectangle of the selection, None without a non-empty one
    pub fn selection_rect(&self) -> Result<Option<Rect>, WidgetError> {
        let boundaries = self.boundaries()?;
        Ok(self.selection_range().map(|(start, end)| {
            let x0 = self.text_origin_x() + boundaries.x_at(start);
            let x1 = self.text_origin_x() + boundaries.x_at(end);
            let (top, height) = self.marker_band();
            Rect::new(x0, top, x1 - x0, height)
        }))
    }

    /// Vertical extent of the caret and highlight: 10% to 90% of the height
    pub(crate) fn marker_band(&self) -> (f32, f32) {
        (
            self.region.y + self.region.height * 0.1,
            self.region.height * 0.8,
        )
    }

    /// Finish editing and call the commit handler.
    ///
    /// No-op while idle; returns whether a commit happened.
    pub fn commit(&mut self) -> bool {
        if !self.state.is_editing() {
            return false;
        }
        self.finish_editing();
        let text = self.edit.text();
        tracing::info!("LineEdit committed {:?}", text);
        if let Some(handler) = self.on_commit.as_mut() {
            handler(&text);
        }
        true
    }

    /// Restore the text from when editing began and stop editing.
    ///
    /// No-op while idle; returns whether a revert happened.
    pub fn revert(&mut self) -> bool {
        if !self.state.is_editing() {
            return false;
        }
        if let Some(original) = self.snapshot.take() {
            self.edit.set_text(&original);
        }
        self.finish_editing();
        tracing::debug!("LineEdit reverted to {:?}", self.edit.text());
        true
    }

    /// Place the caret at its index using current metrics
    fn sync_caret(&mut self) {
        if !self.state.is_editing() {
            return;
        }
        let Ok(boundaries) = self.boundaries() else {
            return;
        };
        let index = self.caret_index();
        self.edit.caret_mut().place(index, &boundaries);
    }
}

impl Widget for LineEdit {
    fn region(&self) -> Rect {
        self.region
    }

    fn attach(&mut self, canvas: &mut dyn Canvas) {
        self.surface = Some(canvas.attach(self.region));
        self.sync_caret();
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        SUBSCRIPTIONS
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Cmd> {
        let before = self.snapshot();
        let text_before = self.edit.text();
        let visible_before = self.caret_visible();

        if let Err(e) = self.dispatch(event) {
            match e {
                WidgetError::NotRendered => tracing::debug!("LineEdit: {}", e),
                _ => tracing::warn!("LineEdit: {}", e),
            }
        }

        let after = self.snapshot();
        if let Some(diff) = before.diff(&after) {
            tracing::debug!("LineEdit {:?}: {}", event.kind(), diff);
        }

        let changed = before != after
            || visible_before != self.caret_visible()
            || text_before != self.edit.text();
        if changed {
            // Restart the blink cycle so the caret stays solid while editing
            self.last_blink = None;
            Some(Cmd::Redraw)
        } else {
            None
        }
    }

    fn tick(&mut self, now: Instant) -> Option<Cmd> {
        let interval = self.blink?;
        if self.state != EditState::Typing {
            return None;
        }
        match self.last_blink {
            Some(last) if now.saturating_duration_since(last) >= interval => {
                self.last_blink = Some(now);
                self.edit.caret_mut().toggle();
                Some(Cmd::Redraw)
            }
            Some(_) => None,
            None => {
                self.last_blink = Some(now);
                None
            }
        }
    }

    fn render(&self, frame: &mut Frame, text: &mut dyn TextRenderer) {
        crate::view::text_field::draw_line_edit(frame, text, self);
    }
}

impl std::fmt::Debug for LineEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineEdit")
            .field("region", &self.region)
            .field("text", &self.edit.text())
            .field("state", &self.state)
            .field("caret", &self.caret_index())
            .field("selection", &self.selection_range())
            .field("attached", &self.is_attached())
            .finish()
    }
}
