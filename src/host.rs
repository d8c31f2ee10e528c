//! Host canvas abstraction: regions, surfaces, input events and dispatch.
//!
//! A `Canvas` hands out `Surface`s for widget regions and accepts redraw
//! requests. `WidgetHost` owns a canvas and the widgets drawn on it, routes
//! each input event to the widgets subscribed to its kind, and asks the
//! canvas for at most one redraw per event.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::commands::Cmd;
use crate::error::WidgetError;
use crate::keymap::{KeyCode, Keystroke, Modifiers};
use crate::metrics::TextMetrics;
use crate::view::frame::{Frame, TextRenderer};

/// A rectangle in canvas pixels, origin at the top-left
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Vertical center line
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Reject regions that cannot hold a widget
    pub fn validate(&self) -> Result<(), WidgetError> {
        let coords = [self.x, self.y, self.width, self.height];
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(WidgetError::invalid(format!(
                "region coordinates must be finite, got {:?}",
                self
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(WidgetError::invalid(format!(
                "region must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// What a widget receives when attached: its region and the metrics to
/// measure text with
#[derive(Clone)]
pub struct Surface {
    pub region: Rect,
    pub metrics: Rc<dyn TextMetrics>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("region", &self.region)
            .field("line_height", &self.metrics.line_height())
            .finish()
    }
}

/// Drawing target widgets attach to.
pub trait Canvas {
    fn attach(&mut self, region: Rect) -> Surface;
    fn request_redraw(&mut self);
}

/// Canvas without a window; records attachments and redraw requests.
pub struct HeadlessCanvas {
    metrics: Rc<dyn TextMetrics>,
    redraws: usize,
    attached: Vec<Rect>,
}

impl HeadlessCanvas {
    pub fn new(metrics: Rc<dyn TextMetrics>) -> Self {
        Self {
            metrics,
            redraws: 0,
            attached: Vec::new(),
        }
    }

    pub fn redraw_count(&self) -> usize {
        self.redraws
    }

    pub fn attached(&self) -> &[Rect] {
        &self.attached
    }
}

impl Canvas for HeadlessCanvas {
    fn attach(&mut self, region: Rect) -> Surface {
        self.attached.push(region);
        Surface {
            region,
            metrics: Rc::clone(&self.metrics),
        }
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

/// Event kinds a widget can subscribe to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerUp,
    PointerMove,
    KeyDown,
    KeyUp,
}

/// A pointer position in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    /// Second press of a double-click (pointer-down only)
    pub double_click: bool,
}

impl PointerEvent {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            double_click: false,
        }
    }

    pub fn double(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            double_click: true,
        }
    }
}

/// A key press or release.
///
/// `stroke` identifies the key for bindings; `text` is what the key would
/// type, if anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub stroke: Keystroke,
    pub text: Option<String>,
}

impl KeyEvent {
    pub fn new(stroke: Keystroke, text: Option<String>) -> Self {
        Self { stroke, text }
    }

    /// Typing `c`; uppercase letters carry Shift
    pub fn char(c: char) -> Self {
        let mods = if c.is_uppercase() {
            Modifiers::SHIFT
        } else {
            Modifiers::NONE
        };
        Self {
            stroke: Keystroke::char_with_mods(c, mods),
            text: Some(c.to_string()),
        }
    }

    /// A named key with no modifiers
    pub fn named(key: KeyCode) -> Self {
        let text = (key == KeyCode::Space).then(|| " ".to_string());
        Self {
            stroke: Keystroke::key(key),
            text,
        }
    }

    pub fn with_mods(mut self, mods: Modifiers) -> Self {
        self.stroke.mods = mods;
        self
    }

    /// Text to insert, if this key types something
    pub fn printable(&self) -> Option<&str> {
        if self.stroke.mods.is_shortcut_chord() {
            return None;
        }
        self.text
            .as_deref()
            .filter(|t| !t.is_empty() && !t.chars().any(char::is_control))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(PointerEvent),
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::PointerDown(_) => EventKind::PointerDown,
            InputEvent::PointerUp(_) => EventKind::PointerUp,
            InputEvent::PointerMove(_) => EventKind::PointerMove,
            InputEvent::KeyDown(_) => EventKind::KeyDown,
            InputEvent::KeyUp(_) => EventKind::KeyUp,
        }
    }
}

/// A widget hosted on a canvas.
pub trait Widget {
    fn region(&self) -> Rect;

    /// Called once by the host when the widget is added
    fn attach(&mut self, canvas: &mut dyn Canvas);

    /// Event kinds this widget wants to receive
    fn subscriptions(&self) -> &'static [EventKind];

    fn handle_event(&mut self, event: &InputEvent) -> Option<Cmd>;

    /// Time-driven updates such as caret blink
    fn tick(&mut self, _now: Instant) -> Option<Cmd> {
        None
    }

    fn render(&self, frame: &mut Frame, text: &mut dyn TextRenderer);
}

/// Owns a canvas and routes events to the widgets on it.
pub struct WidgetHost<C: Canvas> {
    canvas: C,
    widgets: Vec<Rc<RefCell<dyn Widget>>>,
}

impl<C: Canvas> WidgetHost<C> {
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            widgets: Vec::new(),
        }
    }

    /// Attach `widget` to the canvas and start routing events to it
    pub fn add<W: Widget + 'static>(&mut self, widget: W) -> Rc<RefCell<W>> {
        let widget = Rc::new(RefCell::new(widget));
        widget.borrow_mut().attach(&mut self.canvas);
        let hosted: Rc<RefCell<dyn Widget>> = widget.clone();
        self.widgets.push(hosted);
        widget
    }

    /// Deliver `event` to every subscribed widget.
    ///
    /// Returns true if a redraw was requested.
    pub fn dispatch(&mut self, event: &InputEvent) -> bool {
        let kind = event.kind();
        let mut cmd = None;
        for widget in &self.widgets {
            let mut widget = widget.borrow_mut();
            if !widget.subscriptions().contains(&kind) {
                continue;
            }
            cmd = Cmd::merge(cmd, widget.handle_event(event));
        }
        self.finish(cmd)
    }

    /// Advance timers; returns true if a redraw was requested
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut cmd = None;
        for widget in &self.widgets {
            cmd = Cmd::merge(cmd, widget.borrow_mut().tick(now));
        }
        self.finish(cmd)
    }

    fn finish(&mut self, cmd: Option<Cmd>) -> bool {
        let redraw = cmd.is_some_and(|c| c.needs_redraw());
        if redraw {
            self.canvas.request_redraw();
        }
        redraw
    }

    pub fn render(&self, frame: &mut Frame, text: &mut dyn TextRenderer) {
        for widget in &self.widgets {
            widget.borrow().render(frame, text);
        }
    }

    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}
