//! Static text label.

use crate::commands::Cmd;
use crate::error::WidgetError;
use crate::host::{Canvas, EventKind, InputEvent, Rect, Surface, Widget};
use crate::metrics::Boundaries;
use crate::style::{Align, LabelStyle};
use crate::view::frame::{Frame, TextRenderer};

/// Read-only text drawn inside a region
#[derive(Debug)]
pub struct Label {
    region: Rect,
    text: String,
    style: LabelStyle,
    surface: Option<Surface>,
}

impl Label {
    pub fn new(region: Rect, text: &str) -> Result<Self, WidgetError> {
        Self::with_style(region, text, LabelStyle::default())
    }

    pub fn with_style(region: Rect, text: &str, style: LabelStyle) -> Result<Self, WidgetError> {
        region.validate()?;
        Ok(Self {
            region,
            text: text.to_string(),
            style,
            surface: None,
        })
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn style(&self) -> &LabelStyle {
        &self.style
    }

    /// Character boundaries of the text, relative to `text_x`
    pub fn boundaries(&self) -> Result<Boundaries, WidgetError> {
        let surface = self.surface.as_ref().ok_or(WidgetError::NotRendered)?;
        Ok(surface.metrics.measure(&self.text))
    }

    /// Canvas x where the text starts for the label's alignment
    pub fn text_x(&self) -> Result<f32, WidgetError> {
        let width = self.boundaries()?.width();
        let x = match self.style.align {
            Align::Left => self.region.x,
            Align::Center => self.region.x + (self.region.width - width) / 2.0,
            Align::Right => self.region.right() - width,
        };
        Ok(x)
    }
}

impl Widget for Label {
    fn region(&self) -> Rect {
        self.region
    }

    fn attach(&mut self, canvas: &mut dyn Canvas) {
        self.surface = Some(canvas.attach(self.region));
    }

    fn subscriptions(&self) -> &'static [EventKind] {
        &[]
    }

    fn handle_event(&mut self, _event: &InputEvent) -> Option<Cmd> {
        None
    }

    fn render(&self, frame: &mut Frame, text: &mut dyn TextRenderer) {
        crate::view::text_field::draw_label(frame, text, self);
    }
}
