//! Widget rendering.
//!
//! Line edits draw background, edge, selection highlight, text and caret in
//! that order, clipped to their region. Combo boxes add the drop-down button
//! and, when open, the item list below. Labels draw aligned text only.

use crate::host::Rect;
use crate::widget::{ComboBox, Label, LineEdit};

use super::frame::{Frame, TextRenderer};

/// Resolved colors and geometry for one text field draw.
#[derive(Debug, Clone)]
pub struct TextFieldOptions {
    pub region: Rect,
    /// Canvas x of the first character
    pub origin_x: f32,
    pub background: u32,
    pub edge: u32,
    pub text_color: u32,
    pub caret_color: u32,
    pub selection_color: u32,
    /// Canvas x of the caret, None when hidden
    pub caret_x: Option<f32>,
    pub selection: Option<Rect>,
    /// Top and height of the caret line
    pub marker_band: (f32, f32),
}

impl TextFieldOptions {
    /// Options for the current state of `edit`, None if it is not attached
    pub fn for_line_edit(edit: &LineEdit) -> Option<Self> {
        let style = edit.style();
        let caret_x = if edit.caret_visible() {
            Some(edit.caret_x().ok()?)
        } else {
            None
        };
        Some(Self {
            region: edit.region(),
            origin_x: edit.text_origin_x(),
            background: style.background.to_argb_u32(),
            edge: style.edge.to_argb_u32(),
            text_color: style.text.to_argb_u32(),
            caret_color: style.caret.to_argb_u32(),
            selection_color: style.highlight.to_argb_u32(),
            caret_x,
            selection: edit.selection_rect().ok()?,
            marker_band: edit.marker_band(),
        })
    }
}

pub fn draw_line_edit(frame: &mut Frame, painter: &mut dyn TextRenderer, edit: &LineEdit) {
    let Some(opts) = TextFieldOptions::for_line_edit(edit) else {
        return;
    };
    let Ok(boundaries) = edit.boundaries() else {
        return;
    };

    frame.draw_bordered_rect(opts.region, opts.background, opts.edge);

    frame.set_clip(opts.region);
    if let Some(selection) = opts.selection {
        frame.fill_rect_blended(selection, opts.selection_color);
    }
    painter.draw(
        frame,
        opts.origin_x,
        opts.region.center_y(),
        &edit.text(),
        &boundaries,
        opts.text_color,
    );
    if let Some(x) = opts.caret_x {
        let (top, height) = opts.marker_band;
        frame.fill_rect(Rect::new(x.round(), top, 1.0, height), opts.caret_color);
    }
    frame.clear_clip();
}

pub fn draw_label(frame: &mut Frame, painter: &mut dyn TextRenderer, label: &Label) {
    let Ok(x) = label.text_x() else {
        return;
    };
    let Ok(boundaries) = label.boundaries() else {
        return;
    };
    let region = label.region();
    frame.set_clip(region);
    painter.draw(
        frame,
        x,
        region.center_y(),
        label.text(),
        &boundaries,
        label.style().text.to_argb_u32(),
    );
    frame.clear_clip();
}

pub fn draw_combo_box(frame: &mut Frame, painter: &mut dyn TextRenderer, combo: &ComboBox) {
    let edit = combo.line_edit();
    draw_line_edit(frame, painter, edit);

    let style = edit.style();
    let background = style.background.to_argb_u32();
    let edge = style.edge.to_argb_u32();
    let text_color = style.text.to_argb_u32();

    // Button with a downward arrow
    let button = combo.button_rect();
    frame.draw_bordered_rect(button, background, edge);
    let arrow_w = button.width * 0.5;
    let arrow_h = button.height * 0.25;
    frame.fill_down_triangle(
        Rect::new(
            button.x + (button.width - arrow_w) / 2.0,
            button.y + (button.height - arrow_h) / 2.0,
            arrow_w,
            arrow_h,
        ),
        text_color,
    );

    if !combo.is_open() {
        return;
    }

    frame.draw_bordered_rect(combo.list_rect(), crate::style::Color::WHITE.to_argb_u32(), edge);
    for (i, item) in combo.items().iter().enumerate() {
        let row = combo.item_rect(i);
        if combo.hovered() == Some(i) {
            frame.fill_rect_blended(row, style.highlight.to_argb_u32());
        }
        let Ok(boundaries) = edit.measure(item) else {
            continue;
        };
        frame.set_clip(row);
        painter.draw(
            frame,
            row.x + style.pad_left,
            row.center_y(),
            item,
            &boundaries,
            text_color,
        );
        frame.clear_clip();
    }
}
