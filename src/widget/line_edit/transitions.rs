//! Event handlers of the line edit state machine.

use super::{EditState, LineEdit};
use crate::editable::MoveTarget;
use crate::error::WidgetError;
use crate::host::{InputEvent, KeyEvent, PointerEvent};
use crate::keymap::{EditCommand, KeyCode};

impl LineEdit {
    pub(super) fn dispatch(&mut self, event: &InputEvent) -> Result<(), WidgetError> {
        match event {
            InputEvent::PointerDown(p) => self.on_pointer_down(p),
            InputEvent::PointerMove(p) => self.on_pointer_move(p),
            InputEvent::PointerUp(_) => {
                self.on_pointer_up();
                Ok(())
            }
            InputEvent::KeyDown(k) => self.on_key_down(k),
            InputEvent::KeyUp(k) => {
                self.on_key_up(k);
                Ok(())
            }
        }
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    fn on_pointer_down(&mut self, p: &PointerEvent) -> Result<(), WidgetError> {
        if !self.region.contains(p.x, p.y) {
            if self.state.is_editing() {
                tracing::debug!("Pointer-down outside the line edit, committing");
                self.commit();
            }
            return Ok(());
        }

        if p.double_click {
            self.surface()?;
            self.begin_editing();
            self.edit.select_all();
            self.pointer_held = false;
            self.state = EditState::Selected;
        } else {
            // Hit-test before touching any state
            let index = self.hit_test(p.x)?;
            self.begin_editing();
            self.edit.begin_selection(index);
            self.pointer_held = true;
            self.state = EditState::Selecting;
        }
        self.sync_caret();
        Ok(())
    }

    fn on_pointer_move(&mut self, p: &PointerEvent) -> Result<(), WidgetError> {
        if self.state != EditState::Selecting || !self.pointer_held {
            return Ok(());
        }
        let index = self.hit_test(p.x)?;
        self.edit.extend_selection(index);
        self.sync_caret();
        Ok(())
    }

    fn on_pointer_up(&mut self) {
        if self.state == EditState::Selecting && self.pointer_held {
            self.pointer_held = false;
            self.finalize_selection();
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    fn on_key_down(&mut self, key: &KeyEvent) -> Result<(), WidgetError> {
        if self.state == EditState::Idle {
            return Ok(());
        }

        let stroke = key.stroke;
        if stroke.key == KeyCode::Shift {
            self.on_shift_down();
            return Ok(());
        }
        if stroke.key.is_modifier() {
            return Ok(());
        }

        if let Some(command) = self.keymap.lookup(&stroke) {
            self.run_command(command, stroke.mods.shift())?;
        } else if let Some(text) = key.printable() {
            self.type_text(text);
        } else {
            return Err(WidgetError::unhandled(self.state, stroke.to_string()));
        }
        self.sync_caret();
        Ok(())
    }

    fn on_key_up(&mut self, key: &KeyEvent) {
        if key.stroke.key == KeyCode::Shift
            && self.state == EditState::Selecting
            && !self.pointer_held
        {
            self.finalize_selection();
        }
    }

    fn on_shift_down(&mut self) {
        match self.state {
            EditState::Typing => {
                let caret = self.caret_index();
                self.edit.begin_selection(caret);
                self.state = EditState::Selecting;
            }
            // Keep the range; further movement extends from the active end
            EditState::Selected => self.state = EditState::Selecting,
            EditState::Selecting | EditState::Idle => {}
        }
    }

    fn run_command(&mut self, command: EditCommand, shift: bool) -> Result<(), WidgetError> {
        if let Some(target) = command.move_target() {
            self.navigate(target, shift);
            return Ok(());
        }

        match command {
            EditCommand::DeleteBackward => {
                self.edit.delete_backward();
                self.enter_typing();
            }
            EditCommand::DeleteForward => {
                self.edit.delete_forward();
                self.enter_typing();
            }
            EditCommand::Commit => {
                self.commit();
            }
            EditCommand::Revert => {
                self.revert();
            }
            EditCommand::SelectAll => {
                self.edit.select_all();
                self.pointer_held = false;
                self.state = EditState::Selected;
            }
            EditCommand::Copy => self.copy_selection()?,
            EditCommand::Cut => self.cut_selection()?,
            EditCommand::Paste => self.paste()?,
            EditCommand::MoveLeft
            | EditCommand::MoveRight
            | EditCommand::MoveHome
            | EditCommand::MoveEnd
            | EditCommand::Unbound => {}
        }
        Ok(())
    }

    fn navigate(&mut self, target: MoveTarget, shift: bool) {
        if shift {
            self.edit.move_caret(target, true);
            self.state = EditState::Selecting;
            return;
        }
        match self.state {
            EditState::Selected => self.edit.collapse_selection(target),
            _ => self.edit.move_caret(target, false),
        }
        self.enter_typing();
    }

    fn type_text(&mut self, text: &str) {
        let accepted = match self.state {
            EditState::Selecting => self.edit.insert_at_caret(text),
            _ => self.edit.insert_text(text),
        };
        if !accepted {
            tracing::debug!("Input {:?} rejected by edit constraints", text);
            return;
        }
        self.enter_typing();
    }

    fn copy_selection(&mut self) -> Result<(), WidgetError> {
        let Some(text) = self.edit.selected_text() else {
            tracing::debug!("Copy without a selection");
            return Ok(());
        };
        self.clipboard.copy(&text)
    }

    fn cut_selection(&mut self) -> Result<(), WidgetError> {
        let Some(text) = self.edit.selected_text() else {
            tracing::debug!("Cut without a selection");
            return Ok(());
        };
        self.clipboard.copy(&text)?;
        self.edit.delete_selection();
        self.enter_typing();
        Ok(())
    }

    fn paste(&mut self) -> Result<(), WidgetError> {
        if self.state == EditState::Selecting {
            return Err(WidgetError::unhandled(self.state, "Paste"));
        }
        let pasted = sanitize_paste(&self.clipboard.paste()?);
        if pasted.is_empty() {
            return Ok(());
        }
        if !self.edit.insert_text(&pasted) {
            tracing::debug!("Paste of {} chars rejected", pasted.chars().count());
            return Ok(());
        }
        self.enter_typing();
        Ok(())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    fn finalize_selection(&mut self) {
        if self.edit.selection().has_range() {
            self.state = EditState::Selected;
        } else {
            self.edit.clear_selection();
            self.state = EditState::Typing;
        }
    }

    fn enter_typing(&mut self) {
        self.edit.clear_selection();
        self.pointer_held = false;
        self.state = EditState::Typing;
    }

    /// Leave Idle: remember the text for revert and capture host shortcuts
    pub(super) fn begin_editing(&mut self) {
        if self.state.is_editing() {
            return;
        }
        self.snapshot = Some(self.edit.text());
        self.shortcuts.acquire();
        tracing::debug!("LineEdit editing {:?}", self.edit.text());
    }

    /// Enter Idle: hide caret and selection and release host shortcuts
    pub(super) fn finish_editing(&mut self) {
        self.edit.clear_selection();
        self.edit.caret_mut().hide();
        self.pointer_held = false;
        self.snapshot = None;
        self.shortcuts.release();
        self.state = EditState::Idle;
        self.last_blink = None;
    }
}

/// Pasted text must stay on one line: line breaks and tabs become spaces,
/// other control characters are dropped
fn sanitize_paste(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\r' | '\n' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}
