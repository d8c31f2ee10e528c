//! Keyboard input translation from winit to widget key events

use winit::event::{ElementState, KeyEvent as WinitKeyEvent};
use winit::keyboard::ModifiersState;

use plotwidgets::host::{InputEvent, KeyEvent};
use plotwidgets::keymap::keystroke_from_winit;

/// Translate a winit key event; None for keys without a mapping
pub fn input_from_winit(event: &WinitKeyEvent, modifiers: ModifiersState) -> Option<InputEvent> {
    let stroke = keystroke_from_winit(&event.logical_key, modifiers)?;
    let text = event.text.as_ref().map(|t| t.to_string());
    let key = KeyEvent::new(stroke, text);
    Some(match event.state {
        ElementState::Pressed => InputEvent::KeyDown(key),
        ElementState::Released => InputEvent::KeyUp(key),
    })
}
