//! winit keyboard events as keystrokes

use winit::keyboard::{Key, ModifiersState, NamedKey};

use super::types::{KeyCode, Keystroke, Modifiers};

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Modifiers::new(
            state.control_key(),
            state.shift_key(),
            state.alt_key(),
            state.super_key(),
        )
    }
}

/// The keystroke for a winit logical key under the held modifiers.
///
/// Letters are lowercased; Shift lives in the modifiers. None for keys the
/// widgets never see (media keys, dead keys, ...).
pub fn keystroke_from_winit(logical_key: &Key, modifiers: ModifiersState) -> Option<Keystroke> {
    let key = match logical_key {
        Key::Named(named) => named_key(*named)?,
        Key::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c.to_ascii_lowercase()),
                _ => return None,
            }
        }
        _ => return None,
    };
    Some(Keystroke::new(key, modifiers.into()))
}

fn named_key(named: NamedKey) -> Option<KeyCode> {
    const FUNCTION_KEYS: [NamedKey; 12] = [
        NamedKey::F1,
        NamedKey::F2,
        NamedKey::F3,
        NamedKey::F4,
        NamedKey::F5,
        NamedKey::F6,
        NamedKey::F7,
        NamedKey::F8,
        NamedKey::F9,
        NamedKey::F10,
        NamedKey::F11,
        NamedKey::F12,
    ];
    if let Some(i) = FUNCTION_KEYS.iter().position(|&k| k == named) {
        return Some(KeyCode::F(i as u8 + 1));
    }

    Some(match named {
        NamedKey::Enter => KeyCode::Enter,
        NamedKey::Escape => KeyCode::Escape,
        NamedKey::Tab => KeyCode::Tab,
        NamedKey::Backspace => KeyCode::Backspace,
        NamedKey::Delete => KeyCode::Delete,
        NamedKey::Space => KeyCode::Space,
        NamedKey::ArrowLeft => KeyCode::Left,
        NamedKey::ArrowRight => KeyCode::Right,
        NamedKey::ArrowUp => KeyCode::Up,
        NamedKey::ArrowDown => KeyCode::Down,
        NamedKey::Home => KeyCode::Home,
        NamedKey::End => KeyCode::End,
        NamedKey::Shift => KeyCode::Shift,
        NamedKey::Control => KeyCode::Control,
        NamedKey::Alt => KeyCode::Alt,
        NamedKey::Super | NamedKey::Meta => KeyCode::Meta,
        _ => return None,
    })
}
