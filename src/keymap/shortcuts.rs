//! Process-wide host shortcut table with reference-counted capture.
//!
//! The host binds single keys ("s" to save, "q" to quit, ...) that would
//! otherwise swallow typed characters. A line edit acquires the table while
//! editing: the first acquire saves and clears every binding, the last
//! release restores them.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use super::types::{KeyCode, Keystroke, Modifiers};

/// Global actions the host canvas binds to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostAction {
    Save,
    Quit,
    FullScreen,
    Home,
    Back,
    Forward,
    Pan,
    Zoom,
    Grid,
    GridMinor,
    ToggleYScale,
    ToggleXScale,
    Copy,
    Help,
}

impl fmt::Display for HostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostAction::Save => "save",
            HostAction::Quit => "quit",
            HostAction::FullScreen => "fullscreen",
            HostAction::Home => "home",
            HostAction::Back => "back",
            HostAction::Forward => "forward",
            HostAction::Pan => "pan",
            HostAction::Zoom => "zoom",
            HostAction::Grid => "grid",
            HostAction::GridMinor => "grid_minor",
            HostAction::ToggleYScale => "yscale",
            HostAction::ToggleXScale => "xscale",
            HostAction::Copy => "copy",
            HostAction::Help => "help",
        };
        f.write_str(name)
    }
}

type Bindings = HashMap<HostAction, Vec<Keystroke>>;

/// Host shortcut bindings plus the capture bookkeeping
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    bindings: Bindings,
    /// Bindings saved by the first acquire, present while captured
    saved: Option<Bindings>,
    holders: usize,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The canvas defaults
    pub fn with_defaults() -> Self {
        let ctrl = Modifiers::CTRL;
        let cmd = Modifiers::cmd();
        let shift = Modifiers::SHIFT;
        let ch = Keystroke::char;
        let key = Keystroke::key;

        let mut table = Self::new();
        let defaults = [
            (HostAction::FullScreen, vec![ch('f'), Keystroke::char_with_mods('f', ctrl)]),
            (HostAction::Home, vec![ch('h'), ch('r'), key(KeyCode::Home)]),
            (HostAction::Back, vec![ch('c'), key(KeyCode::Left), key(KeyCode::Backspace)]),
            (HostAction::Forward, vec![ch('v'), key(KeyCode::Right)]),
            (HostAction::Pan, vec![ch('p')]),
            (HostAction::Zoom, vec![ch('o')]),
            (HostAction::Save, vec![ch('s'), Keystroke::char_with_mods('s', cmd)]),
            (HostAction::Quit, vec![ch('q'), Keystroke::char_with_mods('w', cmd)]),
            (HostAction::Grid, vec![ch('g')]),
            (HostAction::GridMinor, vec![Keystroke::char_with_mods('g', shift)]),
            (HostAction::ToggleYScale, vec![ch('l')]),
            (HostAction::ToggleXScale, vec![ch('k'), Keystroke::char_with_mods('l', shift)]),
            (HostAction::Copy, vec![Keystroke::char_with_mods('c', cmd)]),
            (HostAction::Help, vec![key(KeyCode::F(1))]),
        ];
        for (action, strokes) in defaults {
            for stroke in strokes {
                table.bind(action, stroke);
            }
        }
        table
    }

    /// Add a binding. While captured it is recorded in the saved set and
    /// becomes active on the final release.
    pub fn bind(&mut self, action: HostAction, stroke: Keystroke) {
        let target = match self.saved.as_mut() {
            Some(saved) => saved,
            None => &mut self.bindings,
        };
        let strokes = target.entry(action).or_default();
        if !strokes.contains(&stroke) {
            strokes.push(stroke);
        }
    }

    /// Action currently bound to `stroke`
    pub fn lookup(&self, stroke: &Keystroke) -> Option<HostAction> {
        self.bindings
            .iter()
            .find(|(_, strokes)| strokes.contains(stroke))
            .map(|(action, _)| *action)
    }

    pub fn is_captured(&self) -> bool {
        self.holders > 0
    }

    fn acquire(&mut self) {
        if self.holders == 0 {
            self.saved = Some(std::mem::take(&mut self.bindings));
            tracing::debug!("Captured host shortcuts");
        }
        self.holders += 1;
    }

    fn release(&mut self) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            if let Some(saved) = self.saved.take() {
                self.bindings = saved;
            }
            tracing::debug!("Restored host shortcuts");
        }
    }
}

/// Shared handle to a shortcut table
pub type SharedShortcuts = Arc<Mutex<ShortcutTable>>;

static GLOBAL: OnceLock<SharedShortcuts> = OnceLock::new();

/// The process-wide table, created with the defaults on first use
pub fn global() -> SharedShortcuts {
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(Mutex::new(ShortcutTable::with_defaults()))))
}

/// Lock a shared table; a poisoned lock still holds consistent bookkeeping
pub fn lock(table: &SharedShortcuts) -> MutexGuard<'_, ShortcutTable> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One widget's claim on a shortcut table.
///
/// `acquire` and `release` are idempotent per capture; dropping the capture
/// releases it.
#[derive(Debug)]
pub struct ShortcutCapture {
    table: SharedShortcuts,
    held: bool,
}

impl ShortcutCapture {
    pub fn new(table: SharedShortcuts) -> Self {
        Self { table, held: false }
    }

    /// Capture on the process-wide table
    pub fn global() -> Self {
        Self::new(global())
    }

    pub fn acquire(&mut self) {
        if !self.held {
            lock(&self.table).acquire();
            self.held = true;
        }
    }

    pub fn release(&mut self) {
        if self.held {
            lock(&self.table).release();
            self.held = false;
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for ShortcutCapture {
    fn drop(&mut self) {
        self.release();
    }
}
