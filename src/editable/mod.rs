//! Single-line text editing core shared by the line edit and combo box.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over buffer implementations
//! - [`StringBuffer`]: Buffer backed by `String`
//! - [`SelectionModel`]: Optional anchor/active selection
//! - [`Caret`]: Insertion point with pixel position and visibility
//! - [`EditableState`]: Buffer + caret + selection, with the editing operations
//! - [`EditConstraints`]: Field-specific input restrictions
//!
//! # Example
//!
//! ```
//! use plotwidgets::editable::{EditableState, EditConstraints, MoveTarget, StringBuffer};
//!
//! let mut state = EditableState::new(
//!     StringBuffer::from_text("hello"),
//!     EditConstraints::default(),
//! );
//!
//! state.move_caret(MoveTarget::Home, false);
//! state.insert_text(">");
//!
//! assert_eq!(state.text(), ">hello");
//! ```

mod buffer;
mod constraints;
mod cursor;
mod selection;
mod state;

pub use buffer::{StringBuffer, TextBuffer, TextBufferMut};
pub use constraints::{CharFilter, EditConstraints};
pub use cursor::Caret;
pub use selection::{Selection, SelectionModel};
pub use state::{EditableState, MoveTarget};
