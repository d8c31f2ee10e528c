//! Widgets: label, line edit and combo box.

pub mod combo_box;
pub mod label;
pub mod line_edit;

pub use combo_box::{ComboBox, SelectHandler};
pub use label::Label;
pub use line_edit::{CommitHandler, EditState, LineEdit};
