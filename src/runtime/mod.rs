//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window canvas and demo layout
//! - `input` - winit key events to widget key events
//! - `mouse` - double-click detection

pub mod app;
pub mod input;
pub mod mouse;

pub use app::App;
