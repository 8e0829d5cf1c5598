//! Input handling for the carousel.
//!
//! - `keyboard`: arrow navigation, pause, jumps, help, quit
//! - `mouse`: hover pause, pagination dot clicks, drag/swipe gestures

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
