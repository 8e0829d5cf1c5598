//! karussell - a terminal slide carousel
//!
//! Plays an ordered deck of slides (image reference plus optional caption)
//! full-screen in the terminal, advancing automatically on a timer. Manual
//! navigation via arrow keys, pagination dots (mouse click), and horizontal
//! drag/swipe gestures.
//!
//! # Architecture
//!
//! - `deck`: slide manifest loading and validation
//! - `carousel`: the interactive player (state, autoplay timer, input, render)
//! - `config`: user configuration (TOML, `~/.config/karussell/config.toml`)
//! - `theme`: colors and styles for TUI and CLI output

pub mod carousel;
pub mod config;
pub mod deck;
pub mod theme;

pub use config::Config;
pub use deck::{Deck, DeckError, Slide};
