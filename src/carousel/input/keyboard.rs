//! Keyboard input handling for the carousel.
//!
//! The raw-mode event stream delivers every key press while the
//! carousel is mounted, so arrow navigation works regardless of what
//! the pointer is over.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::carousel::state::{CarouselState, InputResult};

/// Handle a keyboard event.
pub fn handle_key_event(key: KeyEvent, state: &mut CarouselState) -> InputResult {
    // If help is showing, any key closes it
    if state.show_help {
        state.show_help = false;
        state.needs_render = true;
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Navigation ===
        KeyCode::Right => {
            state.advance(1);
            InputResult::Continue
        }
        KeyCode::Left => {
            state.advance(-1);
            InputResult::Continue
        }
        KeyCode::Home => {
            state.go_to(0);
            InputResult::Continue
        }
        KeyCode::End => {
            if state.len > 0 {
                state.go_to(state.len - 1);
            }
            InputResult::Continue
        }
        KeyCode::Char(c @ '1'..='9') => {
            let target = (c as usize) - ('1' as usize);
            if target < state.len {
                state.go_to(target);
            }
            InputResult::Continue
        }

        // === Playback ===
        KeyCode::Char(' ') => {
            state.toggle_pause();
            InputResult::Continue
        }

        // === Help ===
        KeyCode::Char('?') => {
            state.toggle_help();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
