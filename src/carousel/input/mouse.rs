//! Mouse input handling for the carousel.
//!
//! Handles hover pause/resume over the track, clicks on pagination
//! dots, and press/drag/release swipe gestures on the slide track.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::carousel::gesture::{DragTracker, Swipe};
use crate::carousel::render::{dot_at, Geometry};
use crate::carousel::state::{CarouselState, InputResult};

/// Handle a mouse event against the current carousel geometry.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut CarouselState,
    drag: &mut DragTracker,
    geo: &Geometry,
) -> InputResult {
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        // Hover over the track suspends autoplay; leaving resumes it
        MouseEventKind::Moved => {
            if geo.track.contains(pos) {
                state.pause();
            } else {
                state.resume();
            }
        }

        MouseEventKind::Down(MouseButton::Left) => {
            if mouse.row == geo.dots_row {
                // Pagination dots are generated from the slide count,
                // so a hit is always a valid index
                if let Some(i) = dot_at(mouse.column, geo.dots_start, state.len) {
                    state.go_to(i);
                }
            } else if geo.track.contains(pos) {
                drag.begin(mouse.column);
            }
        }

        MouseEventKind::Drag(MouseButton::Left) => {
            if drag.is_active() {
                drag.update(mouse.column);
                state.needs_render = true;
            }
        }

        MouseEventKind::Up(MouseButton::Left) => {
            let was_active = drag.is_active();
            match drag.finish() {
                Swipe::Forward => state.advance(1),
                Swipe::Backward => state.advance(-1),
                Swipe::None => {}
            }
            if was_active {
                state.needs_render = true;
            }
        }

        _ => {}
    }

    InputResult::Continue
}
