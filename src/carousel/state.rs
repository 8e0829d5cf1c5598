//! Carousel state management
//!
//! Contains the central `CarouselState` struct that holds all navigation
//! state, as well as shared types used across carousel modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue running
    Continue,
    /// Exit the carousel normally
    Quit,
}

/// Central state for a mounted carousel instance.
///
/// The current index is always a valid offset into the slide sequence:
/// navigation wraps modulo the slide count in both directions, and every
/// mutation is a no-op when the deck is empty.
#[derive(Debug)]
pub struct CarouselState {
    /// Index of the active slide (`< len` whenever `len > 0`)
    pub index: usize,
    /// Number of displayable slides
    pub len: usize,
    /// Pause pinned by the user (Space)
    pub user_paused: bool,
    /// Pause driven by the pointer hovering the track
    pub hovered: bool,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl CarouselState {
    /// Create state for a deck of `len` slides, starting at the first
    /// slide, unpaused.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            user_paused: false,
            hovered: false,
            show_help: false,
            needs_render: true,
        }
    }

    /// Advance the active slide by one in the given direction, wrapping
    /// at both ends. No-op when the deck is empty.
    pub fn advance(&mut self, direction: i8) {
        if self.len == 0 {
            return;
        }
        self.index = if direction >= 0 {
            (self.index + 1) % self.len
        } else {
            (self.index + self.len - 1) % self.len
        };
        self.needs_render = true;
    }

    /// Jump directly to slide `i` (pagination). Callers derive `i` from
    /// the slide count; out-of-range values are clamped.
    pub fn go_to(&mut self, i: usize) {
        if self.len == 0 {
            return;
        }
        self.index = i.min(self.len - 1);
        self.needs_render = true;
    }

    /// Suspend autoplay while the pointer hovers the track.
    pub fn pause(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.needs_render = true;
        }
    }

    /// Lift the hover suspension. The autoplay timer re-arms with a
    /// fresh full interval.
    pub fn resume(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.needs_render = true;
        }
    }

    /// Toggle the user-pinned pause (Space).
    pub fn toggle_pause(&mut self) {
        self.user_paused = !self.user_paused;
        self.needs_render = true;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Autoplay is suspended while either pause source is active.
    pub fn suspended(&self) -> bool {
        self.user_paused || self.hovered
    }

    /// Whether the autoplay timer should be armed: more than one slide
    /// and not suspended.
    pub fn autoplay_active(&self) -> bool {
        self.len > 1 && !self.suspended()
    }
}
