//! Horizontal drag/swipe gesture tracking
//!
//! A single pointer-movement abstraction with begin/update/finish,
//! independent of the underlying input modality. The mouse handler feeds
//! it press/drag/release events; the track renderer reads the live
//! displacement for the mid-gesture offset.

/// Horizontal displacement (in columns) a gesture must exceed to count
/// as a swipe.
pub const SWIPE_THRESHOLD: i32 = 40;

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftward past the threshold: advance forward
    Forward,
    /// Dragged rightward past the threshold: advance backward
    Backward,
    /// Displacement stayed within the threshold
    None,
}

/// Tracks one in-flight drag gesture.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<u16>,
    delta: i32,
}

impl DragTracker {
    /// Record the horizontal start position on press.
    pub fn begin(&mut self, col: u16) {
        self.start = Some(col);
        self.delta = 0;
    }

    /// Track horizontal displacement on move. Ignored when no gesture
    /// is in flight.
    pub fn update(&mut self, col: u16) {
        if let Some(start) = self.start {
            self.delta = i32::from(col) - i32::from(start);
        }
    }

    /// Evaluate the gesture on release.
    ///
    /// Displacement state resets to zero afterwards regardless of
    /// outcome.
    pub fn finish(&mut self) -> Swipe {
        let swipe = if self.start.is_none() {
            Swipe::None
        } else if self.delta < -SWIPE_THRESHOLD {
            Swipe::Forward
        } else if self.delta > SWIPE_THRESHOLD {
            Swipe::Backward
        } else {
            Swipe::None
        };
        self.reset();
        swipe
    }

    /// Abandon the gesture (interrupted mid-drag, e.g. focus lost).
    pub fn reset(&mut self) {
        self.start = None;
        self.delta = 0;
    }

    /// Whether a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Live horizontal displacement of the in-flight gesture.
    pub fn delta(&self) -> i32 {
        self.delta
    }
}
