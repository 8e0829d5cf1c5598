//! Footer rendering.
//!
//! One line below the pagination dots: position, pause indicator, and
//! keyboard hints.

use ratatui::text::{Line, Span};

use crate::carousel::state::CarouselState;
use crate::theme::Theme;

/// Build the footer line for the current state.
pub fn footer_line<'a>(state: &CarouselState, theme: &Theme) -> Line<'a> {
    let position = format!(" {}/{}", state.index + 1, state.len);
    let playback = if state.suspended() {
        Span::styled("  ⏸ paused", theme.accent_style())
    } else {
        Span::styled("  ▶ autoplay", theme.text_secondary_style())
    };

    Line::from(vec![
        Span::styled(position, theme.text_style()),
        playback,
        Span::styled(
            "   ←/→: navigate | Space: pause | ?: help | q: quit",
            theme.text_secondary_style(),
        ),
    ])
}
