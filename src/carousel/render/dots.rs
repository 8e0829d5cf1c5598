//! Pagination dot rendering and hit-testing.
//!
//! One dot per slide on a single row below the track; the dot at the
//! active index is filled and accented. Dots sit two columns apart, and
//! the same arithmetic drives click hit-testing in the mouse handler.

use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Active pagination dot.
const DOT_ACTIVE: &str = "●";
/// Inactive pagination dot.
const DOT_INACTIVE: &str = "○";

/// Total width of the dot row for `len` slides (dots with one-column
/// gaps).
fn dots_width(len: usize) -> u16 {
    if len == 0 {
        0
    } else {
        (2 * len - 1) as u16
    }
}

/// Column of the first dot when the row is centered in `width` columns.
pub fn dots_start_col(width: u16, len: usize) -> u16 {
    let row_width = dots_width(len);
    if row_width >= width {
        0
    } else {
        (width - row_width) / 2
    }
}

/// Map a clicked column to a pagination dot index, if it hit one.
pub fn dot_at(col: u16, start: u16, len: usize) -> Option<usize> {
    if len == 0 || col < start {
        return None;
    }
    let rel = col - start;
    if rel >= dots_width(len) || rel % 2 != 0 {
        return None;
    }
    Some((rel / 2) as usize)
}

/// Build the pagination dot line with the active dot distinguished.
pub fn dots_line(len: usize, active: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(2 * len);
    for i in 0..len {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        if i == active {
            spans.push(Span::styled(DOT_ACTIVE, theme.accent_bold_style()));
        } else {
            spans.push(Span::styled(DOT_INACTIVE, theme.text_secondary_style()));
        }
    }
    Line::from(spans)
}
