//! Slide track rendering.
//!
//! All slides are laid out on one horizontal track; the viewport shows
//! the track at offset `index * width`, shifted by the live drag
//! displacement, so at most two slides are visible mid-gesture.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::deck::Slide;
use crate::theme::Theme;

/// Marker shown instead of the source path when the image file was
/// missing at load time.
pub const PLACEHOLDER_LABEL: &str = "(image unavailable)";

/// A horizontal slice of one slide, positioned within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideSlice {
    /// Index of the slide in the deck
    pub index: usize,
    /// Left edge within the viewport, in columns
    pub x: u16,
    /// Visible width, in columns
    pub width: u16,
}

/// Compute which slides are visible for the given index and drag
/// displacement.
///
/// The track offset is clamped to the ends of the track, so dragging
/// past the first or last slide shows no wrap-around.
pub fn visible_slides(index: usize, drag_dx: i32, view_width: u16, len: usize) -> Vec<SlideSlice> {
    if len == 0 || view_width == 0 {
        return Vec::new();
    }
    let w = i64::from(view_width);
    let max_offset = (len as i64 - 1) * w;
    // Dragging rightward (positive displacement) reveals the previous slide
    let offset = (index as i64 * w - i64::from(drag_dx)).clamp(0, max_offset);

    let first = (offset / w) as usize;
    let mut slices = Vec::with_capacity(2);
    for slide in first..len.min(first + 2) {
        let slide_left = slide as i64 * w;
        let left = slide_left.max(offset);
        let right = (slide_left + w).min(offset + w);
        if right > left {
            slices.push(SlideSlice {
                index: slide,
                x: (left - offset) as u16,
                width: (right - left) as u16,
            });
        }
    }
    slices
}

/// Truncate a caption to fit in `width` display columns, appending an
/// ellipsis when cut.
pub fn fit_caption(caption: &str, width: u16) -> String {
    let width = width as usize;
    if caption.width() <= width {
        return caption.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in caption.chars() {
        let cw = c.width().unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Render one slide panel into the given area.
pub fn render_slide(
    frame: &mut Frame,
    area: Rect,
    slide: &Slide,
    position: usize,
    total: usize,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.text_secondary_style())
        .title(format!(" {} / {} ", position + 1, total));

    let inner_width = area.width.saturating_sub(2);
    let caption = fit_caption(&slide.display_caption(position), inner_width);

    let source_line = if slide.missing {
        Line::styled(PLACEHOLDER_LABEL, theme.error_style())
    } else {
        Line::styled(slide.src.clone(), theme.text_secondary_style())
    };

    // Center the caption vertically in the panel
    let inner_height = area.height.saturating_sub(2) as usize;
    let top_pad = inner_height.saturating_sub(2) / 2;
    let mut lines = vec![Line::default(); top_pad];
    lines.push(Line::styled(caption, theme.accent_bold_style()));
    lines.push(source_line);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
