//! Rendering for the carousel.
//!
//! The slides live on a single horizontal track offset by
//! `-(index * viewport width)`, adjusted by the live drag displacement,
//! with a pagination dot row and a footer below.

mod dots;
mod help;
mod status;
mod track;

pub use dots::{dot_at, dots_line, dots_start_col};
pub use status::footer_line;
pub use track::{fit_caption, visible_slides, SlideSlice};

use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::carousel::gesture::DragTracker;
use crate::carousel::state::CarouselState;
use crate::deck::Deck;
use crate::theme::Theme;

/// Chrome rows below the track: pagination dots + footer.
pub const CHROME_ROWS: u16 = 2;

/// Screen regions of a mounted carousel, shared between rendering and
/// mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Region occupied by the slide track
    pub track: Rect,
    /// Row of the pagination dots
    pub dots_row: u16,
    /// Column of the first pagination dot
    pub dots_start: u16,
}

/// Compute the carousel regions for the given frame area.
///
/// The track fills the area above the chrome rows, capped to the
/// configured height hint and centered vertically when smaller.
pub fn compute_geometry(area: Rect, len: usize, height_cap: Option<u16>) -> Geometry {
    let content_height = area.height.saturating_sub(CHROME_ROWS);
    let track_height = match height_cap {
        Some(cap) => cap.min(content_height),
        None => content_height,
    };
    let track_y = area.y + (content_height - track_height) / 2;
    let track = Rect::new(area.x, track_y, area.width, track_height);

    Geometry {
        track,
        dots_row: area.y + area.height.saturating_sub(CHROME_ROWS),
        dots_start: dots_start_col(area.width, len),
    }
}

/// Draw one frame of the carousel.
pub fn draw(
    frame: &mut Frame,
    deck: &Deck,
    state: &CarouselState,
    drag: &DragTracker,
    theme: &Theme,
    height_cap: Option<u16>,
) {
    let area = frame.area();
    if area.height < CHROME_ROWS + 1 || deck.is_empty() {
        return;
    }
    let geo = compute_geometry(area, deck.len(), height_cap);

    for slice in visible_slides(state.index, drag.delta(), geo.track.width, deck.len()) {
        let slide_area = Rect::new(
            geo.track.x + slice.x,
            geo.track.y,
            slice.width,
            geo.track.height,
        );
        track::render_slide(
            frame,
            slide_area,
            &deck.slides[slice.index],
            slice.index,
            deck.len(),
            theme,
        );
    }

    let dots_area = Rect::new(area.x, geo.dots_row, area.width, 1);
    frame.render_widget(
        Paragraph::new(dots_line(deck.len(), state.index, theme))
            .alignment(ratatui::layout::Alignment::Center),
        dots_area,
    );

    let footer_area = Rect::new(area.x, geo.dots_row + 1, area.width, 1);
    frame.render_widget(Paragraph::new(footer_line(state, theme)), footer_area);

    if state.show_help {
        help::render_help(frame, area, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_reserves_chrome_rows() {
        let geo = compute_geometry(Rect::new(0, 0, 80, 24), 3, None);
        assert_eq!(geo.track, Rect::new(0, 0, 80, 22));
        assert_eq!(geo.dots_row, 22);
    }

    #[test]
    fn geometry_caps_and_centers_track() {
        let geo = compute_geometry(Rect::new(0, 0, 80, 24), 3, Some(10));
        assert_eq!(geo.track.height, 10);
        // (22 - 10) / 2 = 6
        assert_eq!(geo.track.y, 6);
    }

    #[test]
    fn geometry_cap_larger_than_area_is_clamped() {
        let geo = compute_geometry(Rect::new(0, 0, 80, 10), 3, Some(100));
        assert_eq!(geo.track.height, 8);
        assert_eq!(geo.track.y, 0);
    }

    #[test]
    fn geometry_dots_are_centered() {
        let geo = compute_geometry(Rect::new(0, 0, 80, 24), 3, None);
        // 3 dots span 5 columns: start = (80 - 5) / 2
        assert_eq!(geo.dots_start, 37);
    }
}
