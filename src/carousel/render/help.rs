//! Help overlay rendering.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme::Theme;

/// Render the help modal centered over the carousel.
pub fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let modal_width = 46.min(area.width.saturating_sub(4));
    let modal_height = 14.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(modal_width)) / 2;
    let y = area.y + (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(x, y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(theme))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        );

    frame.render_widget(help, modal_area);
}

/// Build the help text lines.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(theme.accent)),
            Span::raw(desc.to_string()),
        ])
    };

    vec![
        Line::from(Span::styled(
            "Keyboard & Mouse",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        key("←/→", "Previous / next slide"),
        key("1-9", "Jump to slide"),
        key("Home/End", "First / last slide"),
        key("Space", "Pause / resume autoplay"),
        key("click dot", "Jump to slide"),
        key("drag", "Swipe to previous / next"),
        key("hover", "Pauses autoplay"),
        key("q/Esc", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_mentions_core_bindings() {
        let lines = build_help_text(&Theme::default());
        let all: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();
        assert!(all.contains("Pause / resume"));
        assert!(all.contains("Swipe"));
        assert!(all.contains("Quit"));
    }
}
