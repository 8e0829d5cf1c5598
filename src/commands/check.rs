//! Check subcommand handler.
//!
//! Validates a deck manifest without starting the carousel: lists the
//! slides that will display, flags image files that will fall back to
//! the placeholder, and reports skipped entries.

use std::path::Path;

use anyhow::{bail, Result};

use karussell::theme::Theme;
use karussell::{Config, Deck};

/// Validate a deck manifest and print a summary.
pub fn handle(deck_path: &Path) -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(&config.display.theme);

    let deck = Deck::load(deck_path)?;

    for (i, slide) in deck.slides.iter().enumerate() {
        let caption = slide.display_caption(i);
        let note = if slide.missing {
            theme.error_text(" [placeholder: file not found]")
        } else {
            String::new()
        };
        println!(
            "{:>3}. {} - {}{}",
            i + 1,
            theme.primary_text(&slide.src),
            theme.secondary_text(&caption),
            note
        );
    }

    if deck.skipped > 0 {
        println!(
            "{}",
            theme.secondary_text(&format!(
                "skipped {} entry(s) without an image reference",
                deck.skipped
            ))
        );
    }

    if deck.is_empty() {
        bail!("deck contains no displayable slides");
    }

    println!("{}", theme.success_text(&format!("{} slide(s) ok", deck.len())));
    Ok(())
}
