//! Play subcommand handler.

use std::path::Path;

use anyhow::{bail, Result};

use karussell::carousel::{self, PlayOptions};
use karussell::theme::Theme;
use karussell::{Config, Deck};

/// Load a deck and run the carousel.
pub fn handle(
    deck_path: &Path,
    interval: Option<u64>,
    height: Option<u16>,
    paused: bool,
) -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(&config.display.theme);

    if !atty::is(atty::Stream::Stdout) {
        bail!("play requires an interactive terminal");
    }

    let deck = Deck::load(deck_path)?;
    if deck.skipped > 0 {
        eprintln!(
            "{}",
            theme.secondary_text(&format!(
                "Skipped {} slide(s) without an image reference",
                deck.skipped
            ))
        );
    }
    if deck.is_empty() {
        println!(
            "{}",
            theme.error_text("Deck contains no displayable slides.")
        );
        return Ok(());
    }

    let opts = PlayOptions {
        interval_ms: interval.unwrap_or(config.playback.autoplay_ms),
        height: height.or(config.display.height),
        start_paused: paused,
        theme,
    };

    carousel::run(&deck, &opts)?;
    Ok(())
}
