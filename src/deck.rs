//! Slide deck loading and validation
//!
//! A deck is a TOML or JSON manifest listing slides in display order:
//!
//! ```toml
//! [[slides]]
//! src = "img/showroom.jpg"
//! caption = "Visit our showroom"
//! ```
//!
//! Entries without an image reference are filtered out before indexing,
//! so a malformed entry never becomes the active slide and never counts
//! toward the displayed total.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while loading a deck manifest.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid TOML deck '{path}': {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid JSON deck '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Raw manifest entry as written by the user. `src` is optional here so
/// that malformed entries deserialize instead of failing the whole deck.
#[derive(Debug, Deserialize)]
struct RawSlide {
    src: Option<String>,
    caption: Option<String>,
}

/// Raw manifest shape shared by TOML and JSON decks.
#[derive(Debug, Default, Deserialize)]
struct RawDeck {
    #[serde(default)]
    slides: Vec<RawSlide>,
}

/// One slide of the carousel. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Image reference (path, relative to the manifest location)
    pub src: String,
    /// Optional caption shown on the slide
    pub caption: Option<String>,
    /// True when the image file did not exist at load time; the slide
    /// renders the placeholder marker instead of its source path
    pub missing: bool,
}

/// An ordered, validated sequence of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Slides in display order, malformed entries already removed
    pub slides: Vec<Slide>,
    /// Number of manifest entries dropped for lacking an image reference
    pub skipped: usize,
}

impl Deck {
    /// Load a deck manifest from disk.
    ///
    /// The format is chosen by file extension: `.json` parses as JSON,
    /// everything else as TOML. Entries with an absent or empty `src`
    /// are dropped with a warning.
    pub fn load(path: &Path) -> Result<Deck, DeckError> {
        let content = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: RawDeck = if path.extension().and_then(|e| e.to_str()) == Some("json") {
            serde_json::from_str(&content).map_err(|source| DeckError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| DeckError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::from_raw(raw, base))
    }

    /// Build a deck from raw entries, filtering malformed ones.
    fn from_raw(raw: RawDeck, base: &Path) -> Deck {
        let total = raw.slides.len();
        let slides: Vec<Slide> = raw
            .slides
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| match entry.src {
                Some(src) if !src.trim().is_empty() => {
                    let missing = !base.join(&src).exists();
                    Some(Slide {
                        src,
                        caption: entry.caption,
                        missing,
                    })
                }
                _ => {
                    warn!(entry = i, "skipping slide without an image reference");
                    None
                }
            })
            .collect();

        let skipped = total - slides.len();
        Deck { slides, skipped }
    }

    /// Number of displayable slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// True when the deck has no displayable slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

impl Slide {
    /// Caption to display, falling back to the numbered default.
    pub fn display_caption(&self, position: usize) -> String {
        match &self.caption {
            Some(c) => c.clone(),
            None => format!("Slide {}", position + 1),
        }
    }
}
