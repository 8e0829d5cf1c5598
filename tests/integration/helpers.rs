//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write a deck manifest with the given file name into a fresh temp
/// directory. Returns the directory (kept alive by the caller) and the
/// manifest path.
pub fn temp_deck(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write deck manifest");
    (dir, path)
}

/// Create an empty image file next to a deck manifest so the slide is
/// not flagged as missing.
pub fn touch_image(dir: &TempDir, name: &str) {
    fs::write(dir.path().join(name), b"").expect("write image file");
}
