//! End-to-end tests of the karussell binary.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{temp_deck, touch_image};

fn karussell() -> Command {
    Command::cargo_bin("karussell").expect("binary builds")
}

#[test]
fn check_lists_slides_and_succeeds() {
    let (dir, path) = temp_deck(
        "deck.toml",
        "[[slides]]\nsrc = \"hero.jpg\"\ncaption = \"Hero\"\n\n[[slides]]\nsrc = \"yard.jpg\"\n",
    );
    touch_image(&dir, "hero.jpg");
    touch_image(&dir, "yard.jpg");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("hero.jpg"))
        .stdout(predicate::str::contains("2 slide(s) ok"));
}

#[test]
fn check_flags_placeholder_fallback() {
    let (dir, path) = temp_deck("deck.toml", "[[slides]]\nsrc = \"ghost.jpg\"\n");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("placeholder: file not found"));
}

#[test]
fn check_reports_skipped_entries() {
    let (dir, path) = temp_deck(
        "deck.toml",
        "[[slides]]\ncaption = \"orphan\"\n\n[[slides]]\nsrc = \"ok.jpg\"\n",
    );
    touch_image(&dir, "ok.jpg");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped 1"));
}

#[test]
fn check_fails_on_deck_with_no_displayable_slides() {
    let (dir, path) = temp_deck("deck.toml", "[[slides]]\ncaption = \"no image\"\n");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no displayable slides"));
}

#[test]
fn check_fails_on_missing_manifest() {
    let (dir, _path) = temp_deck("deck.toml", "");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["check", "/nonexistent/deck.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read deck"));
}

#[test]
fn play_refuses_non_interactive_stdout() {
    // assert_cmd pipes stdout, so the tty check must reject the run
    // before the terminal is touched
    let (dir, path) = temp_deck("deck.toml", "[[slides]]\nsrc = \"a.jpg\"\n");

    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["play", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn completions_generate_for_bash() {
    karussell()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("karussell"));
}

#[test]
fn config_path_prints_a_path() {
    let dir = tempfile::TempDir::new().unwrap();
    karussell()
        .env("HOME", dir.path())
        .env_remove("XDG_CONFIG_HOME")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
