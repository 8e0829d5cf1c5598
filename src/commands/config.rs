//! Config subcommands handler

use anyhow::Result;

use karussell::theme::Theme;
use karussell::Config;

/// Show current configuration as TOML.
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = Theme::from_name(&config.display.theme);
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", theme.primary_text(&toml_str));
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses the $EDITOR environment variable (defaults to 'vi').
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure the config exists before opening it
    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("failed to open editor: {}", e))?;

    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}
