//! karussell CLI entry point.

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "karussell",
    version,
    about = "Terminal slide carousel - autoplaying image deck player for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a slide deck
    Play {
        /// Path to the deck manifest (TOML or JSON)
        deck: PathBuf,
        /// Autoplay period in milliseconds (floored to the minimum)
        #[arg(long)]
        interval: Option<u64>,
        /// Maximum track height in rows
        #[arg(long)]
        height: Option<u16>,
        /// Start with autoplay paused
        #[arg(long)]
        paused: bool,
    },
    /// Validate a deck manifest and list its slides
    Check {
        /// Path to the deck manifest (TOML or JSON)
        deck: PathBuf,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file path
    Path,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play {
            deck,
            interval,
            height,
            paused,
        } => commands::play::handle(&deck, interval, height, paused),
        Commands::Check { deck } => commands::check::handle(&deck),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "karussell",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
