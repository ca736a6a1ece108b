// CLI module - command-line argument parsing and handlers
//
// The three result fields can be passed directly to jump straight to the
// result screen (the navigation query channel made explicit), which is
// also how the screen is exercised in isolation. A `config` subcommand
// mirrors the usual --show/--path helpers.

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};

/// lexidrill - terminal translation drill
#[derive(Parser)]
#[command(name = "lexidrill")]
#[command(version = VERSION)]
#[command(about = "Terminal translation practice drill", long_about = None)]
pub struct Cli {
    /// Raw outcome token for direct result-screen activation
    /// (only the literal "correct" counts as correct)
    #[arg(long)]
    pub outcome: Option<String>,

    /// Percent-encoded expected answer
    #[arg(long)]
    pub expected: Option<String>,

    /// Percent-encoded submitted answer
    #[arg(long)]
    pub answer: Option<String>,

    /// Disable sound cues
    #[arg(long)]
    pub no_sound: bool,

    /// Theme name (auto, classic, contrast)
    #[arg(long)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI subcommands. Returns true if a command was handled (exit after).
pub fn handle_command(cli: &Cli) -> bool {
    match &cli.command {
        Some(Commands::Config { show, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else {
                println!("Usage: lexidrill config [--show|--path]");
            }
            true
        }
        None => false,
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!();
    println!("[sound]");
    println!("enabled = {}", config.sound.enabled);
    println!("command = {:?}", config.sound.command);
    println!("correct_asset = {:?}", config.sound.correct_asset.display().to_string());
    println!(
        "incorrect_asset = {:?}",
        config.sound.incorrect_asset.display().to_string()
    );
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
}
