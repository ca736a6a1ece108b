// lexidrill - terminal translation practice drill
//
// Architecture:
// - Answer-entry screen: prompt + free text input (the lesson side)
// - Result screen: interprets the outcome fields, fires a sound cue,
//   offers copy-answer on misses, and routes back into the lesson
// - Event system: crossterm keys + a redraw tick inside tokio::select!
// - Logging: tracing captured into an in-memory buffer for the hint bar

mod cli;
mod config;
mod exercise;
mod feedback;
mod logging;
mod result;
mod transition;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::Config;
use exercise::ActivationParams;
use feedback::{AudioPlayer, ProcessPlayer, SilentPlayer};
use logging::{BufferLayer, LogBuffer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Subcommands (config --show/--path) print and exit
    if cli::handle_command(&args) {
        return Ok(());
    }

    let mut config = Config::from_env();
    if args.no_sound {
        config.sound.enabled = false;
    }
    if let Some(theme) = &args.theme {
        config.theme = theme.clone();
    }

    // Logs go to an in-memory buffer, never to stdout - raw output would
    // garble the alternate screen. Precedence: RUST_LOG > config file.
    let log_buffer = LogBuffer::new();
    let default_filter = format!("lexidrill={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(BufferLayer::new(log_buffer.clone()))
        .init();

    tracing::info!("lexidrill {} starting", config::VERSION);

    let player: Box<dyn AudioPlayer> = if config.sound.enabled {
        Box::new(ProcessPlayer::new(
            config.sound.command.clone(),
            config.sound.correct_asset.clone(),
            config.sound.incorrect_asset.clone(),
        ))
    } else {
        Box::new(SilentPlayer)
    };

    let theme = tui::theme::Theme::by_name(&config.theme);
    let mut app = tui::app::App::new(theme, player, log_buffer);

    // Direct activation: the navigation fields passed explicitly on the
    // command line drop us straight onto the result screen
    if args.outcome.is_some() || args.expected.is_some() || args.answer.is_some() {
        app.activate_result(&ActivationParams {
            outcome: args.outcome,
            expected: args.expected,
            answer: args.answer,
        });
    }

    tui::run_tui(app).await
}
