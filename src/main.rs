// SPDX-License-Identifier: GPL-3.0-only

//! Command-line entry point.
//!
//! Loads the persisted config, applies command-line overrides, resolves the
//! controller backend and runs a single typing session to completion,
//! reporting progress through the log.

use clap::Parser;
use futures::StreamExt;
use gridtype::app_settings;
use gridtype::config::Config;
use gridtype::driver::{self, ActionTimings};
use gridtype::layout::Language;
use gridtype::session::{SessionEvent, SessionManager};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Types text into a grid-based on-screen keyboard by emulating gamepad
/// input.
#[derive(Debug, Parser)]
#[command(name = "gridtype", version, about)]
struct Cli {
    /// The text to type.
    text: String,

    /// Keyboard language (english or german), overriding the config.
    #[arg(long)]
    language: Option<Language>,

    /// Typing speed multiplier, overriding the config.
    #[arg(long)]
    speed: Option<f32>,

    /// Controller backend to drive ("trace" logs actions without emitting).
    #[arg(long, default_value = "trace")]
    backend: String,

    /// Persist the effective language and speed back to the config file.
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gridtype=info".parse().expect("static directive parses")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load();
    if let Some(language) = cli.language {
        config.language = language;
    }
    if let Some(speed) = cli.speed {
        let (min, max) = app_settings::SPEED_RANGE;
        config.typing_speed = speed.clamp(min, max);
    }

    if cli.save_config {
        if let Err(e) = config.save() {
            tracing::warn!(error = %e, "could not save config");
        }
    }

    let timings = ActionTimings::scaled(config.typing_speed);
    let driver = match driver::resolve(&cli.backend, timings) {
        Ok(driver) => driver,
        Err(e) => {
            tracing::error!(error = %e, "could not resolve controller backend");
            return ExitCode::FAILURE;
        }
    };

    let mut sessions = SessionManager::new();
    let mut events = sessions
        .start(driver, config.language, timings, cli.text)
        .await;

    while let Some(event) = events.next().await {
        match event {
            SessionEvent::Progress { index, total } => {
                tracing::info!(index, total, "typing");
            }
            SessionEvent::CharacterSkipped { index, character } => {
                tracing::warn!(index, character = %character.escape_debug(), "skipped character");
            }
            SessionEvent::Completed | SessionEvent::Stopped => return ExitCode::SUCCESS,
            SessionEvent::Failed(reason) => {
                tracing::error!(%reason, "typing session failed");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::FAILURE
}
