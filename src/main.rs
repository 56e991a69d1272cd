#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lovenote_core::CardConfig;

/// Global card, set once from the command line before launch
static CARD: OnceLock<CardConfig> = OnceLock::new();

/// Global random seed (only set with --seed)
static SEED: OnceLock<u64> = OnceLock::new();

/// Get the card being shown (the built-in card if none was loaded)
pub fn get_card() -> CardConfig {
    CARD.get().cloned().unwrap_or_default()
}

/// Get the random seed, if the run is seeded
pub fn get_seed() -> Option<u64> {
    SEED.get().copied()
}

/// Lovenote - an animated greeting card
#[derive(Parser, Debug)]
#[command(name = "lovenote-desktop")]
#[command(about = "Lovenote - two envelopes, a photo each, and a field of hearts")]
struct Args {
    /// Card file (JSON). Defaults to <config dir>/lovenote/card.json if present
    #[arg(short, long)]
    card: Option<PathBuf>,

    /// Seed for the heart field and confetti (same seed, same hearts)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Splash duration in milliseconds (overrides the card)
    #[arg(long)]
    splash_ms: Option<u64>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let mut card = CardConfig::load_or_default(args.card.as_deref())
        .with_context(|| match &args.card {
            Some(path) => format!("Failed to load card from {:?}", path),
            None => "Failed to load the default card file".to_string(),
        })?;

    if let Some(ms) = args.splash_ms {
        card.splash_delay_ms = ms;
    }
    if let Some(seed) = args.seed {
        let _ = SEED.set(seed);
    }

    tracing::info!(
        "Starting card '{}' for {} recipients (seed: {:?})",
        card.title,
        card.recipients.len(),
        args.seed
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&card.window_title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 1000.0))
            .with_resizable(true),
    );

    let _ = CARD.set(card);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
