//! Business Ownership Engine - owned businesses for a city-sim mod
//!
//! The engine:
//! - Keeps the ledger of businesses the player owns and saves it as JSON
//! - Collects income from every owned business on a fixed game-time interval
//! - Scans the host world for businesses the player could buy
//! - Drives all of it from a tick loop and a text console

mod application;
mod domain;
mod infrastructure;

use tokio::time::{Instant, MissedTickBehavior};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::console::{self, ConsoleCommand, ConsoleReply};
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bizowner_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting business ownership engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Data root: {}", config.data_root.display());
    tracing::info!("  Tick: {:?}", config.tick_interval);
    tracing::info!("  Income interval: {}s", config.ledger.income_interval_secs);

    let AppState {
        config,
        mut session,
    } = AppState::new(config)?;
    session.on_game_loaded();
    tracing::info!("Session ready");
    println!("{}", console::HELP);

    let mut ticker = tokio::time::interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_tick = Instant::now();
    let mut input = console::spawn_stdin_reader();
    let mut console_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                let elapsed = now.duration_since(last_tick);
                last_tick = now;
                if let Some(total) = session.on_tick(elapsed) {
                    tracing::debug!(total, "Periodic income collected");
                }
            }
            line = input.recv(), if console_open => {
                let Some(line) = line else {
                    tracing::info!("Console closed, running until interrupted");
                    console_open = false;
                    continue;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<ConsoleCommand>() {
                    Ok(command) => match console::handle_command(&mut session, command) {
                        ConsoleReply::Text(text) => println!("{}", text),
                        ConsoleReply::Quit => break,
                    },
                    Err(e) => println!("{} (try 'help')", e),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }

    // Persist on the way out, same as a host save event
    session.on_game_saved();
    tracing::info!("Stopped");

    Ok(())
}
