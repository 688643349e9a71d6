//! Shared application state

use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::services::{GameSession, OwnershipLedger};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::event_log::TracingEventSink;
use crate::infrastructure::persistence::JsonLedgerStore;
use crate::infrastructure::world::SnapshotWorld;

/// Application state: configuration plus the wired-up session
pub struct AppState {
    pub config: AppConfig,
    pub session: GameSession,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_root).with_context(|| {
            format!("Failed to create data root {}", config.data_root.display())
        })?;

        let store = Arc::new(JsonLedgerStore::new(config.ledger_path()));
        tracing::info!("  Ledger file: {}", store.path().display());

        let world = Arc::new(SnapshotWorld::load(&config.world_path()));

        let ledger = OwnershipLedger::new(config.ledger.clone(), store, Arc::new(TracingEventSink));
        let session = GameSession::new(ledger, world);

        Ok(Self { config, session })
    }
}
