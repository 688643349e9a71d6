//! Application configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::domain::value_objects::LedgerSettings;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the mod runs from; relative paths resolve against it
    pub data_root: PathBuf,
    /// Ledger save file, relative to `data_root`
    pub ledger_file: PathBuf,
    /// Host world snapshot, relative to `data_root`
    pub world_file: PathBuf,
    /// Wall-clock length of one simulation tick
    pub tick_interval: Duration,
    /// Economy settings
    pub ledger: LedgerSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let tick_ms: u64 = env::var("BIZOWNER_TICK_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .context("BIZOWNER_TICK_MS must be a whole number of milliseconds")?;

        Ok(Self {
            data_root: env::var("BIZOWNER_DATA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            ledger_file: env::var("BIZOWNER_LEDGER_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("Data/businesses.json")),
            world_file: env::var("BIZOWNER_WORLD_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("Data/world.json")),
            tick_interval: Duration::from_millis(tick_ms.max(1)),
            ledger: LedgerSettings::from_env(),
        })
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_root.join(&self.ledger_file)
    }

    pub fn world_path(&self) -> PathBuf {
        self.data_root.join(&self.world_file)
    }
}
