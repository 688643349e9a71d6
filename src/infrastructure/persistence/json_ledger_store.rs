//! JSON file store for the owned-business ledger
//!
//! The whole ledger is one pretty-printed JSON array. Saves truncate and
//! rewrite the file; a write interrupted halfway leaves a file that fails to
//! parse, which the ledger treats as "no saved state".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::outbound::{LedgerStorePort, StoreError};
use crate::domain::entities::OwnedBusiness;

pub struct JsonLedgerStore {
    path: PathBuf,
}

impl JsonLedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl LedgerStorePort for JsonLedgerStore {
    fn load(&self) -> Result<Option<Vec<OwnedBusiness>>, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn save(&self, businesses: &[OwnedBusiness]) -> Result<(), StoreError> {
        Self::ensure_parent(&self.path)?;
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, businesses)?;
        Ok(())
    }
}
