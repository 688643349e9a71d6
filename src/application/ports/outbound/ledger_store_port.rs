use crate::domain::entities::OwnedBusiness;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persistence for the owned-business ledger.
///
/// The ledger is stored as one snapshot; every save replaces the previous
/// one wholesale.
pub trait LedgerStorePort: Send + Sync {
    /// Read the stored snapshot, `Ok(None)` if nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<OwnedBusiness>>, StoreError>;

    fn save(&self, businesses: &[OwnedBusiness]) -> Result<(), StoreError>;
}
