//! Application services - Use case implementations
//!
//! Each service takes its collaborators as ports, so the host engine, the
//! save file and event subscribers are all supplied from outside.

pub mod business_discovery;
pub mod game_session;
pub mod income_timer;
pub mod ownership_ledger;

#[cfg(test)]
pub(crate) mod test_support;

pub use business_discovery::BusinessDiscovery;
pub use game_session::GameSession;
pub use income_timer::IncomeTimer;
pub use ownership_ledger::{LedgerError, OwnershipLedger};
