//! Persistence - File-backed storage adapters

mod json_ledger_store;

pub use json_ledger_store::JsonLedgerStore;
