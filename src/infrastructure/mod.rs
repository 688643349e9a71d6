//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: Application configuration
//! - Persistence: JSON file store for the ledger
//! - World: JSON snapshot standing in for the host world
//! - Event log: tracing sink for ledger events
//! - Console: text commands standing in for the in-game UI
//! - State: Application wiring

pub mod config;
pub mod console;
pub mod event_log;
pub mod persistence;
pub mod state;
pub mod world;
