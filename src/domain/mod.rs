//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: OwnedBusiness, BusinessCandidate
//! - Value Objects: ids, custom data, business type catalog, ledger settings
//! - Domain Events: ledger state changes

pub mod entities;
pub mod events;
pub mod value_objects;
