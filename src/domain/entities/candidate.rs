//! Business candidate - a location the player could buy

use crate::domain::value_objects::{AddressId, HostAddress};

/// A not-yet-owned business found by a discovery scan.
///
/// Snapshots are taken at scan time and go stale as soon as the host world
/// moves on, so candidates are never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessCandidate {
    pub address: HostAddress,
    pub employee_count: u32,
    /// Floor name, empty when the host has none for this location
    pub floor_name: String,
}

impl BusinessCandidate {
    pub fn from_address(address: HostAddress) -> Self {
        let employee_count = address.employee_count();
        let floor_name = address.floor_name.clone().unwrap_or_default();
        Self {
            address,
            employee_count,
            floor_name,
        }
    }

    pub fn address_id(&self) -> AddressId {
        self.address.id
    }
}
