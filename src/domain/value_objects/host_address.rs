//! Host address snapshot - what the host world tells us about a location

use serde::{Deserialize, Serialize};

use super::AddressId;

/// Read-only view of a host location.
///
/// Every optional field mirrors a reference the host may leave unset: a
/// location without a company has no preset or roster, and street-level
/// addresses have no floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostAddress {
    pub id: AddressId,
    pub name: String,
    /// Company preset name, used to resolve the business type
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub floor_name: Option<String>,
    /// Company roster size; `None` when there is no company or no roster
    #[serde(default)]
    pub roster_size: Option<usize>,
}

impl HostAddress {
    pub fn new(id: AddressId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            preset: None,
            floor_name: None,
            roster_size: None,
        }
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_floor(mut self, floor_name: impl Into<String>) -> Self {
        self.floor_name = Some(floor_name.into());
        self
    }

    pub fn with_roster(mut self, roster_size: usize) -> Self {
        self.roster_size = Some(roster_size);
        self
    }

    /// Employee count snapshot, zero when no roster exists
    pub fn employee_count(&self) -> u32 {
        self.roster_size
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}
