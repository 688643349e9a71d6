//! JSON world snapshot - stands in for the live host world
//!
//! The standalone engine has no game process to query, so it reads a dump of
//! the host's citizens and addresses and answers [`HostWorldPort`] queries
//! from it. A missing or malformed dump behaves like a host whose citizen
//! directory is not ready yet.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::ports::outbound::{Employment, HostWorldPort};
use crate::domain::value_objects::{AddressId, CitizenId, HostAddress};

/// On-disk world dump
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub citizens: Vec<CitizenRecord>,
    #[serde(default)]
    pub addresses: Vec<HostAddress>,
    #[serde(default)]
    pub player_owned: Vec<AddressId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenRecord {
    pub id: CitizenId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub residence: Option<AddressId>,
    #[serde(default)]
    pub job: Option<JobRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub location: Option<AddressId>,
}

/// Host world backed by a [`WorldSnapshot`]
#[derive(Debug, Default)]
pub struct SnapshotWorld {
    /// `None` when no snapshot could be read
    citizens: Option<Vec<CitizenRecord>>,
    citizen_index: HashMap<CitizenId, usize>,
    addresses: HashMap<AddressId, HostAddress>,
    player_owned: Vec<AddressId>,
}

impl SnapshotWorld {
    /// World with no citizen directory
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: WorldSnapshot) -> Self {
        let citizen_index = snapshot
            .citizens
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id, i))
            .collect();
        let addresses = snapshot
            .addresses
            .into_iter()
            .map(|a| (a.id, a))
            .collect();
        Self {
            citizens: Some(snapshot.citizens),
            citizen_index,
            addresses,
            player_owned: snapshot.player_owned,
        }
    }

    /// Read a snapshot file, falling back to an unavailable world
    pub fn load(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), "World snapshot unreadable: {}", e);
                return Self::unavailable();
            }
        };
        match serde_json::from_str::<WorldSnapshot>(&data) {
            Ok(snapshot) => {
                info!(
                    path = %path.display(),
                    citizens = snapshot.citizens.len(),
                    addresses = snapshot.addresses.len(),
                    "Loaded world snapshot"
                );
                Self::from_snapshot(snapshot)
            }
            Err(e) => {
                warn!(path = %path.display(), "World snapshot malformed: {}", e);
                Self::unavailable()
            }
        }
    }

    fn citizen(&self, id: CitizenId) -> Option<&CitizenRecord> {
        let position = *self.citizen_index.get(&id)?;
        self.citizens.as_ref()?.get(position)
    }
}

impl HostWorldPort for SnapshotWorld {
    fn citizen_directory(&self) -> Option<Vec<CitizenId>> {
        self.citizens
            .as_ref()
            .map(|citizens| citizens.iter().map(|c| c.id).collect())
    }

    fn citizen_name(&self, citizen: CitizenId) -> Option<String> {
        self.citizen(citizen)?.name.clone()
    }

    fn citizen_residence(&self, citizen: CitizenId) -> Option<AddressId> {
        self.citizen(citizen)?.residence
    }

    fn citizen_employment(&self, citizen: CitizenId) -> Option<Employment> {
        let job = self.citizen(citizen)?.job.as_ref()?;
        Some(Employment {
            employer_name: job.employer_name.clone(),
            location: job.location,
        })
    }

    fn address(&self, id: AddressId) -> Option<HostAddress> {
        self.addresses.get(&id).cloned()
    }

    fn player_owned_addresses(&self) -> Vec<AddressId> {
        self.player_owned.clone()
    }
}
