//! In-memory port doubles shared by service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::outbound::{
    Employment, EventSinkPort, HostWorldPort, LedgerStorePort, StoreError,
};
use crate::domain::entities::OwnedBusiness;
use crate::domain::events::BusinessEvent;
use crate::domain::value_objects::{AddressId, CitizenId, HostAddress};

/// Store that keeps the serialized snapshot in memory
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<String>>,
    saves: AtomicUsize,
    fail_load: AtomicBool,
    fail_save: AtomicBool,
}

impl MemoryStore {
    pub fn with_records(records: Vec<OwnedBusiness>) -> Self {
        let store = Self::default();
        store.save(&records).unwrap();
        store.saves.store(0, Ordering::SeqCst);
        store
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_loads(&self) {
        self.fail_load.store(true, Ordering::SeqCst);
    }

    pub fn fail_saves(&self) {
        self.fail_save.store(true, Ordering::SeqCst);
    }
}

impl LedgerStorePort for MemoryStore {
    fn load(&self) -> Result<Option<Vec<OwnedBusiness>>, StoreError> {
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("simulated read failure")));
        }
        match &*self.snapshot.lock().unwrap() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, businesses: &[OwnedBusiness]) -> Result<(), StoreError> {
        if self.fail_save.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("simulated write failure")));
        }
        let json = serde_json::to_string(businesses)?;
        *self.snapshot.lock().unwrap() = Some(json);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Sink that drops every event
pub struct NoopEventSink;

impl EventSinkPort for NoopEventSink {
    fn publish(&self, _event: BusinessEvent) {}
}

/// Sink that records every published event
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<BusinessEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<BusinessEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type())
            .collect()
    }
}

impl EventSinkPort for RecordingSink {
    fn publish(&self, event: BusinessEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeCitizen {
    pub name: Option<String>,
    pub residence: Option<AddressId>,
    pub employment: Option<Employment>,
}

impl FakeCitizen {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn living_at(mut self, residence: i64) -> Self {
        self.residence = Some(AddressId::new(residence));
        self
    }

    pub fn working_for(mut self, employer_name: &str, location: i64) -> Self {
        self.employment = Some(Employment {
            employer_name: Some(employer_name.to_string()),
            location: Some(AddressId::new(location)),
        });
        self
    }
}

/// Hand-built host world
#[derive(Debug, Clone, Default)]
pub struct FakeWorld {
    pub directory_available: bool,
    pub citizens: Vec<(CitizenId, FakeCitizen)>,
    pub addresses: HashMap<AddressId, HostAddress>,
    pub player_owned: Vec<AddressId>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self {
            directory_available: true,
            ..Self::default()
        }
    }

    pub fn with_address(mut self, address: HostAddress) -> Self {
        self.addresses.insert(address.id, address);
        self
    }

    pub fn with_citizen(mut self, citizen: FakeCitizen) -> Self {
        let id = CitizenId::new(self.citizens.len() as i64 + 1);
        self.citizens.push((id, citizen));
        self
    }

    pub fn with_player_owned(mut self, id: i64) -> Self {
        self.player_owned.push(AddressId::new(id));
        self
    }

    fn citizen(&self, id: CitizenId) -> Option<&FakeCitizen> {
        self.citizens.iter().find(|(c, _)| *c == id).map(|(_, c)| c)
    }
}

impl HostWorldPort for FakeWorld {
    fn citizen_directory(&self) -> Option<Vec<CitizenId>> {
        self.directory_available
            .then(|| self.citizens.iter().map(|(id, _)| *id).collect())
    }

    fn citizen_name(&self, citizen: CitizenId) -> Option<String> {
        self.citizen(citizen)?.name.clone()
    }

    fn citizen_residence(&self, citizen: CitizenId) -> Option<AddressId> {
        self.citizen(citizen)?.residence
    }

    fn citizen_employment(&self, citizen: CitizenId) -> Option<Employment> {
        self.citizen(citizen)?.employment.clone()
    }

    fn address(&self, id: AddressId) -> Option<HostAddress> {
        self.addresses.get(&id).cloned()
    }

    fn player_owned_addresses(&self) -> Vec<AddressId> {
        self.player_owned.clone()
    }
}
