//! Game Session - routes host lifecycle triggers to the ownership core
//!
//! The host raises discrete triggers (new game, load, save, ticks, UI
//! purchase/sale). The session owns the ledger, discovery scanner and income
//! timer, and maps each trigger onto them. All calls run on the caller's
//! thread and return once the change is persisted and published.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::application::ports::outbound::HostWorldPort;
use crate::application::services::business_discovery::BusinessDiscovery;
use crate::application::services::income_timer::IncomeTimer;
use crate::application::services::ownership_ledger::{LedgerError, OwnershipLedger};
use crate::domain::entities::{BusinessCandidate, OwnedBusiness};
use crate::domain::value_objects::{AddressId, CustomValue};

pub struct GameSession {
    ledger: OwnershipLedger,
    discovery: BusinessDiscovery,
    timer: IncomeTimer,
    world: Arc<dyn HostWorldPort>,
    paused: bool,
}

impl GameSession {
    pub fn new(ledger: OwnershipLedger, world: Arc<dyn HostWorldPort>) -> Self {
        let timer = IncomeTimer::new(ledger.settings().income_interval());
        Self {
            ledger,
            discovery: BusinessDiscovery::new(world.clone()),
            timer,
            world,
            paused: false,
        }
    }

    pub fn ledger(&self) -> &OwnershipLedger {
        &self.ledger
    }

    pub fn timer(&self) -> &IncomeTimer {
        &self.timer
    }

    #[instrument(skip(self))]
    pub fn on_new_game(&mut self) {
        self.ledger.load();
        self.timer.reset();
    }

    /// Restore the ledger and run a diagnostic discovery scan
    #[instrument(skip(self))]
    pub fn on_game_loaded(&mut self) -> Vec<BusinessCandidate> {
        self.ledger.load();
        self.timer.reset();
        let candidates = self.discovery.find_candidates();
        info!(
            owned = self.ledger.len(),
            candidates = candidates.len(),
            "Game loaded"
        );
        candidates
    }

    #[instrument(skip(self))]
    pub fn on_game_saved(&self) {
        self.ledger.save();
    }

    /// Host pause state; time spent paused does not count toward income
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, "Simulation pause changed");
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance the income timer. Returns the collected total when a
    /// collection ran.
    pub fn on_tick(&mut self, elapsed: Duration) -> Option<i64> {
        if self.paused {
            return None;
        }
        if !self.timer.advance(elapsed) {
            return None;
        }
        debug!("Income interval elapsed");
        Some(self.ledger.collect_all_income())
    }

    /// Candidates for the purchase list
    pub fn candidates(&self) -> Vec<BusinessCandidate> {
        self.discovery.find_candidates()
    }

    /// Buy a host address under its host display name
    #[instrument(skip(self, date))]
    pub fn purchase(
        &mut self,
        address_id: AddressId,
        price: i64,
        date: impl Into<String>,
    ) -> Result<OwnedBusiness, LedgerError> {
        let address = self
            .world
            .address(address_id)
            .ok_or(LedgerError::UnknownAddress(address_id))?;
        let name = address.name.clone();
        self.ledger
            .add_owned(&address, name, price, date)
            .cloned()
    }

    #[instrument(skip(self))]
    pub fn sell(&mut self, address_id: AddressId, price: i64) -> Result<OwnedBusiness, LedgerError> {
        self.ledger.sell(address_id, price)
    }

    #[instrument(skip(self))]
    pub fn set_upgrade_level(
        &mut self,
        address_id: AddressId,
        level: u32,
    ) -> Result<(), LedgerError> {
        let business = self
            .ledger
            .get(address_id)
            .cloned()
            .ok_or(LedgerError::NotFound(address_id))?
            .with_upgrade_level(level);
        self.ledger.update(business)
    }

    /// Set one custom data entry on an owned business
    #[instrument(skip(self, value))]
    pub fn set_custom_value(
        &mut self,
        address_id: AddressId,
        key: String,
        value: CustomValue,
    ) -> Result<(), LedgerError> {
        let mut business = self
            .ledger
            .get(address_id)
            .cloned()
            .ok_or(LedgerError::NotFound(address_id))?;
        business.custom_data.insert(key, value);
        self.ledger.update(business)
    }

    /// Collect income now, outside the timer
    pub fn collect_now(&mut self) -> i64 {
        self.timer.reset();
        self.ledger.collect_all_income()
    }

    pub fn reload(&mut self) {
        self.ledger.load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{
        FakeCitizen, FakeWorld, MemoryStore, RecordingSink,
    };
    use crate::domain::value_objects::{HostAddress, LedgerSettings};

    fn world() -> FakeWorld {
        FakeWorld::new()
            .with_address(HostAddress::new(AddressId::new(1), "Blue Moon Bar").with_preset("BarDive"))
            .with_address(HostAddress::new(AddressId::new(2), "Noodle House").with_preset("ChineseEatery"))
            .with_citizen(FakeCitizen::named("Ann").working_for("Blue Moon Co", 1))
            .with_citizen(FakeCitizen::named("Ben").working_for("Noodle Co", 2))
    }

    fn session_with(
        world: FakeWorld,
        store: Arc<MemoryStore>,
    ) -> (GameSession, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let ledger = OwnershipLedger::new(LedgerSettings::default(), store, sink.clone());
        (GameSession::new(ledger, Arc::new(world)), sink)
    }

    #[test]
    fn test_purchase_uses_host_name_and_preset() {
        let (mut session, _) = session_with(world(), Arc::new(MemoryStore::default()));

        let business = session.purchase(AddressId::new(1), 2500, "1979-03-01").unwrap();

        assert_eq!(business.name, "Blue Moon Bar");
        assert_eq!(business.business_type, "Bar");
        assert!(session.ledger().is_owned(AddressId::new(1)));
    }

    #[test]
    fn test_purchase_of_unknown_address_fails() {
        let (mut session, sink) = session_with(world(), Arc::new(MemoryStore::default()));

        let result = session.purchase(AddressId::new(99), 100, "");

        assert_eq!(result.unwrap_err(), LedgerError::UnknownAddress(AddressId::new(99)));
        assert!(session.ledger().is_empty());
        assert!(sink.events().is_empty());
    }

    #[test]
    fn test_ticks_collect_after_interval() {
        let (mut session, _) = session_with(world(), Arc::new(MemoryStore::default()));
        session.purchase(AddressId::new(1), 100, "").unwrap();

        assert_eq!(session.on_tick(Duration::from_secs(299)), None);
        assert_eq!(session.on_tick(Duration::from_secs(1)), Some(500));
        assert_eq!(session.on_tick(Duration::from_secs(1)), None);
    }

    #[test]
    fn test_paused_ticks_never_collect() {
        let (mut session, sink) = session_with(world(), Arc::new(MemoryStore::default()));
        session.purchase(AddressId::new(1), 100, "").unwrap();

        session.set_paused(true);
        for _ in 0..10 {
            assert_eq!(session.on_tick(Duration::from_secs(60)), None);
        }
        assert_eq!(sink.event_types(), vec!["Purchased"]);

        session.set_paused(false);
        assert_eq!(session.on_tick(Duration::from_secs(299)), None);
        assert_eq!(session.on_tick(Duration::from_secs(1)), Some(500));
    }

    #[test]
    fn test_save_then_load_restores_ledger() {
        let store = Arc::new(MemoryStore::default());
        let (mut session, _) = session_with(world(), store.clone());
        session.purchase(AddressId::new(2), 800, "").unwrap();
        session.on_game_saved();

        let (mut restored, _) = session_with(world(), store);
        restored.on_game_loaded();

        assert!(restored.ledger().is_owned(AddressId::new(2)));
    }

    #[test]
    fn test_new_game_with_no_save_starts_empty() {
        let (mut session, _) = session_with(world(), Arc::new(MemoryStore::default()));

        session.on_new_game();

        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_load_scan_excludes_player_property() {
        let (mut session, _) = session_with(world().with_player_owned(1), Arc::new(MemoryStore::default()));

        let candidates = session.on_game_loaded();

        let ids: Vec<i64> = candidates.iter().map(|c| c.address_id().value()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_set_upgrade_level_updates_income() {
        let (mut session, sink) = session_with(world(), Arc::new(MemoryStore::default()));
        session.purchase(AddressId::new(1), 100, "").unwrap();

        session.set_upgrade_level(AddressId::new(1), 1).unwrap();

        assert_eq!(session.collect_now(), 600);
        assert_eq!(sink.event_types(), vec!["Purchased", "Updated", "IncomeCollected"]);
        assert_eq!(
            session.set_upgrade_level(AddressId::new(2), 1).unwrap_err(),
            LedgerError::NotFound(AddressId::new(2))
        );
    }

    #[test]
    fn test_set_custom_value_persists_and_refuses_nan() {
        let store = Arc::new(MemoryStore::default());
        let (mut session, _) = session_with(world(), store.clone());
        session.purchase(AddressId::new(1), 100, "").unwrap();

        session
            .set_custom_value(AddressId::new(1), "stars".to_string(), CustomValue::Number(4.0))
            .unwrap();
        let refused = session.set_custom_value(
            AddressId::new(1),
            "ratio".to_string(),
            CustomValue::Number(f64::NAN),
        );

        assert_eq!(
            refused.unwrap_err(),
            LedgerError::UnstorableCustomValue {
                address_id: AddressId::new(1),
                key: "ratio".to_string()
            }
        );
        let (mut restored, _) = session_with(world(), store);
        restored.reload();
        let business = restored.ledger().get(AddressId::new(1)).unwrap();
        assert_eq!(business.custom_data.len(), 1);
        assert_eq!(business.custom_data["stars"], CustomValue::Number(4.0));
    }
}
