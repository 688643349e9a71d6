//! Ownership Ledger - the player's owned businesses
//!
//! The ledger keeps an insertion-ordered list of businesses plus an index from
//! address id to list position. Every mutating operation updates both, then
//! persists through the store port, then publishes an event.
//!
//! Persistence failures never escape the ledger: a failed load leaves an
//! empty ledger and a failed save is logged. Unknown or duplicate ids come
//! back as [`LedgerError`] with the ledger untouched.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::application::ports::outbound::{EventSinkPort, LedgerStorePort};
use crate::domain::entities::OwnedBusiness;
use crate::domain::events::BusinessEvent;
use crate::domain::value_objects::{resolve_business_type, AddressId, HostAddress, LedgerSettings};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Address {0} is already owned")]
    AlreadyOwned(AddressId),
    #[error("Address {0} is not owned")]
    NotFound(AddressId),
    #[error("Address {0} does not exist in the host world")]
    UnknownAddress(AddressId),
    #[error("Custom value '{key}' on address {address_id} cannot be saved")]
    UnstorableCustomValue { address_id: AddressId, key: String },
}

pub struct OwnershipLedger {
    businesses: Vec<OwnedBusiness>,
    index: HashMap<AddressId, usize>,
    settings: LedgerSettings,
    store: Arc<dyn LedgerStorePort>,
    events: Arc<dyn EventSinkPort>,
}

impl OwnershipLedger {
    /// Create an empty ledger. Call [`load`](Self::load) to restore saved state.
    pub fn new(
        settings: LedgerSettings,
        store: Arc<dyn LedgerStorePort>,
        events: Arc<dyn EventSinkPort>,
    ) -> Self {
        Self {
            businesses: Vec::new(),
            index: HashMap::new(),
            settings,
            store,
            events,
        }
    }

    pub fn settings(&self) -> &LedgerSettings {
        &self.settings
    }

    pub fn is_owned(&self, address_id: AddressId) -> bool {
        self.index.contains_key(&address_id)
    }

    pub fn get(&self, address_id: AddressId) -> Option<&OwnedBusiness> {
        self.index
            .get(&address_id)
            .map(|&position| &self.businesses[position])
    }

    /// Owned businesses in purchase order
    pub fn businesses(&self) -> &[OwnedBusiness] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Income the next collection would pay out, without collecting it
    pub fn total_daily_income(&self) -> i64 {
        self.businesses
            .iter()
            .fold(0_i64, |total, b| total.saturating_add(b.income(&self.settings)))
    }

    /// Record the purchase of a host address.
    ///
    /// Type, staff and floor are snapshotted from the host address; income
    /// starts at the configured default with no upgrades.
    pub fn add_owned(
        &mut self,
        address: &HostAddress,
        name: impl Into<String>,
        price: i64,
        date: impl Into<String>,
    ) -> Result<&OwnedBusiness, LedgerError> {
        if self.is_owned(address.id) {
            warn!(address_id = %address.id, "Purchase rejected, address already owned");
            return Err(LedgerError::AlreadyOwned(address.id));
        }

        let mut business = OwnedBusiness::new(address.id, name)
            .with_business_type(resolve_business_type(address.preset.as_deref()))
            .with_purchase(price, date)
            .with_daily_income(self.settings.default_daily_income)
            .with_employees(address.employee_count());
        if let Some(floor) = &address.floor_name {
            business = business.with_floor(floor.clone());
        }

        let position = self.businesses.len();
        self.index.insert(business.address_id, position);
        self.businesses.push(business.clone());
        self.save();

        info!(
            address_id = %business.address_id,
            business_type = %business.business_type,
            price,
            "Purchased business: {}",
            business.name
        );
        self.events.publish(BusinessEvent::purchased(business));

        Ok(&self.businesses[position])
    }

    /// Remove a business from the ledger.
    ///
    /// `selling_price` is forwarded on the `Sold` event and not credited to
    /// any balance here.
    pub fn sell(
        &mut self,
        address_id: AddressId,
        selling_price: i64,
    ) -> Result<OwnedBusiness, LedgerError> {
        let Some(position) = self.index.remove(&address_id) else {
            warn!(address_id = %address_id, "Sale rejected, address not owned");
            return Err(LedgerError::NotFound(address_id));
        };

        let business = self.businesses.remove(position);
        self.rebuild_index();
        self.save();

        info!(
            address_id = %address_id,
            selling_price,
            "Sold business: {}",
            business.name
        );
        self.events
            .publish(BusinessEvent::sold(business.clone(), selling_price));

        Ok(business)
    }

    /// Replace the stored record for `business.address_id` with `business`.
    ///
    /// Custom values the save file cannot represent are refused so one bad
    /// record can never make the whole file unreadable.
    pub fn update(&mut self, business: OwnedBusiness) -> Result<(), LedgerError> {
        let Some(&position) = self.index.get(&business.address_id) else {
            warn!(address_id = %business.address_id, "Update rejected, address not owned");
            return Err(LedgerError::NotFound(business.address_id));
        };
        if let Some((key, _)) = business
            .custom_data
            .iter()
            .find(|(_, value)| !value.is_storable())
        {
            warn!(
                address_id = %business.address_id,
                key = %key,
                "Update rejected, custom value not storable"
            );
            return Err(LedgerError::UnstorableCustomValue {
                address_id: business.address_id,
                key: key.clone(),
            });
        }

        self.businesses[position] = business.clone();
        self.save();

        debug!(
            address_id = %business.address_id,
            upgrade_level = business.upgrade_level,
            employee_count = business.employee_count,
            "Updated business: {}",
            business.name
        );
        self.events.publish(BusinessEvent::updated(business));

        Ok(())
    }

    /// Collect income from every owned business at once.
    ///
    /// Stamps every record with the collection time and persists once.
    pub fn collect_all_income(&mut self) -> i64 {
        let now = Utc::now();
        let mut total = 0_i64;
        for business in &mut self.businesses {
            total = total.saturating_add(business.income(&self.settings));
            business.last_income_collection = now;
        }
        self.save();

        info!(
            total,
            business_count = self.businesses.len(),
            "Collected income"
        );
        self.events
            .publish(BusinessEvent::income_collected(total, self.businesses.len()));

        total
    }

    /// Write the ledger through the store, logging any failure
    pub fn save(&self) {
        match self.store.save(&self.businesses) {
            Ok(()) => debug!(count = self.businesses.len(), "Saved ledger"),
            Err(e) => error!(
                count = self.businesses.len(),
                "Failed to save ledger: {}", e
            ),
        }
    }

    /// Replace in-memory state with the stored snapshot.
    ///
    /// A missing or unreadable snapshot leaves the ledger empty. Records that
    /// repeat an earlier address id are dropped.
    pub fn load(&mut self) {
        let loaded = match self.store.load() {
            Ok(Some(businesses)) => businesses,
            Ok(None) => {
                info!("No saved ledger found, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!("Failed to load ledger, starting empty: {}", e);
                Vec::new()
            }
        };

        self.businesses.clear();
        self.index.clear();
        for business in loaded {
            if self.index.contains_key(&business.address_id) {
                warn!(
                    address_id = %business.address_id,
                    "Dropping duplicate ledger record: {}",
                    business.name
                );
                continue;
            }
            self.index.insert(business.address_id, self.businesses.len());
            self.businesses.push(business);
        }

        info!(count = self.businesses.len(), "Loaded ledger");
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .businesses
            .iter()
            .enumerate()
            .map(|(position, b)| (b.address_id, position))
            .collect();
    }
}
