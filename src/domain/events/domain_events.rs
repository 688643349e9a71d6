//! Domain events - Notifications of ledger state changes
//!
//! Events are published after the change is committed and persisted, on the
//! same call stack as the operation that caused them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::OwnedBusiness;

/// Base data for all events
#[derive(Debug, Clone)]
pub struct EventMetadata {
    pub event_id: Uuid,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
        }
    }
}

/// All ledger events
#[derive(Debug, Clone)]
pub enum BusinessEvent {
    /// A business was bought
    Purchased {
        metadata: EventMetadata,
        business: OwnedBusiness,
    },

    /// A business was sold.
    ///
    /// `selling_price` is not credited anywhere by the ledger; subscribers
    /// that track a player balance apply it themselves.
    Sold {
        metadata: EventMetadata,
        business: OwnedBusiness,
        selling_price: i64,
    },

    /// A business record was replaced by an explicit update
    Updated {
        metadata: EventMetadata,
        business: OwnedBusiness,
    },

    /// Income was collected across the whole ledger
    IncomeCollected {
        metadata: EventMetadata,
        total: i64,
        business_count: usize,
    },
}

impl BusinessEvent {
    pub fn purchased(business: OwnedBusiness) -> Self {
        BusinessEvent::Purchased {
            metadata: EventMetadata::default(),
            business,
        }
    }

    pub fn sold(business: OwnedBusiness, selling_price: i64) -> Self {
        BusinessEvent::Sold {
            metadata: EventMetadata::default(),
            business,
            selling_price,
        }
    }

    pub fn updated(business: OwnedBusiness) -> Self {
        BusinessEvent::Updated {
            metadata: EventMetadata::default(),
            business,
        }
    }

    pub fn income_collected(total: i64, business_count: usize) -> Self {
        BusinessEvent::IncomeCollected {
            metadata: EventMetadata::default(),
            total,
            business_count,
        }
    }

    /// Get the metadata for this event
    pub fn metadata(&self) -> &EventMetadata {
        match self {
            BusinessEvent::Purchased { metadata, .. } => metadata,
            BusinessEvent::Sold { metadata, .. } => metadata,
            BusinessEvent::Updated { metadata, .. } => metadata,
            BusinessEvent::IncomeCollected { metadata, .. } => metadata,
        }
    }

    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            BusinessEvent::Purchased { .. } => "Purchased",
            BusinessEvent::Sold { .. } => "Sold",
            BusinessEvent::Updated { .. } => "Updated",
            BusinessEvent::IncomeCollected { .. } => "IncomeCollected",
        }
    }
}
