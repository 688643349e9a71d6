//! Tracing event sink - writes ledger events to the log

use tracing::info;

use crate::application::ports::outbound::EventSinkPort;
use crate::domain::events::BusinessEvent;

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl EventSinkPort for TracingEventSink {
    fn publish(&self, event: BusinessEvent) {
        let metadata = event.metadata();
        match &event {
            BusinessEvent::Purchased { business, .. } | BusinessEvent::Updated { business, .. } => {
                info!(
                    event_id = %metadata.event_id,
                    at = %metadata.timestamp,
                    event_type = event.event_type(),
                    address_id = %business.address_id,
                    business_type = %business.business_type,
                    upgrade_level = business.upgrade_level,
                    "{}",
                    business.name
                );
            }
            BusinessEvent::Sold {
                business,
                selling_price,
                ..
            } => {
                info!(
                    event_id = %metadata.event_id,
                    at = %metadata.timestamp,
                    event_type = event.event_type(),
                    address_id = %business.address_id,
                    selling_price,
                    "{}",
                    business.name
                );
            }
            BusinessEvent::IncomeCollected {
                total,
                business_count,
                ..
            } => {
                info!(
                    event_id = %metadata.event_id,
                    at = %metadata.timestamp,
                    event_type = event.event_type(),
                    total,
                    business_count,
                    "Income collected"
                );
            }
        }
    }
}
