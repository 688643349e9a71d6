//! Event sink port - Where ledger notifications are delivered

use crate::domain::events::BusinessEvent;

/// Receiver for ledger events.
///
/// Delivery is synchronous on the caller's stack; a sink must not call back
/// into the ledger.
pub trait EventSinkPort: Send + Sync {
    fn publish(&self, event: BusinessEvent);
}
