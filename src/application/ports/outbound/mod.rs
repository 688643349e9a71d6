//! Outbound ports - Interfaces that the application requires from external systems

mod event_sink_port;
mod host_world_port;
mod ledger_store_port;

pub use event_sink_port::EventSinkPort;
pub use host_world_port::{Employment, HostWorldPort};
pub use ledger_store_port::{LedgerStorePort, StoreError};
