//! Value objects - Immutable objects defined by their attributes

mod business_type;
mod custom_data;
mod host_address;
mod ids;
mod settings;

pub use business_type::{resolve_business_type, UNKNOWN_BUSINESS_TYPE};
pub use custom_data::{CustomData, CustomValue, NonFiniteNumber};
pub use host_address::HostAddress;
pub use ids::*;
pub use settings::LedgerSettings;
