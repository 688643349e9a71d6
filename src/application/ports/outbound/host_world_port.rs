//! Host world port - Read-only queries against the host's world model
//!
//! The host owns citizens, companies and addresses. Discovery and the session
//! only read through this port, so the concrete world (the live game, a JSON
//! snapshot, a test double) is supplied by the infrastructure layer.

use crate::domain::value_objects::{AddressId, CitizenId, HostAddress};

/// A citizen's job, resolved as far as the host allows.
///
/// Either link may be missing: a job with no employer, or an employer with
/// no place of business.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employment {
    /// Employer display name
    pub employer_name: Option<String>,
    /// Location the employer operates from
    pub location: Option<AddressId>,
}

/// Port for querying the host world
///
/// Every lookup returns `Option` because any host reference may be unset;
/// callers decide whether a missing link skips a record or defaults a value.
pub trait HostWorldPort: Send + Sync {
    /// All citizens in directory order, `None` if the directory is unavailable
    fn citizen_directory(&self) -> Option<Vec<CitizenId>>;

    fn citizen_name(&self, citizen: CitizenId) -> Option<String>;

    /// The address the citizen lives at
    fn citizen_residence(&self, citizen: CitizenId) -> Option<AddressId>;

    /// The citizen's job, `None` when unemployed
    fn citizen_employment(&self, citizen: CitizenId) -> Option<Employment>;

    fn address(&self, id: AddressId) -> Option<HostAddress>;

    /// Addresses the host already records as player property
    fn player_owned_addresses(&self) -> Vec<AddressId>;
}
