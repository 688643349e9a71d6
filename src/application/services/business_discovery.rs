//! Business Discovery - finds businesses the player could buy
//!
//! A scan walks the host's citizen directory once and follows each citizen's
//! job to the location their employer operates from. Locations survive the
//! scan unless they are already player property, look like a home business,
//! or were emitted earlier in the same scan.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{Employment, HostWorldPort};
use crate::domain::entities::BusinessCandidate;
use crate::domain::value_objects::{AddressId, CitizenId, HostAddress};

/// Why a workplace was not emitted as a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    AlreadyOwned,
    WorksFromHome,
    NamedAfterOwner,
    AlreadyEmitted,
}

pub struct BusinessDiscovery {
    world: Arc<dyn HostWorldPort>,
}

impl BusinessDiscovery {
    pub fn new(world: Arc<dyn HostWorldPort>) -> Self {
        Self { world }
    }

    /// Scan the host world for buyable businesses, in directory order
    #[instrument(skip(self))]
    pub fn find_candidates(&self) -> Vec<BusinessCandidate> {
        let owned: HashSet<AddressId> = self.world.player_owned_addresses().into_iter().collect();

        let Some(citizens) = self.world.citizen_directory() else {
            warn!("Citizen directory unavailable, no candidates");
            return Vec::new();
        };

        let mut processed: HashSet<AddressId> = HashSet::new();
        let mut candidates = Vec::new();

        for citizen in citizens {
            let Some((employment, workplace)) = self.workplace(citizen) else {
                continue;
            };

            if let Some(reason) =
                self.skip_reason(citizen, &employment, &workplace, &owned, &processed)
            {
                debug!(
                    citizen_id = %citizen,
                    address_id = %workplace.id,
                    reason = ?reason,
                    "Skipping workplace"
                );
                continue;
            }

            processed.insert(workplace.id);
            candidates.push(BusinessCandidate::from_address(workplace));
        }

        info!(count = candidates.len(), "Business discovery finished");
        candidates
    }

    /// Follow citizen -> job -> employer location, `None` on any missing link
    fn workplace(&self, citizen: CitizenId) -> Option<(Employment, HostAddress)> {
        let employment = self.world.citizen_employment(citizen)?;
        let location = employment.location?;
        let Some(address) = self.world.address(location) else {
            debug!(citizen_id = %citizen, address_id = %location, "Employer location not in host world");
            return None;
        };
        Some((employment, address))
    }

    fn skip_reason(
        &self,
        citizen: CitizenId,
        employment: &Employment,
        workplace: &HostAddress,
        owned: &HashSet<AddressId>,
        processed: &HashSet<AddressId>,
    ) -> Option<SkipReason> {
        if owned.contains(&workplace.id) {
            return Some(SkipReason::AlreadyOwned);
        }
        if self.world.citizen_residence(citizen) == Some(workplace.id) {
            return Some(SkipReason::WorksFromHome);
        }
        if self.employer_named_after(citizen, employment) {
            return Some(SkipReason::NamedAfterOwner);
        }
        if processed.contains(&workplace.id) {
            return Some(SkipReason::AlreadyEmitted);
        }
        None
    }

    /// Sole-proprietor check: employer name contains the citizen's name
    fn employer_named_after(&self, citizen: CitizenId, employment: &Employment) -> bool {
        // An empty name is a substring of every employer name; a plain
        // `contains` would drop every unnamed citizen's workplace, so an
        // unnamed citizen is never treated as the owner.
        let citizen_name = match self.world.citizen_name(citizen) {
            Some(name) if !name.is_empty() => name,
            _ => return false,
        };
        employment
            .employer_name
            .as_deref()
            .is_some_and(|employer| employer.contains(citizen_name.as_str()))
    }
}
