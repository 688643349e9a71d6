//! Domain entities - Core business objects with identity

mod candidate;
mod owned_business;

pub use candidate::BusinessCandidate;
pub use owned_business::OwnedBusiness;
