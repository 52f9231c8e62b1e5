//! Domain layer - entities, errors and the traits at the external seams

pub mod error;
pub mod preservation;
pub mod storage;

pub use error::DomainError;
pub use preservation::{
    ItemName, LookupCache, PreservationEntry, PreservationInfo, PreservationProvider,
    ProviderResponse, SavedItem, SavedItemRepository,
};
pub use storage::KeyValueStore;
