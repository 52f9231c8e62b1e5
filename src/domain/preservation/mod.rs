//! Preservation domain - item normalization, cached metadata and saved items

mod cache;
mod entity;
mod provider;
mod repository;

pub use cache::LookupCache;
pub use entity::{ItemName, PreservationEntry, PreservationInfo, SavedItem};
pub use provider::{PreservationProvider, ProviderResponse};
pub use repository::SavedItemRepository;

#[cfg(test)]
pub use provider::mock;
#[cfg(test)]
pub use repository::MockSavedItemRepository;
