//! Saved item infrastructure implementations

mod storage_repository;

pub use storage_repository::{SAVED_ITEMS_KEY, StorageSavedItemRepository};
