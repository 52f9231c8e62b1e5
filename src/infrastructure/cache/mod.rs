//! Cache infrastructure - Lookup cache implementations

mod in_memory;

pub use in_memory::{InMemoryCacheConfig, InMemoryLookupCache};
