//! Infrastructure layer - External service implementations

pub mod cache;
pub mod logging;
pub mod observability;
pub mod provider;
pub mod saved_item;
pub mod services;
pub mod storage;
