//! Infrastructure services

mod preservation_service;

pub use preservation_service::PreservationService;
