//! Business logic services for the application layer.

pub mod estimate_service;

pub use estimate_service::EstimateService;
