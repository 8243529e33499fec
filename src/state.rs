//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::EstimateService;

/// Handler state.
///
/// Holds no per-request data; every field is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub estimate_service: Arc<EstimateService>,
}

impl AppState {
    /// Creates the application state.
    pub fn new(estimate_service: Arc<EstimateService>) -> Self {
        Self { estimate_service }
    }
}
