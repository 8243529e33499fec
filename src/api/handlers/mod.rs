//! HTTP request handlers for API endpoints.

pub mod estimate;
pub mod health;
pub mod prorate;

pub use estimate::estimate_handler;
pub use health::health_handler;
pub use prorate::prorate_handler;
