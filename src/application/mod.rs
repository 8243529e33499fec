//! Application layer services implementing business logic.
//!
//! Services orchestrate domain rules and infrastructure adapters and give the
//! HTTP handlers a single call per operation.
//!
//! # Available Services
//!
//! - [`services::estimate_service::EstimateService`] - Spreadsheet-backed maintenance estimates
//!
//! Proration is a pure function and is called directly from
//! [`crate::domain::proration`].

pub mod services;
