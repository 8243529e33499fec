//! JSON API layer for HTTP request/response handling.
//!
//! Mirrors the web forms for programmatic clients and reports errors in a
//! structured body (see [`crate::error::AppError`]).
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
