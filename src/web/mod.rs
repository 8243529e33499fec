//! Web layer for the browser-based calculators.
//!
//! Server-rendered HTML forms using Askama templates. Each form posts back to
//! its own URL and the response re-renders the form with results or an error.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
