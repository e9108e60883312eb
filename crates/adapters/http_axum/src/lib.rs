//! # hoodbase-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API under `/api/v1/neighborhood`
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes and JSON bodies
//! - Apply lenient defaults to pagination query parameters
//!
//! ## Dependency rule
//! Depends on `hoodbase-app` (for port traits and services) and `hoodbase-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
