//! # hoodbase-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter must implement:
//!   - `NeighborhoodRepository` — read, page, find, add and delete records
//! - Define the **driving use-case**:
//!   - `NeighborhoodService` — create, list, get, count pages, delete
//! - Serialize read-check-write sequences so that duplicate checks and
//!   deletes cannot interleave within one process
//!
//! ## Dependency rule
//! Depends on `hoodbase-domain` only (plus `tokio::sync` for the write gate).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
