//! # hoodbase-adapter-storage-json
//!
//! Flat-file persistence adapter: the whole neighborhood collection lives in
//! one JSON array on disk.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `hoodbase-app::ports::storage`
//! - Bootstrap the backing file (create it with an empty collection if missing)
//! - Map between domain types and the persisted JSON layout
//!
//! Every mutation rewrites the entire file. Concurrent writers are not
//! coordinated here; the application service serializes its own writes.
//!
//! ## Dependency rule
//! Depends on `hoodbase-app` (for port traits) and `hoodbase-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod database;
mod error;
mod neighborhood_repo;

pub use database::{Config, JsonDatabase};
pub use error::StorageError;
pub use neighborhood_repo::JsonNeighborhoodRepository;
