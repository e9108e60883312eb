//! # hoodbase-domain
//!
//! Pure domain model for the hoodbase neighborhood registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error taxonomy
//! - Define **Neighborhoods** (a district name and its price per square meter)
//! - Enforce the field rules a neighborhood must satisfy before it is stored
//! - Pagination arithmetic (page offsets and total page counts)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod neighborhood;
pub mod pagination;
