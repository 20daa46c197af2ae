//! Shared types and domain logic for the GrowDate planting recommendation
//! service.
//!
//! This crate contains the catalog models and the pure planting-season
//! computation shared between the backend and any other components of the
//! system.

pub mod models;
pub mod season;
pub mod validation;

pub use models::*;
