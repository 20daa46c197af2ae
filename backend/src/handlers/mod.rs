//! HTTP handlers for the GrowDate server

pub mod crops;
pub mod health;
pub mod recommendations;
pub mod regions;

pub use crops::*;
pub use health::*;
pub use recommendations::*;
pub use regions::*;
