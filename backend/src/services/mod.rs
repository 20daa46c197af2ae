//! Business logic services for the GrowDate server

pub mod crops;
pub mod recommendation;
pub mod regions;

pub use crops::CropService;
pub use recommendation::RecommendationService;
pub use regions::RegionService;
