//! Route definitions for the GrowDate planting recommendation API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Crop catalog
        .nest("/crops", crop_routes())
        // Region catalog
        .nest("/regions", region_routes())
        // Planting recommendations
        .nest("/recommendations", recommendation_routes())
}

/// Crop catalog routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_crops))
        .route("/by-zone/:zone", get(handlers::get_crops_by_zone))
        .route("/by-category/:category", get(handlers::get_crops_by_category))
        .route("/:crop_id", get(handlers::get_crop))
}

/// Region catalog routes
fn region_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_regions))
        .route("/by-country/:country", get(handlers::get_regions_by_country))
        .route("/by-zone/:zone", get(handlers::get_regions_by_zone))
        .route("/:region_id", get(handlers::get_region))
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_recommendations))
        .route("/crops", get(handlers::get_region_crops))
        .route("/date-range", get(handlers::get_crops_for_date_range))
        .route("/detailed", get(handlers::get_detailed_recommendation))
}
