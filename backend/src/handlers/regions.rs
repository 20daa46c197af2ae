//! HTTP handlers for region catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use shared::models::Region;

use crate::error::{AppError, AppResult};
use crate::services::RegionService;
use crate::AppState;

/// List all regions in the catalog
pub async fn get_regions(State(state): State<AppState>) -> AppResult<Json<Vec<Region>>> {
    let service = RegionService::new(state.db);
    let regions = service.get_regions().await?;
    Ok(Json(regions))
}

/// Get a region by ID
pub async fn get_region(
    State(state): State<AppState>,
    Path(region_id): Path<i32>,
) -> AppResult<Json<Region>> {
    if region_id <= 0 {
        return Err(AppError::Validation {
            field: "region_id".to_string(),
            message: "id must be positive".to_string(),
        });
    }

    let service = RegionService::new(state.db);
    let region = service
        .get_region(region_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Region".to_string()))?;
    Ok(Json(region))
}

/// List regions in a country
pub async fn get_regions_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> AppResult<Json<Vec<Region>>> {
    if country.trim().is_empty() {
        return Err(AppError::Validation {
            field: "country".to_string(),
            message: "country must be provided".to_string(),
        });
    }

    let service = RegionService::new(state.db);
    let regions = service.get_regions_by_country(&country).await?;
    Ok(Json(regions))
}

/// List regions in a climate zone
pub async fn get_regions_by_zone(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> AppResult<Json<Vec<Region>>> {
    if zone.trim().is_empty() {
        return Err(AppError::Validation {
            field: "zone".to_string(),
            message: "zone must be provided".to_string(),
        });
    }

    let service = RegionService::new(state.db);
    let regions = service.get_regions_by_zone(&zone).await?;
    Ok(Json(regions))
}
