//! HTTP handlers for crop catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use shared::models::Crop;

use crate::error::{AppError, AppResult};
use crate::services::CropService;
use crate::AppState;

/// List all crops in the catalog
pub async fn get_crops(State(state): State<AppState>) -> AppResult<Json<Vec<Crop>>> {
    let service = CropService::new(state.db);
    let crops = service.get_crops().await?;
    Ok(Json(crops))
}

/// Get a crop by ID
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<i32>,
) -> AppResult<Json<Crop>> {
    if crop_id <= 0 {
        return Err(AppError::Validation {
            field: "crop_id".to_string(),
            message: "id must be positive".to_string(),
        });
    }

    let service = CropService::new(state.db);
    let crop = service
        .get_crop(crop_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;
    Ok(Json(crop))
}

/// List crops suitable for a climate zone
pub async fn get_crops_by_zone(
    State(state): State<AppState>,
    Path(zone): Path<String>,
) -> AppResult<Json<Vec<Crop>>> {
    if zone.trim().is_empty() {
        return Err(AppError::Validation {
            field: "zone".to_string(),
            message: "zone must be provided".to_string(),
        });
    }

    let service = CropService::new(state.db);
    let crops = service.get_crops_by_zone(&zone).await?;
    Ok(Json(crops))
}

/// List crops in a category
pub async fn get_crops_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Crop>>> {
    if category.trim().is_empty() {
        return Err(AppError::Validation {
            field: "category".to_string(),
            message: "category must be provided".to_string(),
        });
    }

    let service = CropService::new(state.db);
    let crops = service.get_crops_by_category(&category).await?;
    Ok(Json(crops))
}
