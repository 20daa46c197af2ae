//! HTTP handlers for planting recommendation endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use shared::models::{Crop, PlantingRecommendation};

use crate::error::{AppError, AppResult};
use crate::services::{RecommendationService, RegionService};
use crate::AppState;

/// Query parameters for region-wide recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub region_id: i32,
    /// Defaults to today (UTC) when omitted
    pub date: Option<NaiveDate>,
}

/// Recommendations for every suitable crop in a region
pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> AppResult<Json<Vec<PlantingRecommendation>>> {
    ensure_region_exists(&state, query.region_id).await?;

    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let service = RecommendationService::new(state.db);
    let recommendations = service.get_recommendations(query.region_id, date).await?;
    Ok(Json(recommendations))
}

/// Query parameters for region crop listings
#[derive(Debug, Deserialize)]
pub struct RegionCropsQuery {
    pub region_id: i32,
}

/// Crops suitable for a region, regardless of date
pub async fn get_region_crops(
    State(state): State<AppState>,
    Query(query): Query<RegionCropsQuery>,
) -> AppResult<Json<Vec<Crop>>> {
    ensure_region_exists(&state, query.region_id).await?;

    let service = RecommendationService::new(state.db);
    let crops = service.get_crops_for_region(query.region_id).await?;
    Ok(Json(crops))
}

/// Query parameters for the date-range crop query
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub region_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Crops whose planting window overlaps a date range
pub async fn get_crops_for_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<Vec<Crop>>> {
    if query.start_date > query.end_date {
        return Err(AppError::Validation {
            field: "date_range".to_string(),
            message: "start_date must be on or before end_date".to_string(),
        });
    }

    ensure_region_exists(&state, query.region_id).await?;

    let service = RecommendationService::new(state.db);
    let crops = service
        .get_crops_for_date_range(query.region_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(crops))
}

/// Query parameters for a single crop/region recommendation
#[derive(Debug, Deserialize)]
pub struct DetailedQuery {
    pub crop_id: i32,
    pub region_id: i32,
    /// Defaults to today (UTC) when omitted
    pub date: Option<NaiveDate>,
}

/// Full recommendation for one crop/region pair
pub async fn get_detailed_recommendation(
    State(state): State<AppState>,
    Query(query): Query<DetailedQuery>,
) -> AppResult<Json<PlantingRecommendation>> {
    if query.crop_id <= 0 || query.region_id <= 0 {
        return Err(AppError::Validation {
            field: "id".to_string(),
            message: "crop_id and region_id must be positive".to_string(),
        });
    }

    ensure_region_exists(&state, query.region_id).await?;

    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let service = RecommendationService::new(state.db);
    let recommendation = service
        .get_detailed_recommendation(query.crop_id, query.region_id, date)
        .await?
        .ok_or_else(|| AppError::NotFound("Crop".to_string()))?;
    Ok(Json(recommendation))
}

/// Shared region existence check: every recommendation endpoint takes a
/// region id and answers 404 for an unknown one.
async fn ensure_region_exists(state: &AppState, region_id: i32) -> AppResult<()> {
    if region_id <= 0 {
        return Err(AppError::Validation {
            field: "region_id".to_string(),
            message: "region_id must be positive".to_string(),
        });
    }

    let service = RegionService::new(state.db.clone());
    if service.get_region(region_id).await?.is_none() {
        return Err(AppError::NotFound("Region".to_string()));
    }
    Ok(())
}
