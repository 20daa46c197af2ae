//! Planting recommendation service
//!
//! Thin asynchronous shell over the pure season computation in the shared
//! crate: load the relevant catalog records, then run the window/status
//! calculation. Nothing is cached between calls and no locks are held;
//! catalog I/O errors propagate unchanged.

use chrono::NaiveDate;
use sqlx::PgPool;

use shared::models::{Crop, PlantingRecommendation};
use shared::season;
use shared::validation::validate_date_range;

use super::{CropService, RegionService};
use crate::error::{AppError, AppResult};

/// Recommendation engine over the crop and region catalogs
#[derive(Clone)]
pub struct RecommendationService {
    db: PgPool,
}

impl RecommendationService {
    /// Create a new RecommendationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Recommendations for every suitable crop in a region, ideal-first.
    /// An unknown region yields an empty list, not an error.
    pub async fn get_recommendations(
        &self,
        region_id: i32,
        reference: NaiveDate,
    ) -> AppResult<Vec<PlantingRecommendation>> {
        let Some(region) = RegionService::new(self.db.clone()).get_region(region_id).await? else {
            return Ok(Vec::new());
        };

        let crops = CropService::new(self.db.clone()).get_crops().await?;
        Ok(season::recommendations_for(&crops, &region, reference))
    }

    /// Crops suitable for a region's climate zone, regardless of date.
    /// An unknown region yields an empty list, not an error.
    pub async fn get_crops_for_region(&self, region_id: i32) -> AppResult<Vec<Crop>> {
        let Some(region) = RegionService::new(self.db.clone()).get_region(region_id).await? else {
            return Ok(Vec::new());
        };

        let crops = CropService::new(self.db.clone()).get_crops().await?;
        Ok(crops
            .into_iter()
            .filter(|crop| crop.suits_zone(&region.climate_zone))
            .collect())
    }

    /// Crops suitable for a region whose planting window overlaps the given
    /// date range. Requires `start <= end`; an inverted range is rejected,
    /// never silently reordered.
    pub async fn get_crops_for_date_range(
        &self,
        region_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<Crop>> {
        if let Err(message) = validate_date_range(start, end) {
            return Err(AppError::Validation {
                field: "date_range".to_string(),
                message: message.to_string(),
            });
        }

        let Some(region) = RegionService::new(self.db.clone()).get_region(region_id).await? else {
            return Ok(Vec::new());
        };

        let crops = CropService::new(self.db.clone()).get_crops().await?;
        Ok(season::crops_in_range(&crops, &region, start, end))
    }

    /// Full recommendation for one crop/region pair. Returns `None` when
    /// either record is missing. An explicit lookup by id bypasses the zone
    /// suitability filter: the recommendation is computed even when the
    /// crop's zones do not include the region's zone.
    pub async fn get_detailed_recommendation(
        &self,
        crop_id: i32,
        region_id: i32,
        reference: NaiveDate,
    ) -> AppResult<Option<PlantingRecommendation>> {
        let crop = CropService::new(self.db.clone()).get_crop(crop_id).await?;
        let region = RegionService::new(self.db.clone()).get_region(region_id).await?;

        let (Some(crop), Some(region)) = (crop, region) else {
            return Ok(None);
        };

        Ok(season::recommend(&crop, &region, reference))
    }
}
