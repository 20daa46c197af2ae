//! Crop catalog service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shared::models::Crop;

use crate::error::AppResult;

/// Read access to the crop catalog
#[derive(Clone)]
pub struct CropService {
    db: PgPool,
}

/// Database row for a crop
#[derive(Debug, Clone, sqlx::FromRow)]
struct CropRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub planting_start_month: i32,
    pub planting_start_day: i32,
    pub planting_end_month: i32,
    pub planting_end_day: i32,
    pub days_to_germination: i32,
    pub days_to_harvest: i32,
    pub suitable_zones: Vec<String>,
    pub min_temperature: Decimal,
    pub max_temperature: Decimal,
    pub soil_type: String,
    pub sun_requirement: String,
    pub water_requirement: String,
    pub planting_tips: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CropRow> for Crop {
    fn from(row: CropRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            category: row.category,
            planting_start_month: row.planting_start_month,
            planting_start_day: row.planting_start_day,
            planting_end_month: row.planting_end_month,
            planting_end_day: row.planting_end_day,
            days_to_germination: row.days_to_germination,
            days_to_harvest: row.days_to_harvest,
            suitable_zones: row.suitable_zones,
            min_temperature: row.min_temperature,
            max_temperature: row.max_temperature,
            soil_type: row.soil_type,
            sun_requirement: row.sun_requirement,
            water_requirement: row.water_requirement,
            planting_tips: row.planting_tips,
            image_url: row.image_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all crops in catalog order
    pub async fn get_crops(&self) -> AppResult<Vec<Crop>> {
        let rows = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT id, name, description, category,
                   planting_start_month, planting_start_day, planting_end_month, planting_end_day,
                   days_to_germination, days_to_harvest, suitable_zones,
                   min_temperature, max_temperature, soil_type, sun_requirement, water_requirement,
                   planting_tips, image_url, created_at, updated_at
            FROM crops
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Crop::from).collect())
    }

    /// Get a crop by ID
    pub async fn get_crop(&self, crop_id: i32) -> AppResult<Option<Crop>> {
        let row = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT id, name, description, category,
                   planting_start_month, planting_start_day, planting_end_month, planting_end_day,
                   days_to_germination, days_to_harvest, suitable_zones,
                   min_temperature, max_temperature, soil_type, sun_requirement, water_requirement,
                   planting_tips, image_url, created_at, updated_at
            FROM crops
            WHERE id = $1
            "#,
        )
        .bind(crop_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Crop::from))
    }

    /// Get all crops in a category
    pub async fn get_crops_by_category(&self, category: &str) -> AppResult<Vec<Crop>> {
        let rows = sqlx::query_as::<_, CropRow>(
            r#"
            SELECT id, name, description, category,
                   planting_start_month, planting_start_day, planting_end_month, planting_end_day,
                   days_to_germination, days_to_harvest, suitable_zones,
                   min_temperature, max_temperature, soil_type, sun_requirement, water_requirement,
                   planting_tips, image_url, created_at, updated_at
            FROM crops
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Crop::from).collect())
    }

    /// Get all crops suitable for a climate zone. Zone labels are matched
    /// case-insensitively in memory, independent of how the catalog stores
    /// them.
    pub async fn get_crops_by_zone(&self, zone: &str) -> AppResult<Vec<Crop>> {
        let crops = self.get_crops().await?;
        Ok(crops.into_iter().filter(|c| c.suits_zone(zone)).collect())
    }
}
