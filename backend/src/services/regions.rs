//! Region catalog service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use shared::models::Region;

use crate::error::AppResult;

/// Read access to the region catalog
#[derive(Clone)]
pub struct RegionService {
    db: PgPool,
}

/// Database row for a region
#[derive(Debug, Clone, sqlx::FromRow)]
struct RegionRow {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub country: String,
    pub climate_zone: String,
    pub description: String,
    pub climate_type: String,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub average_min_temp: Decimal,
    pub average_max_temp: Decimal,
    pub frost_free_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            code: row.code,
            country: row.country,
            climate_zone: row.climate_zone,
            description: row.description,
            climate_type: row.climate_type,
            latitude: row.latitude,
            longitude: row.longitude,
            average_min_temp: row.average_min_temp,
            average_max_temp: row.average_max_temp,
            frost_free_days: row.frost_free_days,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl RegionService {
    /// Create a new RegionService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all regions in catalog order
    pub async fn get_regions(&self) -> AppResult<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, country, climate_zone, description, climate_type,
                   latitude, longitude, average_min_temp, average_max_temp, frost_free_days,
                   created_at, updated_at
            FROM regions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    /// Get a region by ID
    pub async fn get_region(&self, region_id: i32) -> AppResult<Option<Region>> {
        let row = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, country, climate_zone, description, climate_type,
                   latitude, longitude, average_min_temp, average_max_temp, frost_free_days,
                   created_at, updated_at
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(region_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(row.map(Region::from))
    }

    /// Get all regions in a country
    pub async fn get_regions_by_country(&self, country: &str) -> AppResult<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, country, climate_zone, description, climate_type,
                   latitude, longitude, average_min_temp, average_max_temp, frost_free_days,
                   created_at, updated_at
            FROM regions
            WHERE LOWER(country) = LOWER($1)
            ORDER BY id
            "#,
        )
        .bind(country)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Region::from).collect())
    }

    /// Get all regions in a climate zone
    pub async fn get_regions_by_zone(&self, zone: &str) -> AppResult<Vec<Region>> {
        let rows = sqlx::query_as::<_, RegionRow>(
            r#"
            SELECT id, name, code, country, climate_zone, description, climate_type,
                   latitude, longitude, average_min_temp, average_max_temp, frost_free_days,
                   created_at, updated_at
            FROM regions
            WHERE LOWER(climate_zone) = LOWER($1)
            ORDER BY id
            "#,
        )
        .bind(zone)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Region::from).collect())
    }
}
