//! Region catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A growing region with its climate zone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    pub id: i32,
    pub name: String,
    /// Region code, e.g. "US_CA_CENTRAL"
    pub code: String,
    pub country: String,
    /// Climate zone label matched against crop suitable zones, e.g. "Zone 9"
    pub climate_zone: String,
    pub description: String,
    /// "Tropical", "Subtropical", "Temperate", etc.
    pub climate_type: String,
    /// For map display only, not used in any computation
    pub latitude: Decimal,
    pub longitude: Decimal,
    /// Celsius
    pub average_min_temp: Decimal,
    /// Celsius
    pub average_max_temp: Decimal,
    pub frost_free_days: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
