//! Crop catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::season::RecurringWindow;

/// A crop in the planting catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crop {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Free-text category, e.g. "Vegetable", "Fruit", "Herb"
    pub category: String,
    /// Recurring planting window as month/day pairs without a year.
    /// Start past end means the window wraps the year boundary.
    pub planting_start_month: i32,
    pub planting_start_day: i32,
    pub planting_end_month: i32,
    pub planting_end_day: i32,
    pub days_to_germination: i32,
    /// Counted from germination, not from planting
    pub days_to_harvest: i32,
    /// Climate zone labels this crop grows in, e.g. "Zone 9", "Tropical"
    pub suitable_zones: Vec<String>,
    /// Celsius
    pub min_temperature: Decimal,
    /// Celsius
    pub max_temperature: Decimal,
    pub soil_type: String,
    /// "Full Sun", "Partial Shade", "Shade"
    pub sun_requirement: String,
    /// "Low", "Medium", "High"
    pub water_requirement: String,
    pub planting_tips: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Crop {
    /// The crop's recurring planting range, ready for anchoring.
    pub fn planting_window(&self) -> RecurringWindow {
        RecurringWindow {
            start_month: self.planting_start_month as u32,
            start_day: self.planting_start_day as u32,
            end_month: self.planting_end_month as u32,
            end_day: self.planting_end_day as u32,
        }
    }

    /// Whether this crop grows in the given climate zone. Zone labels are
    /// compared case-insensitively as whole tokens.
    pub fn suits_zone(&self, zone: &str) -> bool {
        self.suitable_zones
            .iter()
            .any(|z| z.eq_ignore_ascii_case(zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn crop_with_zones(zones: &[&str]) -> Crop {
        Crop {
            id: 1,
            name: "Tomatoes".to_string(),
            description: String::new(),
            category: "Vegetable".to_string(),
            planting_start_month: 3,
            planting_start_day: 15,
            planting_end_month: 6,
            planting_end_day: 30,
            days_to_germination: 7,
            days_to_harvest: 70,
            suitable_zones: zones.iter().map(|z| z.to_string()).collect(),
            min_temperature: Decimal::from(10),
            max_temperature: Decimal::from(35),
            soil_type: String::new(),
            sun_requirement: String::new(),
            water_requirement: String::new(),
            planting_tips: String::new(),
            image_url: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_suits_zone_exact_match() {
        let crop = crop_with_zones(&["Zone 8", "Zone 9"]);
        assert!(crop.suits_zone("Zone 9"));
        assert!(!crop.suits_zone("Zone 10"));
    }

    #[test]
    fn test_suits_zone_case_insensitive() {
        let crop = crop_with_zones(&["Zone 9"]);
        assert!(crop.suits_zone("zone 9"));
        assert!(crop.suits_zone("ZONE 9"));
    }

    #[test]
    fn test_suits_zone_whole_tokens_only() {
        let crop = crop_with_zones(&["Zone 9"]);
        assert!(!crop.suits_zone("Zone"));
        assert!(!crop.suits_zone("Zone 90"));
    }
}
