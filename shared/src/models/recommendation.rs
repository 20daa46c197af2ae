//! Planting recommendation models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Crop, Region};

/// A recurring planting window anchored to concrete years.
/// `start <= end` always holds, even for windows that wrap the year
/// boundary in their recurring form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PlantingWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive interval overlap with `[start, end]`.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start <= end && self.end >= start
    }
}

/// Qualitative planting status for a reference date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlantingStatus {
    Ideal,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    #[serde(rename = "Late Season")]
    LateSeason,
    #[serde(rename = "Out of Season")]
    OutOfSeason,
}

impl std::fmt::Display for PlantingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingStatus::Ideal => write!(f, "Ideal"),
            PlantingStatus::ComingSoon => write!(f, "Coming Soon"),
            PlantingStatus::LateSeason => write!(f, "Late Season"),
            PlantingStatus::OutOfSeason => write!(f, "Out of Season"),
        }
    }
}

/// A planting recommendation for a specific crop, region and date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantingRecommendation {
    pub crop: Crop,
    pub region: Region,
    pub selected_date: NaiveDate,
    pub is_ideal_time: bool,
    pub planting_window: PlantingWindow,
    pub estimated_germination_date: NaiveDate,
    pub estimated_harvest_date: NaiveDate,
    pub status: PlantingStatus,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_contains_bounds() {
        let window = PlantingWindow {
            start: date(2024, 3, 15),
            end: date(2024, 6, 30),
        };
        assert!(window.contains(date(2024, 3, 15)));
        assert!(window.contains(date(2024, 6, 30)));
        assert!(window.contains(date(2024, 5, 1)));
        assert!(!window.contains(date(2024, 3, 14)));
        assert!(!window.contains(date(2024, 7, 1)));
    }

    #[test]
    fn test_window_overlap_inclusive() {
        let window = PlantingWindow {
            start: date(2024, 3, 15),
            end: date(2024, 6, 30),
        };
        // Touching at a single day counts as overlap
        assert!(window.overlaps(date(2024, 6, 30), date(2024, 8, 1)));
        assert!(window.overlaps(date(2024, 1, 1), date(2024, 3, 15)));
        assert!(!window.overlaps(date(2024, 7, 1), date(2024, 8, 1)));
        assert!(!window.overlaps(date(2024, 1, 1), date(2024, 3, 14)));
    }

    #[test]
    fn test_status_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&PlantingStatus::Ideal).unwrap(),
            "\"Ideal\""
        );
        assert_eq!(
            serde_json::to_string(&PlantingStatus::ComingSoon).unwrap(),
            "\"Coming Soon\""
        );
        assert_eq!(
            serde_json::to_string(&PlantingStatus::LateSeason).unwrap(),
            "\"Late Season\""
        );
        assert_eq!(
            serde_json::to_string(&PlantingStatus::OutOfSeason).unwrap(),
            "\"Out of Season\""
        );
    }

    #[test]
    fn test_status_display_matches_serde() {
        assert_eq!(PlantingStatus::ComingSoon.to_string(), "Coming Soon");
        assert_eq!(PlantingStatus::OutOfSeason.to_string(), "Out of Season");
    }
}
