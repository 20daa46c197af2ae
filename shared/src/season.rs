//! Planting-season computation: window anchoring, status classification
//! and recommendation assembly.
//!
//! Everything here is a pure function of its inputs. Windows are anchored
//! fresh for every reference date; the same crop anchored against two
//! different dates may yield different concrete windows, so nothing is
//! cached between calls.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Crop, PlantingRecommendation, PlantingStatus, PlantingWindow, Region};
use crate::validation::{validate_growth_timeline, validate_planting_window};

/// How close to a window edge a date still counts as near-season.
const NEAR_SEASON_DAYS: i64 = 30;

/// A crop's recurring month/day planting range, without a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringWindow {
    pub start_month: u32,
    pub start_day: u32,
    pub end_month: u32,
    pub end_day: u32,
}

impl RecurringWindow {
    /// True when the range crosses the year boundary (e.g. Nov 1 - Feb 15).
    pub fn wraps(&self) -> bool {
        (self.start_month, self.start_day) > (self.end_month, self.end_day)
    }
}

/// Anchor a recurring window to concrete years around a reference date.
///
/// The anchored window always satisfies `start <= end` and contains the
/// reference date whenever the date falls inside the recurring pattern for
/// any year alignment. For a wrap-around window, a reference date in the
/// early-year tail anchors the start to the previous year; any other date
/// anchors the end to the next year. There is no third state.
///
/// Returns `None` when a month/day pair cannot be represented in the
/// anchored year. Catalog validation rejects Feb 29, so this does not
/// happen for validated records.
pub fn anchor_window(window: &RecurringWindow, reference: NaiveDate) -> Option<PlantingWindow> {
    let year = reference.year();
    let start = NaiveDate::from_ymd_opt(year, window.start_month, window.start_day)?;
    let end = NaiveDate::from_ymd_opt(year, window.end_month, window.end_day)?;

    if start <= end {
        return Some(PlantingWindow { start, end });
    }

    if reference <= end {
        let start = NaiveDate::from_ymd_opt(year - 1, window.start_month, window.start_day)?;
        Some(PlantingWindow { start, end })
    } else {
        let end = NaiveDate::from_ymd_opt(year + 1, window.end_month, window.end_day)?;
        Some(PlantingWindow { start, end })
    }
}

/// Classify a reference date against an anchored window.
///
/// The four statuses are mutually exclusive: inside the window is `Ideal`,
/// within 30 days before the start is `ComingSoon`, within 30 days after
/// the end is `LateSeason`, anything further out is `OutOfSeason`.
pub fn classify(reference: NaiveDate, window: &PlantingWindow) -> PlantingStatus {
    if window.contains(reference) {
        return PlantingStatus::Ideal;
    }
    if reference < window.start {
        if (window.start - reference).num_days() <= NEAR_SEASON_DAYS {
            return PlantingStatus::ComingSoon;
        }
    } else if (reference - window.end).num_days() <= NEAR_SEASON_DAYS {
        return PlantingStatus::LateSeason;
    }
    PlantingStatus::OutOfSeason
}

/// Build the full recommendation for one crop, region and reference date.
///
/// Returns `None` for catalog records whose planting window or growth
/// timeline is unrepresentable; a recommendation is either fully computed
/// or not produced at all. Germination and harvest estimates are computed
/// unconditionally, even out of season.
pub fn recommend(
    crop: &Crop,
    region: &Region,
    reference: NaiveDate,
) -> Option<PlantingRecommendation> {
    validate_planting_window(
        crop.planting_start_month,
        crop.planting_start_day,
        crop.planting_end_month,
        crop.planting_end_day,
    )
    .ok()?;
    validate_growth_timeline(crop.days_to_germination, crop.days_to_harvest).ok()?;

    let window = anchor_window(&crop.planting_window(), reference)?;
    let status = classify(reference, &window);
    let germination =
        reference.checked_add_signed(Duration::days(i64::from(crop.days_to_germination)))?;
    let harvest = germination.checked_add_signed(Duration::days(i64::from(crop.days_to_harvest)))?;

    Some(PlantingRecommendation {
        is_ideal_time: status == PlantingStatus::Ideal,
        notes: build_notes(crop, region, status),
        crop: crop.clone(),
        region: region.clone(),
        selected_date: reference,
        planting_window: window,
        estimated_germination_date: germination,
        estimated_harvest_date: harvest,
        status,
    })
}

/// Recommendations for every catalog crop suitable for the region, ordered
/// ideal-first. Catalog order is preserved among entries with the same
/// ideal flag.
pub fn recommendations_for(
    crops: &[Crop],
    region: &Region,
    reference: NaiveDate,
) -> Vec<PlantingRecommendation> {
    let mut recommendations: Vec<PlantingRecommendation> = crops
        .iter()
        .filter(|crop| crop.suits_zone(&region.climate_zone))
        .filter_map(|crop| recommend(crop, region, reference))
        .collect();
    // Stable sort: ideal entries first, catalog order otherwise
    recommendations.sort_by_key(|r| !r.is_ideal_time);
    recommendations
}

/// Suitable crops whose planting window overlaps `[start, end]` inclusively.
/// Windows are anchored against the range start; requires `start <= end`.
pub fn crops_in_range(
    crops: &[Crop],
    region: &Region,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<Crop> {
    crops
        .iter()
        .filter(|crop| crop.suits_zone(&region.climate_zone))
        .filter(|crop| {
            anchor_window(&crop.planting_window(), start)
                .map(|window| window.overlaps(start, end))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Deterministic notes text: outcome sentence, zone, growth timeline, then
/// a tip line only for the near-season statuses.
fn build_notes(crop: &Crop, region: &Region, status: PlantingStatus) -> String {
    let mut notes = Vec::new();

    if status == PlantingStatus::Ideal {
        notes.push(format!(
            "Perfect time to plant {} in {}.",
            crop.name, region.name
        ));
    } else {
        notes.push(format!(
            "{} is currently out of season in {}.",
            crop.name, region.name
        ));
    }

    notes.push(format!("Climate Zone: {}", region.climate_zone));
    notes.push(format!("Germination: {} days", crop.days_to_germination));
    notes.push(format!(
        "Harvest: {} days after germination",
        crop.days_to_harvest
    ));

    match status {
        PlantingStatus::ComingSoon => {
            notes.push("Planting season begins soon - prepare your soil!".to_string());
        }
        PlantingStatus::LateSeason => {
            notes.push(
                "Late in the season - consider starting indoors or waiting for next cycle."
                    .to_string(),
            );
        }
        _ => {}
    }

    notes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(sm: u32, sd: u32, em: u32, ed: u32) -> RecurringWindow {
        RecurringWindow {
            start_month: sm,
            start_day: sd,
            end_month: em,
            end_day: ed,
        }
    }

    #[test]
    fn test_non_wrap_window_anchors_in_reference_year() {
        let anchored = anchor_window(&window(3, 15, 6, 30), date(2024, 4, 15)).unwrap();
        assert_eq!(anchored.start, date(2024, 3, 15));
        assert_eq!(anchored.end, date(2024, 6, 30));
    }

    #[test]
    fn test_wrap_window_early_year_tail_starts_previous_year() {
        // Nov 1 - Feb 15 seen from January: the window began last year
        let anchored = anchor_window(&window(11, 1, 2, 15), date(2024, 1, 10)).unwrap();
        assert_eq!(anchored.start, date(2023, 11, 1));
        assert_eq!(anchored.end, date(2024, 2, 15));
    }

    #[test]
    fn test_wrap_window_late_year_ends_next_year() {
        // Same window seen from December: the window runs into next year
        let anchored = anchor_window(&window(11, 1, 2, 15), date(2024, 12, 1)).unwrap();
        assert_eq!(anchored.start, date(2024, 11, 1));
        assert_eq!(anchored.end, date(2025, 2, 15));
    }

    #[test]
    fn test_wrap_window_gap_looks_forward() {
        // A July date sits between the Feb end and the Nov start; the window
        // anchors forward to next year's end, leaving the date out of season
        let anchored = anchor_window(&window(11, 1, 2, 15), date(2024, 7, 1)).unwrap();
        assert_eq!(anchored.start, date(2024, 11, 1));
        assert_eq!(anchored.end, date(2025, 2, 15));
        assert!(!anchored.contains(date(2024, 7, 1)));
    }

    #[test]
    fn test_anchored_start_never_after_end() {
        let reference_dates = [
            date(2024, 1, 10),
            date(2024, 2, 15),
            date(2024, 2, 16),
            date(2024, 7, 1),
            date(2024, 11, 1),
            date(2024, 12, 31),
        ];
        for reference in reference_dates {
            let anchored = anchor_window(&window(11, 1, 2, 15), reference).unwrap();
            assert!(anchored.start <= anchored.end, "reference {}", reference);
        }
    }

    #[test]
    fn test_classify_inside_window_is_ideal() {
        let w = PlantingWindow {
            start: date(2024, 3, 15),
            end: date(2024, 6, 30),
        };
        assert_eq!(classify(date(2024, 4, 15), &w), PlantingStatus::Ideal);
        assert_eq!(classify(date(2024, 3, 15), &w), PlantingStatus::Ideal);
        assert_eq!(classify(date(2024, 6, 30), &w), PlantingStatus::Ideal);
    }

    #[test]
    fn test_classify_coming_soon_threshold() {
        let w = PlantingWindow {
            start: date(2024, 3, 15),
            end: date(2024, 6, 30),
        };
        // 30 days before the start is still coming soon, 31 is not
        assert_eq!(classify(date(2024, 2, 14), &w), PlantingStatus::ComingSoon);
        assert_eq!(classify(date(2024, 3, 14), &w), PlantingStatus::ComingSoon);
        assert_eq!(classify(date(2024, 2, 13), &w), PlantingStatus::OutOfSeason);
    }

    #[test]
    fn test_classify_late_season_threshold() {
        let w = PlantingWindow {
            start: date(2024, 3, 10),
            end: date(2024, 3, 20),
        };
        // 5 days past the end
        assert_eq!(classify(date(2024, 3, 25), &w), PlantingStatus::LateSeason);
        // 30 days past is still late season, 31 is not
        assert_eq!(classify(date(2024, 4, 19), &w), PlantingStatus::LateSeason);
        assert_eq!(classify(date(2024, 4, 20), &w), PlantingStatus::OutOfSeason);
    }

    #[test]
    fn test_anchor_rejects_unrepresentable_day() {
        // Feb 30 never exists in any year
        assert!(anchor_window(&window(2, 30, 6, 30), date(2024, 4, 15)).is_none());
    }
}
