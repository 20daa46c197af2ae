//! Validation helpers for catalog data and query parameters.
//!
//! Month/day pairs are validated against a non-leap reference year, so a
//! stored planting window can be anchored to any concrete year.

use chrono::NaiveDate;

/// Days per month in a non-leap year
const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Validate a recurring month/day pair
pub fn validate_month_day(month: i32, day: i32) -> Result<(), &'static str> {
    if !(1..=12).contains(&month) {
        return Err("Month must be between 1 and 12");
    }
    if day < 1 || day > DAYS_IN_MONTH[(month - 1) as usize] {
        return Err("Day is not valid for the month");
    }
    Ok(())
}

/// Validate a crop's recurring planting window. Start past end is a valid
/// wrap-around window, so no ordering is enforced between the two pairs.
pub fn validate_planting_window(
    start_month: i32,
    start_day: i32,
    end_month: i32,
    end_day: i32,
) -> Result<(), &'static str> {
    validate_month_day(start_month, start_day)?;
    validate_month_day(end_month, end_day)
}

/// Validate germination and harvest day counts
pub fn validate_growth_timeline(
    days_to_germination: i32,
    days_to_harvest: i32,
) -> Result<(), &'static str> {
    if days_to_germination < 0 {
        return Err("Days to germination cannot be negative");
    }
    if days_to_harvest < 0 {
        return Err("Days to harvest cannot be negative");
    }
    Ok(())
}

/// Validate that a query date range is properly ordered. The bounds are
/// never reordered on the caller's behalf.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if start > end {
        return Err("Start date must be on or before end date");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_month_day_valid() {
        assert!(validate_month_day(1, 1).is_ok());
        assert!(validate_month_day(12, 31).is_ok());
        assert!(validate_month_day(2, 28).is_ok());
        assert!(validate_month_day(4, 30).is_ok());
    }

    #[test]
    fn test_validate_month_day_invalid_month() {
        assert!(validate_month_day(0, 1).is_err());
        assert!(validate_month_day(13, 1).is_err());
        assert!(validate_month_day(-1, 1).is_err());
    }

    #[test]
    fn test_validate_month_day_invalid_day() {
        assert!(validate_month_day(1, 0).is_err());
        assert!(validate_month_day(1, 32).is_err());
        assert!(validate_month_day(4, 31).is_err());
        // Feb 29 only exists in leap years, so it cannot be stored
        assert!(validate_month_day(2, 29).is_err());
    }

    #[test]
    fn test_validate_planting_window_wrap_around_allowed() {
        // Nov 1 - Feb 15 is a valid wrap-around window
        assert!(validate_planting_window(11, 1, 2, 15).is_ok());
        assert!(validate_planting_window(3, 15, 6, 30).is_ok());
        assert!(validate_planting_window(3, 15, 6, 31).is_err());
    }

    #[test]
    fn test_validate_growth_timeline() {
        assert!(validate_growth_timeline(0, 0).is_ok());
        assert!(validate_growth_timeline(7, 70).is_ok());
        assert!(validate_growth_timeline(-1, 70).is_err());
        assert!(validate_growth_timeline(7, -1).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }
}
