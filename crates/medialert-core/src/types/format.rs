//! Display formatting for dates, times, and timestamps.
//!
//! All user-facing date rendering goes through these helpers so tables,
//! audit summaries, and reports agree. Dates render as `DD/MM/YYYY`
//! (the es-CO presentation), timestamps add `HH:MM`, and times render
//! in 12-hour clock with an AM/PM marker. Missing values render as
//! [`NOT_AVAILABLE`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Placeholder shown for absent values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Format an optional calendar date.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format an optional time of day in 12-hour clock.
pub fn format_time(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%I:%M %p").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format a UTC timestamp with minute precision.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(format_date(Some(d)), "14/05/2024");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn test_format_time_is_twelve_hour() {
        let t = NaiveTime::from_hms_opt(20, 30, 0).unwrap();
        assert_eq!(format_time(Some(t)), "08:30 PM");
        let early = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(format_time(Some(early)), "08:00 AM");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 13, 45, 59).unwrap();
        assert_eq!(format_timestamp(ts), "02/01/2024 13:45");
    }
}
