//! Shared utility functions for HEC crates.

/// Date utility functions
pub mod dates {
    use chrono::NaiveDate;

    /// Date format used for meter readings and reports: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Seconds since the Unix epoch at midnight (UTC) of the given date.
    ///
    /// Strictly increasing in `date` and exactly 86400 apart for consecutive
    /// days, so fractional-day progress between two dates is well defined.
    pub fn midnight_timestamp(date: &NaiveDate) -> i64 {
        date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp()
    }

    /// Build a date for the given day of a month, if it exists.
    pub fn day_of_month(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

}
