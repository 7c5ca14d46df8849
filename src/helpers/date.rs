//! Date helper functions

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Full English month names, January first
///
/// The archive buckets by full month name in a fixed locale, independent
/// of the machine's locale settings.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name for a calendar date
pub fn month_name(date: &NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// 1-based month number for a full month name
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| *m == name)
        .map(|i| i as u32 + 1)
}

/// Parse a date string in the formats front-matter commonly uses
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

/// Format a date in full form (like "January 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    format!("{} {}, {}", month_name(date), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00+08:00"), Some(expected));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-13-40"), None);
    }

    #[test]
    fn test_month_names_round_trip() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(month_name(&date), "December");
        assert_eq!(month_number("December"), Some(12));
        assert_eq!(month_number("January"), Some(1));
        assert_eq!(month_number("Frimaire"), None);
    }

    #[test]
    fn test_full_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(full_date(&date), "January 15, 2024");
    }
}
