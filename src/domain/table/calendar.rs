use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Normalizes a stored timestamp to its calendar date.
///
/// Offset-carrying timestamps are converted to UTC first; naive ones keep
/// their written date. Anything else yields `None`.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc).date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(value.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parses the `YYYY-MM-DD` value of a date input; blank means unbounded.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn accepts_the_stored_timestamp_shapes() {
        assert_eq!(parse_calendar_date("2024-02-10"), Some(date(2024, 2, 10)));
        assert_eq!(
            parse_calendar_date("2024-02-10 23:15:00"),
            Some(date(2024, 2, 10))
        );
        assert_eq!(
            parse_calendar_date("2024-02-10T08:30"),
            Some(date(2024, 2, 10))
        );
        assert_eq!(
            parse_calendar_date("2024-02-10T08:30:00.123Z"),
            Some(date(2024, 2, 10))
        );
    }

    #[test]
    fn offset_timestamps_normalize_to_utc_date() {
        assert_eq!(
            parse_calendar_date("2024-02-10T02:00:00+08:00"),
            Some(date(2024, 2, 9))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("2024-13-40"), None);
    }
}
