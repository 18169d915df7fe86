use chrono::{DateTime, NaiveDate};
use num_format::{Locale, ToFormattedString as _};

/// Parse a stored date into a calendar date.
///
/// Entries normally hold a plain `YYYY-MM-DD` string, but documents imported
/// from older dumps may carry a full RFC 3339 timestamp; in that case the
/// calendar date as written (not converted to UTC) is used.
pub(crate) fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Yen amount with Japanese thousands separators (ex. 1,000,000,000).
pub(crate) fn format_yen(amount: i64) -> String {
    amount.to_formatted_string(&Locale::ja)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_calendar_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            parse_calendar_date(" 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_timestamp_keeps_local_date() {
        assert_eq!(
            parse_calendar_date("2024-01-31T23:30:00+09:00"),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_calendar_date("2024-13-01"), None);
        assert_eq!(parse_calendar_date("2024/01/15"), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date(""), None);
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(1_000_000_000), "1,000,000,000");
        assert_eq!(format_yen(980), "980");
    }
}
