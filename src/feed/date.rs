use chrono::{DateTime, Utc};

/// RFC 3339 timestamp pattern used for Atom date constructs, always in UTC.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats a timestamp the way `<updated>` and `<published>` expect it.
///
/// ```
/// use atomext::feed::format_date;
/// use chrono::DateTime;
///
/// let date = DateTime::from_timestamp(1_329_350_400, 0).unwrap();
/// assert_eq!(format_date(&date), "2012-02-16T00:00:00Z");
/// ```
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_millis(millis: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&at_millis(510_278_400_000)), "1986-03-04T00:00:00Z");
        assert_eq!(format_date(&at_millis(223_948_800_000)), "1977-02-05T00:00:00Z");
    }

    #[test]
    fn test_sub_second_precision_dropped() {
        assert_eq!(format_date(&at_millis(1_329_350_400_999)), "2012-02-16T00:00:00Z");
    }
}
