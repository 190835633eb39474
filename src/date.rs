use chrono::{DateTime, TimeZone, Utc};

/// UTC calendar date as `YYYY-MM-DD`.
pub fn format_date_to_yyyymmdd<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d").to_string()
}

/// UTC date and time as `YYYY-MM-DD HH:mm`, so the value does not shift with
/// the reader's timezone.
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn test_format_date_to_yyyymmdd() {
        let date = Utc.with_ymd_and_hms(2024, 1, 5, 23, 59, 59).unwrap();
        assert_eq!(format_date_to_yyyymmdd(&date), "2024-01-05");

        // 2024-01-06 01:00 at +09:00 is still the 5th in UTC
        let jst = FixedOffset::east_opt(9 * 3600).unwrap();
        let date = jst.with_ymd_and_hms(2024, 1, 6, 1, 0, 0).unwrap();
        assert_eq!(format_date_to_yyyymmdd(&date), "2024-01-05");
    }

    #[test]
    fn test_format_date_time() {
        let date = Utc.with_ymd_and_hms(987, 3, 4, 5, 6, 7).unwrap();
        let formatted = format_date_time(&date);
        assert_eq!(formatted, "0987-03-04 05:06");
        assert_eq!(formatted.len(), 16);

        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        let date = pst.with_ymd_and_hms(2025, 12, 31, 20, 30, 0).unwrap();
        assert_eq!(format_date_time(&date), "2026-01-01 04:30");
    }
}
