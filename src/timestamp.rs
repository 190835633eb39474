use chrono::{
    DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, Offset, SecondsFormat,
    TimeZone, Utc,
};

use crate::error::ImportError;

// wall-clock shapes without an offset
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

// shapes carrying a numeric offset that RFC 3339 rejects: no seconds, or `+0800`
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%z",
];

/// Resolves the publish instant: `input` when given, otherwise now.
/// Offset-less date-times are read in the local timezone.
pub fn resolve(input: Option<&str>) -> Result<DateTime<Utc>, ImportError> {
    resolve_in(input, &Local)
}

pub fn resolve_in<Tz: TimeZone>(
    input: Option<&str>,
    tz: &Tz,
) -> Result<DateTime<Utc>, ImportError> {
    match input {
        None => Ok(Utc::now()),
        Some(s) => parse_in(s, tz).ok_or_else(|| ImportError::InvalidTime(s.to_string())),
    }
}

/// `2025-12-14T07:30:00.000Z`
pub fn to_iso(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_in<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(utc) = s.strip_suffix(['Z', 'z']) {
        return parse_naive(utc).map(|naive| Utc.from_utc_datetime(&naive));
    }
    if let Some(naive) = parse_naive(s) {
        return Some(from_local(&naive, tz));
    }

    // date-only forms are UTC midnight
    parse_date(s)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn from_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // inside a DST gap: keep the offset in effect before the gap, which
        // moves the wall-clock time forward by the gap's length
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(*naive - Duration::days(1))).fix();
            Utc.from_utc_datetime(&(*naive - Duration::seconds(before.local_minus_utc().into())))
        }
    }
}

/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`, missing parts being the first month/day.
fn parse_date(s: &str) -> Option<NaiveDate> {
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let padded = match s.len() {
        10 => s.to_string(),
        7 => format!("{s}-01"),
        4 => format!("{s}-01-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d").ok()
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
