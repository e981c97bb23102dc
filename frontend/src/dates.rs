//! Conversions between `<input type="datetime-local">` values, the ISO-8601
//! timestamps on the wire, and the strings shown in tables.
//!
//! Everything takes the time zone explicitly; the UI passes `chrono::Local`.

use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// `datetime-local` inputs work at minute precision.
const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Reads a `datetime-local` value (wall-clock time in `tz`) and renders it as
/// a UTC ISO-8601 string with millisecond precision.
///
/// Returns `None` for malformed input and for wall-clock times that do not
/// exist in `tz`.
pub fn local_input_to_iso<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<String> {
    let input = input.trim();
    let naive = NaiveDateTime::parse_from_str(input, LOCAL_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(
        local
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Parses a server timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_INPUT_FORMAT))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Rebuilds a `datetime-local` value for an edit form, truncated to the
/// minute. Unparseable timestamps give an empty input.
pub fn timestamp_to_local_input<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_timestamp(value)
        .map(|ts| ts.with_timezone(tz).format(LOCAL_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// Date and time for table cells. Unparseable values are shown as-is.
pub fn display_datetime<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_timestamp(value)
        .map(|ts| ts.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn display_date<Tz>(value: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    parse_timestamp(value)
        .map(|ts| ts.with_timezone(tz).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn now_local_input() -> String {
    Local::now().format(LOCAL_INPUT_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn plus_two() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn test_local_input_converted_to_utc_iso() {
        assert_eq!(
            local_input_to_iso("2024-03-05T14:30", &plus_two()).as_deref(),
            Some("2024-03-05T12:30:00.000Z")
        );
        assert_eq!(
            local_input_to_iso("2024-03-05T14:30", &Utc).as_deref(),
            Some("2024-03-05T14:30:00.000Z")
        );
    }

    #[test]
    fn test_malformed_local_input() {
        assert_eq!(local_input_to_iso("", &Utc), None);
        assert_eq!(local_input_to_iso("05/03/2024 14:30", &Utc), None);
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let ts = parse_timestamp("2024-03-05T12:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-05T12:30:00+00:00");

        let with_fraction = parse_timestamp("2024-03-05T12:30:00.123456").unwrap();
        assert_eq!(with_fraction.timestamp(), ts.timestamp());
    }

    #[test]
    fn test_edit_input_truncated_to_minute_in_zone() {
        assert_eq!(
            timestamp_to_local_input("2024-03-05T12:30:59.999Z", &plus_two()),
            "2024-03-05T14:30"
        );
        assert_eq!(timestamp_to_local_input("garbage", &Utc), "");
    }

    #[test]
    fn test_round_trip_through_edit_form_keeps_wall_clock() {
        let iso = local_input_to_iso("2024-12-31T23:15", &plus_two()).unwrap();
        assert_eq!(timestamp_to_local_input(&iso, &plus_two()), "2024-12-31T23:15");
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(
            display_datetime("2024-03-05T22:30:00Z", &plus_two()),
            "2024-03-06 00:30"
        );
        assert_eq!(display_date("2024-03-05T22:30:00Z", &Utc), "2024-03-05");
        assert_eq!(display_date("someday", &Utc), "someday");
    }
}
