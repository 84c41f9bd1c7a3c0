//! Scheduling Time Helpers
//!
//! The backend exchanges minute-precision local datetimes in the
//! `datetime-local` input format. Display formatting is the only place
//! values are parsed; everywhere else they pass through verbatim.

use chrono::{Duration, NaiveDateTime};

/// Wire/input format, `YYYY-MM-DDTHH:MM`
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Backend responses may carry seconds
const INPUT_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M";

/// Default slot offered by scheduling forms: one hour from `now`,
/// truncated to the minute.
pub fn default_schedule_time(now: NaiveDateTime) -> String {
    (now + Duration::hours(1)).format(INPUT_FORMAT).to_string()
}

/// Current local wall-clock time.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn parse(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, INPUT_FORMAT_WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, INPUT_FORMAT))
        .ok()
}

/// Human-readable rendering of a backend timestamp. Unparseable input
/// is shown as-is rather than hidden.
pub fn format_display(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_default_time_is_one_hour_out_minute_precision() {
        assert_eq!(default_schedule_time(at(14, 30, 45)), "2025-06-01T15:30");
    }

    #[test]
    fn test_default_time_rolls_over_midnight() {
        assert_eq!(default_schedule_time(at(23, 30, 0)), "2025-06-02T00:30");
    }

    #[test]
    fn test_display_handles_seconds_and_minutes() {
        assert_eq!(format_display("2025-06-01T14:30:00"), "Jun 1, 2025 14:30");
        assert_eq!(format_display("2025-06-01T14:30"), "Jun 1, 2025 14:30");
    }

    #[test]
    fn test_display_passes_garbage_through() {
        assert_eq!(format_display("soon"), "soon");
        assert_eq!(format_display(""), "");
    }
}
