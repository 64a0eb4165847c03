use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Truncate an instant to its calendar day in the viewer's local timezone.
pub fn day_floor(instant: DateTime<Local>) -> NaiveDate {
    instant.date_naive()
}

/// The first instant of a calendar day in the local timezone.
pub fn at_local_midnight(day: NaiveDate) -> DateTime<Local> {
    let midnight = day.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        // Some zones skip midnight on a DST day; anchor on UTC midnight instead.
        LocalResult::None => Local.from_utc_datetime(&midnight),
    }
}

/// Calendar-day difference `later - earlier` (negative if reversed).
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Shift a day by a signed number of calendar days.
pub fn add_days(day: NaiveDate, days: i64) -> NaiveDate {
    day + Duration::days(days)
}

/// Parse a stored instant string.
///
/// Accepts RFC 3339 (what we and the original web client write) and a bare
/// `YYYY-MM-DD`, which is read as local midnight.
pub fn parse_instant(s: &str) -> Option<DateTime<Local>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s.trim()) {
        return Some(dt.with_timezone(&Local));
    }
    parse_day(s).map(at_local_midnight)
}

/// Parse a bare `YYYY-MM-DD` day.
pub fn parse_day(s: &str) -> Option<NaiveDate> {
    s.trim().parse::<NaiveDate>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_floor_discards_time_of_day() {
        let late = at_local_midnight(d(2024, 6, 10)) + Duration::hours(23) + Duration::minutes(59);
        assert_eq!(day_floor(late), d(2024, 6, 10));
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2024, 6, 12), d(2024, 6, 10)), 2);
        assert_eq!(days_between(d(2024, 6, 10), d(2024, 6, 12)), -2);
        assert_eq!(days_between(d(2024, 6, 10), d(2024, 6, 10)), 0);
    }

    #[test]
    fn add_days_crosses_month_boundaries() {
        assert_eq!(add_days(d(2024, 6, 30), 1), d(2024, 7, 1));
        assert_eq!(add_days(d(2024, 3, 1), -1), d(2024, 2, 29));
    }

    #[test]
    fn parse_instant_accepts_rfc3339() {
        let dt = parse_instant("2024-06-10T00:00:00Z").unwrap();
        assert_eq!(
            dt.with_timezone(&chrono::Utc).to_rfc3339(),
            "2024-06-10T00:00:00+00:00"
        );
    }

    #[test]
    fn parse_instant_accepts_bare_day() {
        let dt = parse_instant("2024-06-10").unwrap();
        assert_eq!(day_floor(dt), d(2024, 6, 10));
    }

    #[test]
    fn parse_instant_rejects_garbage() {
        assert!(parse_instant("not a date").is_none());
        assert!(parse_instant("").is_none());
    }

    #[test]
    fn midnight_round_trips_through_day_floor() {
        let day = d(2025, 1, 31);
        assert_eq!(day_floor(at_local_midnight(day)), day);
    }
}
