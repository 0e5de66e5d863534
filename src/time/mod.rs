use crate::clock_time;

/// Deducted from every completed day.
pub const LUNCH_BREAK: WorkedTime = WorkedTime::from_mins(30);

/// The amount of time that should be worked in a week.
pub const WEEKLY_TARGET: WorkedTime = WorkedTime::from_hours(36);

/// Suggested clock-outs later than this are not reasonable.
pub const LATEST_SUGGESTION: ClockTime = clock_time!(20:00);

/// Minutes since 00:00, an empty value counts as 00:00.
#[must_use]
pub fn parse_to_minutes(time: Option<ClockTime>) -> u16 {
    time.map_or(0, |time| time.as_minutes())
}

pub fn format_from_minutes(minutes: u16) -> Result<ClockTime, InvalidClockTime> {
    ClockTime::from_minutes(minutes)
}

/// The time worked on a day, zero unless both ends are set.
#[must_use]
pub fn worked_between(clock_in: Option<ClockTime>, clock_out: Option<ClockTime>) -> WorkedTime {
    match (clock_in, clock_out) {
        (Some(clock_in), Some(clock_out)) => WorkedTime::between(clock_in, clock_out),
        _ => WorkedTime::ZERO,
    }
}

/// Like [`worked_between`], but in hours.
#[must_use]
pub fn compute_duration(clock_in: Option<ClockTime>, clock_out: Option<ClockTime>) -> f64 {
    worked_between(clock_in, clock_out).as_hours()
}

/// Renders hours as `8h` or `7h 30m`.
#[must_use]
pub fn format_duration(hours: f64) -> String {
    WorkedTime::from_hours_f64(hours).to_string()
}

mod clock_time;
pub use clock_time::*;
mod week_day;
pub use week_day::*;
mod worked_time;
pub use worked_time::*;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_compute_duration() {
        assert_eq!(
            compute_duration(Some(clock_time!(09:00)), Some(clock_time!(17:30))),
            8.0
        );
        assert_eq!(
            compute_duration(Some(clock_time!(08:00)), Some(clock_time!(12:30))),
            4.0
        );
        assert_eq!(
            compute_duration(Some(clock_time!(08:00)), Some(clock_time!(08:45))),
            0.25
        );
    }

    #[test]
    fn test_compute_duration_with_empty_side() {
        let time = Some(clock_time!(12:00));

        assert_eq!(compute_duration(time, None), 0.0);
        assert_eq!(compute_duration(None, time), 0.0);
        assert_eq!(compute_duration(None, None), 0.0);
    }

    #[test]
    fn test_compute_duration_matches_formula() {
        for clock_in in (0..1440).step_by(37) {
            for clock_out in (0..1440).step_by(41) {
                let duration = compute_duration(
                    Some(format_from_minutes(clock_in).unwrap()),
                    Some(format_from_minutes(clock_out).unwrap()),
                );

                let difference = i32::from(clock_out) - i32::from(clock_in);
                if difference <= 30 {
                    assert_eq!(duration, 0.0);
                } else {
                    assert_eq!(duration, f64::from(difference - 30) / 60.0);
                }
            }
        }
    }

    #[test]
    fn test_parse_to_minutes() {
        assert_eq!(parse_to_minutes(None), 0);
        assert_eq!(parse_to_minutes(Some(clock_time!(09:00))), 540);
        assert_eq!(parse_to_minutes(Some(clock_time!(23:59))), 1439);
    }

    #[test]
    fn test_format_from_minutes_round_trip() {
        for minutes in 0..1440 {
            assert_eq!(
                parse_to_minutes(Some(format_from_minutes(minutes).unwrap())),
                minutes
            );
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(8.0), "8h");
        assert_eq!(format_duration(7.5), "7h 30m");
        assert_eq!(format_duration(0.0), "0h");
        assert_eq!(format_duration(36.0 - 8.25), "27h 45m");
    }
}
