use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::time::{ClockTime, LUNCH_BREAK};

/// An amount of worked time, held in whole minutes.
///
/// Every duration in a week schedule is derived from `HH:MM` values, so it is
/// always a whole number of minutes. Keeping minutes avoids drift when the
/// durations of a week are summed up; [`WorkedTime::as_hours`] gives the real
/// number of hours the persisted format and the overview expose.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkedTime {
    minutes: u32,
}

impl WorkedTime {
    pub const ZERO: Self = Self::from_mins(0);

    #[must_use]
    pub const fn from_mins(minutes: u32) -> Self {
        Self { minutes }
    }

    #[must_use]
    pub const fn from_hours(hours: u32) -> Self {
        Self::from_mins(hours * 60)
    }

    /// Rounds a real number of hours to the nearest minute. Negative and
    /// non-finite values are treated as zero.
    #[must_use]
    pub fn from_hours_f64(hours: f64) -> Self {
        if !hours.is_finite() || hours <= 0.0 {
            return Self::ZERO;
        }

        Self::from_mins((hours * 60.0).round() as u32)
    }

    /// The time worked between clocking in and out, minus the lunch break.
    ///
    /// Intervals that are not longer than the lunch break (including a
    /// clock-out before the clock-in) count as zero.
    #[must_use]
    pub fn between(clock_in: ClockTime, clock_out: ClockTime) -> Self {
        let elapsed = i32::from(clock_out.as_minutes())
            - i32::from(clock_in.as_minutes())
            - LUNCH_BREAK.as_mins() as i32;

        if elapsed > 0 {
            Self::from_mins(elapsed as u32)
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub const fn as_mins(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub fn as_hours(&self) -> f64 {
        f64::from(self.minutes) / 60.0
    }

    /// The whole hours.
    #[must_use]
    pub const fn hours(&self) -> u32 {
        self.minutes / 60
    }

    /// The minutes that remain after the whole hours.
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes % 60
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0
    }

    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self::from_mins(self.minutes.saturating_sub(other.minutes))
    }
}

impl fmt::Display for WorkedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minutes() == 0 {
            write!(f, "{}h", self.hours())
        } else {
            write!(f, "{}h {}m", self.hours(), self.minutes())
        }
    }
}

impl Add for WorkedTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_mins(self.minutes + rhs.minutes)
    }
}

impl AddAssign for WorkedTime {
    fn add_assign(&mut self, rhs: Self) {
        self.minutes += rhs.minutes;
    }
}

impl Sum for WorkedTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a WorkedTime> for WorkedTime {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
