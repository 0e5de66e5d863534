//! Everything that is derived from a week schedule: the weekly total, the
//! progress towards the target and the suggested clock-out.

use derive_more::Display;

use crate::schedule::WeekSchedule;
use crate::time::{WorkedTime, WEEKLY_TARGET};

mod aggregate;
mod suggestion;

pub use aggregate::*;
pub use suggestion::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ProgressLevel {
    /// At most 80% of the target.
    #[display("low")]
    Low,
    #[display("almost there")]
    Near,
    #[display("complete")]
    Complete,
}

/// The values shown to the user for the current schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekOverview {
    total: WorkedTime,
    suggestion: Option<Suggestion>,
}

impl WeekOverview {
    #[must_use]
    pub fn of(schedule: &WeekSchedule) -> Self {
        Self {
            total: total_worked(schedule),
            suggestion: suggest(schedule),
        }
    }

    #[must_use]
    pub fn total(&self) -> WorkedTime {
        self.total
    }

    #[must_use]
    pub fn total_hours(&self) -> f64 {
        self.total.as_hours()
    }

    /// How much is still missing to reach the target, zero once it is reached.
    #[must_use]
    pub fn remaining(&self) -> WorkedTime {
        WEEKLY_TARGET.saturating_sub(self.total)
    }

    #[must_use]
    pub fn is_target_reached(&self) -> bool {
        self.total >= WEEKLY_TARGET
    }

    #[must_use]
    pub fn is_over_target(&self) -> bool {
        self.total > WEEKLY_TARGET
    }

    /// Hours worked beyond the target.
    #[must_use]
    pub fn overage(&self) -> f64 {
        self.total.saturating_sub(WEEKLY_TARGET).as_hours()
    }

    /// Progress towards the target in percent, capped at 100.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.total.as_hours() / WEEKLY_TARGET.as_hours() * 100.0).min(100.0)
    }

    #[must_use]
    pub fn progress_level(&self) -> ProgressLevel {
        if self.is_target_reached() {
            ProgressLevel::Complete
        } else if self.total.as_mins() * 5 > WEEKLY_TARGET.as_mins() * 4 {
            ProgressLevel::Near
        } else {
            ProgressLevel::Low
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<Suggestion> {
        self.suggestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::week_schedule;

    #[test]
    fn test_empty_week() {
        let overview = WeekOverview::of(&WeekSchedule::empty());

        assert_eq!(overview.total(), WorkedTime::ZERO);
        assert_eq!(overview.remaining(), WEEKLY_TARGET);
        assert_eq!(overview.progress_percent(), 0.0);
        assert_eq!(overview.progress_level(), ProgressLevel::Low);
        assert!(!overview.is_over_target());
        assert_eq!(overview.suggestion(), None);
    }

    #[test]
    fn test_progress() {
        let overview = WeekOverview::of(&week_schedule! {
            Monday => ("08:00", "17:30"),
            Tuesday => ("08:00", "17:30"),
            Wednesday => ("08:00", "17:30"),
        });

        assert_eq!(overview.total_hours(), 27.0);
        assert_eq!(overview.progress_percent(), 75.0);
        assert_eq!(overview.progress_level(), ProgressLevel::Low);
        assert_eq!(overview.remaining().to_string(), "9h");

        let overview = WeekOverview::of(&week_schedule! {
            Monday => ("08:00", "17:30"),
            Tuesday => ("08:00", "17:30"),
            Wednesday => ("08:00", "17:30"),
            Thursday => ("08:00", "11:00"),
        });

        assert_eq!(overview.total().to_string(), "29h 30m");
        assert_eq!(overview.progress_level(), ProgressLevel::Near);
    }

    #[test]
    fn test_exactly_on_target() {
        let overview = WeekOverview::of(&week_schedule! {
            Monday => ("08:00", "17:30"),
            Tuesday => ("08:00", "17:30"),
            Wednesday => ("08:00", "17:30"),
            Thursday => ("08:00", "17:30"),
        });

        assert!(overview.is_target_reached());
        assert!(!overview.is_over_target());
        assert_eq!(overview.overage(), 0.0);
        assert_eq!(overview.progress_percent(), 100.0);
        assert_eq!(overview.progress_level(), ProgressLevel::Complete);
        assert_eq!(overview.remaining(), WorkedTime::ZERO);
    }
}
