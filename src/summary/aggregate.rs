use crate::schedule::{DayEntry, WeekSchedule};
use crate::time::WorkedTime;

/// The time worked in the whole week.
#[must_use]
pub fn total_worked(schedule: &WeekSchedule) -> WorkedTime {
    schedule.entries().map(DayEntry::worked).sum()
}

/// Like [`total_worked`], but in hours.
#[must_use]
pub fn total_hours(schedule: &WeekSchedule) -> f64 {
    total_worked(schedule).as_hours()
}
