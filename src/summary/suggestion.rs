use derive_more::Display;
use log::debug;

use crate::schedule::WeekSchedule;
use crate::summary::total_worked;
use crate::time::{ClockTime, WeekDay, LATEST_SUGGESTION, LUNCH_BREAK, WEEKLY_TARGET};

/// When to clock out on the open day to reach the weekly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("leave at {} on {}", time, day)]
pub struct Suggestion {
    day: WeekDay,
    time: ClockTime,
}

impl Suggestion {
    #[must_use]
    pub fn new(day: WeekDay, time: ClockTime) -> Self {
        Self { day, time }
    }

    #[must_use]
    pub fn day(&self) -> WeekDay {
        self.day
    }

    #[must_use]
    pub fn time(&self) -> ClockTime {
        self.time
    }
}

/// Suggests a clock-out for the first day that has been clocked in, but not
/// out, so that the week reaches [`WEEKLY_TARGET`].
///
/// There is no suggestion if the target has already been reached, if no day
/// is open or if one would have to stay later than [`LATEST_SUGGESTION`].
#[must_use]
pub fn suggest(schedule: &WeekSchedule) -> Option<Suggestion> {
    let total = total_worked(schedule);
    if total >= WEEKLY_TARGET {
        return None;
    }

    let (day, entry) = schedule.first_open_day()?;
    let clock_in = entry.clock_in()?;

    let remaining = WEEKLY_TARGET.saturating_sub(total);
    // the lunch break will be deducted again once the day is completed
    let candidate =
        u32::from(clock_in.as_minutes()) + remaining.as_mins() + LUNCH_BREAK.as_mins();

    if candidate > u32::from(LATEST_SUGGESTION.as_minutes()) {
        debug!(
            "{} would have to work {} from {}, which is later than {}",
            day.key(),
            remaining,
            clock_in,
            LATEST_SUGGESTION
        );
        return None;
    }

    let time = u16::try_from(candidate)
        .ok()
        .and_then(|minutes| ClockTime::from_minutes(minutes).ok())?;

    Some(Suggestion::new(day, time))
}
