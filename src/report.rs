//! Renders a week schedule and its overview as plain text for the terminal.

use std::fmt;

use crate::schedule::WeekSchedule;
use crate::summary::WeekOverview;
use crate::time::{ClockTime, WorkedTime, WEEKLY_TARGET};

/// Zero durations are shown as a dash.
fn worked_cell(worked: WorkedTime) -> String {
    if worked.is_zero() {
        "-".to_string()
    } else {
        worked.to_string()
    }
}

fn time_cell(time: Option<ClockTime>) -> String {
    time.map_or_else(|| "--:--".to_string(), |time| time.to_string())
}

/// The table of the week followed by the totals and the suggestion.
pub struct Report<'a> {
    schedule: &'a WeekSchedule,
    overview: &'a WeekOverview,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(schedule: &'a WeekSchedule, overview: &'a WeekOverview) -> Self {
        Self { schedule, overview }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12}{:<11}{:<11}{}",
            "Day", "Clock-in", "Clock-out", "Worked"
        )?;

        for (day, entry) in self.schedule.iter() {
            writeln!(
                f,
                "{:<12}{:<11}{:<11}{}",
                day.label(),
                time_cell(entry.clock_in()),
                time_cell(entry.clock_out()),
                worked_cell(entry.worked())
            )?;
        }

        writeln!(
            f,
            "{:<34}{}",
            "Weekly total",
            worked_cell(self.overview.total())
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "Total hours {}/{}",
            self.overview.total(),
            WEEKLY_TARGET.hours()
        )?;
        if self.overview.is_target_reached() {
            writeln!(f, "Target reached!")?;
        } else {
            writeln!(f, "Missing {}", self.overview.remaining())?;
        }
        writeln!(
            f,
            "Weekly progress {:.1}% ({})",
            self.overview.progress_percent(),
            self.overview.progress_level()
        )?;

        if let Some(suggestion) = self.overview.suggestion() {
            writeln!(
                f,
                "Suggestion: to complete the {} hours, leave at {} on {}.",
                WEEKLY_TARGET.hours(),
                suggestion.time(),
                suggestion.day().label().to_lowercase()
            )?;
        }

        if self.overview.is_over_target() {
            writeln!(
                f,
                "Warning: you exceeded the {} weekly hours by {:.1} hours.",
                WEEKLY_TARGET.hours(),
                self.overview.overage()
            )?;
        }

        Ok(())
    }
}
