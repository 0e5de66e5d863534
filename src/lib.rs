mod utils;

pub mod config;
pub mod report;
pub mod schedule;
pub mod store;
pub mod summary;
pub mod time;

pub use config::Config;

use log::info;
use thiserror::Error;

use crate::schedule::{Field, WeekSchedule};
use crate::store::{ScheduleStore, Storage};
use crate::summary::WeekOverview;
use crate::time::WeekDay;

#[doc(hidden)]
pub mod __private {
    pub use static_assertions::const_assert;
}

/// Sets one time of one day and derives the overview from the updated week.
///
/// Leaving out the time (`None`) or passing an empty one clears the field.
pub fn update_day<S: Storage>(
    store: &mut ScheduleStore<S>,
    day: WeekDay,
    field: Field,
    raw: Option<&str>,
) -> anyhow::Result<(WeekSchedule, WeekOverview)> {
    let schedule = store.set_field_str(day, field, raw.unwrap_or_default())?.clone();
    let overview = WeekOverview::of(&schedule);

    info!("worked this week: {}", overview.total());

    Ok((schedule, overview))
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("this deletes all times of the week and can not be undone, pass --yes to confirm")]
pub struct ClearNotConfirmed;

/// Deletes all times of the week, but only if the caller `confirmed` it.
/// Without confirmation the store is left untouched.
pub fn clear_week<S: Storage>(
    store: &mut ScheduleStore<S>,
    confirmed: bool,
) -> Result<(WeekSchedule, WeekOverview), ClearNotConfirmed> {
    if !confirmed {
        return Err(ClearNotConfirmed);
    }

    let schedule = store.clear().clone();
    let overview = WeekOverview::of(&schedule);

    Ok((schedule, overview))
}
