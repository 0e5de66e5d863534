use week_sheet::schedule::WeekSchedule;
use week_sheet::store::{MemoryStorage, ScheduleStore};
use week_sheet::week_schedule;

/// Monday to Thursday with exactly 8 hours each.
#[must_use]
pub fn four_full_days() -> WeekSchedule {
    week_schedule! {
        Monday => ("09:00", "17:30"),
        Tuesday => ("09:00", "17:30"),
        Wednesday => ("09:00", "17:30"),
        Thursday => ("09:00", "17:30"),
    }
}

#[must_use]
#[allow(dead_code)]
pub fn store_with(schedule: &WeekSchedule) -> ScheduleStore<MemoryStorage> {
    let contents = serde_json::to_string(schedule).expect("a schedule should serialize");
    ScheduleStore::load(MemoryStorage::with_contents(contents))
}
