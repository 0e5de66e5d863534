//! Keeps the week schedule of a session and writes it to a [`Storage`] after
//! every change.

use std::io;
use std::path::PathBuf;

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::schedule::{Field, WeekSchedule};
use crate::summary::WeekOverview;
use crate::time::{self, ClockTime, ParseClockTimeError, WeekDay};

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// The key under which the schedule is persisted.
pub const STORAGE_KEY: &str = "timesheet_schedule";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("the storage is not available")]
    Unavailable,
    #[error("failed to serialize the schedule")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("the stored schedule is invalid")]
    Invalid(#[from] serde_json::Error),
}

/// A single durable slot that holds the serialized schedule.
pub trait Storage {
    /// Returns `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    fn save(&mut self, contents: &str) -> Result<(), StorageError>;
}

/// Reads and validates the stored schedule.
pub fn read_schedule<S>(storage: &S) -> Result<Option<WeekSchedule>, LoadError>
where
    S: Storage + ?Sized,
{
    let Some(contents) = storage.load()? else {
        return Ok(None);
    };

    Ok(Some(serde_json::from_str(&contents)?))
}

pub fn write_schedule<S: Storage + ?Sized>(
    storage: &mut S,
    schedule: &WeekSchedule,
) -> Result<(), StorageError> {
    let contents = serde_json::to_string(schedule)?;
    storage.save(&contents)
}

/// Owns the schedule of the session.
///
/// Every mutation updates the schedule in memory first and then writes the
/// whole schedule to the storage. A failed write is logged, the in-memory
/// schedule stays authoritative until the next successful write.
pub struct ScheduleStore<S> {
    storage: S,
    schedule: WeekSchedule,
}

impl<S: Storage> ScheduleStore<S> {
    /// Restores the schedule from `storage`, or starts with an empty one if
    /// there is nothing stored or the stored data can not be used.
    pub fn load(storage: S) -> Self {
        let schedule = match read_schedule(&storage) {
            Ok(Some(schedule)) => {
                debug!("restored schedule from storage");
                schedule
            }
            Ok(None) => {
                info!("no stored schedule, starting with an empty week");
                WeekSchedule::empty()
            }
            Err(e) => {
                let e = anyhow::Error::from(e).context("failed to load the stored schedule");
                warn!("{:?}", e);
                warn!("starting with an empty week");
                WeekSchedule::empty()
            }
        };

        Self { storage, schedule }
    }

    #[must_use]
    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }

    /// Derives the totals and the suggestion from the current schedule.
    #[must_use]
    pub fn overview(&self) -> WeekOverview {
        WeekOverview::of(&self.schedule)
    }

    /// Sets one time of one day and persists the schedule.
    pub fn set_field(
        &mut self,
        day: WeekDay,
        field: Field,
        value: Option<ClockTime>,
    ) -> &WeekSchedule {
        self.schedule = self.schedule.with_field(day, field, value);
        let entry = self.schedule.get(day);
        debug!(
            "{} {:?} = {:?}, worked {}",
            day.key(),
            field,
            entry.get(field),
            entry.worked()
        );

        self.persist();
        &self.schedule
    }

    /// Like [`ScheduleStore::set_field`], but takes the raw input of a time
    /// field. Malformed input is rejected and leaves the schedule untouched.
    pub fn set_field_str(
        &mut self,
        day: WeekDay,
        field: Field,
        raw: &str,
    ) -> Result<&WeekSchedule, ParseClockTimeError> {
        let value = time::parse_optional(raw)?;
        Ok(self.set_field(day, field, value))
    }

    /// Replaces everything with the empty schedule. This can not be undone.
    pub fn clear(&mut self) -> &WeekSchedule {
        if self.schedule.is_empty() {
            debug!("the schedule is already empty");
        } else {
            info!("clearing the schedule");
        }

        self.schedule = WeekSchedule::empty();
        self.persist();
        &self.schedule
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        if let Err(e) = write_schedule(&mut self.storage, &self.schedule) {
            let e = anyhow::Error::from(e).context("failed to save the schedule");
            error!("{:?}", e);
            warn!("changes are only kept until the session ends");
        }
    }
}
