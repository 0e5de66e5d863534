use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{self, ClockTime, ParseClockTimeError, WorkedTime};

/// The two times of a day that a caller can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ClockIn,
    ClockOut,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a field (expected \"in\" or \"out\")")]
pub struct InvalidField(String);

impl FromStr for Field {
    type Err = InvalidField;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_lowercase().as_str() {
            "in" | "clock-in" | "entrata" => Ok(Self::ClockIn),
            "out" | "clock-out" | "uscita" => Ok(Self::ClockOut),
            _ => Err(InvalidField(string.to_string())),
        }
    }
}

/// The times of a single day and the time worked on it.
///
/// The worked time is derived from the clock-in and clock-out and can not be
/// set directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDayEntry", into = "RawDayEntry")]
pub struct DayEntry {
    clock_in: Option<ClockTime>,
    clock_out: Option<ClockTime>,
    worked: WorkedTime,
}

impl DayEntry {
    #[must_use]
    pub fn new(clock_in: Option<ClockTime>, clock_out: Option<ClockTime>) -> Self {
        Self {
            clock_in,
            clock_out,
            worked: time::worked_between(clock_in, clock_out),
        }
    }

    #[must_use]
    pub fn clock_in(&self) -> Option<ClockTime> {
        self.clock_in
    }

    #[must_use]
    pub fn clock_out(&self) -> Option<ClockTime> {
        self.clock_out
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<ClockTime> {
        match field {
            Field::ClockIn => self.clock_in,
            Field::ClockOut => self.clock_out,
        }
    }

    #[must_use]
    pub fn worked(&self) -> WorkedTime {
        self.worked
    }

    /// The time worked in hours.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.worked.as_hours()
    }

    /// Clocked in, but not yet out.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none() && self.clock_out.is_none()
    }

    /// Returns the entry with `field` replaced and the worked time recomputed.
    #[must_use]
    pub fn with(self, field: Field, value: Option<ClockTime>) -> Self {
        match field {
            Field::ClockIn => Self::new(value, self.clock_out),
            Field::ClockOut => Self::new(self.clock_in, value),
        }
    }
}

/// The persisted shape of a [`DayEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawDayEntry {
    entrata: String,
    uscita: String,
    #[serde(rename = "totaleOre")]
    totale_ore: f64,
}

impl TryFrom<RawDayEntry> for DayEntry {
    type Error = ParseClockTimeError;

    fn try_from(raw: RawDayEntry) -> Result<Self, Self::Error> {
        let entry = Self::new(
            time::parse_optional(&raw.entrata)?,
            time::parse_optional(&raw.uscita)?,
        );

        if WorkedTime::from_hours_f64(raw.totale_ore) != entry.worked {
            debug!(
                "stored duration {} does not match {} - {}, using {}",
                raw.totale_ore,
                raw.entrata,
                raw.uscita,
                entry.worked
            );
        }

        Ok(entry)
    }
}

impl From<DayEntry> for RawDayEntry {
    fn from(entry: DayEntry) -> Self {
        Self {
            entrata: entry.clock_in.map(|t| t.to_string()).unwrap_or_default(),
            uscita: entry.clock_out.map(|t| t.to_string()).unwrap_or_default(),
            totale_ore: entry.duration(),
        }
    }
}
