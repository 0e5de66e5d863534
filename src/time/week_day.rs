use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The five working days of a week, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl WeekDay {
    pub const ALL: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    pub fn as_usize(&self) -> usize {
        *self as usize
    }

    /// Position in [`WeekDay::ALL`].
    pub(crate) fn index(&self) -> usize {
        self.as_usize() - 1
    }

    /// The identifier under which the day is persisted.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Monday => "lunedi",
            Self::Tuesday => "martedi",
            Self::Wednesday => "mercoledi",
            Self::Thursday => "giovedi",
            Self::Friday => "venerdi",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Lunedì",
            Self::Tuesday => "Martedì",
            Self::Wednesday => "Mercoledì",
            Self::Thursday => "Giovedì",
            Self::Friday => "Venerdì",
        }
    }

    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }

    /// The inverse of [`WeekDay::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.key() == key)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("\"{0}\" is not a working day (expected one of monday..friday)")]
pub struct InvalidWeekDay(String);

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    /// Accepts the persisted key, the english name or the label, ignoring case.
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let needle = string.trim().to_lowercase();

        Self::ALL
            .into_iter()
            .find(|day| {
                day.key() == needle
                    || day.english_name().to_lowercase() == needle
                    || day.label().to_lowercase() == needle
            })
            .ok_or_else(|| InvalidWeekDay(string.to_string()))
    }
}
