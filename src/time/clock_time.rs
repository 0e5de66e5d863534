use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

use crate::utils::StrExt;

/// A point in a single day, without date or timezone.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:02}:{:02}", hour, minute)]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Time is not valid: {hour:02}:{minute:02}")]
pub struct InvalidClockTime {
    hour: u16,
    minute: u16,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseClockTimeError {
    #[error("expected a time in the format HH:MM, got \"{0}\"")]
    Malformed(String),
    #[error(transparent)]
    Invalid(#[from] InvalidClockTime),
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self::from_hm(0, 0);

    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidClockTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidClockTime {
                hour: hour.into(),
                minute: minute.into(),
            });
        }

        Ok(Self { hour, minute })
    }

    /// Const constructor used by the `clock_time!` macro, which checks the
    /// bounds at compile time.
    #[doc(hidden)]
    #[must_use]
    pub const fn from_hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60, "clock time out of range");
        Self { hour, minute }
    }

    /// Converts an offset since 00:00 back into a clock time.
    pub fn from_minutes(minutes: u16) -> Result<Self, InvalidClockTime> {
        let (hour, minute) = (minutes / 60, minutes % 60);
        if hour > 23 {
            return Err(InvalidClockTime { hour, minute });
        }

        Self::new(hour as u8, minute as u8)
    }

    // the maximum ClockTime is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

fn is_two_digits(part: &str) -> bool {
    part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseClockTimeError::Malformed(string.to_string());

        let [Some(hour), Some(minute)] = string.split_exact::<2>(":") else {
            return Err(malformed());
        };

        if !is_two_digits(hour) || !is_two_digits(minute) {
            return Err(malformed());
        }

        Ok(Self::new(
            hour.parse().map_err(|_| malformed())?,
            minute.parse().map_err(|_| malformed())?,
        )?)
    }
}

/// Parses a clock-time-or-empty value. An empty (or blank) string means
/// "not set".
pub fn parse_optional(string: &str) -> Result<Option<ClockTime>, ParseClockTimeError> {
    let string = string.trim();
    if string.is_empty() {
        return Ok(None);
    }

    string.parse().map(Some)
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ClockTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::clock_time;

    #[test]
    fn test_parse() {
        assert_eq!("09:00".parse(), Ok(clock_time!(09:00)));
        assert_eq!("23:59".parse(), Ok(clock_time!(23:59)));
        assert_eq!("00:00".parse(), Ok(ClockTime::MIDNIGHT));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "9:00", "09:0", "ab:cd", "09-00", "09:00:00", " 09:00", "+9:00"] {
            assert_eq!(
                input.parse::<ClockTime>(),
                Err(ParseClockTimeError::Malformed(input.to_string())),
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            "24:00".parse::<ClockTime>(),
            Err(ParseClockTimeError::Invalid(_))
        ));
        assert!(matches!(
            "12:60".parse::<ClockTime>(),
            Err(ParseClockTimeError::Invalid(_))
        ));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional(""), Ok(None));
        assert_eq!(parse_optional("  "), Ok(None));
        assert_eq!(parse_optional("17:30"), Ok(Some(clock_time!(17:30))));
        assert!(parse_optional("17h30").is_err());
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(clock_time!(07:05).to_string(), "07:05");
        assert_eq!(ClockTime::from_minutes(810).unwrap().to_string(), "13:30");
    }

    #[test]
    fn test_minutes_round_trip() {
        for minutes in 0..1440 {
            let time = ClockTime::from_minutes(minutes).unwrap();
            assert_eq!(time.as_minutes(), minutes);
            assert_eq!(time.to_string().parse::<ClockTime>(), Ok(time));
        }

        assert!(ClockTime::from_minutes(1440).is_err());
    }
}
