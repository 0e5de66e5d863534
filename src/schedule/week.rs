use std::collections::HashMap;
use std::ops::Index;

use serde::ser::{self, SerializeMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::{DayEntry, Field};
use crate::time::{ClockTime, WeekDay};

/// One entry per working day, always in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, DayEntry>")]
pub struct WeekSchedule {
    days: [(WeekDay, DayEntry); 5],
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidSchedule {
    #[error("the schedule has no entry for {}", .0.key())]
    MissingDay(WeekDay),
    #[error("the schedule has an entry for the unknown day \"{0}\"")]
    UnknownDay(String),
}

impl WeekSchedule {
    /// All times empty and nothing worked.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            days: WeekDay::ALL.map(|day| (day, DayEntry::default())),
        }
    }

    #[must_use]
    pub fn get(&self, day: WeekDay) -> &DayEntry {
        &self.days[day.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeekDay, &DayEntry)> + '_ {
        self.days.iter().map(|(day, entry)| (*day, entry))
    }

    pub fn entries(&self) -> impl Iterator<Item = &DayEntry> + '_ {
        self.days.iter().map(|(_, entry)| entry)
    }

    /// Returns a schedule where `field` of `day` is set to `value`. The other
    /// days are unchanged.
    #[must_use]
    pub fn with_field(&self, day: WeekDay, field: Field, value: Option<ClockTime>) -> Self {
        let entry = self.get(day).with(field, value);
        self.clone().with_entry(day, entry)
    }

    #[must_use]
    pub fn with_entry(mut self, day: WeekDay, entry: DayEntry) -> Self {
        self.days[day.index()].1 = entry;
        self
    }

    /// The first day (in canonical order) that has been clocked in, but not out.
    pub fn first_open_day(&self) -> Option<(WeekDay, &DayEntry)> {
        self.iter().find(|(_, entry)| entry.is_open())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().all(DayEntry::is_empty)
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<WeekDay> for WeekSchedule {
    type Output = DayEntry;

    fn index(&self, day: WeekDay) -> &Self::Output {
        self.get(day)
    }
}

impl TryFrom<HashMap<String, DayEntry>> for WeekSchedule {
    type Error = InvalidSchedule;

    fn try_from(map: HashMap<String, DayEntry>) -> Result<Self, Self::Error> {
        let mut entries: [Option<DayEntry>; 5] = [None; 5];

        // sorted, so that the reported unknown key does not depend on the hash order
        let mut map = map.into_iter().collect::<Vec<_>>();
        map.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));

        for (key, entry) in map {
            let day = WeekDay::from_key(&key).ok_or(InvalidSchedule::UnknownDay(key))?;
            entries[day.index()] = Some(entry);
        }

        let mut schedule = Self::empty();
        for (day, entry) in WeekDay::ALL.into_iter().zip(entries) {
            let entry = entry.ok_or(InvalidSchedule::MissingDay(day))?;
            schedule = schedule.with_entry(day, entry);
        }

        Ok(schedule)
    }
}

impl Serialize for WeekSchedule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, entry) in self.iter() {
            map.serialize_entry(day.key(), entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::{clock_time, week_schedule};

    fn empty_day() -> serde_json::Value {
        json!({ "entrata": "", "uscita": "", "totaleOre": 0 })
    }

    #[test]
    fn test_empty_has_every_day() {
        let schedule = WeekSchedule::empty();

        assert_eq!(
            schedule.iter().map(|(day, _)| day).collect::<Vec<_>>(),
            WeekDay::ALL.to_vec()
        );
        assert!(schedule.is_empty());
        assert_eq!(schedule, WeekSchedule::default());
    }

    #[test]
    fn test_with_field_only_touches_one_day() {
        let schedule = week_schedule! {
            Monday => ("09:00", "17:30"),
            Tuesday => ("08:00", _),
        };

        let updated =
            schedule.with_field(WeekDay::Tuesday, Field::ClockOut, Some(clock_time!(12:30)));

        assert_eq!(updated[WeekDay::Monday], schedule[WeekDay::Monday]);
        assert_eq!(updated[WeekDay::Tuesday].duration(), 4.0);
        for day in [WeekDay::Wednesday, WeekDay::Thursday, WeekDay::Friday] {
            assert!(updated[day].is_empty());
        }
    }

    #[test]
    fn test_first_open_day() {
        let schedule = week_schedule! {
            Monday => ("09:00", "17:30"),
            Wednesday => ("08:00", _),
            Thursday => ("08:00", _),
            Friday => (_, "12:00"),
        };

        assert_eq!(
            schedule.first_open_day().map(|(day, _)| day),
            Some(WeekDay::Wednesday)
        );
        assert_eq!(WeekSchedule::empty().first_open_day(), None);
    }

    #[test]
    fn test_serialize_in_canonical_order() {
        let schedule = week_schedule! { Friday => ("09:00", "10:30") };
        let json = serde_json::to_string(&schedule).unwrap();

        let positions = WeekDay::ALL.map(|day| json.find(day.key()).unwrap());
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);

        assert_eq!(
            serde_json::to_value(&schedule).unwrap(),
            json!({
                "lunedi": { "entrata": "", "uscita": "", "totaleOre": 0.0 },
                "martedi": { "entrata": "", "uscita": "", "totaleOre": 0.0 },
                "mercoledi": { "entrata": "", "uscita": "", "totaleOre": 0.0 },
                "giovedi": { "entrata": "", "uscita": "", "totaleOre": 0.0 },
                "venerdi": { "entrata": "09:00", "uscita": "10:30", "totaleOre": 1.0 },
            })
        );
    }

    #[test]
    fn test_deserialize_requires_every_day() {
        let mut value = json!({
            "lunedi": empty_day(),
            "martedi": empty_day(),
            "mercoledi": empty_day(),
            "giovedi": empty_day(),
        });

        let error = serde_json::from_value::<WeekSchedule>(value.clone()).unwrap_err();
        assert!(error.to_string().contains("venerdi"), "{}", error);

        value["venerdi"] = empty_day();
        assert_eq!(
            serde_json::from_value::<WeekSchedule>(value.clone()).unwrap(),
            WeekSchedule::empty()
        );

        value["sabato"] = empty_day();
        let error = serde_json::from_value::<WeekSchedule>(value).unwrap_err();
        assert!(error.to_string().contains("sabato"), "{}", error);
    }

    #[test]
    fn test_deserialize_keys_are_case_sensitive() {
        let value = json!({
            "Lunedi": empty_day(),
            "martedi": empty_day(),
            "mercoledi": empty_day(),
            "giovedi": empty_day(),
            "venerdi": empty_day(),
        });

        let error = serde_json::from_value::<WeekSchedule>(value).unwrap_err();
        assert!(error.to_string().contains("\"Lunedi\""), "{}", error);
    }
}
