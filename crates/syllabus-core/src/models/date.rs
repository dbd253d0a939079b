//! Whole-calendar-date values.
//!
//! Every date in the engine is a [`ClassDate`]: a civil date with no time of
//! day and no zone, so stepping one day forward is always exactly one
//! calendar day regardless of daylight-saving or offset artifacts.

use std::{fmt, str::FromStr};

use jiff::{
    civil::{self, Date},
    ToSpan,
};
use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// A calendar date normalized to whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassDate(Date);

impl ClassDate {
    /// Sentinel used whenever a date cannot be parsed.
    pub const EPOCH: ClassDate = ClassDate(civil::date(1970, 1, 1));

    /// Parses a date, falling back to [`ClassDate::EPOCH`] on failure.
    ///
    /// Accepts `YYYY-MM-DD` and any longer ISO timestamp that starts with
    /// one, so that a single malformed record never aborts a computation.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            warn!("unparseable date {s:?}, using {}", Self::EPOCH);
            Self::EPOCH
        })
    }

    /// Returns the date `days` calendar days later (earlier when negative).
    ///
    /// Saturates at the bounds of the supported calendar.
    pub fn add_days(self, days: i64) -> Self {
        ClassDate(self.0.saturating_add(days.days()))
    }

    /// The following calendar day.
    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// The preceding calendar day.
    pub fn prev_day(self) -> Self {
        self.add_days(-1)
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from(self.0.weekday())
    }

    /// Month and day of month, used for year-independent holiday lookups.
    pub fn month_day(self) -> (i8, i8) {
        (self.0.month(), self.0.day())
    }

    /// Iterates every date from `self` through `end`, inclusive.
    ///
    /// Yields nothing when `self > end`.
    pub fn through(self, end: ClassDate) -> DateRange {
        DateRange {
            next: (self <= end).then_some(self),
            end,
        }
    }
}

impl From<Date> for ClassDate {
    fn from(date: Date) -> Self {
        ClassDate(date)
    }
}

impl FromStr for ClassDate {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let ymd = trimmed.get(..10).unwrap_or(trimmed);
        ymd.parse::<Date>().map(ClassDate).map_err(|e| {
            ScheduleError::invalid_input("date").with_reason(format!("{s:?}: {e}"))
        })
    }
}

impl fmt::Display for ClassDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d"))
    }
}

impl Serialize for ClassDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClassDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ClassDate::parse_lenient(&raw))
    }
}

/// Inclusive iterator over consecutive calendar dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<ClassDate>,
    end: ClassDate,
}

impl Iterator for DateRange {
    type Item = ClassDate;

    fn next(&mut self) -> Option<ClassDate> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.next_day());
        Some(current)
    }
}

/// Symbolic day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Three-letter wire code (`SUN`..`SAT`).
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl From<civil::Weekday> for Weekday {
    fn from(day: civil::Weekday) -> Self {
        match day {
            civil::Weekday::Sunday => Weekday::Sun,
            civil::Weekday::Monday => Weekday::Mon,
            civil::Weekday::Tuesday => Weekday::Tue,
            civil::Weekday::Wednesday => Weekday::Wed,
            civil::Weekday::Thursday => Weekday::Thu,
            civil::Weekday::Friday => Weekday::Fri,
            civil::Weekday::Saturday => Weekday::Sat,
        }
    }
}

impl FromStr for Weekday {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_uppercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.code() == code)
            .ok_or_else(|| {
                ScheduleError::invalid_input("days").with_reason(format!("unknown weekday {s:?}"))
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The set of weekdays on which a student has class.
///
/// Travels as comma-joined codes, e.g. `"MON,WED,FRI"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// A set with no days.
    pub const fn empty() -> Self {
        WeekdaySet(0)
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Whether `date` falls on one of the set's weekdays.
    pub fn is_class_day(self, date: ClassDate) -> bool {
        self.contains(date.weekday())
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in Sunday-first order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl FromStr for WeekdaySet {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        s.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::parse::<Weekday>)
            .collect()
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.iter().map(Weekday::code).collect();
        f.write_str(&codes.join(","))
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "schema")]
mod schema {
    use std::borrow::Cow;

    use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};

    use super::{ClassDate, WeekdaySet};

    impl JsonSchema for ClassDate {
        fn schema_name() -> Cow<'static, str> {
            "ClassDate".into()
        }

        fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
            json_schema!({
                "type": "string",
                "format": "date",
                "description": "Calendar date as YYYY-MM-DD"
            })
        }
    }

    impl JsonSchema for WeekdaySet {
        fn schema_name() -> Cow<'static, str> {
            "WeekdaySet".into()
        }

        fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
            json_schema!({
                "type": "string",
                "pattern": "^((SUN|MON|TUE|WED|THU|FRI|SAT)(,(SUN|MON|TUE|WED|THU|FRI|SAT))*)?$",
                "description": "Comma-joined weekday codes, e.g. MON,WED,FRI"
            })
        }
    }
}
