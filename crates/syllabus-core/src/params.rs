//! Parameter structures for engine operations.
//!
//! These are the serde documents callers hand to the engine: the inputs of a
//! single plan build and the calendar events shared by every build. They
//! carry no framework-specific derives beyond the optional JSON Schema
//! support enabled by the `schema` feature.

use std::collections::BTreeMap;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::{ClassDate, Lanes, ScheduledTest, WeekdaySet},
};

/// Dates that override normal lesson assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CalendarEvents {
    /// Named holidays, date to name
    #[serde(default)]
    pub holidays: BTreeMap<ClassDate, String>,

    /// User-declared days off, date to label
    #[serde(default)]
    pub skips: BTreeMap<ClassDate, String>,

    /// Tests that replace lessons on their date
    #[serde(default)]
    pub tests: Vec<ScheduledTest>,
}

impl CalendarEvents {
    /// Events with nothing declared.
    pub const fn new() -> Self {
        Self {
            holidays: BTreeMap::new(),
            skips: BTreeMap::new(),
            tests: Vec::new(),
        }
    }

    /// Adds holidays that are not already named in `self`.
    pub fn with_default_holidays(mut self, holidays: &BTreeMap<ClassDate, String>) -> Self {
        for (date, name) in holidays {
            self.holidays
                .entry(*date)
                .or_insert_with(|| name.clone());
        }
        self
    }

    /// Tests grouped by date, in input order within a date.
    pub fn tests_by_date(&self) -> BTreeMap<ClassDate, Vec<&ScheduledTest>> {
        let mut index: BTreeMap<ClassDate, Vec<&ScheduledTest>> = BTreeMap::new();
        for test in &self.tests {
            index.entry(test.date).or_default().push(test);
        }
        index
    }
}

/// Inputs for building one plan over a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// First day of the plan
    pub start_date: Option<ClassDate>,

    /// Last day of the plan (inclusive)
    pub end_date: Option<ClassDate>,

    /// Weekdays with class
    pub days: Option<WeekdaySet>,

    /// Reading lists for the three lanes
    #[serde(default)]
    pub lanes: Lanes,

    #[serde(flatten)]
    pub events: CalendarEvents,
}

impl PlanRequest {
    /// Checks required fields and ordering of the range.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::MissingRequiredField` when a date or the
    /// weekday set is absent (an empty set counts as absent).
    /// Returns `ScheduleError::InvalidRange` when the start is after the end.
    pub fn range(&self) -> Result<(ClassDate, ClassDate, WeekdaySet)> {
        let start = self.start_date.ok_or_else(|| ScheduleError::missing("startDate"))?;
        let end = self.end_date.ok_or_else(|| ScheduleError::missing("endDate"))?;
        let days = self
            .days
            .filter(|days| !days.is_empty())
            .ok_or_else(|| ScheduleError::missing("days"))?;
        if start > end {
            return Err(ScheduleError::invalid_range(start, end));
        }
        Ok((start, end, days))
    }
}
