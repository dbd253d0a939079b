//! Calendar builder: class days of a date range with their skip reasons.

use crate::{
    models::{ClassDate, DateRange, SkipReason, Weekday, WeekdaySet},
    params::CalendarEvents,
};

/// Label used for user skips declared without one.
const UNLABELED_SKIP: &str = "Day off";

/// Fixed-date public holidays, keyed by month and day.
const PUBLIC_HOLIDAYS: &[(i8, i8, &str)] = &[
    (1, 1, "New Year's Day"),
    (3, 1, "Independence Movement Day"),
    (5, 5, "Children's Day"),
    (6, 6, "Memorial Day"),
    (8, 15, "Liberation Day"),
    (10, 3, "National Foundation Day"),
    (10, 9, "Hangul Day"),
    (12, 25, "Christmas Day"),
];

/// One class day of a calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescriptor {
    pub date: ClassDate,
    pub weekday: Weekday,
    /// `None` when the day is active
    pub skip: Option<SkipReason>,
}

impl DayDescriptor {
    pub fn is_active(&self) -> bool {
        self.skip.is_none()
    }
}

/// Name of the fixed public holiday on `date`, if any.
pub fn public_holiday(date: ClassDate) -> Option<&'static str> {
    let (month, day) = date.month_day();
    PUBLIC_HOLIDAYS
        .iter()
        .find(|(m, d, _)| *m == month && *d == day)
        .map(|(_, _, name)| *name)
}

/// Resolves why `date` is skipped: user skip, then named holiday, then
/// fixed public holiday.
pub fn skip_reason(date: ClassDate, events: &CalendarEvents) -> Option<SkipReason> {
    if let Some(label) = events.skips.get(&date) {
        let label = if label.trim().is_empty() {
            UNLABELED_SKIP.to_string()
        } else {
            label.clone()
        };
        return Some(SkipReason::UserSkip(label));
    }
    if let Some(name) = events.holidays.get(&date) {
        return Some(SkipReason::Holiday(name.clone()));
    }
    public_holiday(date).map(SkipReason::PublicHoliday)
}

/// Lazy sequence of the class days in a range.
///
/// Dates whose weekday is outside the set are omitted. The sequence is a
/// pure function of its inputs, so rebuilding it replays the same days.
#[derive(Debug, Clone)]
pub struct Calendar<'a> {
    dates: DateRange,
    days: WeekdaySet,
    events: &'a CalendarEvents,
}

impl Iterator for Calendar<'_> {
    type Item = DayDescriptor;

    fn next(&mut self) -> Option<DayDescriptor> {
        let days = self.days;
        let date = self.dates.find(|date| days.is_class_day(*date))?;
        Some(DayDescriptor {
            date,
            weekday: date.weekday(),
            skip: skip_reason(date, self.events),
        })
    }
}

/// Builds the calendar for `[start, end]`; empty when `start > end`.
pub fn build_calendar(
    start: ClassDate,
    end: ClassDate,
    days: WeekdaySet,
    events: &CalendarEvents,
) -> Calendar<'_> {
    Calendar {
        dates: start.through(end),
        days,
        events,
    }
}
