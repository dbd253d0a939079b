//! Class-day arithmetic over a weekly schedule.
//!
//! A class day is a date whose weekday belongs to a [`WeekdaySet`]. All
//! stepping is done one civil date at a time, never with wall-clock time.

use log::warn;

use crate::models::{ClassDate, WeekdaySet};

/// Number of class days in `[start, end]`, inclusive; zero when
/// `start > end`.
pub fn count_class_days(start: ClassDate, end: ClassDate, days: WeekdaySet) -> i64 {
    start
        .through(end)
        .filter(|date| days.is_class_day(*date))
        .count() as i64
}

/// The date of the `n`-th class day strictly after `from`.
///
/// Returns `from` unchanged when `n <= 0`, and also when the set is empty
/// since no class day would ever be reached. Stops at the last supported
/// date when the calendar runs out first.
pub fn shift_date_by_class_days(from: ClassDate, n: i64, days: WeekdaySet) -> ClassDate {
    if n <= 0 {
        return from;
    }
    if days.is_empty() {
        warn!("cannot shift {from} by {n} class days with an empty weekday set");
        return from;
    }
    let mut date = from;
    let mut counted = 0;
    while counted < n {
        let next = date.next_day();
        if next == date {
            warn!("shifting {from} by {n} class days runs past {date}, stopping there");
            return date;
        }
        date = next;
        if days.is_class_day(date) {
            counted += 1;
        }
    }
    date
}

/// The first class day strictly after `date`, or the next calendar day when
/// the set is empty.
pub fn next_class_day(date: ClassDate, days: WeekdaySet) -> ClassDate {
    if days.is_empty() {
        date.next_day()
    } else {
        shift_date_by_class_days(date, 1, days)
    }
}
