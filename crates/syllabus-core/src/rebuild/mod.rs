//! Segment rebuild engine.
//!
//! Inserts fixed-date exam periods into an ordered list of plan segments.
//! For each exam, in start-date order:
//!
//! ```text
//!   before:  [ seg A ............................ ][ seg B ...... ]
//!                          ^exam start
//!   after:   [ A (part) ][ EXAM ][ A (cont) ......... ][ seg B ...... ]
//!                                  shifted by the class days the exam used
//! ```
//!
//! The displacement is the number of class days the exam covers on the
//! weekly schedule of the segment it lands in. The continuation of a split
//! segment resumes every lane right after the last unit read before the
//! exam. Segments that end up with no dates are dropped.

use log::{debug, warn};

use crate::{
    class_days::{count_class_days, next_class_day, shift_date_by_class_days},
    models::{
        sort_segments, Catalog, ClassDate, ExamSegment, LaneBookRef, LaneName, Lanes,
        PlanSegment, SegmentKind, WeekdaySet,
    },
    params::CalendarEvents,
    progress::{segment_progress, ReachedUnit},
};


static NO_EVENTS: CalendarEvents = CalendarEvents::new();

/// Rebuilds segment lists around exams.
///
/// Lane progress before an exam is simulated with the rebuilder's calendar
/// events; by default only the fixed public holidays apply.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRebuilder<'a> {
    catalog: &'a Catalog,
    events: &'a CalendarEvents,
}

impl<'a> SegmentRebuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            events: &NO_EVENTS,
        }
    }

    /// Uses `events` (holidays, skips, tests) when simulating lane progress.
    pub fn with_events(mut self, events: &'a CalendarEvents) -> Self {
        self.events = events;
        self
    }

    /// Inserts every exam into `existing`, earliest first, and returns the
    /// new segment list ordered by start date.
    pub fn rebuild(&self, existing: &[PlanSegment], exams: &[ExamSegment]) -> Vec<PlanSegment> {
        let mut ordered_exams: Vec<&ExamSegment> = exams.iter().collect();
        ordered_exams.sort_by_key(|exam| exam.start_date);

        let mut segments = existing.to_vec();
        sort_segments(&mut segments);
        for exam in ordered_exams {
            segments = self.insert_exam(segments, exam);
        }
        segments
    }

    /// Inserts one exam into an ordered segment list.
    pub fn insert_exam(&self, segments: Vec<PlanSegment>, exam: &ExamSegment) -> Vec<PlanSegment> {
        if exam.is_empty() {
            warn!(
                "exam {} ends before it starts ({} > {}), ignoring it",
                exam.id, exam.start_date, exam.end_date
            );
            return segments;
        }
        if segments
            .iter()
            .any(|segment| segment.is_exam() && segment.id == exam.id)
        {
            debug!("exam {} is already part of the plan", exam.id);
            return segments;
        }

        let exam = exam.clone().into_exam();
        let Some(target) = find_target(&segments, &exam) else {
            debug!("exam {} overlaps no segment, inserting it as-is", exam.id);
            return with_exam(segments, exam);
        };

        let days_to_shift = count_class_days(exam.start_date, exam.end_date, segments[target].days);
        if days_to_shift <= 0 {
            debug!(
                "exam {} covers no class days of segment {}, nothing to shift",
                exam.id, segments[target].id
            );
            return with_exam(segments, exam);
        }

        let shift = ExamShift {
            exam: &exam,
            days_to_shift,
        };
        let mut rebuilt = Vec::with_capacity(segments.len() + 2);
        // Latest end among the continuation and the segments moved so far.
        let mut floor: Option<ClassDate> = None;
        for (index, segment) in segments.into_iter().enumerate() {
            if segment.is_exam() {
                rebuilt.push(segment);
            } else if segment.start_date >= exam.start_date {
                let moved = shift.move_segment(segment, floor);
                floor = floor.max(Some(moved.end_date));
                rebuilt.push(moved);
            } else if index == target {
                let (before, after) = self.split(segment, &shift);
                floor = floor.max(Some(after.end_date));
                rebuilt.push(before);
                rebuilt.push(after);
            } else {
                rebuilt.push(segment);
            }
        }
        with_exam(rebuilt, exam)
    }

    /// Splits the segment the exam starts in.
    fn split(&self, segment: PlanSegment, shift: &ExamShift<'_>) -> (PlanSegment, PlanSegment) {
        let exam = shift.exam;
        let mut before = segment;
        let original_end = before.end_date;
        before.end_date = exam.start_date.prev_day();

        let after = PlanSegment {
            id: format!("{}-after-{}", before.id, exam.id),
            start_date: shift.moved_start(exam.start_date, before.days),
            end_date: shift.moved(original_end, before.days),
            days: before.days,
            lanes: self.continue_lanes(&before),
            kind: SegmentKind::Regular,
        };
        debug!(
            "split {} at {}: before ends {}, continuation {}..{}",
            before.id, exam.start_date, before.end_date, after.start_date, after.end_date
        );
        (before, after)
    }

    /// Lanes for the continuation of `before`, resuming after the last unit
    /// each lane read.
    fn continue_lanes(&self, before: &PlanSegment) -> Lanes {
        let mut lanes = before.lanes.clone();
        for progress in segment_progress(before, self.catalog, self.events) {
            if let Some(last) = &progress.last_unit {
                let books = lanes.get_mut(progress.lane);
                *books = self.remaining_books(books, progress.lane, last);
            }
        }
        lanes
    }

    /// The book list left once `last` has been read.
    ///
    /// Books before the one holding `last` are finished. That book resumes
    /// at its next unit or is dropped when `last` was its final unit. Later
    /// books with no units in the catalog are dropped.
    fn remaining_books(
        &self,
        books: &[LaneBookRef],
        lane: LaneName,
        last: &ReachedUnit,
    ) -> Vec<LaneBookRef> {
        let kind = lane.catalog_kind();
        let Some(current) = books.get(last.book_index) else {
            return books.to_vec();
        };

        let mut remaining = Vec::with_capacity(books.len() - last.book_index);
        match self
            .catalog
            .next_unit(kind, &current.material_id, &last.unit_code)
        {
            Some(next) => remaining.push(LaneBookRef {
                start_unit_code: Some(next.unit_code.clone()),
                ..current.clone()
            }),
            None => debug!("{lane}: {} finished before the exam", current.material_id),
        }

        for book in &books[last.book_index + 1..] {
            if self.catalog.units(kind, &book.material_id).is_empty() {
                debug!("{lane}: dropping {} with no catalog units", book.material_id);
                continue;
            }
            let mut book = book.clone();
            // A new first book would otherwise start honoring a code the
            // original queue ignored.
            if remaining.is_empty() {
                book.start_unit_code = None;
            }
            remaining.push(book);
        }
        remaining
    }
}

/// Displacement caused by one exam.
struct ExamShift<'e> {
    exam: &'e ExamSegment,
    days_to_shift: i64,
}

impl ExamShift<'_> {
    fn moved(&self, date: ClassDate, days: WeekdaySet) -> ClassDate {
        shift_date_by_class_days(date, self.days_to_shift, days)
    }

    /// Like [`ExamShift::moved`], but never inside the exam itself.
    fn moved_start(&self, date: ClassDate, days: WeekdaySet) -> ClassDate {
        let moved = self.moved(date, days);
        if moved > self.exam.end_date {
            moved
        } else {
            next_class_day(self.exam.end_date, days)
        }
    }

    /// Moves a later segment. When `floor` is set, the segment also starts
    /// after it and its end moves by the class days that pushes past.
    fn move_segment(&self, mut segment: PlanSegment, floor: Option<ClassDate>) -> PlanSegment {
        let (start, end) = (segment.start_date, segment.end_date);
        let days = segment.days;
        segment.start_date = self.moved_start(start, days);
        segment.end_date = self.moved(end, days);

        if let Some(floor) = floor.filter(|floor| segment.start_date <= *floor) {
            let clamped = next_class_day(floor, days);
            let pushed = count_class_days(segment.start_date, clamped.prev_day(), days);
            debug!(
                "{} would overlap the segment ending {floor}, starting it {clamped}",
                segment.id
            );
            segment.start_date = clamped;
            segment.end_date = shift_date_by_class_days(segment.end_date, pushed, days);
        }
        debug!(
            "shifted {} from {start}..{end} to {}..{}",
            segment.id, segment.start_date, segment.end_date
        );
        segment
    }
}

/// Index of the segment whose schedule measures the exam: the regular
/// segment containing the exam start, else the first regular segment
/// starting inside the exam.
fn find_target(segments: &[PlanSegment], exam: &ExamSegment) -> Option<usize> {
    segments
        .iter()
        .position(|segment| !segment.is_exam() && segment.contains(exam.start_date))
        .or_else(|| {
            segments.iter().position(|segment| {
                !segment.is_exam()
                    && segment.start_date >= exam.start_date
                    && segment.overlaps(exam.start_date, exam.end_date)
            })
        })
}

/// Adds the exam, prunes empty segments and restores start-date order.
fn with_exam(mut segments: Vec<PlanSegment>, exam: PlanSegment) -> Vec<PlanSegment> {
    segments.push(exam);
    segments.retain(|segment| {
        if segment.is_empty() {
            debug!(
                "pruning segment {} ({} > {})",
                segment.id, segment.start_date, segment.end_date
            );
        }
        !segment.is_empty()
    });
    sort_segments(&mut segments);
    segments
}

/// Inserts `exams` into `existing` using only the fixed public holidays
/// when simulating lane progress.
pub fn rebuild_segments(
    existing: &[PlanSegment],
    exams: &[ExamSegment],
    catalog: &Catalog,
) -> Vec<PlanSegment> {
    SegmentRebuilder::new(catalog).rebuild(existing, exams)
}
