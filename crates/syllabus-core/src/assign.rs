//! Daily assignment engine.
//!
//! Walks a calendar and hands each active day either to the tests scheduled
//! on it or to the three lanes, one unit per lane. Per-lane read positions
//! live in a [`LaneCursors`] value threaded through the loop, so every call
//! is independent of every other.

use log::debug;

use crate::{
    calendar::{build_calendar, DayDescriptor},
    error::Result,
    models::{
        Catalog, ItemEntry, LaneName, PlanItem, PlanSegment, ScheduledTest, DEFAULT_TEST_TITLE,
    },
    params::{CalendarEvents, PlanRequest},
    queue::{lane_slot, LaneQueues, QueuedUnit},
};

/// Read position of each lane within its queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaneCursors([usize; 3]);

impl LaneCursors {
    /// Number of units `lane` has consumed so far.
    pub fn get(&self, lane: LaneName) -> usize {
        self.0[lane_slot(lane)]
    }

    fn advance(mut self, lane: LaneName) -> Self {
        self.0[lane_slot(lane)] += 1;
        self
    }
}

/// Items produced by a calendar walk and where each lane stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub items: Vec<PlanItem>,
    pub cursors: LaneCursors,
}

/// Assigns lane units and tests to every day of `calendar`.
///
/// Skipped days emit one skip item and drop any test on that date. A day
/// with tests emits only those tests. Otherwise each lane with units left
/// emits one item and advances; exhausted lanes emit nothing.
pub fn assign_days<I>(calendar: I, queues: &LaneQueues<'_>, events: &CalendarEvents) -> Assignment
where
    I: IntoIterator<Item = DayDescriptor>,
{
    let tests = events.tests_by_date();
    let mut items = Vec::new();
    let mut cursors = LaneCursors::default();

    for day in calendar {
        let todays_tests = tests.get(&day.date).map(Vec::as_slice).unwrap_or_default();
        cursors = assign_day(&day, queues, todays_tests, cursors, &mut items);
    }

    sort_items(&mut items);
    Assignment { items, cursors }
}

fn assign_day(
    day: &DayDescriptor,
    queues: &LaneQueues<'_>,
    tests: &[&ScheduledTest],
    mut cursors: LaneCursors,
    items: &mut Vec<PlanItem>,
) -> LaneCursors {
    if let Some(reason) = &day.skip {
        items.push(PlanItem {
            date: day.date,
            weekday: day.weekday,
            entry: ItemEntry::Skip {
                reason: reason.to_string(),
            },
        });
        return cursors;
    }

    if !tests.is_empty() {
        items.extend(tests.iter().map(|test| PlanItem {
            date: day.date,
            weekday: day.weekday,
            entry: ItemEntry::Test {
                title: test
                    .title
                    .clone()
                    .filter(|title| !title.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TEST_TITLE.to_string()),
                notes: test.notes.clone(),
            },
        }));
        return cursors;
    }

    for lane in LaneName::ALL {
        if let Some(queued) = queues.at(lane, cursors.get(lane)) {
            items.push(lesson_item(day, lane, queued));
            cursors = cursors.advance(lane);
        }
    }
    cursors
}

fn lesson_item(day: &DayDescriptor, lane: LaneName, queued: QueuedUnit<'_>) -> PlanItem {
    let unit = queued.unit;
    let entry = match lane {
        LaneName::Vocab => ItemEntry::Vocab {
            lane,
            material_id: unit.material_id.clone(),
            unit_code: unit.unit_code.clone(),
            title: unit.title.clone(),
            vocab_range: unit.vocab_range.clone(),
        },
        LaneName::Main1 | LaneName::Main2 => ItemEntry::Main {
            lane,
            material_id: unit.material_id.clone(),
            unit_code: unit.unit_code.clone(),
            title: unit.title.clone(),
            lecture_range: unit.lecture_range.clone(),
            pages: unit.pages.clone(),
            workbook: unit.workbook.clone(),
        },
    };
    PlanItem {
        date: day.date,
        weekday: day.weekday,
        entry,
    }
}

/// Sorts by date, then test before lessons before skips.
///
/// The sort is stable, so lessons keep lane order within a day.
pub fn sort_items(items: &mut [PlanItem]) {
    items.sort_by_key(|item| (item.date, item.source().priority()));
}

/// Runs the engine over one segment's dates, weekdays and lanes.
pub fn assign_segment(
    segment: &PlanSegment,
    catalog: &Catalog,
    events: &CalendarEvents,
) -> Assignment {
    let queues = LaneQueues::build(&segment.lanes, catalog);
    let calendar = build_calendar(segment.start_date, segment.end_date, segment.days, events);
    assign_days(calendar, &queues, events)
}

/// Builds the dated plan described by `request`.
///
/// # Errors
///
/// Returns `ScheduleError::MissingRequiredField` when a date or the weekday
/// set is missing, and `ScheduleError::InvalidRange` for an inverted range.
pub fn build_plan(request: &PlanRequest, catalog: &Catalog) -> Result<Vec<PlanItem>> {
    let (start, end, days) = request.range()?;
    let queues = LaneQueues::build(&request.lanes, catalog);
    let calendar = build_calendar(start, end, days, &request.events);
    let assignment = assign_days(calendar, &queues, &request.events);
    debug!(
        "built plan {start}..{end} on {days}: {} items",
        assignment.items.len()
    );
    Ok(assignment.items)
}

/// Builds one merged plan from a list of segments, each read with its own
/// lanes and weekdays.
pub fn build_segment_plan(
    segments: &[PlanSegment],
    catalog: &Catalog,
    events: &CalendarEvents,
) -> Vec<PlanItem> {
    let mut items: Vec<PlanItem> = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| assign_segment(segment, catalog, events).items)
        .collect();
    sort_items(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::ScheduleError,
        models::{ClassDate, CurriculumUnit, ItemSource, LaneBookRef, Lanes},
    };

    fn date(s: &str) -> ClassDate {
        s.parse().expect("valid date")
    }

    fn unit(material: &str, code: &str, order: i64) -> CurriculumUnit {
        CurriculumUnit {
            material_id: material.to_string(),
            unit_code: code.to_string(),
            order,
            title: None,
            lecture_range: None,
            pages: None,
            workbook: None,
            vocab_range: None,
        }
    }

    /// book U1..U5, drill D1..D3, words W1..W3.
    fn catalog() -> Catalog {
        let mut main: Vec<_> = (1..=5).map(|i| unit("book", &format!("U{i}"), i)).collect();
        main.extend((1..=3).map(|i| unit("drill", &format!("D{i}"), i)));
        let vocab = (1..=3).map(|i| unit("words", &format!("W{i}"), i));
        Catalog::new(main, vocab)
    }

    fn request(start: &str, end: &str, lanes: Lanes) -> PlanRequest {
        PlanRequest {
            start_date: Some(date(start)),
            end_date: Some(date(end)),
            days: Some("MON,WED,FRI".parse().expect("valid weekdays")),
            lanes,
            events: CalendarEvents::default(),
        }
    }

    fn main1(books: Vec<LaneBookRef>) -> Lanes {
        Lanes {
            main1: books,
            ..Lanes::default()
        }
    }

    fn summary(items: &[PlanItem]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|item| {
                let what = match &item.entry {
                    ItemEntry::Main { unit_code, .. } | ItemEntry::Vocab { unit_code, .. } => {
                        unit_code.clone()
                    }
                    ItemEntry::Test { title, .. } => format!("test:{title}"),
                    ItemEntry::Skip { reason } => format!("skip:{reason}"),
                };
                (item.date.to_string(), what)
            })
            .collect()
    }

    fn row(day: &str, what: &str) -> (String, String) {
        (day.to_string(), what.to_string())
    }

    #[test]
    fn test_resume_from_start_unit_until_exhausted() {
        let catalog = catalog();
        let req = request(
            "2024-01-08",
            "2024-01-17",
            main1(vec![LaneBookRef::starting_at("book", "U3")]),
        );
        let items = build_plan(&req, &catalog).expect("plan");
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-08", "U3"),
                row("2024-01-10", "U4"),
                row("2024-01-12", "U5"),
            ]
        );
    }

    #[test]
    fn test_lanes_emit_in_fixed_order() {
        let catalog = catalog();
        let lanes = Lanes {
            vocab: vec![LaneBookRef::new("words")],
            main2: vec![LaneBookRef::new("drill")],
            main1: vec![LaneBookRef::new("book")],
        };
        let items = build_plan(&request("2024-01-08", "2024-01-08", lanes), &catalog).expect("plan");
        let lanes: Vec<_> = items.iter().filter_map(PlanItem::lane).collect();
        assert_eq!(lanes, vec![LaneName::Main1, LaneName::Main2, LaneName::Vocab]);
        assert_eq!(items[2].source(), ItemSource::Vocab);
    }

    #[test]
    fn test_test_day_preempts_lessons() {
        let catalog = catalog();
        let mut req = request("2024-01-08", "2024-01-12", main1(vec![LaneBookRef::new("book")]));
        req.events.tests.push(ScheduledTest {
            date: date("2024-01-10"),
            title: None,
            notes: None,
        });
        let items = build_plan(&req, &catalog).expect("plan");
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-08", "U1"),
                row("2024-01-10", "test:Monthly Test"),
                row("2024-01-12", "U2"),
            ]
        );
    }

    #[test]
    fn test_every_test_on_a_day_is_listed() {
        let catalog = catalog();
        let mut req = request("2024-01-10", "2024-01-10", main1(vec![LaneBookRef::new("book")]));
        for title in ["Listening", "Grammar"] {
            req.events.tests.push(ScheduledTest {
                date: date("2024-01-10"),
                title: Some(title.to_string()),
                notes: Some("Room 3".to_string()),
            });
        }
        let items = build_plan(&req, &catalog).expect("plan");
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-10", "test:Listening"),
                row("2024-01-10", "test:Grammar"),
            ]
        );
    }

    #[test]
    fn test_skip_wins_over_test() {
        let catalog = catalog();
        let mut req = request("2024-01-08", "2024-01-12", main1(vec![LaneBookRef::new("book")]));
        req.events
            .holidays
            .insert(date("2024-01-10"), "Founders Day".to_string());
        req.events.tests.push(ScheduledTest {
            date: date("2024-01-10"),
            title: Some("Unit Test".to_string()),
            notes: None,
        });
        let items = build_plan(&req, &catalog).expect("plan");
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-08", "U1"),
                row("2024-01-10", "skip:Founders Day"),
                row("2024-01-12", "U2"),
            ]
        );
    }

    #[test]
    fn test_public_holiday_is_skipped() {
        let catalog = catalog();
        let req = request("2024-01-01", "2024-01-03", main1(vec![LaneBookRef::new("book")]));
        let items = build_plan(&req, &catalog).expect("plan");
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-01", "skip:Holiday: New Year's Day"),
                row("2024-01-03", "U1"),
            ]
        );
    }

    #[test]
    fn test_days_are_exclusive_and_sorted() {
        let catalog = catalog();
        let lanes = Lanes {
            main1: vec![LaneBookRef::new("book"), LaneBookRef::new("drill")],
            main2: vec![LaneBookRef::new("drill")],
            vocab: vec![LaneBookRef::new("words")],
        };
        let mut req = request("2024-02-01", "2024-03-31", lanes);
        req.events.skips.insert(date("2024-02-12"), "Trip".to_string());
        req.events.tests.push(ScheduledTest {
            date: date("2024-02-14"),
            title: None,
            notes: None,
        });
        let items = build_plan(&req, &catalog).expect("plan");

        assert!(items.windows(2).all(|pair| pair[0].date <= pair[1].date));
        for day in items.iter().map(|item| item.date) {
            let sources: Vec<_> = items
                .iter()
                .filter(|item| item.date == day)
                .map(PlanItem::source)
                .collect();
            let skips = sources.iter().filter(|s| **s == ItemSource::Skip).count();
            let tests = sources.iter().filter(|s| **s == ItemSource::Test).count();
            if skips > 0 {
                assert_eq!(sources.len(), 1, "skip shares {day}");
            }
            if tests > 0 {
                assert_eq!(tests, sources.len(), "test shares {day} with lessons");
            }
            assert!(sources.len() <= 3 || tests == sources.len());
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let catalog = catalog();
        let req = request(
            "2024-01-01",
            "2024-02-29",
            Lanes {
                main1: vec![LaneBookRef::new("book")],
                vocab: vec![LaneBookRef::new("words")],
                ..Lanes::default()
            },
        );
        let first = serde_json::to_string(&build_plan(&req, &catalog).expect("plan")).expect("json");
        let second =
            serde_json::to_string(&build_plan(&req, &catalog).expect("plan")).expect("json");
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let catalog = catalog();
        let mut req = request("2024-01-08", "2024-01-12", Lanes::default());
        req.days = None;
        assert!(matches!(
            build_plan(&req, &catalog),
            Err(ScheduleError::MissingRequiredField { field }) if field == "days"
        ));

        req.days = Some(crate::models::WeekdaySet::empty());
        assert!(matches!(
            build_plan(&req, &catalog),
            Err(ScheduleError::MissingRequiredField { .. })
        ));

        let mut req = request("2024-01-08", "2024-01-12", Lanes::default());
        req.start_date = None;
        assert!(matches!(
            build_plan(&req, &catalog),
            Err(ScheduleError::MissingRequiredField { field }) if field == "startDate"
        ));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let catalog = catalog();
        let req = request("2024-02-01", "2024-01-01", Lanes::default());
        assert!(matches!(
            build_plan(&req, &catalog),
            Err(ScheduleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_empty_catalog_yields_no_lessons() {
        let catalog = Catalog::default();
        let req = request("2024-01-08", "2024-01-12", main1(vec![LaneBookRef::new("book")]));
        assert!(build_plan(&req, &catalog).expect("plan").is_empty());
    }

    #[test]
    fn test_segment_plan_reads_each_segment_with_its_lanes() {
        let catalog = catalog();
        let days = "MON,WED,FRI".parse().expect("valid weekdays");
        let first = PlanSegment::new("a", date("2024-01-08"), date("2024-01-10"), days)
            .with_lanes(main1(vec![LaneBookRef::new("book")]));
        let second = PlanSegment::new("b", date("2024-01-12"), date("2024-01-15"), days)
            .with_lanes(main1(vec![LaneBookRef::starting_at("drill", "D2")]));
        let empty = PlanSegment::new("gone", date("2024-01-20"), date("2024-01-19"), days);

        let items =
            build_segment_plan(&[second, empty, first], &catalog, &CalendarEvents::default());
        assert_eq!(
            summary(&items),
            vec![
                row("2024-01-08", "U1"),
                row("2024-01-10", "U2"),
                row("2024-01-12", "D2"),
                row("2024-01-15", "D3"),
            ]
        );
    }

    #[test]
    fn test_cursors_report_consumption() {
        let catalog = catalog();
        let days = "MON,WED,FRI".parse().expect("valid weekdays");
        let segment = PlanSegment::new("a", date("2024-01-08"), date("2024-01-31"), days)
            .with_lanes(Lanes {
                main1: vec![LaneBookRef::new("book")],
                vocab: vec![LaneBookRef::new("words")],
                ..Lanes::default()
            });
        let assignment = assign_segment(&segment, &catalog, &CalendarEvents::default());
        assert_eq!(assignment.cursors.get(LaneName::Main1), 5);
        assert_eq!(assignment.cursors.get(LaneName::Main2), 0);
        assert_eq!(assignment.cursors.get(LaneName::Vocab), 3);
    }
}
