//! High-level scheduling API.
//!
//! [`Scheduler`] owns the data every computation shares (the unit catalog
//! and the institution's holiday list) and exposes the engine operations
//! over it:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ SchedulerBuilder│───▶│    Scheduler    │───▶│  assign/rebuild │
//! │ (catalog, hol.) │    │ (shared inputs) │    │  (pure engine)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every method is a pure function of the scheduler's data and its
//! arguments; a `Scheduler` can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use syllabus_core::{
//!     models::{Catalog, CurriculumUnit, LaneBookRef, Lanes},
//!     params::PlanRequest,
//!     SchedulerBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let unit = CurriculumUnit {
//!     material_id: "grammar".to_string(),
//!     unit_code: "G1".to_string(),
//!     order: 1,
//!     title: None,
//!     lecture_range: None,
//!     pages: None,
//!     workbook: None,
//!     vocab_range: None,
//! };
//! let scheduler = SchedulerBuilder::new()
//!     .with_catalog(Catalog::new(vec![unit], vec![]))
//!     .build()?;
//!
//! let request = PlanRequest {
//!     start_date: Some("2024-01-08".parse()?),
//!     end_date: Some("2024-01-12".parse()?),
//!     days: Some("MON,WED,FRI".parse()?),
//!     lanes: Lanes {
//!         main1: vec![LaneBookRef::new("grammar")],
//!         ..Lanes::default()
//!     },
//!     ..PlanRequest::default()
//! };
//! let items = scheduler.build_plan(&request)?;
//! assert_eq!(items.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

pub mod builder;


pub use builder::SchedulerBuilder;

use crate::{
    assign,
    error::Result,
    models::{Catalog, ClassDate, ExamSegment, PlanItem, PlanSegment},
    params::{CalendarEvents, PlanRequest},
    progress::{segment_progress, LaneProgress},
    rebuild::SegmentRebuilder,
};

/// Scheduling engine bound to a catalog and a holiday list.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    catalog: Catalog,
    holidays: BTreeMap<ClassDate, String>,
}

impl Scheduler {
    /// Creates a scheduler over already-loaded inputs.
    pub fn new(catalog: Catalog, holidays: BTreeMap<ClassDate, String>) -> Self {
        Self { catalog, holidays }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn holidays(&self) -> &BTreeMap<ClassDate, String> {
        &self.holidays
    }

    /// Adds the scheduler's holidays to `events`; names already present in
    /// `events` win.
    fn merged(&self, events: &CalendarEvents) -> CalendarEvents {
        events.clone().with_default_holidays(&self.holidays)
    }

    /// Builds the dated plan for one request.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::MissingRequiredField` or
    /// `ScheduleError::InvalidRange` when the request's range is unusable.
    pub fn build_plan(&self, request: &PlanRequest) -> Result<Vec<PlanItem>> {
        let request = PlanRequest {
            events: self.merged(&request.events),
            ..request.clone()
        };
        assign::build_plan(&request, &self.catalog)
    }

    /// Builds the merged plan of a segment list, for preview and printing.
    pub fn preview_segments(
        &self,
        segments: &[PlanSegment],
        events: &CalendarEvents,
    ) -> Vec<PlanItem> {
        assign::build_segment_plan(segments, &self.catalog, &self.merged(events))
    }

    /// Inserts exam periods into a segment list.
    pub fn rebuild_segments(
        &self,
        existing: &[PlanSegment],
        exams: &[ExamSegment],
        events: &CalendarEvents,
    ) -> Vec<PlanSegment> {
        let events = self.merged(events);
        SegmentRebuilder::new(&self.catalog)
            .with_events(&events)
            .rebuild(existing, exams)
    }

    /// Lane progress over one segment.
    pub fn progress(&self, segment: &PlanSegment, events: &CalendarEvents) -> Vec<LaneProgress> {
        segment_progress(segment, &self.catalog, &self.merged(events))
    }
}
