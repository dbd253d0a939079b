//! Command handlers
//!
//! Each handler reads its input documents, calls the scheduler and hands
//! the result to the renderer:
//!
//! ```text
//! CLI args (clap) → JSON inputs → Scheduler → Display / JSON → terminal
//! ```
//!
//! Handlers that need a catalog live on [`Cli`]; the calendar helpers and
//! `schema` are free functions so they run without one.

use std::{fmt::Write as _, path::Path};

use anyhow::{Context, Result};
use log::debug;
use schemars::schema_for;
use serde::de::DeserializeOwned;
use syllabus_core::{
    count_class_days, loader::load_json, models::CatalogDocument, shift_date_by_class_days,
    CalendarEvents, ExamSegment, PlanItems, PlanRequest, PlanSegment, ProgressReport, Scheduler,
    Segments,
};

use crate::{
    args::{CountArgs, PlanArgs, RebuildArgs, SchemaArgs, SchemaTarget, SegmentsArgs, ShiftArgs},
    renderer::TerminalRenderer,
};

/// Runs catalog-backed commands against one scheduler.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub fn plan(&self, args: PlanArgs) -> Result<()> {
        let request: PlanRequest = read_json(&args.request, "plan request")?;
        let items = self
            .scheduler
            .build_plan(&request)
            .context("Failed to build plan")?;

        if args.json {
            return self.renderer.json(&items);
        }
        let mut output = String::from("# Lesson Plan\n\n");
        write!(output, "{}", PlanItems(items))?;
        self.renderer.render(&output)
    }

    pub fn preview(&self, args: SegmentsArgs) -> Result<()> {
        let segments: Vec<PlanSegment> = read_json(&args.segments, "segments")?;
        let events = read_events(args.events.as_deref())?;
        let items = self.scheduler.preview_segments(&segments, &events);

        if args.json {
            return self.renderer.json(&items);
        }
        let mut output = String::from("# Segment Preview\n\n");
        write!(output, "{}", PlanItems(items))?;
        self.renderer.render(&output)
    }

    pub fn rebuild(&self, args: RebuildArgs) -> Result<()> {
        let segments: Vec<PlanSegment> = read_json(&args.segments, "segments")?;
        let exams = args
            .exams
            .iter()
            .map(|path| read_json::<ExamSegment>(path, "exam"))
            .collect::<Result<Vec<_>>>()?;
        let events = read_events(args.events.as_deref())?;
        debug!(
            "rebuilding {} segments around {} exams",
            segments.len(),
            exams.len()
        );

        let rebuilt = self
            .scheduler
            .rebuild_segments(&segments, &exams, &events);
        if args.json {
            return self.renderer.json(&rebuilt);
        }
        let mut output = String::from("# Rebuilt Segments\n\n");
        write!(output, "{}", Segments(rebuilt))?;
        self.renderer.render(&output)
    }

    pub fn progress(&self, args: SegmentsArgs) -> Result<()> {
        let segments: Vec<PlanSegment> = read_json(&args.segments, "segments")?;
        let events = read_events(args.events.as_deref())?;
        let reports: Vec<ProgressReport<'_>> = segments
            .iter()
            .filter(|segment| !segment.is_exam())
            .map(|segment| ProgressReport {
                segment,
                lanes: self.scheduler.progress(segment, &events),
            })
            .collect();

        if args.json {
            let lanes: Vec<_> = reports
                .iter()
                .map(|report| {
                    serde_json::json!({
                        "segment": report.segment.id,
                        "lanes": report.lanes,
                    })
                })
                .collect();
            return self.renderer.json(&lanes);
        }
        let mut output = String::from("# Lane Progress\n\n");
        if reports.is_empty() {
            output.push_str("No segments.\n");
        }
        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            write!(output, "{report}")?;
        }
        self.renderer.render(&output)
    }
}

pub fn count(renderer: &TerminalRenderer, args: &CountArgs) -> Result<()> {
    let total = count_class_days(args.start, args.end, args.days);
    renderer.render(&format!(
        "**{total}** class days from {} to {} on {}\n",
        args.start, args.end, args.days
    ))
}

pub fn shift(renderer: &TerminalRenderer, args: &ShiftArgs) -> Result<()> {
    let reached = shift_date_by_class_days(args.from, args.by, args.days);
    renderer.render(&format!(
        "{} class days after {} on {}: **{reached}** ({})\n",
        args.by,
        args.from,
        args.days,
        reached.weekday()
    ))
}

pub fn schema(renderer: &TerminalRenderer, args: &SchemaArgs) -> Result<()> {
    let schema = match args.target {
        SchemaTarget::Request => schema_for!(PlanRequest),
        SchemaTarget::Segments => schema_for!(Vec<PlanSegment>),
        SchemaTarget::Exam => schema_for!(ExamSegment),
        SchemaTarget::Events => schema_for!(CalendarEvents),
        SchemaTarget::Catalog => schema_for!(CatalogDocument),
    };
    renderer.json(&schema)
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    load_json(path).with_context(|| format!("Failed to read {what} from {}", path.display()))
}

fn read_events(path: Option<&Path>) -> Result<CalendarEvents> {
    path.map_or_else(
        || Ok(CalendarEvents::default()),
        |path| read_json(path, "calendar events"),
    )
}
