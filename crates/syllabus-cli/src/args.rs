use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use syllabus_core::{ClassDate, WeekdaySet};

/// Lesson plan scheduler
///
/// Builds dated lesson plans from a curriculum catalog, previews segmented
/// plans, and inserts exam periods into existing segment lists. Plan and
/// segment inputs are JSON documents; output is markdown, or JSON with
/// `--json`.
#[derive(Parser)]
#[command(version, about, name = "syl")]
pub struct Args {
    /// Catalog file (.json or .csv). Defaults to
    /// $XDG_DATA_HOME/syllabus/catalog.json
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// JSON file of holidays (date to name) applied to every plan
    #[arg(long, global = true)]
    pub holidays: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
///
/// `plan`, `preview`, `rebuild` and `progress` read the catalog;
/// `count`, `shift` and `schema` need no input files.
#[derive(Subcommand)]
pub enum Commands {
    /// Build a dated plan from a request document
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// Print the merged plan of a segment list
    #[command(alias = "v")]
    Preview(SegmentsArgs),
    /// Insert exam periods into a segment list
    #[command(alias = "r")]
    Rebuild(RebuildArgs),
    /// Show how far each lane reads in every segment
    Progress(SegmentsArgs),
    /// Count class days in an inclusive date range
    Count(CountArgs),
    /// Find the date a number of class days after another
    Shift(ShiftArgs),
    /// Print the JSON Schema of an input document
    Schema(SchemaArgs),
}

#[derive(ClapArgs)]
pub struct PlanArgs {
    /// Plan request JSON (startDate, endDate, days, lanes, holidays, skips,
    /// tests)
    pub request: PathBuf,
    /// Print plan items as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs)]
pub struct SegmentsArgs {
    /// JSON array of plan segments
    pub segments: PathBuf,
    /// Calendar events JSON (holidays, skips, tests)
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs)]
pub struct RebuildArgs {
    /// JSON array of plan segments
    pub segments: PathBuf,
    /// Exam segment JSON; repeat for several exams
    #[arg(long = "exam", required = true)]
    pub exams: Vec<PathBuf>,
    /// Calendar events used when measuring lane progress before an exam
    #[arg(long)]
    pub events: Option<PathBuf>,
    /// Print the rebuilt segments as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ClapArgs)]
pub struct CountArgs {
    /// First date (YYYY-MM-DD)
    #[arg(long)]
    pub start: ClassDate,
    /// Last date, inclusive
    #[arg(long)]
    pub end: ClassDate,
    /// Class weekdays, e.g. MON,WED,FRI
    #[arg(long)]
    pub days: WeekdaySet,
}

#[derive(ClapArgs)]
pub struct ShiftArgs {
    /// Reference date (YYYY-MM-DD)
    #[arg(long)]
    pub from: ClassDate,
    /// Number of class days to move forward
    #[arg(long)]
    pub by: i64,
    /// Class weekdays, e.g. MON,WED,FRI
    #[arg(long)]
    pub days: WeekdaySet,
}

#[derive(ClapArgs)]
pub struct SchemaArgs {
    /// Document to describe
    #[arg(value_enum, default_value_t = SchemaTarget::Request)]
    pub target: SchemaTarget,
}

/// Input documents with a published schema
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// Plan request read by `plan`
    Request,
    /// Segment list read by `preview`, `rebuild` and `progress`
    Segments,
    /// Exam segment read by `rebuild --exam`
    Exam,
    /// Calendar events read by `--events`
    Events,
    /// Catalog JSON read by `--catalog`
    Catalog,
}
