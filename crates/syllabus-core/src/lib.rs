//! Core library for the Syllabus lesson scheduler.
//!
//! This crate turns curriculum catalogs and a student's weekly schedule into
//! dated lesson plans, and re-flows multi-segment plans around fixed-date
//! exam periods. Everything here is a pure, synchronous computation over
//! in-memory data; loading inputs is the caller's job (helpers live in
//! [`loader`]).
//!
//! # Engine
//!
//! - [`calendar`]: class days of a range with holiday and skip resolution
//! - [`queue`]: per-lane unit queues built from book lists
//! - [`assign`]: the daily assignment engine producing plan items
//! - [`class_days`]: counting and shifting by class days
//! - [`rebuild`]: exam insertion into segment lists
//! - [`progress`]: how far each lane reads within a segment
//!
//! # Quick Start
//!
//! ```rust
//! use syllabus_core::{
//!     count_class_days, rebuild_segments,
//!     models::{Catalog, ClassDate, PlanSegment, WeekdaySet},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let days: WeekdaySet = "MON,WED,FRI".parse()?;
//! let start: ClassDate = "2024-01-15".parse()?;
//! let end: ClassDate = "2024-01-17".parse()?;
//! assert_eq!(count_class_days(start, end, days), 2);
//!
//! let term_start: ClassDate = "2024-01-01".parse()?;
//! let term_end: ClassDate = "2024-01-31".parse()?;
//! let plan = vec![PlanSegment::new("term", term_start, term_end, days)];
//! let exam = PlanSegment::new("midterm", start, end, days);
//! let rebuilt = rebuild_segments(&plan, &[exam], &Catalog::default());
//! assert_eq!(rebuilt.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod assign;
pub mod calendar;
pub mod class_days;
pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod params;
pub mod progress;
pub mod queue;
pub mod rebuild;
pub mod scheduler;

// Re-export commonly used types
pub use assign::{build_plan, build_segment_plan};
pub use class_days::{count_class_days, shift_date_by_class_days};
pub use display::{PlanItems, ProgressReport, Segments};
pub use error::{Result, ScheduleError};
pub use models::{
    Catalog, ClassDate, CurriculumUnit, ExamSegment, LaneBookRef, LaneName, Lanes, PlanItem,
    PlanSegment, ScheduledTest, Weekday, WeekdaySet,
};
pub use params::{CalendarEvents, PlanRequest};
pub use progress::{segment_progress, LaneProgress};
pub use rebuild::{rebuild_segments, SegmentRebuilder};
pub use scheduler::{Scheduler, SchedulerBuilder};
