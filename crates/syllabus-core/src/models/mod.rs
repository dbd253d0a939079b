//! Domain models for lesson plans.
//!
//! - [`date`]: whole-day dates and weekday sets
//! - [`catalog`]: curriculum units grouped by material
//! - [`lane`]: the three reading lanes and their book lists
//! - [`segment`]: dated plan segments and exam periods
//! - [`item`]: plan output rows, tests and skip reasons

pub mod catalog;
pub mod date;
pub mod item;
pub mod lane;
pub mod segment;


pub use catalog::{Catalog, CatalogDocument, CatalogKind, CurriculumUnit};
pub use date::{ClassDate, DateRange, Weekday, WeekdaySet};
pub use item::{ItemEntry, ItemSource, PlanItem, ScheduledTest, SkipReason, DEFAULT_TEST_TITLE};
pub use lane::{LaneBookRef, LaneName, Lanes};
pub use segment::{sort_segments, ExamSegment, PlanSegment, SegmentKind};
