//! Markdown formatting for plans and segments.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! newtype wrappers in [`collections`] format whole lists, grouping plan
//! items by day and handling empty lists.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (PlanItem, ...) │───▶│ (PlanItems,...) │───▶│    Markdown     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use syllabus_core::{
//!     display::PlanItems,
//!     models::{ClassDate, ItemEntry, PlanItem},
//! };
//!
//! let date: ClassDate = "2024-01-08".parse().unwrap();
//! let item = PlanItem {
//!     date,
//!     weekday: date.weekday(),
//!     entry: ItemEntry::Skip {
//!         reason: "Holiday: New Year's Day".to_string(),
//!     },
//! };
//! let output = PlanItems(vec![item]).to_string();
//! assert!(output.contains("## 2024-01-08 (MON)"));
//! ```

pub mod collections;
pub mod models;

pub use collections::{PlanItems, ProgressReport, Segments};
