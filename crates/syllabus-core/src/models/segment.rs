//! Plan segments: contiguous date ranges with their own schedule and lanes.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{
    date::{ClassDate, WeekdaySet},
    lane::Lanes,
};

/// Whether a segment may be moved by the rebuild engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Ordinary lesson segment; split and shifted around exams
    #[default]
    Regular,
    /// Exam period with fixed dates
    Exam,
}

/// A contiguous, inclusive date range of a student's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PlanSegment {
    /// Identifier, unique within a plan
    pub id: String,

    /// First day governed by this segment
    pub start_date: ClassDate,

    /// Last day governed by this segment (inclusive)
    pub end_date: ClassDate,

    /// Weekdays with class during this segment
    pub days: WeekdaySet,

    /// Reading lists for the three lanes
    #[serde(default)]
    pub lanes: Lanes,

    #[serde(default, skip_serializing_if = "SegmentKind::is_regular")]
    pub kind: SegmentKind,
}

/// An exam period: a segment whose dates are fixed and never shifted.
pub type ExamSegment = PlanSegment;

impl SegmentKind {
    pub fn is_regular(&self) -> bool {
        *self == SegmentKind::Regular
    }
}

impl PlanSegment {
    /// A regular segment with empty lanes.
    pub fn new(
        id: impl Into<String>,
        start_date: ClassDate,
        end_date: ClassDate,
        days: WeekdaySet,
    ) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
            days,
            lanes: Lanes::default(),
            kind: SegmentKind::Regular,
        }
    }

    /// Replaces the segment's lanes.
    pub fn with_lanes(mut self, lanes: Lanes) -> Self {
        self.lanes = lanes;
        self
    }

    /// Marks the segment as a fixed exam period.
    pub fn into_exam(mut self) -> Self {
        self.kind = SegmentKind::Exam;
        self
    }

    pub fn is_exam(&self) -> bool {
        self.kind == SegmentKind::Exam
    }

    /// Whether `date` lies inside the segment.
    pub fn contains(&self, date: ClassDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether the segment shares at least one date with `[start, end]`.
    pub fn overlaps(&self, start: ClassDate, end: ClassDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }

    /// A segment whose start lies after its end governs no dates and is
    /// never emitted by the rebuild engine.
    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// Orders segments by start date, keeping input order for equal starts.
pub fn sort_segments(segments: &mut [PlanSegment]) {
    segments.sort_by_key(|segment| segment.start_date);
}
